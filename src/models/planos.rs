// src/models/planos.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::error::{erro_de_campo, AppError};

// --- ENUMS ---

// Ciclo de cobrança da assinatura. TRIAL é o único ciclo com prazo de
// expiração forçado (duracao_dias no plano).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CicloCobranca {
    Mensal,
    Trimestral,
    Semestral,
    Anual,
    Trial,
}

impl CicloCobranca {
    // Duração do ciclo em meses; None para TRIAL (o prazo vem em dias).
    pub fn meses(&self) -> Option<u32> {
        match self {
            CicloCobranca::Mensal => Some(1),
            CicloCobranca::Trimestral => Some(3),
            CicloCobranca::Semestral => Some(6),
            CicloCobranca::Anual => Some(12),
            CicloCobranca::Trial => None,
        }
    }
}

// --- PLANO (O "Molde" da assinatura) ---

// Definição de plano criada pelo super-administrador. Uma Empresa copia
// preço e limites na atribuição, então editar o plano depois não altera
// contas já provisionadas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plano {
    pub id: Uuid,
    pub nome: String,
    pub preco: Decimal,
    pub ciclo: CicloCobranca,

    // Somente para ciclo TRIAL
    pub duracao_dias: Option<i64>,

    pub limite_usuarios: i64,
    pub limite_clientes: i64,
    pub limite_agendamentos_mes: i64,
}

impl Plano {
    // Invariante: duracao_dias definido se e somente se o ciclo for TRIAL.
    pub fn validar(&self) -> Result<(), AppError> {
        match (self.ciclo, self.duracao_dias) {
            (CicloCobranca::Trial, None) => Err(erro_de_campo(
                "duracaoDias",
                "required",
                "Plano TRIAL exige duração em dias",
            )),
            (CicloCobranca::Trial, Some(dias)) if dias <= 0 => Err(erro_de_campo(
                "duracaoDias",
                "invalid_number",
                "Duração do TRIAL deve ser positiva",
            )),
            (ciclo, Some(_)) if ciclo != CicloCobranca::Trial => Err(erro_de_campo(
                "duracaoDias",
                "invalid_type",
                "Duração em dias só se aplica a planos TRIAL",
            )),
            _ => Ok(()),
        }
    }
}

// --- CATÁLOGO ---

// Conjunto imutável de planos publicados; leitura apenas, os demais
// componentes nunca escrevem aqui.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogoPlanos {
    planos: Vec<Plano>,
}

impl CatalogoPlanos {
    // Rejeita o catálogo inteiro se algum plano violar o invariante do TRIAL.
    pub fn novo(planos: Vec<Plano>) -> Result<Self, AppError> {
        for plano in &planos {
            plano.validar()?;
        }
        Ok(Self { planos })
    }

    pub fn buscar(&self, id: Uuid) -> Option<&Plano> {
        self.planos.iter().find(|p| p.id == id)
    }

    pub fn todos(&self) -> &[Plano] {
        &self.planos
    }
}
