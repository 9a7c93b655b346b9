// src/models/empresas.rs

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::planos::Plano;

// --- ENUMS ---

// Recursos metrados pelo plano. A contagem de agendamentos é sempre a do
// mês corrente, já filtrada por quem chama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoRecurso {
    Usuarios,
    Clientes,
    AgendamentosMes,
}

impl fmt::Display for TipoRecurso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nome = match self {
            TipoRecurso::Usuarios => "usuários",
            TipoRecurso::Clientes => "clientes",
            TipoRecurso::AgendamentosMes => "agendamentos no mês",
        };
        f.write_str(nome)
    }
}

// --- LIMITES ---

// Limites efetivos da conta. Copiados do plano na atribuição, mas mutáveis
// de forma independente depois (o super-admin pode liberar mais cota para
// uma empresa específica sem criar plano novo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitesEfetivos {
    pub usuarios: i64,
    pub clientes: i64,
    pub agendamentos_mes: i64,
}

impl LimitesEfetivos {
    pub fn de_plano(plano: &Plano) -> Self {
        Self {
            usuarios: plano.limite_usuarios,
            clientes: plano.limite_clientes,
            agendamentos_mes: plano.limite_agendamentos_mes,
        }
    }

    pub fn limite(&self, recurso: TipoRecurso) -> i64 {
        match recurso {
            TipoRecurso::Usuarios => self.usuarios,
            TipoRecurso::Clientes => self.clientes,
            TipoRecurso::AgendamentosMes => self.agendamentos_mes,
        }
    }
}

impl Default for LimitesEfetivos {
    fn default() -> Self {
        Self {
            usuarios: 0,
            clientes: 0,
            agendamentos_mes: 0,
        }
    }
}

// --- EMPRESA (A conta do tenant) ---

// O estado de assinatura de um tenant. Os campos de bloqueio e expiração
// são escritos somente pelo AssinaturaService; nunca há delete físico de
// empresa, o ciclo de vida é todo por flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Empresa {
    pub id: Uuid,
    pub nome: String,

    // None quando a conta roda com configuração avulsa, sem plano do catálogo
    pub plano_id: Option<Uuid>,

    // Pode divergir do preço do plano (desconto negociado)
    pub mensalidade: Decimal,

    pub ativa: bool,
    pub bloqueada: bool,
    // Obrigatório quando bloqueada; limpo no desbloqueio
    pub motivo_bloqueio: Option<String>,

    pub data_contrato: NaiveDate,
    pub data_expiracao: Option<NaiveDate>,
    pub proximo_vencimento: Option<NaiveDate>,

    pub limites: LimitesEfetivos,

    pub observacoes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Empresa {
    pub fn nova(nome: impl Into<String>, data_contrato: NaiveDate) -> Self {
        let agora = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nome: nome.into(),
            plano_id: None,
            mensalidade: Decimal::ZERO,
            ativa: true,
            bloqueada: false,
            motivo_bloqueio: None,
            data_contrato,
            data_expiracao: None,
            proximo_vencimento: None,
            limites: LimitesEfetivos::default(),
            observacoes: None,
            created_at: agora,
            updated_at: agora,
        }
    }

    // O gate de acesso do console: trial vencido trava o login do tenant.
    pub fn esta_vencida(&self, hoje: NaiveDate) -> bool {
        self.data_expiracao.is_some_and(|limite| hoje > limite)
    }
}
