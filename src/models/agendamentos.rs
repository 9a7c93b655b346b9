// src/models/agendamentos.rs

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

// Os valores serializados são exatamente os gravados pelo console
// ("em_andamento" etc.), então cuidado ao renomear variantes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAgendamento {
    Agendado,
    Confirmado,
    EmAndamento,
    Concluido,
    Cancelado,
}

impl StatusAgendamento {
    // Arestas legais da máquina de estados. Concluído e cancelado são
    // terminais; cancelar é permitido a partir de qualquer estado vivo.
    pub fn transicoes(&self) -> &'static [StatusAgendamento] {
        use StatusAgendamento::*;
        match self {
            Agendado => &[Confirmado, EmAndamento, Cancelado],
            Confirmado => &[EmAndamento, Cancelado],
            EmAndamento => &[Concluido, Cancelado],
            Concluido => &[],
            Cancelado => &[],
        }
    }

    pub fn pode_ir_para(&self, novo: StatusAgendamento) -> bool {
        self.transicoes().contains(&novo)
    }

    pub fn eh_terminal(&self) -> bool {
        self.transicoes().is_empty()
    }
}

impl fmt::Display for StatusAgendamento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nome = match self {
            StatusAgendamento::Agendado => "agendado",
            StatusAgendamento::Confirmado => "confirmado",
            StatusAgendamento::EmAndamento => "em_andamento",
            StatusAgendamento::Concluido => "concluido",
            StatusAgendamento::Cancelado => "cancelado",
        };
        f.write_str(nome)
    }
}

// --- SERVIÇOS ---

// Item do catálogo de serviços do tenant (colaborador externo; só leitura).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicoCatalogo {
    pub id: Uuid,
    pub nome: String,
    pub preco: Decimal,
    pub duracao_minutos: Option<i32>,
}

// Linha de serviço dentro de um agendamento ou orçamento. Nome e preço são
// fotografados no momento da inclusão: mudar o catálogo depois não altera
// agendamentos históricos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemServico {
    pub servico_id: Option<Uuid>,
    pub nome: String,
    pub preco: Decimal,
}

impl ItemServico {
    pub fn de_servico(servico: &ServicoCatalogo) -> Self {
        Self {
            servico_id: Some(servico.id),
            nome: servico.nome.clone(),
            preco: servico.preco,
        }
    }

    // Adaptador para os formatos legados que o front gravava: string pura
    // ("Lavagem"), objeto achatado ({nome, preco}) ou aninhado
    // ({servico: {nome, preco}}). O núcleo só trabalha com a forma
    // normalizada; quem ainda lê dado antigo passa por aqui antes.
    pub fn de_legado(valor: &Value) -> Option<Self> {
        if let Some(nome) = valor.as_str() {
            let nome = nome.trim();
            if nome.is_empty() {
                return None;
            }
            return Some(Self {
                servico_id: None,
                nome: nome.to_string(),
                preco: Decimal::ZERO,
            });
        }

        let obj = valor.as_object()?;
        let fonte = match obj.get("servico").and_then(Value::as_object) {
            Some(aninhado) => aninhado,
            None => obj,
        };

        let nome = fonte.get("nome").and_then(Value::as_str)?.trim().to_string();
        if nome.is_empty() {
            return None;
        }

        let preco = fonte
            .get("preco")
            .cloned()
            .and_then(|v| serde_json::from_value::<Decimal>(v).ok())
            .unwrap_or(Decimal::ZERO);

        let servico_id = fonte
            .get("id")
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok());

        Some(Self {
            servico_id,
            nome,
            preco,
        })
    }
}

// --- CARRINHO ---

// Lista ordenada de itens, usada igual para agendamento e orçamento.
// As operações (incluir, remover, totais) ficam no CarrinhoService.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrinho {
    pub itens: Vec<ItemServico>,
}

// --- AGENDAMENTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agendamento {
    pub id: Uuid,
    pub empresa_id: Uuid,

    // None quando o cliente é só um nome digitado, sem cadastro
    pub cliente_id: Option<Uuid>,
    pub cliente_nome: String,
    pub veiculo: Option<String>,

    pub data_hora: NaiveDateTime,

    pub itens: Vec<ItemServico>,
    pub desconto: Decimal,
    // Derivado: max(0, soma dos itens - desconto)
    pub valor_total: Decimal,

    pub status: StatusAgendamento,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Payload de criação vindo da camada HTTP (fora de escopo aqui).
// `inicio_imediato` é o fluxo de comanda/balcão: o carro já entrou no box,
// então o agendamento nasce direto em `em_andamento`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NovoAgendamentoPayload {
    pub cliente_id: Option<Uuid>,

    #[validate(length(min = 1, message = "Nome do cliente é obrigatório"))]
    pub cliente_nome: String,

    pub veiculo: Option<String>,

    pub data_hora: NaiveDateTime,

    #[serde(default)]
    pub itens: Vec<ItemServico>,

    #[serde(default)]
    #[validate(custom(function = "desconto_nao_negativo"))]
    pub desconto: Decimal,

    #[serde(default)]
    pub inicio_imediato: bool,
}

fn desconto_nao_negativo(desconto: &Decimal) -> Result<(), validator::ValidationError> {
    if desconto.is_sign_negative() {
        let mut err = validator::ValidationError::new("invalid_number");
        err.message = Some("Desconto não pode ser negativo".into());
        return Err(err);
    }
    Ok(())
}
