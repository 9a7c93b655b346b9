// src/common/error.rs

use thiserror::Error;

use crate::models::agendamentos::StatusAgendamento;
use crate::models::empresas::TipoRecurso;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante é uma operação rejeitada sobre um agregado: nada aqui é
// fatal ao processo, o chamador decide se vira toast ou retry com dados
// corrigidos.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Atribuição de plano sem plano resolvível e sem limites avulsos
    #[error("Plano inválido ou não informado")]
    PlanoInvalido,

    #[error("Motivo do bloqueio é obrigatório")]
    MotivoBloqueioObrigatorio,

    #[error("Transição de status inválida: {de} -> {para}")]
    TransicaoStatusInvalida {
        de: StatusAgendamento,
        para: StatusAgendamento,
    },

    #[error("Item {indice} não existe (o carrinho tem {tamanho} itens)")]
    IndiceInvalido { indice: usize, tamanho: usize },

    #[error("Limite do plano atingido para {recurso} (limite: {limite})")]
    LimiteExcedido { recurso: TipoRecurso, limite: i64 },

    #[error("Telefone inválido: {0}")]
    TelefoneInvalido(String),
}

// Helper para criar erro de validação de um campo avulso,
// quando não há um derive de `Validate` cobrindo o caso.
pub fn erro_de_campo(campo: &str, codigo: &'static str, mensagem: &str) -> AppError {
    let mut err = validator::ValidationErrors::new();
    let mut validation_err = validator::ValidationError::new(codigo);
    validation_err.message = Some(mensagem.to_string().into());

    // Leak seguro para erro estático
    let static_field: &'static str = Box::leak(campo.to_string().into_boxed_str());
    err.add(static_field, validation_err);

    AppError::ValidationError(err)
}
