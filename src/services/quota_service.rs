// src/services/quota_service.rs

use crate::{
    common::error::AppError,
    models::empresas::{Empresa, TipoRecurso},
};

// Decisão pura de quota: a contagem atual chega já filtrada de fora (para
// agendamentos, a do mês corrente). Sob requisições concorrentes do mesmo
// tenant o check-then-act precisa ser serializado na camada de
// persistência; aqui só existe a decisão.
#[derive(Clone, Default)]
pub struct QuotaService;

impl QuotaService {
    pub fn new() -> Self {
        Self
    }

    /// `true` enquanto a contagem atual está abaixo do limite efetivo.
    pub fn pode_criar(
        &self,
        empresa: &Empresa,
        recurso: TipoRecurso,
        contagem_atual: i64,
    ) -> bool {
        contagem_atual < empresa.limites.limite(recurso)
    }

    /// Mesma checagem, como o erro que a camada de cima mostra ao usuário.
    pub fn garantir_disponibilidade(
        &self,
        empresa: &Empresa,
        recurso: TipoRecurso,
        contagem_atual: i64,
    ) -> Result<(), AppError> {
        if self.pode_criar(empresa, recurso, contagem_atual) {
            return Ok(());
        }

        Err(AppError::LimiteExcedido {
            recurso,
            limite: empresa.limites.limite(recurso),
        })
    }
}
