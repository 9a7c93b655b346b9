//src/lib.rs

// Núcleo de domínio do console de estética automotiva:
// ciclo de vida de assinatura das empresas (planos, quotas, bloqueio)
// e a máquina de estados do agendamento com o seu cálculo de valores.
//
// Persistência, rotas HTTP, autenticação e envio de mensagens são
// colaboradores externos: tudo aqui recebe os agregados já carregados,
// devolve o agregado atualizado e deixa o salvar para quem chamou.

pub mod common;
pub mod models;
pub mod services;

pub use crate::common::error::AppError;
