//src/models.rs

pub mod agendamentos;
pub mod empresas;
pub mod planos;

pub use agendamentos::{Agendamento, Carrinho, ItemServico, ServicoCatalogo, StatusAgendamento};
pub use empresas::{Empresa, LimitesEfetivos, TipoRecurso};
pub use planos::{CatalogoPlanos, CicloCobranca, Plano};
