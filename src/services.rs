//src/services.rs

pub mod agendamento_service;
pub mod assinatura_service;
pub mod carrinho_service;
pub mod mensagem_service;
pub mod quota_service;

pub use agendamento_service::AgendamentoService;
pub use assinatura_service::AssinaturaService;
pub use carrinho_service::CarrinhoService;
pub use quota_service::QuotaService;
