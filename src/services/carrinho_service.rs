// src/services/carrinho_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::agendamentos::{Carrinho, ItemServico, ServicoCatalogo},
};

// Operações do carrinho de serviços, usadas igual para agendamento e
// orçamento. Tudo em Decimal: somar preço repetidamente em float derrapa.
#[derive(Clone, Default)]
pub struct CarrinhoService;

impl CarrinhoService {
    pub fn new() -> Self {
        Self
    }

    /// Inclui um serviço do catálogo, fotografando nome e preço. Repetir o
    /// mesmo serviço é permitido (duas lavagens na mesma comanda).
    pub fn adicionar(&self, carrinho: &mut Carrinho, servico: &ServicoCatalogo) {
        carrinho.itens.push(ItemServico::de_servico(servico));
    }

    pub fn adicionar_item(&self, carrinho: &mut Carrinho, item: ItemServico) {
        carrinho.itens.push(item);
    }

    /// Remove por posição, devolvendo o item removido.
    pub fn remover(
        &self,
        carrinho: &mut Carrinho,
        indice: usize,
    ) -> Result<ItemServico, AppError> {
        if indice >= carrinho.itens.len() {
            return Err(AppError::IndiceInvalido {
                indice,
                tamanho: carrinho.itens.len(),
            });
        }
        Ok(carrinho.itens.remove(indice))
    }

    pub fn subtotal(&self, carrinho: &Carrinho) -> Decimal {
        carrinho.itens.iter().map(|item| item.preco).sum()
    }

    /// Total com desconto, travado em zero: desconto maior que o subtotal
    /// é cortesia da casa, não erro.
    pub fn total(&self, carrinho: &Carrinho, desconto: Decimal) -> Decimal {
        (self.subtotal(carrinho) - desconto).max(Decimal::ZERO)
    }

    /// Valor pronto para exibição, arredondado a 2 casas.
    pub fn total_exibicao(&self, carrinho: &Carrinho, desconto: Decimal) -> Decimal {
        self.total(carrinho, desconto).round_dp(2)
    }
}
