// src/services/agendamento_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{erro_de_campo, AppError},
    models::agendamentos::{
        Agendamento, Carrinho, ItemServico, NovoAgendamentoPayload, StatusAgendamento,
    },
    services::carrinho_service::CarrinhoService,
};

// Dono do status do Agendamento: toda mudança de estado passa por aqui.
// O console legado deixava gravar qualquer status por update direto; a
// tabela de transições agora é obrigatória.
#[derive(Clone, Default)]
pub struct AgendamentoService {
    carrinho_service: CarrinhoService,
}

impl AgendamentoService {
    pub fn new(carrinho_service: CarrinhoService) -> Self {
        Self { carrinho_service }
    }

    // --- CRIAÇÃO ---

    /// Cria o agendamento a partir do payload do console. O fluxo de
    /// balcão (`inicio_imediato`) nasce direto em `em_andamento`; o
    /// agendamento normal nasce em `agendado`.
    pub fn criar(
        &self,
        empresa_id: Uuid,
        payload: &NovoAgendamentoPayload,
    ) -> Result<Agendamento, AppError> {
        payload.validate()?;

        let status_inicial = if payload.inicio_imediato {
            StatusAgendamento::EmAndamento
        } else {
            StatusAgendamento::Agendado
        };

        let carrinho = Carrinho {
            itens: payload.itens.clone(),
        };
        let valor_total = self.carrinho_service.total(&carrinho, payload.desconto);

        let agora = Utc::now();
        Ok(Agendamento {
            id: Uuid::new_v4(),
            empresa_id,
            cliente_id: payload.cliente_id,
            cliente_nome: payload.cliente_nome.clone(),
            veiculo: payload.veiculo.clone(),
            data_hora: payload.data_hora,
            itens: carrinho.itens,
            desconto: payload.desconto,
            valor_total,
            status: status_inicial,
            created_at: agora,
            updated_at: agora,
        })
    }

    // --- TRANSIÇÃO ---

    /// Valida a aresta na tabela de transições e aplica o novo status.
    pub fn transicionar(
        &self,
        agendamento: &mut Agendamento,
        novo_status: StatusAgendamento,
    ) -> Result<(), AppError> {
        if !agendamento.status.pode_ir_para(novo_status) {
            return Err(AppError::TransicaoStatusInvalida {
                de: agendamento.status,
                para: novo_status,
            });
        }

        tracing::debug!(
            agendamento_id = %agendamento.id,
            de = %agendamento.status,
            para = %novo_status,
            "transição de status"
        );

        agendamento.status = novo_status;
        agendamento.updated_at = Utc::now();
        Ok(())
    }

    /// O "excluir" do console é semanticamente um cancelamento: o registro
    /// fica, o status muda. Apagar linha (se acontecer) é papel da
    /// persistência.
    pub fn cancelar(&self, agendamento: &mut Agendamento) -> Result<(), AppError> {
        self.transicionar(agendamento, StatusAgendamento::Cancelado)
    }

    // --- ITENS E VALORES ---

    /// Substitui a lista de serviços e o desconto, recalculando o total
    /// pelo carrinho. Mantém o invariante valor_total = max(0, soma - desconto).
    pub fn aplicar_itens(
        &self,
        agendamento: &mut Agendamento,
        itens: Vec<ItemServico>,
        desconto: Decimal,
    ) -> Result<(), AppError> {
        if desconto.is_sign_negative() {
            return Err(erro_de_campo(
                "desconto",
                "invalid_number",
                "Desconto não pode ser negativo",
            ));
        }

        let carrinho = Carrinho { itens };
        agendamento.valor_total = self.carrinho_service.total(&carrinho, desconto);
        agendamento.itens = carrinho.itens;
        agendamento.desconto = desconto;
        agendamento.updated_at = Utc::now();
        Ok(())
    }
}
