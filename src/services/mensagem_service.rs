// src/services/mensagem_service.rs

// Renderização da mensagem de contato (WhatsApp) a partir do template
// configurado pela empresa. Funções puras: montar o link wa.me e abrir a
// conversa é papel do chamador.

use crate::{common::error::AppError, models::agendamentos::Agendamento};

// DDI padrão do negócio (Brasil)
pub const DDI_BRASIL: &str = "55";

/// Substituição literal dos quatro placeholders do template:
/// `{cliente}`, `{data}` (DD/MM/YYYY), `{hora}` (HH:MM) e `{servico}`
/// (nomes separados por vírgula). Placeholder desconhecido fica como está.
pub fn renderizar(template: &str, agendamento: &Agendamento) -> String {
    let cliente = match agendamento.cliente_nome.trim() {
        "" => "Cliente",
        nome => nome,
    };

    let servicos = if agendamento.itens.is_empty() {
        "Serviços".to_string()
    } else {
        agendamento
            .itens
            .iter()
            .map(|item| item.nome.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    template
        .replace("{cliente}", cliente)
        .replace("{data}", &agendamento.data_hora.format("%d/%m/%Y").to_string())
        .replace("{hora}", &agendamento.data_hora.format("%H:%M").to_string())
        .replace("{servico}", &servicos)
}

/// Reduz o telefone digitado a dígitos. Menos de 8 dígitos não é um
/// telefone discável em lugar nenhum que o negócio atenda.
pub fn normalizar_telefone(bruto: &str) -> Result<String, AppError> {
    let digitos: String = bruto.chars().filter(|c| c.is_ascii_digit()).collect();
    if digitos.len() < 8 {
        return Err(AppError::TelefoneInvalido(bruto.to_string()));
    }
    Ok(digitos)
}

/// Telefone no formato que o colaborador de mensageria espera para o
/// wa.me: só dígitos, com o DDI na frente quando o usuário não digitou.
pub fn telefone_whatsapp(bruto: &str, ddi: &str) -> Result<String, AppError> {
    let digitos = normalizar_telefone(bruto)?;

    // Número nacional (com DDD) tem até 11 dígitos; acima disso o DDI
    // já veio digitado.
    if digitos.starts_with(ddi) && digitos.len() > 11 {
        return Ok(digitos);
    }
    Ok(format!("{ddi}{digitos}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::agendamentos::{ItemServico, StatusAgendamento};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn agendamento(cliente_nome: &str, itens: Vec<ItemServico>) -> Agendamento {
        let agora = Utc::now();
        Agendamento {
            id: Uuid::new_v4(),
            empresa_id: Uuid::new_v4(),
            cliente_id: None,
            cliente_nome: cliente_nome.to_string(),
            veiculo: None,
            data_hora: NaiveDate::from_ymd_opt(2024, 5, 10)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            itens,
            desconto: Decimal::ZERO,
            valor_total: Decimal::ZERO,
            status: StatusAgendamento::Agendado,
            created_at: agora,
            updated_at: agora,
        }
    }

    fn item(nome: &str) -> ItemServico {
        ItemServico {
            servico_id: None,
            nome: nome.to_string(),
            preco: dec!(50.00),
        }
    }

    #[test]
    fn renderiza_os_quatro_placeholders() {
        let agendamento = agendamento("Ana", vec![item("Lavagem"), item("Polimento")]);

        let texto = renderizar(
            "Olá {cliente}! {data} às {hora}, serviços: {servico}",
            &agendamento,
        );

        assert_eq!(texto, "Olá Ana! 10/05/2024 às 14:30, serviços: Lavagem, Polimento");
    }

    #[test]
    fn usa_fallbacks_para_cliente_e_servicos() {
        let agendamento = agendamento("  ", vec![]);
        let texto = renderizar("{cliente} - {servico}", &agendamento);
        assert_eq!(texto, "Cliente - Serviços");
    }

    #[test]
    fn placeholder_desconhecido_fica_intocado() {
        let agendamento = agendamento("Ana", vec![]);
        let texto = renderizar("Olá {cliente}, código {pedido}", &agendamento);
        assert_eq!(texto, "Olá Ana, código {pedido}");
    }

    #[test]
    fn normalizacao_remove_mascara() {
        assert_eq!(
            normalizar_telefone("(11) 99999-8888").unwrap(),
            "11999998888"
        );
        assert_eq!(normalizar_telefone("+55 11 4002-8922").unwrap(), "551140028922");
    }

    #[test]
    fn telefone_curto_eh_rejeitado() {
        let erro = normalizar_telefone("99-99").unwrap_err();
        assert!(matches!(erro, AppError::TelefoneInvalido(_)));
    }

    #[test]
    fn whatsapp_prefixa_ddi_quando_falta() {
        assert_eq!(
            telefone_whatsapp("(11) 99999-8888", DDI_BRASIL).unwrap(),
            "5511999998888"
        );
        // Já veio com DDI digitado
        assert_eq!(
            telefone_whatsapp("+55 (11) 99999-8888", DDI_BRASIL).unwrap(),
            "5511999998888"
        );
    }
}
