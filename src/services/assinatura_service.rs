// src/services/assinatura_service.rs

use chrono::{Days, Months, NaiveDate, Utc};

use crate::{
    common::error::AppError,
    models::empresas::{Empresa, LimitesEfetivos},
    models::planos::Plano,
};

// Ciclo de vida da assinatura: é o único componente que escreve
// `data_expiracao`, `bloqueada` e `motivo_bloqueio`. Não persiste nada,
// devolve o agregado atualizado para quem chamou salvar.
#[derive(Clone, Default)]
pub struct AssinaturaService;

impl AssinaturaService {
    pub fn new() -> Self {
        Self
    }

    // --- PLANO ---

    /// Atribui (ou reatribui) um plano do catálogo à empresa, copiando
    /// preço e limites para a conta. Uma configuração avulsa (sem plano)
    /// é legal desde que os limites venham informados.
    pub fn atribuir_plano(
        &self,
        empresa: &mut Empresa,
        plano: Option<&Plano>,
        data_contrato: NaiveDate,
        limites_avulsos: Option<LimitesEfetivos>,
    ) -> Result<(), AppError> {
        match (plano, limites_avulsos) {
            (Some(plano), limites_avulsos) => {
                plano.validar()?;

                empresa.plano_id = Some(plano.id);
                empresa.mensalidade = plano.preco;
                // Limites avulsos ganham do plano quando informados juntos
                empresa.limites =
                    limites_avulsos.unwrap_or_else(|| LimitesEfetivos::de_plano(plano));
                empresa.data_contrato = data_contrato;
                empresa.data_expiracao = expiracao_do_trial(plano, data_contrato);
                empresa.proximo_vencimento = proximo_vencimento(plano, data_contrato);
            }
            (None, Some(limites)) => {
                // Conta avulsa: sem plano de referência, sem expiração forçada
                empresa.plano_id = None;
                empresa.limites = limites;
                empresa.data_contrato = data_contrato;
                empresa.data_expiracao = None;
                empresa.proximo_vencimento = None;
            }
            (None, None) => return Err(AppError::PlanoInvalido),
        }

        empresa.updated_at = Utc::now();
        Ok(())
    }

    /// Rederiva a expiração a partir de uma nova data de contrato, sem
    /// mexer em limites nem mensalidade. Idempotente: chamar duas vezes
    /// com a mesma entrada produz a mesma expiração.
    pub fn recalcular_expiracao(
        &self,
        empresa: &mut Empresa,
        plano: Option<&Plano>,
        nova_data_contrato: NaiveDate,
    ) {
        empresa.data_contrato = nova_data_contrato;
        empresa.data_expiracao =
            plano.and_then(|p| expiracao_do_trial(p, nova_data_contrato));
        empresa.proximo_vencimento =
            plano.and_then(|p| proximo_vencimento(p, nova_data_contrato));
        empresa.updated_at = Utc::now();
    }

    // --- BLOQUEIO ---

    /// Bloqueia a empresa. O motivo é obrigatório: é o texto que o
    /// super-admin vê na listagem e o tenant vê na tela de acesso negado.
    pub fn bloquear(&self, empresa: &mut Empresa, motivo: &str) -> Result<(), AppError> {
        let motivo = motivo.trim();
        if motivo.is_empty() {
            return Err(AppError::MotivoBloqueioObrigatorio);
        }

        empresa.bloqueada = true;
        empresa.motivo_bloqueio = Some(motivo.to_string());
        empresa.updated_at = Utc::now();

        tracing::info!(empresa_id = %empresa.id, motivo, "empresa bloqueada");
        Ok(())
    }

    /// Desbloqueia e limpa o motivo. Desbloquear quem já está liberado
    /// não é erro.
    pub fn desbloquear(&self, empresa: &mut Empresa) {
        if !empresa.bloqueada && empresa.motivo_bloqueio.is_none() {
            return;
        }

        empresa.bloqueada = false;
        empresa.motivo_bloqueio = None;
        empresa.updated_at = Utc::now();

        tracing::info!(empresa_id = %empresa.id, "empresa desbloqueada");
    }
}

// Expiração forçada só existe para plano TRIAL: data do contrato mais a
// duração em dias. Demais ciclos não expiram sozinhos.
fn expiracao_do_trial(plano: &Plano, data_contrato: NaiveDate) -> Option<NaiveDate> {
    plano
        .duracao_dias
        .and_then(|dias| data_contrato.checked_add_days(Days::new(dias as u64)))
}

fn proximo_vencimento(plano: &Plano, data_contrato: NaiveDate) -> Option<NaiveDate> {
    plano
        .ciclo
        .meses()
        .and_then(|meses| data_contrato.checked_add_months(Months::new(meses)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::planos::CicloCobranca;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn plano(ciclo: CicloCobranca, duracao_dias: Option<i64>) -> Plano {
        Plano {
            id: Uuid::new_v4(),
            nome: "Plano Pro".to_string(),
            preco: dec!(149.90),
            ciclo,
            duracao_dias,
            limite_usuarios: 5,
            limite_clientes: 200,
            limite_agendamentos_mes: 300,
        }
    }

    fn empresa() -> Empresa {
        Empresa::nova("Estética Brilho", data(2024, 1, 1))
    }

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn atribuir_plano_copia_preco_e_limites() {
        let service = AssinaturaService::new();
        let plano = plano(CicloCobranca::Mensal, None);
        let mut empresa = empresa();

        service
            .atribuir_plano(&mut empresa, Some(&plano), data(2024, 3, 15), None)
            .unwrap();

        assert_eq!(empresa.plano_id, Some(plano.id));
        assert_eq!(empresa.mensalidade, dec!(149.90));
        assert_eq!(empresa.limites.usuarios, 5);
        assert_eq!(empresa.limites.clientes, 200);
        assert_eq!(empresa.limites.agendamentos_mes, 300);
        assert_eq!(empresa.data_expiracao, None);
        assert_eq!(empresa.proximo_vencimento, Some(data(2024, 4, 15)));
    }

    #[test]
    fn trial_de_7_dias_expira_no_dia_8() {
        let service = AssinaturaService::new();
        let plano = plano(CicloCobranca::Trial, Some(7));
        let mut empresa = empresa();

        service
            .atribuir_plano(&mut empresa, Some(&plano), data(2024, 1, 1), None)
            .unwrap();

        assert_eq!(empresa.data_expiracao, Some(data(2024, 1, 8)));
        assert_eq!(empresa.proximo_vencimento, None);
    }

    #[test]
    fn conta_avulsa_precisa_de_limites() {
        let service = AssinaturaService::new();
        let mut empresa = empresa();

        let erro = service
            .atribuir_plano(&mut empresa, None, data(2024, 1, 1), None)
            .unwrap_err();
        assert!(matches!(erro, AppError::PlanoInvalido));

        let limites = LimitesEfetivos {
            usuarios: 2,
            clientes: 50,
            agendamentos_mes: 80,
        };
        service
            .atribuir_plano(&mut empresa, None, data(2024, 1, 1), Some(limites))
            .unwrap();

        assert_eq!(empresa.plano_id, None);
        assert_eq!(empresa.limites, limites);
        assert_eq!(empresa.data_expiracao, None);
    }

    #[test]
    fn recalcular_expiracao_eh_idempotente_e_nao_toca_limites() {
        let service = AssinaturaService::new();
        let plano = plano(CicloCobranca::Trial, Some(30));
        let mut empresa = empresa();

        service
            .atribuir_plano(&mut empresa, Some(&plano), data(2024, 1, 1), None)
            .unwrap();
        let limites_antes = empresa.limites;
        let mensalidade_antes = empresa.mensalidade;

        service.recalcular_expiracao(&mut empresa, Some(&plano), data(2024, 2, 1));
        let primeira = empresa.data_expiracao;

        service.recalcular_expiracao(&mut empresa, Some(&plano), data(2024, 2, 1));
        assert_eq!(empresa.data_expiracao, primeira);
        assert_eq!(empresa.data_expiracao, Some(data(2024, 3, 2)));

        assert_eq!(empresa.limites, limites_antes);
        assert_eq!(empresa.mensalidade, mensalidade_antes);
    }

    #[test]
    fn bloquear_exige_motivo() {
        let service = AssinaturaService::new();
        let mut empresa = empresa();

        assert!(matches!(
            service.bloquear(&mut empresa, ""),
            Err(AppError::MotivoBloqueioObrigatorio)
        ));
        assert!(matches!(
            service.bloquear(&mut empresa, "   "),
            Err(AppError::MotivoBloqueioObrigatorio)
        ));
        assert!(!empresa.bloqueada);

        service.bloquear(&mut empresa, "Inadimplência").unwrap();
        assert!(empresa.bloqueada);
        assert_eq!(empresa.motivo_bloqueio.as_deref(), Some("Inadimplência"));
    }

    #[test]
    fn desbloquear_limpa_motivo_e_eh_idempotente() {
        let service = AssinaturaService::new();
        let mut empresa = empresa();

        service.bloquear(&mut empresa, "Chargeback").unwrap();
        service.desbloquear(&mut empresa);

        assert!(!empresa.bloqueada);
        assert_eq!(empresa.motivo_bloqueio, None);

        // Repetir não é erro nem muda nada
        service.desbloquear(&mut empresa);
        assert!(!empresa.bloqueada);
    }
}
