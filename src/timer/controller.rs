use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::Serialize;

use crate::{
    db::{
        models::{ResumoSemanalItem, SessaoEstudo},
        Database, InicioSessao,
    },
    error::ApiError,
};

const MSG_DISCIPLINA_NAO_ENCONTRADA: &str = "Disciplina não encontrada";
const MSG_SESSAO_JA_ATIVA: &str = "Já existe uma sessão ativa para esta disciplina";
const MSG_SEM_SESSAO_ATIVA: &str = "Nenhuma sessão ativa encontrada para esta disciplina";

/// Stop response: the closed session plus the duration in raw seconds and
/// in "{h}h {m}m" form.
#[derive(Debug, Clone, Serialize)]
pub struct ParadaSessao {
    pub sessao: SessaoEstudo,
    pub duracao_segundos: i64,
    pub duracao_formatada: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusSessao {
    pub ativo: bool,
    pub sessao: Option<SessaoEstudo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_decorrido: Option<i64>,
}

/// Per-discipline study timer. Two states per discipline, Idle and
/// Running, held entirely in the store: Running means exactly one session
/// row with `ativa = 1`.
#[derive(Clone)]
pub struct TimerController {
    db: Database,
}

impl TimerController {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn iniciar(&self, disciplina_id: &str) -> Result<SessaoEstudo, ApiError> {
        match self.db.iniciar_sessao(disciplina_id, Utc::now()).await? {
            InicioSessao::Criada(sessao) => Ok(sessao),
            InicioSessao::JaAtiva => Err(ApiError::Conflict(MSG_SESSAO_JA_ATIVA.to_string())),
            InicioSessao::DisciplinaInexistente => {
                Err(ApiError::NotFound(MSG_DISCIPLINA_NAO_ENCONTRADA.to_string()))
            }
        }
    }

    pub async fn parar(&self, disciplina_id: &str) -> Result<ParadaSessao, ApiError> {
        let sessao = self
            .db
            .parar_sessao(disciplina_id, Utc::now())
            .await?
            .ok_or_else(|| ApiError::NotFound(MSG_SEM_SESSAO_ATIVA.to_string()))?;

        let duracao_segundos = sessao.duracao_segundos.unwrap_or(0);
        Ok(ParadaSessao {
            duracao_segundos,
            duracao_formatada: formatar_duracao(duracao_segundos),
            sessao,
        })
    }

    /// Read-only: elapsed seconds are computed from the stored start, not
    /// persisted, so repeated calls report a monotonically growing value.
    pub async fn status(&self, disciplina_id: &str) -> Result<StatusSessao, ApiError> {
        match self.db.get_sessao_ativa(disciplina_id).await? {
            Some(sessao) => {
                let tempo_decorrido = (Utc::now() - sessao.inicio).num_seconds();
                Ok(StatusSessao {
                    ativo: true,
                    sessao: Some(sessao),
                    tempo_decorrido: Some(tempo_decorrido),
                })
            }
            None => Ok(StatusSessao {
                ativo: false,
                sessao: None,
                tempo_decorrido: None,
            }),
        }
    }

    pub async fn resumo_semanal(&self) -> Result<Vec<ResumoSemanalItem>, ApiError> {
        let (inicio, fim) = janela_semana(Utc::now());
        Ok(self.db.resumo_semanal(inicio, fim).await?)
    }

    pub async fn sessoes(&self, disciplina_id: &str) -> Result<Vec<SessaoEstudo>, ApiError> {
        Ok(self.db.list_sessoes_por_disciplina(disciplina_id).await?)
    }
}

pub fn formatar_duracao(segundos: i64) -> String {
    let horas = segundos / 3600;
    let minutos = (segundos % 3600) / 60;
    format!("{horas}h {minutos}m")
}

/// Half-open window from Monday 00:00:00 of the current week to the next
/// Monday, both UTC.
fn janela_semana(agora: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let hoje = agora.date_naive();
    let segunda = hoje - Duration::days(i64::from(hoje.weekday().num_days_from_monday()));
    let inicio = segunda.and_time(NaiveTime::MIN).and_utc();
    (inicio, inicio + Duration::days(7))
}
