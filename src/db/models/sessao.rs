use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One study-timer run for a discipline. `ativa` is true while the timer is
/// running; `fim` and `duracao_segundos` are filled in exactly once when it
/// stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessaoEstudo {
    pub id: String,
    pub disciplina_id: String,
    pub inicio: DateTime<Utc>,
    pub fim: Option<DateTime<Utc>>,
    pub duracao_segundos: Option<i64>,
    pub ativa: bool,
    pub criado_em: DateTime<Utc>,
}

impl SessaoEstudo {
    pub fn iniciar(disciplina_id: impl Into<String>, inicio: DateTime<Utc>) -> Self {
        Self {
            id: super::new_id(),
            disciplina_id: disciplina_id.into(),
            inicio,
            fim: None,
            duracao_segundos: None,
            ativa: true,
            criado_em: inicio,
        }
    }
}

/// One row of the weekly per-discipline total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumoSemanalItem {
    pub disciplina_id: String,
    pub nome_disciplina: String,
    pub total_segundos: i64,
    pub total_horas: f64,
    pub total_minutos: i64,
}
