use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A law discipline. Schedule fields hold times of day like "09:00".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disciplina {
    pub id: String,
    pub nome: String,
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
    pub criado_em: DateTime<Utc>,
}

impl Disciplina {
    pub fn nova(nome: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            nome: nome.into(),
            horario_inicio: None,
            horario_fim: None,
            criado_em: super::now(),
        }
    }
}

/// Partial schedule update. Absent fields leave stored values untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisciplinaUpdate {
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
}
