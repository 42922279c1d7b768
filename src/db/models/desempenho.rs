use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TarefaDiaria {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub horario: String,
    pub descricao: String,
    #[serde(default)]
    pub concluida: bool,
}

/// Weekly checklist keyed by the Monday of the week. Upserts replace the
/// whole document, so clients can omit `id` and `criado_em` and have them
/// generated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesempenhoSemanal {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub semana_inicio: NaiveDate,
    #[serde(default)]
    pub segunda: Vec<TarefaDiaria>,
    #[serde(default)]
    pub terca: Vec<TarefaDiaria>,
    #[serde(default)]
    pub quarta: Vec<TarefaDiaria>,
    #[serde(default)]
    pub quinta: Vec<TarefaDiaria>,
    #[serde(default)]
    pub sexta: Vec<TarefaDiaria>,
    #[serde(default)]
    pub sabado: Vec<TarefaDiaria>,
    #[serde(default)]
    pub domingo: Vec<TarefaDiaria>,
    #[serde(default = "super::now")]
    pub criado_em: DateTime<Utc>,
}

impl DesempenhoSemanal {
    /// Fresh week with all seven task lists empty.
    pub fn vazio(semana_inicio: NaiveDate) -> Self {
        Self {
            id: super::new_id(),
            semana_inicio,
            segunda: Vec::new(),
            terca: Vec::new(),
            quarta: Vec::new(),
            quinta: Vec::new(),
            sexta: Vec::new(),
            sabado: Vec::new(),
            domingo: Vec::new(),
            criado_em: super::now(),
        }
    }
}
