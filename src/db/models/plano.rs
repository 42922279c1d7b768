use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanoEstudos {
    pub id: String,
    pub nome: String,
    pub disciplinas_ids: Vec<String>,
    pub criado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanoEstudosCreate {
    pub nome: String,
    #[serde(default)]
    pub disciplinas_ids: Vec<String>,
}

impl From<PlanoEstudosCreate> for PlanoEstudos {
    fn from(input: PlanoEstudosCreate) -> Self {
        Self {
            id: super::new_id(),
            nome: input.nome,
            disciplinas_ids: input.disciplinas_ids,
            criado_em: super::now(),
        }
    }
}
