pub mod desempenho;
pub mod disciplina;
pub mod plano;
pub mod sessao;
pub mod status_check;

pub use desempenho::{DesempenhoSemanal, TarefaDiaria};
pub use disciplina::{Disciplina, DisciplinaUpdate};
pub use plano::{PlanoEstudos, PlanoEstudosCreate};
pub use sessao::{ResumoSemanalItem, SessaoEstudo};
pub use status_check::{StatusCheck, StatusCheckCreate};

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn now() -> DateTime<Utc> {
    Utc::now()
}
