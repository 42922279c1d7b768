pub mod desempenho;
pub mod disciplinas;
pub mod planos;
pub mod status;
pub mod timer;

use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Sistema de Planejamento de Estudos - API" }))
}
