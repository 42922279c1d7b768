use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::{db::models::DesempenhoSemanal, error::ApiError, AppState};

pub async fn list_desempenhos(
    State(state): State<AppState>,
) -> Result<Json<Vec<DesempenhoSemanal>>, ApiError> {
    Ok(Json(state.db.list_desempenhos().await?))
}

/// Side-effecting query: an untouched week is created empty on first read.
pub async fn get_desempenho_semana(
    State(state): State<AppState>,
    Path(semana): Path<String>,
) -> Result<Json<DesempenhoSemanal>, ApiError> {
    let semana_inicio = NaiveDate::parse_from_str(&semana, "%Y-%m-%d").map_err(|_| {
        ApiError::BadRequest("Formato de data inválido. Use YYYY-MM-DD".to_string())
    })?;

    Ok(Json(state.db.get_or_create_desempenho(semana_inicio).await?))
}

pub async fn upsert_desempenho(
    State(state): State<AppState>,
    Json(desempenho): Json<DesempenhoSemanal>,
) -> Result<Json<Value>, ApiError> {
    state.db.upsert_desempenho(desempenho).await?;
    Ok(Json(json!({ "message": "Desempenho semanal salvo com sucesso" })))
}
