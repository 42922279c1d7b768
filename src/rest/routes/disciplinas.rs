use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    db::models::{Disciplina, DisciplinaUpdate},
    error::ApiError,
    AppState,
};

const MSG_NAO_ENCONTRADA: &str = "Disciplina não encontrada";

pub async fn list_disciplinas(
    State(state): State<AppState>,
) -> Result<Json<Vec<Disciplina>>, ApiError> {
    Ok(Json(state.db.list_disciplinas().await?))
}

pub async fn get_disciplina(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Disciplina>, ApiError> {
    match state.db.get_disciplina(&id).await? {
        Some(disciplina) => Ok(Json(disciplina)),
        None => Err(ApiError::NotFound(MSG_NAO_ENCONTRADA.to_string())),
    }
}

/// Only the two schedule fields are writable; omitted or null fields keep
/// their stored values.
pub async fn update_disciplina(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<DisciplinaUpdate>,
) -> Result<Json<Disciplina>, ApiError> {
    match state.db.update_disciplina_horarios(&id, update).await? {
        Some(disciplina) => Ok(Json(disciplina)),
        None => Err(ApiError::NotFound(MSG_NAO_ENCONTRADA.to_string())),
    }
}
