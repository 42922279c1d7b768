use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{
    db::models::{ResumoSemanalItem, SessaoEstudo},
    error::ApiError,
    timer::{ParadaSessao, StatusSessao},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct IniciarTimerRequest {
    pub disciplina_id: String,
}

pub async fn iniciar_timer(
    State(state): State<AppState>,
    Json(body): Json<IniciarTimerRequest>,
) -> Result<Json<SessaoEstudo>, ApiError> {
    Ok(Json(state.timer.iniciar(&body.disciplina_id).await?))
}

pub async fn parar_timer(
    State(state): State<AppState>,
    Path(disciplina_id): Path<String>,
) -> Result<Json<ParadaSessao>, ApiError> {
    Ok(Json(state.timer.parar(&disciplina_id).await?))
}

pub async fn timer_status(
    State(state): State<AppState>,
    Path(disciplina_id): Path<String>,
) -> Result<Json<StatusSessao>, ApiError> {
    Ok(Json(state.timer.status(&disciplina_id).await?))
}

pub async fn resumo_semanal(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumoSemanalItem>>, ApiError> {
    Ok(Json(state.timer.resumo_semanal().await?))
}

pub async fn sessoes_disciplina(
    State(state): State<AppState>,
    Path(disciplina_id): Path<String>,
) -> Result<Json<Vec<SessaoEstudo>>, ApiError> {
    Ok(Json(state.timer.sessoes(&disciplina_id).await?))
}
