//! HTTP surface: axum router over the store and the timer controller.
//!
//! All endpoints live under the `/api` prefix:
//!   GET  /api/                       banner
//!   GET  /api/disciplinas            list disciplines
//!   GET  /api/disciplinas/{id}       get discipline
//!   PUT  /api/disciplinas/{id}       partial schedule update
//!   GET  /api/desempenho             weekly performance, newest first
//!   GET  /api/desempenho/{semana}    get-or-create week
//!   POST /api/desempenho             upsert week
//!   GET  /api/planos                 list plans
//!   POST /api/planos                 create plan
//!   GET  /api/planos/{id}            get plan
//!   POST /api/timer/iniciar          start timer
//!   PUT  /api/timer/parar/{id}       stop timer
//!   GET  /api/timer/status/{id}      timer state + live elapsed
//!   GET  /api/timer/resumo-semanal   weekly totals per discipline
//!   GET  /api/timer/sessoes/{id}     sessions for discipline
//!   POST /api/status                 create status check
//!   GET  /api/status                 list status checks

pub mod routes;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let router = build_router(state);

    info!("API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(routes::root))
        .route("/api/disciplinas", get(routes::disciplinas::list_disciplinas))
        .route(
            "/api/disciplinas/{id}",
            get(routes::disciplinas::get_disciplina)
                .put(routes::disciplinas::update_disciplina),
        )
        .route(
            "/api/desempenho",
            get(routes::desempenho::list_desempenhos)
                .post(routes::desempenho::upsert_desempenho),
        )
        .route(
            "/api/desempenho/{semana}",
            get(routes::desempenho::get_desempenho_semana),
        )
        .route(
            "/api/planos",
            get(routes::planos::list_planos).post(routes::planos::create_plano),
        )
        .route("/api/planos/{id}", get(routes::planos::get_plano))
        .route("/api/timer/iniciar", post(routes::timer::iniciar_timer))
        .route("/api/timer/parar/{id}", put(routes::timer::parar_timer))
        .route("/api/timer/status/{id}", get(routes::timer::timer_status))
        .route(
            "/api/timer/resumo-semanal",
            get(routes::timer::resumo_semanal),
        )
        .route(
            "/api/timer/sessoes/{id}",
            get(routes::timer::sessoes_disciplina),
        )
        .route(
            "/api/status",
            get(routes::status::list_status_checks).post(routes::status::create_status_check),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
