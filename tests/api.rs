use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use estudos_api::{db::Database, rest, seed, AppState};

async fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db = Database::new(dir.path().join("estudos.sqlite3")).expect("failed to open db");
    seed::initialize_disciplinas(&db)
        .await
        .expect("failed to seed disciplines");
    (rest::build_router(AppState::new(db)), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn primeira_disciplina(app: &Router) -> String {
    let (status, body) = send(app, "GET", "/api/disciplinas", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap()[0]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn root_retorna_banner() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "GET", "/api/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Sistema de Planejamento de Estudos - API"
    );
}

#[tokio::test]
async fn disciplinas_sao_semeadas() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "GET", "/api/disciplinas", None).await;
    assert_eq!(status, StatusCode::OK);

    let disciplinas = body.as_array().unwrap();
    assert_eq!(disciplinas.len(), 19);
    let nomes: Vec<&str> = disciplinas
        .iter()
        .map(|d| d["nome"].as_str().unwrap())
        .collect();
    assert!(nomes.contains(&"Direito Constitucional"));
    assert!(nomes.contains(&"Filosofia do Direito"));
    assert!(disciplinas.iter().all(|d| d["horario_inicio"].is_null()));
}

#[tokio::test]
async fn get_disciplina_inexistente_retorna_404() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "GET", "/api/disciplinas/nao-existe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Disciplina não encontrada");
}

#[tokio::test]
async fn update_parcial_preserva_campo_ausente() {
    let (app, _dir) = test_app().await;
    let id = primeira_disciplina(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/disciplinas/{id}"),
        Some(json!({ "horario_inicio": "09:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["horario_inicio"], "09:00");
    assert!(body["horario_fim"].is_null());

    // Updating the other field leaves the first one in place.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/disciplinas/{id}"),
        Some(json!({ "horario_fim": "10:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["horario_inicio"], "09:00");
    assert_eq!(body["horario_fim"], "10:30");
}

#[tokio::test]
async fn desempenho_rejeita_data_invalida() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "GET", "/api/desempenho/2024-13-01", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Formato de data inválido. Use YYYY-MM-DD");
}

#[tokio::test]
async fn desempenho_cria_semana_na_primeira_leitura() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/desempenho/2024-03-04", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["semana_inicio"], "2024-03-04");
    assert_eq!(body["segunda"], json!([]));
    let id = body["id"].as_str().unwrap().to_string();

    // Second read returns the already-created record.
    let (status, body) = send(&app, "GET", "/api/desempenho/2024-03-04", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
}

#[tokio::test]
async fn desempenho_upsert_substitui_documento() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/desempenho",
        Some(json!({
            "semana_inicio": "2024-03-04",
            "segunda": [
                { "horario": "09:00", "descricao": "Revisar jurisprudência" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Desempenho semanal salvo com sucesso");

    // Replacing the same week does not create a second record.
    let (status, _) = send(
        &app,
        "POST",
        "/api/desempenho",
        Some(json!({
            "semana_inicio": "2024-03-04",
            "terca": [
                { "horario": "14:00", "descricao": "Questões de Penal", "concluida": true }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, earlier) = send(
        &app,
        "POST",
        "/api/desempenho",
        Some(json!({ "semana_inicio": "2024-02-26" })),
    )
    .await;
    assert_eq!(earlier["message"], "Desempenho semanal salvo com sucesso");

    let (status, body) = send(&app, "GET", "/api/desempenho", None).await;
    assert_eq!(status, StatusCode::OK);
    let semanas = body.as_array().unwrap();
    assert_eq!(semanas.len(), 2);
    // Newest week first.
    assert_eq!(semanas[0]["semana_inicio"], "2024-03-04");
    assert_eq!(semanas[1]["semana_inicio"], "2024-02-26");
    // Whole-document replacement: the Monday list from the first upsert is gone.
    assert_eq!(semanas[0]["segunda"], json!([]));
    assert_eq!(semanas[0]["terca"][0]["concluida"], true);
}

#[tokio::test]
async fn planos_criacao_e_busca() {
    let (app, _dir) = test_app().await;
    let disciplina_id = primeira_disciplina(&app).await;

    let (status, plano) = send(
        &app,
        "POST",
        "/api/planos",
        Some(json!({
            "nome": "Reta final OAB",
            "disciplinas_ids": [disciplina_id]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let plano_id = plano["id"].as_str().unwrap();
    assert_eq!(plano["nome"], "Reta final OAB");

    let (status, body) = send(&app, "GET", &format!("/api/planos/{plano_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["disciplinas_ids"][0], disciplina_id);

    let (status, body) = send(&app, "GET", "/api/planos/nao-existe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Plano de estudos não encontrado");

    let (status, body) = send(&app, "GET", "/api/planos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn fluxo_completo_do_timer() {
    let (app, _dir) = test_app().await;
    let disciplina_id = primeira_disciplina(&app).await;

    // Start.
    let (status, sessao) = send(
        &app,
        "POST",
        "/api/timer/iniciar",
        Some(json!({ "disciplina_id": disciplina_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sessao["disciplina_id"], disciplina_id.as_str());
    assert_eq!(sessao["ativa"], true);
    assert!(sessao["fim"].is_null());

    // Second start conflicts.
    let (status, body) = send(
        &app,
        "POST",
        "/api/timer/iniciar",
        Some(json!({ "disciplina_id": disciplina_id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Já existe uma sessão ativa para esta disciplina");

    // Live status.
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/timer/status/{disciplina_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ativo"], true);
    assert!(body["sessao"].is_object());
    assert!(body["tempo_decorrido"].as_i64().unwrap() >= 0);

    // Stop.
    let (status, parada) = send(
        &app,
        "PUT",
        &format!("/api/timer/parar/{disciplina_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let duracao = parada["duracao_segundos"].as_i64().unwrap();
    assert!(duracao >= 0);
    assert_eq!(parada["duracao_formatada"], "0h 0m");
    assert_eq!(parada["sessao"]["ativa"], false);

    // Stopping again is a 404.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/timer/parar/{disciplina_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["detail"],
        "Nenhuma sessão ativa encontrada para esta disciplina"
    );

    // Idle status again.
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/timer/status/{disciplina_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ativo"], false);
    assert!(body["sessao"].is_null());

    // The completed session shows up in the weekly summary.
    let (status, resumo) = send(&app, "GET", "/api/timer/resumo-semanal", None).await;
    assert_eq!(status, StatusCode::OK);
    let item = resumo
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["disciplina_id"] == disciplina_id.as_str())
        .expect("discipline missing from weekly summary");
    assert_eq!(item["total_segundos"].as_i64().unwrap(), duracao);
    assert!(item["nome_disciplina"].as_str().unwrap().starts_with("Direito"));

    // And in the per-discipline history, newest first.
    let (status, sessoes) = send(
        &app,
        "GET",
        &format!("/api/timer/sessoes/{disciplina_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sessoes.as_array().unwrap().len(), 1);
    assert_eq!(sessoes[0]["ativa"], false);
}

#[tokio::test]
async fn iniciar_timer_para_disciplina_desconhecida_retorna_404() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/timer/iniciar",
        Some(json!({ "disciplina_id": "nao-existe" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Disciplina não encontrada");
}

#[tokio::test]
async fn status_checks_criacao_e_listagem() {
    let (app, _dir) = test_app().await;

    let (status, check) = send(
        &app,
        "POST",
        "/api/status",
        Some(json!({ "client_name": "frontend" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["client_name"], "frontend");
    assert!(check["id"].as_str().is_some());

    let (status, body) = send(&app, "GET", "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}
