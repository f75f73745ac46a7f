//! API parity tests: drive the router end to end and check the response
//! shapes the chat page relies on.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use healthfaq_core::HealthFaqConfig;
use healthfaq_server::{build_router, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const EN_CORPUS: &str = r#"[
  {"question": "What are the symptoms of COVID-19?", "answer": "Fever, cough, fatigue..."},
  {"question": "What is the normal blood pressure range?", "answer": "Around 120/80 mmHg."},
  {"question": "How can I book an appointment with a doctor?", "answer": "Call the clinic or book online."}
]"#;

const ES_CORPUS: &str = r#"[
  {"question": "¿Cuáles son los síntomas de COVID-19?", "answer": "Fiebre, tos, cansancio..."}
]"#;

const HI_CORPUS: &str = r#"[
  {"question": "कोविड-19 के लक्षण क्या हैं?", "answer": "बुखार, खांसी, थकान..."},
  {"question": "सामान्य रक्तचाप की सीमा क्या है?", "answer": "लगभग 120/80 mmHg।"}
]"#;

struct TestApp {
    router: Router,
    state: Arc<AppState>,
    _dir: TempDir,
}

fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("faq_data.json"), EN_CORPUS).unwrap();
    std::fs::write(dir.path().join("faq_data_es.json"), ES_CORPUS).unwrap();
    std::fs::write(dir.path().join("faq_data_hi.json"), HI_CORPUS).unwrap();

    let state = Arc::new(AppState::load(HealthFaqConfig::with_defaults(dir.path())));
    TestApp {
        router: build_router(state.clone()),
        state,
        _dir: dir,
    }
}

struct Reply {
    status: StatusCode,
    cookie: Option<String>,
    body: Value,
}

async fn send(app: &TestApp, request: Request<Body>) -> Reply {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Reply { status, cookie, body }
}

fn post(uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `name=value` part of a Set-Cookie header.
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_chat_matched_shape() {
    let app = test_app();
    let reply = send(&app, post("/chat", serde_json::json!({"message": "what are covid symptoms"}), None)).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["status"], "matched");
    assert_eq!(reply.body["response"], "Fever, cough, fatigue...");
    assert!(reply.body["confidence"].as_f64().unwrap() > 15.0);
    assert_eq!(reply.body["language"], "en");
    assert_eq!(reply.body["chatbot_name"], "Dr. Alex");
    assert!(reply.body["debug_info"].as_str().unwrap().starts_with("Match confidence"));

    let cookie = reply.cookie.unwrap();
    assert!(cookie.starts_with("healthfaq_session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_chat_fallback_lists_topics() {
    let app = test_app();
    let reply = send(&app, post("/chat", serde_json::json!({"message": "xyz random gibberish"}), None)).await;

    assert_eq!(reply.body["status"], "fallback");
    let response = reply.body["response"].as_str().unwrap();
    assert!(response.contains("Here are some topics I can help with:"));
    assert!(response.contains("• COVID-19 symptoms and information"));
    assert!(reply.body["debug_info"].as_str().unwrap().starts_with("Low confidence match"));
}

#[tokio::test]
async fn test_chat_empty_input() {
    let app = test_app();
    for body in [serde_json::json!({"message": "   "}), serde_json::json!({})] {
        let reply = send(&app, post("/chat", body, None)).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["status"], "empty_input");
        assert_eq!(reply.body["confidence"], 0.0);
        assert!(reply.body.get("debug_info").is_none());
    }
}

#[tokio::test]
async fn test_chat_identity() {
    let app = test_app();
    let reply = send(&app, post("/chat", serde_json::json!({"message": "What is your name"}), None)).await;
    assert_eq!(reply.body["status"], "identity");
    assert_eq!(reply.body["confidence"], 100.0);
    assert!(reply.body["response"].as_str().unwrap().contains("Dr. Alex"));
}

#[tokio::test]
async fn test_history_follows_session_cookie() {
    let app = test_app();
    let first = send(&app, post("/chat", serde_json::json!({"message": "what are covid symptoms"}), None)).await;
    let cookie = cookie_pair(&first.cookie.unwrap());

    let second = send(
        &app,
        post("/chat", serde_json::json!({"message": "normal blood pressure"}), Some(&cookie)),
    )
    .await;
    assert!(second.cookie.is_none());
    send(&app, post("/chat", serde_json::json!({"message": ""}), Some(&cookie))).await;

    let history = send(&app, get("/chat/history", Some(&cookie))).await;
    assert_eq!(history.body["total_messages"], 2);
    assert_eq!(
        format!("healthfaq_session={}", history.body["user_id"].as_str().unwrap()),
        cookie
    );

    let entries = history.body["history"].as_array().unwrap();
    assert_eq!(entries[0]["user_message"], "what are covid symptoms");
    assert_eq!(entries[0]["bot_response"], "Fever, cough, fatigue...");
    assert_eq!(entries[1]["language"], "en");
    assert!(entries[1]["timestamp"].as_str().unwrap().ends_with("+05:30"));
    assert!(entries[1]["display_time"].as_str().unwrap().ends_with(" IST"));
}

#[tokio::test]
async fn test_fresh_session_has_empty_history() {
    let app = test_app();
    let reply = send(&app, get("/chat/history", Some("healthfaq_session=not-a-uuid"))).await;
    assert_eq!(reply.body["total_messages"], 0);
    assert!(reply.body["history"].as_array().unwrap().is_empty());
    assert!(reply.cookie.is_some());
}

#[tokio::test]
async fn test_clear_answers_in_session_language() {
    let app = test_app();
    let first = send(
        &app,
        post("/chat", serde_json::json!({"message": "¿Cuáles son los síntomas de COVID-19?"}), None),
    )
    .await;
    assert_eq!(first.body["language"], "es");
    assert_eq!(first.body["response"], "Fiebre, tos, cansancio...");
    let cookie = cookie_pair(&first.cookie.unwrap());

    let cleared = send(&app, post("/chat/clear", serde_json::json!({}), Some(&cookie))).await;
    assert_eq!(cleared.body["status"], "cleared");
    assert!(cleared.body["message"].as_str().unwrap().starts_with("¡Historial de chat borrado!"));
    assert_eq!(cleared.body["chatbot_name"], "Dr. Alex");

    let history = send(&app, get("/chat/history", Some(&cookie))).await;
    assert_eq!(history.body["total_messages"], 0);
}

#[tokio::test]
async fn test_set_language() {
    let app = test_app();
    let reply = send(&app, post("/language", serde_json::json!({"language": "hi"}), None)).await;
    assert_eq!(reply.body["status"], "success");
    assert_eq!(reply.body["language"], "hi");
    assert!(reply.body["message"].as_str().unwrap().starts_with("नमस्ते!"));
    let cookie = cookie_pair(&reply.cookie.unwrap());

    let cleared = send(&app, post("/chat/clear", serde_json::json!({}), Some(&cookie))).await;
    assert!(cleared.body["message"].as_str().unwrap().starts_with("चैट इतिहास"));
}

#[tokio::test]
async fn test_unsupported_language_is_structured_error() {
    let app = test_app();
    let reply = send(&app, post("/language", serde_json::json!({"language": "fr"}), None)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["status"], "error");
    assert_eq!(reply.body["message"], "Unsupported language");
}

#[tokio::test]
async fn test_health_shape() {
    let app = test_app();
    let reply = send(&app, get("/health", None)).await;

    assert_eq!(reply.body["status"], "healthy");
    assert_eq!(reply.body["faq_count"], 3);
    assert_eq!(reply.body["faq_counts"]["es"], 1);
    assert_eq!(reply.body["faq_counts"]["hi"], 2);
    assert_eq!(reply.body["nlp_model"], "snowball");
    assert_eq!(reply.body["version"], "3.0");
    assert_eq!(
        reply.body["features"],
        serde_json::json!(["chat_history", "bilingual_support", "personality"])
    );
    assert_eq!(reply.body["chatbot_name"], "Dr. Alex");
    assert_eq!(reply.body["supported_languages"], serde_json::json!(["en", "es", "hi"]));
}

#[tokio::test]
async fn test_index_page() {
    let app = test_app();
    let response = app.router.clone().oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Dr. Alex"));
    assert!(html.contains("/chat/history"));
}

#[tokio::test]
async fn test_language_switch_reselects_corpus() {
    let app = test_app();
    let english = serde_json::json!({"message": "what are covid symptoms"});

    let first = send(&app, post("/chat", english.clone(), None)).await;
    send(&app, post("/chat", serde_json::json!({"message": "síntomas de covid"}), None)).await;
    let third = send(&app, post("/chat", english, None)).await;

    let registry = app.state.registry();
    assert_eq!(registry.switch_count(), 3);
    assert_eq!(first.body["response"], third.body["response"]);
    assert_eq!(first.body["confidence"], third.body["confidence"]);
}

#[tokio::test]
async fn test_hindi_query_uses_hindi_corpus() {
    let app = test_app();
    let english = serde_json::json!({"message": "what are covid symptoms"});

    send(&app, post("/chat", english.clone(), None)).await;
    let hindi = send(&app, post("/chat", serde_json::json!({"message": "कोविड के लक्षण"}), None)).await;
    assert_eq!(hindi.body["status"], "matched");
    assert_eq!(hindi.body["language"], "hi");
    assert_eq!(hindi.body["response"], "बुखार, खांसी, थकान...");
    assert!(hindi.body["confidence"].as_f64().unwrap() > 95.0);

    let registry = app.state.registry();
    assert_eq!(registry.switch_count(), 2);
    send(&app, post("/chat", english, None)).await;
    assert_eq!(registry.switch_count(), 3);
}
