// tests/pipeline.rs
// End-to-end pipeline runs against a stubbed generateContent endpoint

use axum::Router;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use motivator::MotivatorError;
use motivator::config::GenerationOptions;
use motivator::llm::{GeminiClient, TemperatureTunables};
use motivator::present::Presenter;
use motivator::response::{Mode, ResultKind};
use motivator::session::{Motivator, SessionState};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// What the stub answers with
#[derive(Clone)]
enum Reply {
    Text(&'static str),
    Status(StatusCode, &'static str),
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    seen: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

async fn generate_content(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state.seen.lock().unwrap().push((uri.path().to_string(), key, body));

    match state.reply {
        Reply::Text(text) => {
            let payload = json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": text}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {
                    "promptTokenCount": 900,
                    "candidatesTokenCount": 120,
                    "totalTokenCount": 1020
                }
            });
            (StatusCode::OK, payload.to_string())
        }
        Reply::Status(status, body) => (status, body.to_string()),
    }
}

/// Spawn the stub on an ephemeral port; returns its base URL and request log
async fn spawn_stub(reply: Reply) -> (String, StubState) {
    let state = StubState {
        reply,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new().fallback(generate_content).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1beta/models", addr), state)
}

fn motivator_for(base: &str) -> Motivator {
    let client = GeminiClient::with_base("test-key".to_string(), base.to_string());
    Motivator::new(
        Arc::new(client),
        GenerationOptions::default(),
        TemperatureTunables::default(),
    )
}

// ============================================================================
// Successful generation
// ============================================================================

#[tokio::test]
async fn test_strict_json_reply_is_rendered() {
    let (base, stub) = spawn_stub(Reply::Text(
        r#"{"type":"message","motivation":"Congratulations on the new job!","steps":["Celebrate","Prepare for day one"],"mantra":"New chapter, full heart"}"#,
    ))
    .await;
    let motivator = motivator_for(&base);
    let mut session = SessionState::default();

    let text = "I'm so excited about my new job!";
    let result = motivator.generate(&mut session, text, Mode::Message).await.unwrap();
    let rendered = Presenter::new(motivator.options(), false).render(result, Mode::Message);
    assert!(rendered.contains("Congratulations on the new job!"));
    assert!(rendered.contains("  2. Prepare for day one"));

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (path, key, body) = &seen[0];
    assert_eq!(path, "/v1beta/models/gemini-2.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));

    let config = &body["generationConfig"];
    assert_eq!(config["maxOutputTokens"], 2500);
    assert_eq!(config["candidateCount"], 1);
    assert_eq!(config["topK"], 40);
    let temperature = config["temperature"].as_f64().unwrap();
    assert!((0.7..=1.0).contains(&temperature));

    let instruction = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(instruction.contains(&format!("USER'S EXACT WORDS: \"{}\"", text)));
    assert!(instruction.contains("- Primary emotion: excited"));
    assert!(instruction.contains("MODE: message"));
}

#[tokio::test]
async fn test_fenced_reply_is_parsed() {
    let (base, _stub) = spawn_stub(Reply::Text(
        "Here you go:\n```json\n{\"type\":\"quote\",\"quotes\":[{\"quote\":\"Keep going.\",\"author\":\"Anon\"}],\"theme\":\"Persistence\"}\n```",
    ))
    .await;
    let motivator = motivator_for(&base);
    let mut session = SessionState::default();

    let result = motivator
        .generate(&mut session, "I'm tired of everything", Mode::Quote)
        .await
        .unwrap();
    let quote = result.as_quote().unwrap();
    assert_eq!(quote.theme.as_deref(), Some("Persistence"));
    assert_eq!(quote.quotes[0].author, "Anon");
    assert!(session.history.entries_for_text("I'm tired of everything")[0].parsed);
}

// ============================================================================
// Fallback
// ============================================================================

#[tokio::test]
async fn test_prose_reply_falls_back_to_quotes() {
    let (base, _stub) = spawn_stub(Reply::Text("Hello friend, have a lovely day!")).await;
    let motivator = motivator_for(&base);
    let mut session = SessionState::default();

    let result = motivator.generate(&mut session, "hi", Mode::Quote).await.unwrap();
    assert_eq!(result.kind(), ResultKind::Quote);
    let quote = result.as_quote().unwrap();
    assert_eq!(quote.quotes.len(), 2);
    assert!(quote.reflection.as_deref().unwrap().contains("hi"));

    let entries = session.history.entries_for_text("hi");
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].parsed);
}

#[tokio::test]
async fn test_empty_candidates_fall_back() {
    let (base, _stub) = spawn_stub(Reply::Text("")).await;
    let motivator = motivator_for(&base);
    let mut session = SessionState::default();

    let text = "I'm anxious about my presentation tomorrow";
    let result = motivator.generate(&mut session, text, Mode::Both).await.unwrap();
    let message = result.as_message().unwrap();
    assert!(message.motivation.as_deref().unwrap().contains(text));
    assert_eq!(message.quotes.len(), 2);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unreachable_endpoint_keeps_session() {
    let motivator = motivator_for("http://127.0.0.1:1");
    let mut session = SessionState::default();

    let err = motivator
        .generate(&mut session, "I'm so excited about my new job!", Mode::Message)
        .await
        .unwrap_err();
    assert!(matches!(err, MotivatorError::Generation(_)));
    assert!(err.to_user_string().starts_with("Error calling AI:"));
    assert!(session.current.is_none());
    assert!(session.history.is_empty());
}

#[tokio::test]
async fn test_api_error_status_keeps_previous_result() {
    let (ok_base, _ok) = spawn_stub(Reply::Text("no json")).await;
    let mut session = SessionState::default();
    motivator_for(&ok_base)
        .generate(&mut session, "hello", Mode::Message)
        .await
        .unwrap();
    let before = session.current.clone();
    assert!(before.is_some());

    let (bad_base, bad) = spawn_stub(Reply::Status(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"error":{"message":"quota exceeded"}}"#,
    ))
    .await;
    let err = motivator_for(&bad_base)
        .generate(&mut session, "hello again", Mode::Message)
        .await
        .unwrap_err();

    match err {
        MotivatorError::Generation(msg) => assert!(msg.contains("429")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.current, before);
    // Exactly one attempt, no retry
    assert_eq!(bad.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_error_object_in_body_is_generation_error() {
    let (base, _stub) = spawn_stub(Reply::Status(
        StatusCode::OK,
        r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#,
    ))
    .await;
    let mut session = SessionState::default();

    let err = motivator_for(&base)
        .generate(&mut session, "hello", Mode::Quote)
        .await
        .unwrap_err();
    match err {
        MotivatorError::Generation(msg) => {
            assert!(msg.contains("403 PERMISSION_DENIED: API key not valid"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(session.current.is_none());
}

#[tokio::test]
async fn test_empty_object_reply_falls_back() {
    let (base, _stub) = spawn_stub(Reply::Text("{}")).await;
    let mut session = SessionState::default();

    let text = "I'm feeling really sad today";
    let result = motivator_for(&base)
        .generate(&mut session, text, Mode::Message)
        .await
        .unwrap();
    let motivation = result.as_message().unwrap().motivation.clone().unwrap();
    assert!(motivation.contains(text));
    assert!(!session.history.entries_for_text(text)[0].parsed);
}

#[tokio::test]
async fn test_empty_input_never_calls_endpoint() {
    let (base, stub) = spawn_stub(Reply::Text("{}")).await;
    let motivator = motivator_for(&base);
    let mut session = SessionState::default();

    let err = motivator.generate(&mut session, "", Mode::Message).await.unwrap_err();
    assert!(matches!(err, MotivatorError::EmptyInput));
    assert!(stub.seen.lock().unwrap().is_empty());
}
