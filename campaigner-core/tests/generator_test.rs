//! Generation client behaviour against stub providers and a local HTTP server

use async_trait::async_trait;
use campaigner_core::config::GeminiConfig;
use campaigner_core::llm::{
    FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Usage,
};
use campaigner_core::{CampaignBrief, CampaignError, CampaignGenerator, Channel};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn brief() -> CampaignBrief {
    CampaignBrief::new("BrewMate", "cold brew kit", "urban professionals 25-40")
        .with_channels([Channel::Instagram, Channel::Email])
}

/// Provider that records requests and replies with a fixed outcome
struct StubProvider {
    reply: Result<String, fn() -> LLMError>,
    calls: Arc<Mutex<Vec<LLMRequest>>>,
}

impl StubProvider {
    fn ok(text: &str) -> (Self, Arc<Mutex<Vec<LLMRequest>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reply: Ok(text.to_string()),
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn failing(error: fn() -> LLMError) -> (Self, Arc<Mutex<Vec<LLMRequest>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reply: Err(error),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl LLMProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.calls.lock().unwrap().push(request);
        match &self.reply {
            Ok(text) => Ok(LLMResponse {
                content: Some(text.clone()),
                usage: Some(Usage {
                    prompt_tokens: 10,
                    completion_tokens: 20,
                    total_tokens: 30,
                }),
                finish_reason: FinishReason::Stop,
            }),
            Err(make_error) => Err(make_error()),
        }
    }

    fn supported_models(&self) -> Vec<String> {
        vec!["gemini-2.0-flash".to_string()]
    }

    fn validate_request(&self, _request: &LLMRequest) -> Result<(), LLMError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_text_is_returned_verbatim() {
    let reply = "## 1. CAMPAIGN STRATEGY\n  trailing spaces  \n\n";
    let (stub, calls) = StubProvider::ok(reply);
    let generator = CampaignGenerator::with_provider(Box::new(stub));

    let text = generator.generate(&brief()).await.unwrap();
    assert_eq!(text, reply);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].temperature, Some(0.8));
    assert_eq!(calls[0].max_tokens, Some(3000));
    assert_eq!(calls[0].model, "gemini-2.0-flash");
    assert!(calls[0].messages[0].content.contains("Instagram, Email"));
}

#[tokio::test]
async fn test_provider_failure_propagates_as_single_error() {
    let failures: [fn() -> LLMError; 4] = [
        || LLMError::Authentication("API key not valid".to_string()),
        || LLMError::RateLimit,
        || LLMError::Network("connection reset".to_string()),
        || LLMError::Provider("Prompt blocked: SAFETY".to_string()),
    ];

    for failure in failures {
        let (stub, calls) = StubProvider::failing(failure);
        let generator = CampaignGenerator::with_provider(Box::new(stub));

        let result = generator.generate(&brief()).await;
        match result {
            Err(CampaignError::Generation(message)) => assert!(!message.is_empty()),
            other => panic!("expected a generation error, got {other:?}"),
        }
        // exactly one attempt, no retry
        assert_eq!(calls.lock().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_empty_reply_is_a_failure() {
    let (stub, _calls) = StubProvider::ok("");
    let generator = CampaignGenerator::with_provider(Box::new(stub));
    assert!(matches!(
        generator.generate(&brief()).await,
        Err(CampaignError::Generation(_))
    ));
}

/// Serve one canned HTTP response and hand back the raw request
async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&received);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if received.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&received).to_string());
    });

    (format!("http://{addr}/v1beta"), rx)
}

fn config_for(base_url: String) -> GeminiConfig {
    GeminiConfig {
        api_key: None,
        base_url,
    }
}

#[tokio::test]
async fn test_gemini_success_over_http() {
    let body = serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "# BrewMate Campaign\n"}, {"text": "Stay cool."}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 400, "candidatesTokenCount": 12, "totalTokenCount": 412}
    })
    .to_string();
    let (base_url, request_rx) = serve_once("HTTP/1.1 200 OK", body).await;

    let generator = CampaignGenerator::from_config("secret-key", &config_for(base_url)).unwrap();
    let text = generator.generate(&brief()).await.unwrap();
    assert_eq!(text, "# BrewMate Campaign\nStay cool.");

    let raw_request = request_rx.await.unwrap();
    let request_line = raw_request.lines().next().unwrap();
    assert!(request_line.starts_with(
        "POST /v1beta/models/gemini-2.0-flash:generateContent?key=secret-key"
    ));

    let json_start = raw_request.find("\r\n\r\n").unwrap() + 4;
    let sent: serde_json::Value = serde_json::from_str(&raw_request[json_start..]).unwrap();
    assert_eq!(sent["generationConfig"]["maxOutputTokens"], 3000);
    let temperature = sent["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.8).abs() < 1e-6);
    let prompt = sent["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.starts_with("You are a world-class marketing strategist"));
    assert!(prompt.contains("- **Brand Name:** BrewMate"));
}

#[tokio::test]
async fn test_gemini_http_error_is_generation_failure() {
    let body = r#"{"error":{"code":500,"message":"internal","status":"INTERNAL"}}"#.to_string();
    let (base_url, _rx) = serve_once("HTTP/1.1 500 Internal Server Error", body).await;

    let generator = CampaignGenerator::from_config("key", &config_for(base_url)).unwrap();
    let err = generator.generate(&brief()).await.unwrap_err();
    assert!(matches!(err, CampaignError::Generation(_)));
    assert!(err.to_string().contains("500"));
    assert!(!err.to_string().contains('\u{1b}'));
}

#[tokio::test]
async fn test_gemini_bad_key_is_generation_failure() {
    let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#.to_string();
    let (base_url, _rx) = serve_once("HTTP/1.1 400 Bad Request", body).await;

    let generator = CampaignGenerator::from_config("wrong", &config_for(base_url)).unwrap();
    let err = generator.generate(&brief()).await.unwrap_err();
    assert!(matches!(err, CampaignError::Generation(_)));
    assert!(err.to_string().contains("Authentication failed"));
}

#[tokio::test]
async fn test_gemini_quota_is_generation_failure() {
    let body = r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED"}}"#.to_string();
    let (base_url, _rx) = serve_once("HTTP/1.1 429 Too Many Requests", body).await;

    let generator = CampaignGenerator::from_config("key", &config_for(base_url)).unwrap();
    let err = generator.generate(&brief()).await.unwrap_err();
    assert_eq!(err.to_string(), "Campaign generation failed: Rate limit exceeded");
}

#[tokio::test]
async fn test_unreachable_service_is_generation_failure() {
    // Bind then drop to get a port nobody is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let generator =
        CampaignGenerator::from_config("secret-key", &config_for(format!("http://{addr}/v1beta")))
            .unwrap();
    let err = generator.generate(&brief()).await.unwrap_err();
    assert!(matches!(err, CampaignError::Generation(_)));
    assert!(!err.to_string().contains("secret-key"));
}
