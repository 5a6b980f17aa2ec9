//! Anthropic Messages API wire tests against a local mock server.
//!
//! Validates headers, request bodies for both phases, and error envelope
//! classification.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tool_exchange::capabilities::CapabilitySet;
use tool_exchange::client::AnthropicBuilder;
use tool_exchange::error::ExchangeError;
use tool_exchange::exchange::{ExchangeOptions, ToolExchange};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn body(req: &Request) -> Option<Value> {
    serde_json::from_slice::<Value>(&req.body).ok()
}

fn turn_count(req: &Request) -> usize {
    body(req)
        .and_then(|v| v["messages"].as_array().map(Vec::len))
        .unwrap_or(0)
}

fn declares_bmi(req: &Request) -> bool {
    body(req)
        .and_then(|v| v["tools"].as_array().cloned())
        .is_some_and(|tools| {
            tools.len() == 1
                && tools[0]["name"] == "calculate_bmi"
                && tools[0]["input_schema"]["required"] == json!(["weight_kg", "height_cm"])
        })
}

fn tool_use_response() -> Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-test",
        "content": [
            { "type": "text", "text": "I'll calculate that." },
            {
                "type": "tool_use",
                "id": "toolu_01A",
                "name": "calculate_bmi",
                "input": { "weight_kg": 75, "height_cm": 180 }
            }
        ],
        "stop_reason": "tool_use",
        "stop_sequence": null,
        "usage": { "input_tokens": 400, "output_tokens": 60 }
    })
}

fn final_response(text: &str) -> Value {
    json!({
        "id": "msg_02",
        "type": "message",
        "role": "assistant",
        "model": "claude-test",
        "content": [ { "type": "text", "text": text } ],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": { "input_tokens": 520, "output_tokens": 40 }
    })
}

fn exchange_for(server: &MockServer) -> ToolExchange<tool_exchange::client::AnthropicClient> {
    let client = AnthropicBuilder::new()
        .api_key("test-key")
        .base_url(server.uri())
        .build()
        .expect("client");
    let options = ExchangeOptions {
        model: "claude-test".into(),
        ..ExchangeOptions::default()
    };
    ToolExchange::new(
        Arc::new(client),
        Arc::new(CapabilitySet::standard().expect("capabilities")),
        options,
    )
}

#[tokio::test]
async fn full_exchange_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(header("content-type", "application/json"))
        .and(|req: &Request| turn_count(req) == 1 && declares_bmi(req))
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_use_response()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(|req: &Request| {
            let Some(v) = body(req) else { return false };
            let messages = &v["messages"];
            declares_bmi(req)
                && v["model"] == "claude-test"
                && v["max_tokens"] == 1024
                && messages.as_array().map(Vec::len) == Some(3)
                && messages[1]["role"] == "assistant"
                && messages[1]["content"] == tool_use_response()["content"]
                && messages[2]["role"] == "user"
                && messages[2]["content"][0]["type"] == "tool_result"
                && messages[2]["content"][0]["tool_use_id"] == "toolu_01A"
        })
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(final_response("Your BMI is 23.1, which is normal weight.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let outcome = exchange_for(&server)
        .run("I weigh 75 kg and I'm 180 cm tall. What's my BMI?")
        .await
        .expect("exchange ok");

    assert_eq!(outcome.answer, "Your BMI is 23.1, which is normal weight.");
    assert!(outcome.used_capability());
    assert_eq!(outcome.transcript.remote_calls(), 2);

    let sent = server.received_requests().await.expect("recording on");
    let second: Value = serde_json::from_slice(&sent[1].body).unwrap();
    let content = second["messages"][2]["content"][0]["content"]
        .as_str()
        .unwrap();
    let payload: Value = serde_json::from_str(content).unwrap();
    assert_eq!(payload["bmi"], 23.1);
    assert_eq!(payload["category"], "normal weight");
}

#[tokio::test]
async fn direct_answer_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(final_response("BMI is weight over height squared.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let answer = exchange_for(&server)
        .process_query("What is BMI?")
        .await
        .expect("exchange ok");
    assert_eq!(answer, "BMI is weight over height squared.");
}

#[tokio::test]
async fn authentication_envelope_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "type": "error",
            "error": { "type": "authentication_error", "message": "invalid x-api-key" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = exchange_for(&server)
        .process_query("What's my BMI?")
        .await
        .unwrap_err();
    match err {
        ExchangeError::AuthenticationError(msg) => assert_eq!(msg, "invalid x-api-key"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn overloaded_envelope_on_second_call_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(|req: &Request| turn_count(req) == 1)
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_use_response()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(|req: &Request| turn_count(req) == 3)
        .respond_with(ResponseTemplate::new(529).set_body_json(json!({
            "type": "error",
            "error": { "type": "overloaded_error", "message": "Overloaded" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = exchange_for(&server)
        .process_query("What's my BMI?")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(529));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn unparsable_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = exchange_for(&server)
        .process_query("What's my BMI?")
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::ParseError(_)));
}

#[tokio::test]
async fn missing_content_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_x",
            "type": "message",
            "role": "assistant",
            "model": "claude-test",
            "stop_reason": "end_turn"
        })))
        .mount(&server)
        .await;

    let err = exchange_for(&server)
        .process_query("What's my BMI?")
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::MalformedResponse(_)));
}

#[tokio::test]
async fn slow_response_hits_the_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(final_response("too late"))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AnthropicBuilder::new()
        .api_key("test-key")
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .expect("client");
    let exchange = ToolExchange::new(
        Arc::new(client),
        Arc::new(CapabilitySet::standard().expect("capabilities")),
        ExchangeOptions::default(),
    );

    let err = exchange.process_query("What's my BMI?").await.unwrap_err();
    assert!(matches!(err, ExchangeError::TimeoutError(_)), "got {err:?}");
    assert!(err.is_retryable());
    assert_eq!(server.received_requests().await.expect("recording on").len(), 1);
}
