use std::time::Duration;

use phake_core::{AnalysisPayload, AnalysisRequest, AnalysisResult, Mode, CONNECTIVITY_MESSAGE};
use phake_engine::{AnalysisClient, ClientError, ClientSettings, ReqwestAnalysisClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LINKS_PATH: &str = "/api/v1/links";

fn client_for(server: &MockServer) -> ReqwestAnalysisClient {
    ReqwestAnalysisClient::new(ClientSettings {
        endpoint: format!("{}{}", server.uri(), LINKS_PATH),
        ..ClientSettings::default()
    })
}

fn request(mode: Mode, exclude: &[&str]) -> AnalysisRequest {
    AnalysisRequest {
        link: "example.com".to_string(),
        mode,
        exclude: exclude.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn educational_request_posts_contract_and_parses_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LINKS_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "link": "example.com",
            "mode": "educational",
            "exclude": ["Typosquatting"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "link": "example.com",
            "fake_link": "examp1e.com",
            "technique": "Homoglyph Spoofing",
            "explanation": "Swaps look-alike characters.",
            "mode": "educational",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .analyze(&request(Mode::Educational, &["Typosquatting"]))
        .await
        .expect("analysis ok");

    assert_eq!(
        payload,
        AnalysisPayload::Educational(AnalysisResult {
            original_link: "example.com".to_string(),
            fake_link: "examp1e.com".to_string(),
            technique: "Homoglyph Spoofing".to_string(),
            explanation: "Swaps look-alike characters.".to_string(),
        })
    );
}

#[tokio::test]
async fn prank_request_parses_fake_link() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LINKS_PATH))
        .and(body_json(json!({"link": "example.com", "mode": "prank", "exclude": []})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"fake_link": "http://totally-not-a-virus.ru/claim"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .analyze(&request(Mode::Prank, &[]))
        .await
        .expect("analysis ok");
    assert_eq!(
        payload,
        AnalysisPayload::Prank("http://totally-not-a-virus.ru/claim".to_string())
    );
}

#[tokio::test]
async fn failure_status_surfaces_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LINKS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "rate limited"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze(&request(Mode::Educational, &[]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Service {
            status: 500,
            message: Some("rate limited".to_string()),
        }
    );
    assert_eq!(err.user_message(), "rate limited");
}

#[tokio::test]
async fn failure_without_message_uses_connectivity_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LINKS_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze(&request(Mode::Prank, &[]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Service {
            status: 502,
            message: None,
        }
    );
    assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Nothing listens on the tcpmux port on a test machine.
    let client = ReqwestAnalysisClient::new(ClientSettings {
        endpoint: format!("http://127.0.0.1:1{LINKS_PATH}"),
        connect_timeout: Duration::from_secs(2),
        ..ClientSettings::default()
    });

    let err = client
        .analyze(&request(Mode::Educational, &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
    assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LINKS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"fake_link": "x"})),
        )
        .mount(&server)
        .await;

    let client = ReqwestAnalysisClient::new(ClientSettings {
        endpoint: format!("{}{}", server.uri(), LINKS_PATH),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    });
    let err = client
        .analyze(&request(Mode::Prank, &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LINKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fake_link": "x"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze(&request(Mode::Educational, &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LINKS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"fake_link": "http://a-very-long-link.example/"})),
        )
        .mount(&server)
        .await;

    let client = ReqwestAnalysisClient::new(ClientSettings {
        endpoint: format!("{}{}", server.uri(), LINKS_PATH),
        max_response_bytes: 10,
        ..ClientSettings::default()
    });
    let err = client
        .analyze(&request(Mode::Prank, &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::TooLarge { max_bytes: 10, .. }), "got {err:?}");
}

#[tokio::test]
async fn invalid_endpoint_fails_before_any_call() {
    let client = ReqwestAnalysisClient::new(ClientSettings {
        endpoint: "not a url".to_string(),
        ..ClientSettings::default()
    });
    let err = client
        .analyze(&request(Mode::Prank, &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidEndpoint(_)), "got {err:?}");
}
