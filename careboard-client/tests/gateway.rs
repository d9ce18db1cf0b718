use careboard_client::{Gateway, GatewayError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn demo_gateway(server: &MockServer) -> Gateway {
    Gateway::new(server.uri(), "coalition", "skills-test")
}

#[tokio::test]
async fn fetch_sends_basic_auth_and_parses_the_payload() {
    let server = MockServer::start().await;
    let body = json!({
        "patients": [{
            "name": "Jessica Taylor",
            "gender": "Female",
            "age": 28
        }]
    });

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "authorization",
            "Basic Y29hbGl0aW9uOnNraWxscy10ZXN0",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let payload = demo_gateway(&server).fetch_dashboard().await.unwrap();
    assert_eq!(payload.patients.len(), 1);
    assert_eq!(payload.patients[0].name, "Jessica Taylor");
}

#[tokio::test]
async fn non_2xx_status_is_a_fetch_failure_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = demo_gateway(&server).fetch_dashboard().await.unwrap_err();
    match err {
        GatewayError::Status(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn unauthorized_is_surfaced_not_reauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = demo_gateway(&server).fetch_dashboard().await.unwrap_err();
    assert!(matches!(err, GatewayError::Status(status) if status.as_u16() == 401));
}

#[tokio::test]
async fn malformed_body_is_an_unexpected_payload_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"just a string\""))
        .mount(&server)
        .await;

    let err = demo_gateway(&server).fetch_dashboard().await.unwrap_err();
    assert!(matches!(err, GatewayError::Payload(_)));
}
