use mockito::{Matcher, Server};
use pyxis_client::auth::{NoAuth, PyxisAuth, SslAuth, TokenAuth};
use pyxis_client::client::PyxisClient;
use pyxis_client::config::PyxisConfig;
use pyxis_client::error::PyxisError;

fn test_config(server_url: &str) -> PyxisConfig {
    PyxisConfig {
        hostname: server_url.to_string(),
        retries: 0,
        backoff_factor: 0.0,
        verify: true,
        timeout_secs: 30,
    }
}

#[tokio::test]
async fn no_auth_sends_no_authorization_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/operators/indices")
        .match_query(Matcher::Any)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let client = PyxisClient::with_auth(test_config(&server.url()), &NoAuth)
        .await
        .unwrap();
    client.get_operator_indices("4.5-4.6", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn token_auth_sends_bearer_header_on_every_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/operators/indices")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": []}"#)
        .expect(2)
        .create_async()
        .await;

    let auth = TokenAuth::new("secret-token");
    let client = PyxisClient::with_auth(test_config(&server.url()), &auth)
        .await
        .unwrap();
    client.get_operator_indices("4.5-4.6", None).await.unwrap();
    client.get_operator_indices("4.5-4.6", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn token_auth_rejects_malformed_token() {
    let auth = TokenAuth::new("bad\ntoken");
    let result = auth.configure(reqwest::Client::builder()).await;

    match result {
        Err(PyxisError::InvalidInput(msg)) => assert!(msg.contains("malformed bearer token")),
        Ok(_) => panic!("Expected InvalidInput error, got Ok"),
        Err(other) => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[tokio::test]
async fn ssl_auth_with_missing_files_fails_at_build() {
    let auth = SslAuth::new("/nonexistent/client.crt", "/nonexistent/client.key");
    let result = PyxisClient::with_auth(test_config("https://pyxis-prod-url/"), &auth).await;

    match result {
        Err(PyxisError::Io(_)) => (),
        Ok(_) => panic!("Expected Io error, got Ok"),
        Err(other) => panic!("Expected Io error, got {other:?}"),
    }
}
