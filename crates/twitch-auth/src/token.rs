//! App access token acquisition
//!
//! One operation: POST the client-credentials form to the token endpoint
//! and parse the JSON payload. HTTP 200 is the only success status; any
//! other response is an authentication rejection, which the caller treats
//! as fatal.

use serde::Deserialize;
use tracing::debug;

use crate::constants::GRANT_TYPE;
use crate::credentials::ClientCredentials;
use crate::error::{Error, Result};

/// Token payload returned by the token endpoint.
///
/// `expires_in` is a delta in seconds from the response time. The poll loop
/// tracks when the token was acquired and re-authenticates once that many
/// whole seconds have elapsed. Tokens are replaced wholesale — there is
/// exactly one live token at any time.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    /// Seconds until the access token expires (delta, not absolute)
    pub expires_in: u64,
    pub token_type: String,
}

/// Acquire an app access token with the client-credentials grant.
///
/// `token_url` is the production `TOKEN_ENDPOINT` constant in the binary;
/// it is a parameter so tests can point at a local mock server.
pub async fn authenticate(
    client: &reqwest::Client,
    token_url: &str,
    credentials: &ClientCredentials,
) -> Result<AuthToken> {
    let response = client
        .post(token_url)
        .form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.expose()),
            ("grant_type", GRANT_TYPE),
        ])
        .send()
        .await
        .map_err(|e| Error::Http(format!("token request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::AuthRejected(format!(
            "token endpoint returned {status}: {body}"
        )));
    }

    let token = response
        .json::<AuthToken>()
        .await
        .map_err(|e| Error::InvalidResponse(e.to_string()))?;

    debug!(
        expires_in = token.expires_in,
        token_type = %token.token_type,
        "access token acquired"
    );
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Form;
    use axum::http::StatusCode;
    use axum::routing::post;
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    fn test_credentials() -> ClientCredentials {
        ClientCredentials::new("cid-test", "cs-test".into())
    }

    /// Start a mock token endpoint that validates the form fields and
    /// returns a fixed token payload.
    async fn start_token_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = axum::Router::new().route(
            "/oauth2/token",
            post(|Form(form): Form<HashMap<String, String>>| async move {
                let valid = form.get("client_id").map(String::as_str) == Some("cid-test")
                    && form.get("client_secret").map(String::as_str) == Some("cs-test")
                    && form.get("grant_type").map(String::as_str) == Some("client_credentials");
                if valid {
                    (
                        StatusCode::OK,
                        r#"{"access_token":"at-abc","expires_in":3600,"token_type":"bearer"}"#,
                    )
                } else {
                    (StatusCode::BAD_REQUEST, r#"{"message":"invalid client"}"#)
                }
            }),
        );

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/oauth2/token")
    }

    #[test]
    fn auth_token_deserializes() {
        let json = r#"{"access_token":"at-xyz","expires_in":5587808,"token_type":"bearer"}"#;
        let token: AuthToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "at-xyz");
        assert_eq!(token.expires_in, 5_587_808);
        assert_eq!(token.token_type, "bearer");
    }

    #[tokio::test]
    async fn authenticate_sends_form_and_parses_token() {
        let url = start_token_server().await;
        let client = reqwest::Client::new();

        let token = authenticate(&client, &url, &test_credentials())
            .await
            .unwrap();
        assert_eq!(token.access_token, "at-abc");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.token_type, "bearer");
    }

    #[tokio::test]
    async fn authenticate_rejects_on_bad_credentials() {
        let url = start_token_server().await;
        let client = reqwest::Client::new();
        let wrong = ClientCredentials::new("cid-test", "wrong-secret".into());

        let err = authenticate(&client, &url, &wrong).await.unwrap_err();
        match err {
            Error::AuthRejected(msg) => {
                assert!(msg.contains("400"), "status should be in message: {msg}");
                assert!(msg.contains("invalid client"), "body should be in message");
            }
            other => panic!("expected AuthRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn authenticate_rejects_any_non_success_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = axum::Router::new().fallback(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
        });
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::new();
        let result = authenticate(&client, &format!("http://{addr}"), &test_credentials()).await;
        assert!(matches!(result, Err(Error::AuthRejected(_))));
    }

    #[tokio::test]
    async fn authenticate_errors_on_malformed_payload() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app =
            axum::Router::new().fallback(|| async { (StatusCode::OK, r#"{"access_token":1}"#) });
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::new();
        let result = authenticate(&client, &format!("http://{addr}"), &test_credentials()).await;
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn authenticate_maps_transport_failure_to_http_error() {
        // Nothing listens on port 1 — connection refused
        let client = reqwest::Client::new();
        let result = authenticate(&client, "http://127.0.0.1:1", &test_credentials()).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
