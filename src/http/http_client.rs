use reqwest::{Method, StatusCode};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;

use super::types::ApiErrorBody;

/// Low-level transport for the TON HTTP API.
///
/// Performs exactly one request per call: no retries, no backoff, no
/// caching. The configured timeout is the sole guard against hung calls.
#[derive(Debug)]
pub(crate) struct HttpClient {
    base_url: Url,
    api_key: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            api_key: config.api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one request and returns the raw response bytes for any 2xx
    /// status.
    ///
    /// Success bodies are returned unchanged: the `ok` envelope convention
    /// is checked by the typed bindings, not here, so an endpoint without
    /// the envelope can still use this transport.
    pub async fn send_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Vec<u8>, ClientError> {
        let url = join_path(&self.base_url, path)?;

        let mut request = match method {
            Method::POST => self.client.post(url),
            _ => self.client.get(url),
        };
        if let Some(value) = body {
            let encoded = serde_json::to_vec(value).map_err(ClientError::Encoding)?;
            request = request.body(encoded);
        }

        let response = request
            .header("x-api-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(error_from_status(status, &bytes));
        }

        Ok(bytes.to_vec())
    }
}

/// Classifies a non-2xx response: structured `{ok, error, code}` bodies keep
/// their diagnostics, anything else is surfaced as raw body text.
fn error_from_status(status: StatusCode, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) => ClientError::Api {
            message: parsed
                .error
                .unwrap_or_else(|| "API returned non-OK status".to_string()),
            code: parsed.code,
            http_status: Some(status.as_u16()),
        },
        Err(_) => ClientError::Api {
            message: String::from_utf8_lossy(body).into_owned(),
            code: None,
            http_status: Some(status.as_u16()),
        },
    }
}

/// Joins the configured base URL with an endpoint path.
///
/// `Url::join` treats a leading `/` as an absolute path and would discard
/// the base URL's own path segment (`/mainnet/`), so the two halves are
/// concatenated instead.
fn join_path(base: &Url, path: &str) -> Result<Url, ClientError> {
    let url = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&url)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base: &str) -> HttpClient {
        let config = ClientConfig::with_options(
            "test-api-key",
            Url::parse(base).unwrap(),
            Duration::from_secs(5),
        )
        .unwrap();
        HttpClient::new(config).unwrap()
    }

    #[test]
    fn join_path_keeps_base_path_segment() {
        let base = Url::parse("https://ton.getblock.io/mainnet/").unwrap();
        let url = join_path(&base, "/getMasterchainInfo").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ton.getblock.io/mainnet/getMasterchainInfo"
        );
    }

    #[test]
    fn join_path_keeps_query_string() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let url = join_path(&base, "/getAddressBalance?address=0:abc").unwrap();
        assert_eq!(url.query(), Some("address=0:abc"));
    }

    #[test]
    fn structured_error_body_keeps_diagnostics() {
        let body = br#"{"ok": false, "error": "rate limited", "code": 429}"#;
        let err = error_from_status(StatusCode::TOO_MANY_REQUESTS, body);
        match err {
            ClientError::Api {
                message,
                code,
                http_status,
            } => {
                assert_eq!(message, "rate limited");
                assert_eq!(code, Some(429));
                assert_eq!(http_status, Some(429));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn undecodable_error_body_is_surfaced_raw() {
        let err = error_from_status(StatusCode::SERVICE_UNAVAILABLE, b"upstream down");
        match err {
            ClientError::Api {
                message,
                code,
                http_status,
            } => {
                assert_eq!(message, "upstream down");
                assert_eq!(code, None);
                assert_eq!(http_status, Some(503));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_body_is_returned_unchanged() {
        let mock_server = MockServer::start().await;

        // Transport must not reject an `ok: false` body on a 2xx status.
        Mock::given(method("GET"))
            .and(path("/getAddressState"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"ok": false, "error": "x"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let bytes = client
            .send_request(Method::GET, "/getAddressState", None)
            .await
            .unwrap();
        assert_eq!(bytes, br#"{"ok": false, "error": "x"}"#);
    }
}
