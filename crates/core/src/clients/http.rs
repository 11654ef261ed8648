//! Shared request plumbing for the REST client shims.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::CoreError;
use crate::session::AuthSession;

/// Error body the backend sends with non-2xx responses.
/// Other fields are ignored.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Build a reqwest client with the standard timeout (native targets only).
pub(crate) fn build_client(timeout_secs: u64) -> Client {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(timeout_secs));
    builder.build().unwrap_or_else(|_| Client::new())
}

/// Attach `Authorization: Bearer <token>` when the session holds a token.
/// Without a token the request goes out bare; the server rejects it.
pub(crate) fn with_auth(req: RequestBuilder, session: &AuthSession) -> RequestBuilder {
    match session.token() {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

/// Decode a 2xx response body as JSON, or map a non-2xx response to
/// `CoreError::Api` carrying the server's `message` when one is present.
pub(crate) async fn read_json<T: DeserializeOwned>(
    service: &str,
    resp: Response,
) -> Result<T, CoreError> {
    let resp = check_status(service, resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| CoreError::Deserialization(e.to_string()))
}

/// As [`read_json`], for endpoints that return no content.
pub(crate) async fn read_empty(service: &str, resp: Response) -> Result<(), CoreError> {
    check_status(service, resp).await.map(|_| ())
}

async fn check_status(service: &str, resp: Response) -> Result<Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("HTTP {status}"));
    Err(CoreError::Api {
        service: service.to_string(),
        message,
    })
}
