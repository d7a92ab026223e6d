//! The outbound call and its outcome classification.

use std::error::Error as StdError;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use url::Url;

use crate::http::X_REQUEST_ID;

/// A fully-read downstream response.
#[derive(Debug)]
pub struct Relayed {
    /// Downstream status; logged only, the caller always sees 200.
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

/// Why a ping could not be relayed.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No response: timeout, refused connection, DNS failure, ...
    #[error("{}", chain(.0))]
    Transport(reqwest::Error),

    /// Headers arrived but draining the body failed.
    #[error("failed to read response body: {}", chain(.0))]
    Read(reqwest::Error),
}

impl RelayError {
    /// Error text recorded in the log event.
    pub fn detail(&self) -> String {
        match self {
            RelayError::Transport(e) | RelayError::Read(e) => chain(e),
        }
    }
}

/// `outer: cause: root cause`, skipping causes already quoted by their parent.
fn chain(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

/// Downstream base address with `service=<name>` appended to its query.
pub fn outbound_url(base: &Url, service: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("service", service);
    url
}

/// Issue the single outbound call and drain its body.
///
/// The client's timeout bounds the whole exchange; a deadline hit while
/// reading the body is a read failure.
pub async fn forward(
    client: &reqwest::Client,
    url: Url,
    request_id: Option<&HeaderValue>,
) -> Result<Relayed, RelayError> {
    let mut request = client.get(url);
    if let Some(id) = request_id {
        request = request.header(X_REQUEST_ID, id.clone());
    }

    let response = request.send().await.map_err(RelayError::Transport)?;
    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await.map_err(RelayError::Read)?;

    Ok(Relayed {
        status,
        content_type,
        body,
    })
}
