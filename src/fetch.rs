use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const TOKEN_HEADER: &str = "X-Figma-Token";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("error requesting {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("error parsing response from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn file_url(api_base: &str, file_key: &str) -> String {
    format!("{}/v1/files/{}", api_base.trim_end_matches('/'), file_key)
}

/// Fetches the document tree of a single file.
///
/// The body is returned as an untyped value; callers read it leniently.
pub fn get(api_base: &str, file_key: &str, token: &str) -> Result<Value, FetchError> {
    let url = file_url(api_base, file_key);
    debug!("GET {}", url);

    let request_error = |source| FetchError::Request {
        url: url.clone(),
        source,
    };

    // no overall deadline: large files can take minutes to arrive
    let client = Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(request_error)?;

    let response = client
        .get(&url)
        .header(TOKEN_HEADER, token)
        .send()
        .map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        // the body usually carries the API's error message
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                debug!("error reading {} response body: {}", status, e);
                String::new()
            }
        };
        return Err(FetchError::Status { url, status, body });
    }

    let body = response.bytes().map_err(request_error)?;
    debug!("received {} bytes", body.len());

    serde_json::from_slice(&body).map_err(|source| FetchError::Parse { url, source })
}
