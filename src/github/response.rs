//! Response handling shared by every GitHub request
//!
//! A response either carries the status the call expects, or it is turned into
//! [`Error::UnexpectedStatus`] with a caller-supplied context. Bodies are read as
//! text first so that transport failures stay [`Error::Http`] and malformed JSON
//! stays [`Error::Decode`].

use crate::error::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error document GitHub returns for failed requests
#[derive(Deserialize, Debug)]
struct ErrorDocument {
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    field: Option<String>,
}

impl ErrorDetail {
    fn describe(&self) -> Option<String> {
        match (&self.message, &self.code, &self.field) {
            (Some(message), _, _) => Some(message.clone()),
            (None, Some(code), Some(field)) => Some(format!("{} ({})", code, field)),
            (None, Some(code), None) => Some(code.clone()),
            _ => None,
        }
    }
}

/// Pass the response through if it has the expected status, otherwise map it to an error
pub async fn expect_status(
    response: Response,
    expected: StatusCode,
    context: &str,
) -> Result<Response> {
    if response.status() == expected {
        Ok(response)
    } else {
        Err(response_to_error(response, context).await)
    }
}

/// Convert a failed response into an error carrying its status and body
async fn response_to_error(response: Response, context: &str) -> Error {
    let status = response.status();
    match response.text().await {
        Ok(body) => Error::UnexpectedStatus {
            context: context.to_string(),
            status,
            message: error_message(status, &body),
        },
        Err(err) => Error::Http(err),
    }
}

/// Decode a JSON response body
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();
    }

    match serde_json::from_str::<ErrorDocument>(body) {
        Ok(document) => {
            let details: Vec<String> = document
                .errors
                .iter()
                .filter_map(ErrorDetail::describe)
                .collect();
            if details.is_empty() {
                document.message
            } else {
                format!("{}: {}", document.message, details.join("; "))
            }
        }
        Err(_) => body.to_string(),
    }
}
