use reqwest::StatusCode;
use std::path::PathBuf;

/// Failures of a fetch or a sink write.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not complete request to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("E-utilities request failed: HTTP {status} for url ({url})\n{message}")]
    Status {
        status: StatusCode,
        url: String,
        message: String,
    },

    #[error("failed to parse E-utilities JSON (url={url})")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write CSV to {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write results")]
    Io(#[from] std::io::Error),
}

// E-utilities errors look like {"error":"API rate limit exceeded","count":"4"}.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct EutilsErrorResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
}

const MAX_BODY_IN_ERROR: usize = 512;

pub(crate) fn format_eutils_error(status: StatusCode, url: &str, body: &str) -> Error {
    let server = serde_json::from_str::<EutilsErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .unwrap_or_else(|| truncate(body.trim(), MAX_BODY_IN_ERROR).to_string());

    let message = if status == StatusCode::TOO_MANY_REQUESTS {
        format!(
            "NCBI rate limit hit (3 requests/second without an API key); wait and re-run.\nServer message: {}",
            server
        )
    } else {
        server
    };

    Error::Status {
        status,
        url: url.to_string(),
        message,
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
