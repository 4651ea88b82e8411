use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::load_config;
use crate::error::{Error, format_eutils_error};
use crate::eutils::{SearchReply, SummaryReply};
use crate::record::PaperRecord;
use crate::util::{join_ids, urljoin};

/// Public NCBI E-utilities endpoint.
pub const DEFAULT_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
/// Number of IDs requested from esearch (`retmax`).
pub const DEFAULT_MAX_RESULTS: usize = 10;

const DATABASE: &str = "pubmed";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base E-utilities URL; `esearch.fcgi` and `esummary.fcgi` are resolved against it.
    pub url: String,
    /// Whether to verify TLS certificates.
    pub verify: bool,
}

#[derive(Debug, Clone)]
pub struct Client {
    url: String,

    timeout: Duration,
    max_results: usize,
    progress: bool,

    http: HttpClient,
}

impl Client {
    /// Creates a client using environment variables and/or `.pubmedrc`.
    ///
    /// This is equivalent to `Client::new(None, None)`.
    pub fn from_env() -> Result<Self> {
        Self::new(None, None)
    }

    /// Creates a client using (in order of precedence):
    /// - explicit `url`/`verify` arguments
    /// - environment variable `PUBMED_EUTILS_URL`
    /// - config file from `PUBMED_RC` or `.pubmedrc`
    /// - [`DEFAULT_URL`]
    pub fn new(url: Option<String>, verify: Option<bool>) -> Result<Self> {
        let cfg = load_config(url, verify)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("pubmed-papers/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("pubmed-papers")),
        );

        let mut builder = HttpClient::builder().default_headers(default_headers);
        if !cfg.verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            url: cfg.url,
            timeout: Duration::from_secs(60),
            max_results: DEFAULT_MAX_RESULTS,
            progress: true,
            http,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Searches PubMed and returns one record per matching ID, in search order.
    ///
    /// An empty vector means the search matched nothing; in that case no summary
    /// request is made.
    pub fn fetch_papers(&self, query: &str) -> Result<Vec<PaperRecord>, Error> {
        let spinner = self.spinner("Searching PubMed");
        let ids = self.search(query)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(pb) = &spinner {
            pb.set_message(format!("Fetching {} summaries", ids.len()));
        }
        let summaries = self.summaries(&ids)?;

        Ok(ids.iter().map(|id| summaries.record(id)).collect())
    }

    /// Runs esearch and returns the matching PubMed IDs.
    pub fn search(&self, query: &str) -> Result<Vec<String>, Error> {
        let retmax = self.max_results.to_string();
        let reply: SearchReply = self.get_json(
            "esearch.fcgi",
            &[
                ("db", DATABASE),
                ("term", query),
                ("retmax", &retmax),
                ("retmode", "json"),
            ],
        )?;

        if let Some(result) = &reply.esearchresult {
            if let Some(err) = &result.error {
                warn!(error = %err, "esearch reported a query error");
            }
            debug!(
                total = ?result.count,
                returned = result.id_count(),
                "esearch completed"
            );
        }

        Ok(reply.into_ids())
    }

    fn summaries(&self, ids: &[String]) -> Result<SummaryReply, Error> {
        let id = join_ids(ids);
        self.get_json(
            "esummary.fcgi",
            &[("db", DATABASE), ("id", &id), ("retmode", "json")],
        )
    }

    fn spinner(&self, message: &'static str) -> Option<ProgressBar> {
        if !self.progress {
            return None;
        }
        // Cleared when dropped, including on the error path.
        let pb = ProgressBar::new_spinner().with_finish(ProgressFinish::AndClear);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = urljoin(&self.url, endpoint);
        debug!(%url, ?params, "GET");

        let transport = |source| Error::Transport {
            url: url.clone(),
            source,
        };
        let resp = self
            .http
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .map_err(transport)?;

        let status = resp.status();
        let text = resp.text().map_err(transport)?;
        if !status.is_success() {
            return Err(format_eutils_error(status, &url, &text));
        }

        serde_json::from_str::<T>(&text).map_err(|source| Error::Decode {
            url: url.clone(),
            source,
        })
    }
}
