use serde_json::Value;

use crate::record::PaperRecord;

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct SearchReply {
    #[serde(default)]
    pub(crate) esearchresult: Option<SearchResult>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct SearchResult {
    // Diagnostic only; usually a string, but never trusted to be one.
    #[serde(default)]
    pub(crate) count: Option<Value>,
    // `null` is treated like a missing list.
    #[serde(default)]
    pub(crate) idlist: Option<Vec<String>>,
    // Query problems come back with HTTP 200 and an upper-case ERROR field.
    #[serde(default, rename = "ERROR")]
    pub(crate) error: Option<Value>,
}

impl SearchResult {
    pub(crate) fn id_count(&self) -> usize {
        self.idlist.as_ref().map_or(0, Vec::len)
    }
}

impl SearchReply {
    pub(crate) fn into_ids(self) -> Vec<String> {
        self.esearchresult
            .and_then(|r| r.idlist)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct SummaryReply {
    #[serde(default)]
    result: Option<Value>,
}

impl SummaryReply {
    /// Builds the record for `id` from `result.<id>`; missing pieces become empty strings.
    pub(crate) fn record(&self, id: &str) -> PaperRecord {
        let summary = self
            .result
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|r| r.get(id))
            .and_then(Value::as_object);
        let field = |name: &str| {
            summary
                .and_then(|s| s.get(name))
                .and_then(Value::as_str)
                .unwrap_or("")
        };
        PaperRecord::new(id, field("title"), field("pubdate"))
    }
}
