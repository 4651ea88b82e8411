pub(crate) fn urljoin(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Comma-joins IDs for the `id` parameter of esummary.
pub(crate) fn join_ids(ids: &[String]) -> String {
    ids.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urljoin_handles_slashes() {
        assert_eq!(
            urljoin("https://h/entrez/eutils/", "/esearch.fcgi"),
            "https://h/entrez/eutils/esearch.fcgi"
        );
        assert_eq!(
            urljoin("http://127.0.0.1:1", "esummary.fcgi"),
            "http://127.0.0.1:1/esummary.fcgi"
        );
        assert_eq!(urljoin("http://a", "https://b/c"), "https://b/c");
    }

    #[test]
    fn join_ids_keeps_order() {
        let ids = vec!["3".to_string(), "1".to_string(), "2".to_string()];
        assert_eq!(join_ids(&ids), "3,1,2");
        assert_eq!(join_ids(&[]), "");
    }
}
