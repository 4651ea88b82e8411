use serde::{Deserialize, Serialize};

/// Value of the author/affiliation columns; the classification heuristic does not exist.
pub const NOT_IMPLEMENTED: &str = "Heuristic not implemented";
/// Value of the corresponding-author email column.
pub const NOT_AVAILABLE: &str = "Not available";

/// Column names, in output order.
pub const FIELD_NAMES: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// One output row per PubMed ID.
///
/// Field names serialize to the literal column headers in [`FIELD_NAMES`], so the
/// same struct drives both the CSV and the console output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl PaperRecord {
    /// Builds a record; the three unclassified columns get their placeholder values.
    pub fn new(
        pubmed_id: impl Into<String>,
        title: impl Into<String>,
        publication_date: impl Into<String>,
    ) -> Self {
        Self {
            pubmed_id: pubmed_id.into(),
            title: title.into(),
            publication_date: publication_date.into(),
            non_academic_authors: NOT_IMPLEMENTED.to_string(),
            company_affiliations: NOT_IMPLEMENTED.to_string(),
            corresponding_author_email: NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_placeholders() {
        let r = PaperRecord::new("123", "A title", "2024 Jan");
        assert_eq!(r.pubmed_id, "123");
        assert_eq!(r.title, "A title");
        assert_eq!(r.publication_date, "2024 Jan");
        assert_eq!(r.non_academic_authors, NOT_IMPLEMENTED);
        assert_eq!(r.company_affiliations, NOT_IMPLEMENTED);
        assert_eq!(r.corresponding_author_email, NOT_AVAILABLE);
    }

    #[test]
    fn serializes_under_column_names_in_order() {
        let r = PaperRecord::new("1", "", "");
        let value = serde_json::to_value(&r).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut expected = FIELD_NAMES.to_vec();
        let mut got = keys.clone();
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected);

        // serde_json::to_string keeps declaration order.
        let text = serde_json::to_string(&r).unwrap();
        let positions: Vec<usize> = FIELD_NAMES
            .iter()
            .map(|name| text.find(&format!("\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
