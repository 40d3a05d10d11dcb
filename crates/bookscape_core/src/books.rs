//! Book records as read from the catalog store.

use serde::{Deserialize, Serialize};

/// Shown in place of a cover when a record has no usable image link.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://st4.depositphotos.com/14953852/24787/v/450/depositphotos_247872612-stock-illustration-no-image-available-icon-vector.jpg";

/// One row of the `books` table.
///
/// Records are read-only from this system's perspective; the external
/// ingestion process owns creation and mutation. Fields that may be absent
/// in the table are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    /// Comma-joined author list. Use [`authors_list`](Self::authors_list)
    /// when individual names are needed.
    pub authors: String,
    pub publisher: Option<String>,
    pub is_ebook: bool,
    pub page_count: Option<i64>,
    /// Kept as text; the catalog statements cast it when they need a number.
    pub year: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<i64>,
    pub list_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub image_link: Option<String>,
    pub categories: Option<String>,
}

impl BookRecord {
    /// Split the delimited author string into individual names.
    pub fn authors_list(&self) -> Vec<&str> {
        self.authors
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Image link for display, falling back to the fixed placeholder when
    /// the link is absent or blank.
    pub fn display_image(&self) -> &str {
        match self.image_link.as_deref() {
            Some(link) if !link.trim().is_empty() => link,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image_link: Option<&str>) -> BookRecord {
        BookRecord {
            title: "Dune".to_string(),
            authors: "Frank Herbert".to_string(),
            publisher: Some("Chilton".to_string()),
            is_ebook: false,
            page_count: Some(412),
            year: Some("1965".to_string()),
            average_rating: Some(4.2),
            ratings_count: Some(1_000_000),
            list_price: Some(9.99),
            retail_price: Some(7.99),
            image_link: image_link.map(str::to_string),
            categories: Some("Science Fiction".to_string()),
        }
    }

    #[test]
    fn authors_list_splits_on_commas() {
        let mut rec = record(None);
        rec.authors = "Frank Herbert, Brian Herbert,Kevin J. Anderson".to_string();
        assert_eq!(
            rec.authors_list(),
            vec!["Frank Herbert", "Brian Herbert", "Kevin J. Anderson"]
        );
    }

    #[test]
    fn authors_list_single_author() {
        assert_eq!(record(None).authors_list(), vec!["Frank Herbert"]);
    }

    #[test]
    fn display_image_falls_back_when_missing_or_blank() {
        assert_eq!(record(None).display_image(), PLACEHOLDER_IMAGE_URL);
        assert_eq!(record(Some("   ")).display_image(), PLACEHOLDER_IMAGE_URL);
        assert_eq!(
            record(Some("https://example.com/dune.jpg")).display_image(),
            "https://example.com/dune.jpg"
        );
    }
}
