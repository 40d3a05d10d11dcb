//! Keyword filtering over an in-memory catalog snapshot.

use crate::books::BookRecord;

/// Filter records whose title, authors, or publisher contains the keyword.
///
/// Matching is case-insensitive substring containment applied independently
/// to the three fields; a record matches if any field does. A null publisher
/// is a non-match for that field, not an error. An empty keyword matches
/// everything. The result preserves the relative order of the input.
pub fn search_books<'a>(keyword: &str, records: &'a [BookRecord]) -> Vec<&'a BookRecord> {
    let keyword = keyword.to_lowercase();
    records
        .iter()
        .filter(|record| matches_keyword(&keyword, record))
        .collect()
}

fn matches_keyword(lowered: &str, record: &BookRecord) -> bool {
    field_contains(Some(&record.title), lowered)
        || field_contains(Some(&record.authors), lowered)
        || field_contains(record.publisher.as_deref(), lowered)
}

fn field_contains(field: Option<&str>, lowered: &str) -> bool {
    match field {
        Some(value) => value.to_lowercase().contains(lowered),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, authors: &str, publisher: Option<&str>) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            authors: authors.to_string(),
            publisher: publisher.map(str::to_string),
            is_ebook: false,
            page_count: None,
            year: None,
            average_rating: None,
            ratings_count: None,
            list_price: None,
            retail_price: None,
            image_link: None,
            categories: None,
        }
    }

    fn catalog() -> Vec<BookRecord> {
        vec![
            record("Dune", "Frank Herbert", Some("Chilton")),
            record("Foundation", "Isaac Asimov", Some("Gnome Press")),
            record("Dune Messiah", "Frank Herbert", Some("Putnam")),
        ]
    }

    #[test]
    fn matches_are_a_subset_in_original_order() {
        let records = catalog();
        let matches = search_books("dune", &records);
        let titles: Vec<_> = matches.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Dune Messiah"]);
    }

    #[test]
    fn empty_keyword_matches_everything() {
        let records = catalog();
        let matches = search_books("", &records);
        assert_eq!(matches.len(), records.len());
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let records = catalog();
        assert_eq!(search_books("HERBERT", &records).len(), 2);
        assert_eq!(search_books("gnome", &records).len(), 1);
        assert_eq!(search_books("PUTNAM", &records).len(), 1);
    }

    #[test]
    fn null_publisher_is_a_non_match_not_an_error() {
        let records = vec![record("Untitled", "Anonymous", None)];
        assert!(search_books("putnam", &records).is_empty());
        assert_eq!(search_books("anon", &records).len(), 1);
    }

    #[test]
    fn no_match_returns_empty() {
        let records = catalog();
        assert!(search_books("hobbit", &records).is_empty());
    }
}
