//! Row mapping for the base `books` snapshot.

use bookscape_core::books::BookRecord;
use tokio_postgres::types::FromSql;
use tokio_postgres::Row;

use crate::errors::{PostgresError, Result};

/// The base load selects the columns the search listing needs by name; the
/// mixed-case ones are quoted exactly as the ingestion process created them.
pub(crate) const LOAD_BOOKS_SQL: &str = r#"
    SELECT
        book_title,
        book_authors,
        publisher,
        "isEbook",
        "pageCount",
        year,
        "averageRating",
        "ratingsCount",
        "amount_listPrice",
        "amount_retailPrice",
        "imageLinks",
        categories
    FROM books;
"#;

pub(crate) fn book_from_row(row: &Row) -> Result<BookRecord> {
    Ok(BookRecord {
        title: get::<Option<String>>(row, "book_title")?.unwrap_or_default(),
        authors: get::<Option<String>>(row, "book_authors")?.unwrap_or_default(),
        publisher: get(row, "publisher")?,
        is_ebook: get::<Option<bool>>(row, "isEbook")?.unwrap_or(false),
        page_count: get(row, "pageCount")?,
        year: get(row, "year")?,
        average_rating: get(row, "averageRating")?,
        ratings_count: get(row, "ratingsCount")?,
        list_price: get(row, "amount_listPrice")?,
        retail_price: get(row, "amount_retailPrice")?,
        image_link: get(row, "imageLinks")?,
        categories: get(row, "categories")?,
    })
}

fn get<'a, T: FromSql<'a>>(row: &'a Row, column: &'static str) -> Result<T> {
    row.try_get(column)
        .map_err(|source| PostgresError::InvalidBookColumn { column, source })
}
