//! The built-in catalog of analytical queries.
//!
//! Each analysis is one (label, sql) pair record; adding a new analysis is
//! appending one entry. Labels are the stable identity the shell selects by.

/// A named, fixed SQL statement available for execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDefinition {
    label: &'static str,
    sql: &'static str,
    needs_keyword: bool,
}

impl QueryDefinition {
    const fn fixed(label: &'static str, sql: &'static str) -> Self {
        QueryDefinition {
            label,
            sql,
            needs_keyword: false,
        }
    }

    const fn with_keyword(label: &'static str, sql: &'static str) -> Self {
        QueryDefinition {
            label,
            sql,
            needs_keyword: true,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    /// Whether the statement binds a user-supplied keyword as `$1`.
    pub fn needs_keyword(&self) -> bool {
        self.needs_keyword
    }
}

/// Find a query by its label.
pub fn find_query(label: &str) -> Option<&'static QueryDefinition> {
    BUILTIN_QUERIES.iter().find(|query| query.label == label)
}

/// Find a query by its 1-based position in the catalog listing.
pub fn query_at(position: usize) -> Option<&'static QueryDefinition> {
    position.checked_sub(1).and_then(|idx| BUILTIN_QUERIES.get(idx))
}

pub const BUILTIN_QUERIES: &[QueryDefinition] = &[
    QueryDefinition::fixed(
        "Check Availability of eBooks vs Physical Books",
        r#"
        SELECT
            COUNT(CASE WHEN "isEbook" = TRUE THEN 1 END) AS ebook_availability,
            COUNT(CASE WHEN "isEbook" = FALSE THEN 1 END) AS physical_book_availability
        FROM books;
        "#,
    ),
    QueryDefinition::fixed(
        "Find the Publisher with the Most Books Published",
        r#"
        SELECT publisher, COUNT(*) AS books_published
        FROM books
        WHERE publisher IS NOT NULL AND publisher != 'nan'
        GROUP BY publisher
        ORDER BY books_published DESC
        LIMIT 1;
        "#,
    ),
    QueryDefinition::fixed(
        "Identify the Publisher with the Highest Average Rating",
        r#"
        SELECT publisher, MAX("averageRating") AS avg_rating
        FROM books
        GROUP BY publisher
        ORDER BY avg_rating ASC
        LIMIT 1;
        "#,
    ),
    QueryDefinition::fixed(
        "Get the Top 5 Most Expensive Books by Retail Price",
        r#"
        SELECT book_title, "amount_retailPrice"
        FROM books
        ORDER BY "amount_retailPrice" DESC
        LIMIT 5;
        "#,
    ),
    QueryDefinition::fixed(
        "Find Books Published After 2010 with at Least 500 Pages",
        r#"
        SELECT book_title, year, "pageCount"
        FROM books
        WHERE year > '2010' AND "pageCount" >= 500;
        "#,
    ),
    QueryDefinition::fixed(
        "List Books with Discounts Greater than 20%",
        r#"
        SELECT
            book_title,
            "amount_listPrice",
            "amount_retailPrice",
            ("amount_listPrice" - "amount_retailPrice") / "amount_listPrice" * 100 AS discount_percentage
        FROM books
        WHERE "amount_listPrice" > 0
        AND ("amount_listPrice" - "amount_retailPrice") / "amount_listPrice" > 0.2;
        "#,
    ),
    QueryDefinition::fixed(
        "Find the Average Page Count for eBooks vs Physical Books",
        r#"
        SELECT
            "isEbook",
            AVG("pageCount") AS avg_page_count
        FROM books
        GROUP BY "isEbook";
        "#,
    ),
    QueryDefinition::fixed(
        "Find the Top 3 Authors with the Most Books",
        r#"
        SELECT
            UNNEST(STRING_TO_ARRAY(book_authors, ',')) AS author,
            COUNT(*) AS book_count
        FROM books
        GROUP BY author
        ORDER BY book_count DESC
        LIMIT 4;
        "#,
    ),
    QueryDefinition::fixed(
        "List Publishers with More than 10 Books",
        r#"
        SELECT
            publisher,
            COUNT(*) AS book_count
        FROM books
        GROUP BY publisher
        HAVING COUNT(*) > 10;
        "#,
    ),
    QueryDefinition::fixed(
        "Find the Average Page Count for Each Category",
        r#"
        SELECT
            categories,
            AVG("pageCount") AS avg_page_count
        FROM books
        GROUP BY categories;
        "#,
    ),
    QueryDefinition::fixed(
        "Retrieve Books with More than 3 Authors",
        r#"
        SELECT
            book_title,
            book_authors
        FROM books
        WHERE ARRAY_LENGTH(STRING_TO_ARRAY(book_authors, ','), 1) > 3;
        "#,
    ),
    QueryDefinition::fixed(
        "Books with Ratings Count Greater Than the Average",
        r#"
        SELECT
            book_title,
            "ratingsCount"
        FROM books
        WHERE "ratingsCount" > (SELECT AVG("ratingsCount") FROM books);
        "#,
    ),
    QueryDefinition::fixed(
        "Books with the Same Author Published in the Same Year",
        r#"
        SELECT
            book_authors,
            year,
            COUNT(*) AS book_count
        FROM books
        GROUP BY book_authors, year
        HAVING COUNT(*) > 1;
        "#,
    ),
    // The keyword binds as `$1`; running this without one is refused
    // upstream.
    QueryDefinition::with_keyword(
        "Books with a Specific Keyword in the Title",
        r#"
        SELECT
            book_title
        FROM books
        WHERE book_title ILIKE '%' || $1 || '%';
        "#,
    ),
    QueryDefinition::fixed(
        "Year with the Highest Average Book Price",
        r#"
        SELECT
            year,
            AVG("amount_retailPrice") AS avg_price
        FROM books
        GROUP BY year
        ORDER BY avg_price ASC
        LIMIT ALL;
        "#,
    ),
    QueryDefinition::fixed(
        "Count Authors Who Published 3 Consecutive Years",
        r#"
        WITH consecutive_years AS (
            SELECT
                book_authors,
                ROUND(CAST(year AS NUMERIC)) AS year_int,
                LEAD(ROUND(CAST(year AS NUMERIC)), 1) OVER (PARTITION BY book_authors ORDER BY ROUND(CAST(year AS NUMERIC))) AS next_year,
                LEAD(ROUND(CAST(year AS NUMERIC)), 2) OVER (PARTITION BY book_authors ORDER BY ROUND(CAST(year AS NUMERIC))) AS third_year
            FROM books
        )
        SELECT
            book_authors
        FROM consecutive_years
        WHERE next_year = year_int + 1
        AND third_year = year_int + 2
        GROUP BY book_authors;
        "#,
    ),
    QueryDefinition::fixed(
        "Write a SQL query to find authors who have published books in the same year but under different publishers. Return the authors, year, and the COUNT of books they published in that year.",
        r#"
        SELECT
            book_authors,
            year,
            COUNT(DISTINCT publisher) AS publisher_count
        FROM books
        GROUP BY book_authors, year
        HAVING COUNT(DISTINCT publisher) > 1;
        "#,
    ),
    QueryDefinition::fixed(
        "Create a query to find the average amount_retailPrice of eBooks and physical books. Return a single result set with columns for avg_ebook_price and avg_physical_price. Ensure to handle cases where either category may have no entries.",
        r#"
        SELECT
            AVG(CASE WHEN "isEbook" THEN "amount_retailPrice" END) AS avg_ebook_price,
            AVG(CASE WHEN NOT "isEbook" THEN "amount_retailPrice" END) AS avg_physical_price
        FROM books;
        "#,
    ),
    QueryDefinition::fixed(
        "Write a SQL query to identify books that have an averageRating that is more than two standard deviations away from the average rating of all books. Return the title, averageRating, and ratingsCount for these outliers.",
        r#"
        WITH stats AS (
            SELECT
                AVG("averageRating") AS avg_rating,
                STDDEV("averageRating") AS stddev_rating
            FROM books
        )
        SELECT
            book_title,
            "averageRating",
            "ratingsCount"
        FROM books, stats
        WHERE "averageRating" > avg_rating + 2 * stddev_rating
        OR "averageRating" < avg_rating - 2 * stddev_rating;
        "#,
    ),
    QueryDefinition::fixed(
        "Create a SQL query that determines which publisher has the highest average rating among its books, but only for publishers that have published more than 10 books. Return the publisher, average_rating, and the number of books published.",
        r#"
        SELECT
            publisher,
            AVG("averageRating") AS avg_rating,
            COUNT(*) AS book_count
        FROM books
        GROUP BY publisher
        HAVING COUNT(*) > 10
        ORDER BY avg_rating DESC
        LIMIT 1;
        "#,
    ),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_twenty_queries() {
        assert_eq!(BUILTIN_QUERIES.len(), 20);
    }

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<_> = BUILTIN_QUERIES.iter().map(|q| q.label()).collect();
        assert_eq!(labels.len(), BUILTIN_QUERIES.len());
    }

    #[test]
    fn find_query_by_label() {
        let query = find_query("Find the Publisher with the Most Books Published").unwrap();
        assert!(query.sql().contains("GROUP BY publisher"));
        assert!(find_query("No Such Analysis").is_none());
    }

    #[test]
    fn query_at_is_one_based() {
        assert_eq!(
            query_at(1).unwrap().label(),
            "Check Availability of eBooks vs Physical Books"
        );
        assert_eq!(
            query_at(20).unwrap().label(),
            BUILTIN_QUERIES[19].label()
        );
        assert!(query_at(0).is_none());
        assert!(query_at(21).is_none());
    }

    #[test]
    fn only_the_title_keyword_query_needs_a_keyword() {
        let keyword_queries: Vec<_> = BUILTIN_QUERIES
            .iter()
            .filter(|q| q.needs_keyword())
            .collect();
        assert_eq!(keyword_queries.len(), 1);
        assert_eq!(
            keyword_queries[0].label(),
            "Books with a Specific Keyword in the Title"
        );
        assert!(keyword_queries[0].sql().contains("$1"));
    }

    #[test]
    fn fixed_statements_carry_no_bind_parameters() {
        for query in BUILTIN_QUERIES {
            if query.needs_keyword() {
                continue;
            }
            assert!(
                !query.sql().contains('$'),
                "{} is marked fixed but binds a parameter",
                query.label()
            );
        }
    }
}
