//! The engine ties the query catalog, the catalog store, and the renderer
//! together. One engine serves one user session; every action is a blocking
//! request/response with its own connection.

use std::sync::Arc;
use std::time::Duration;

use bookscape_core::books::BookRecord;
use bookscape_core::catalog::{self, QueryDefinition};
use bookscape_core::chart::{chart_for_result, ChartSpec};
use bookscape_core::result::QueryResult;
use bookscape_core::search::search_books;
use bookscape_postgres::conf::ConnectionConf;
use bookscape_postgres::PostgresClient;
use tracing::{debug, info};

use crate::cache::SnapshotCache;
use crate::errors::{ExecError, Result};

/// A query run: the table plus the chart chosen for its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput {
    pub result: QueryResult,
    pub chart: ChartSpec,
}

pub struct Engine {
    conf: ConnectionConf,
    books: SnapshotCache<Vec<BookRecord>>,
}

impl Engine {
    /// Engine whose base snapshot is cached for the process lifetime.
    pub fn new(conf: ConnectionConf) -> Engine {
        Engine {
            conf,
            books: SnapshotCache::new(None),
        }
    }

    /// Engine whose base snapshot expires after `ttl`.
    pub fn with_ttl(conf: ConnectionConf, ttl: Duration) -> Engine {
        Engine {
            conf,
            books: SnapshotCache::new(Some(ttl)),
        }
    }

    /// The built-in analyses, in catalog order.
    pub fn queries(&self) -> &'static [QueryDefinition] {
        catalog::BUILTIN_QUERIES
    }

    /// The full `books` snapshot, served from cache when fresh.
    pub async fn load_books(&self) -> Result<Arc<Vec<BookRecord>>> {
        if let Some(records) = self.books.get() {
            debug!(count = records.len(), "serving cached books snapshot");
            return Ok(records);
        }

        let client = PostgresClient::connect(&self.conf).await?;
        let records = client.load_books().await?;
        info!(count = records.len(), "loaded books snapshot");
        Ok(self.books.store(records))
    }

    /// Drop the cached snapshot; the next load re-reads the table.
    pub fn invalidate_books(&self) {
        self.books.invalidate();
    }

    /// Keyword search over the (cached) base snapshot.
    pub async fn search(&self, keyword: &str) -> Result<Vec<BookRecord>> {
        let records = self.load_books().await?;
        let matches = search_books(keyword, &records);
        Ok(matches.into_iter().cloned().collect())
    }

    /// Run a catalog query selected by label.
    pub async fn run_query(&self, label: &str, keyword: Option<&str>) -> Result<QueryOutput> {
        let query = catalog::find_query(label)
            .ok_or_else(|| ExecError::UnknownQuery(label.to_string()))?;
        self.execute(query, keyword).await
    }

    /// Run a catalog query selected by its 1-based listing position.
    pub async fn run_query_at(
        &self,
        position: usize,
        keyword: Option<&str>,
    ) -> Result<QueryOutput> {
        let query = catalog::query_at(position)
            .ok_or_else(|| ExecError::UnknownQuery(position.to_string()))?;
        self.execute(query, keyword).await
    }

    async fn execute(
        &self,
        query: &QueryDefinition,
        keyword: Option<&str>,
    ) -> Result<QueryOutput> {
        // Resolve the keyword requirement before touching the network so a
        // refused run never opens a connection.
        let keyword = match (query.needs_keyword(), keyword) {
            (true, None) => {
                return Err(ExecError::KeywordRequired(query.label().to_string()))
            }
            (true, Some(keyword)) => Some(keyword.to_string()),
            (false, _) => None,
        };

        debug!(label = query.label(), "executing catalog query");

        // Fresh connection per execution; dropped (and the driver task with
        // it) on success and error paths alike.
        let client = PostgresClient::connect(&self.conf).await?;
        let result = match &keyword {
            Some(keyword) => client.query(query.sql(), &[keyword]).await?,
            None => client.query(query.sql(), &[]).await?,
        };

        let chart = chart_for_result(&result);
        Ok(QueryOutput { result, chart })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_conf() -> ConnectionConf {
        ConnectionConf {
            host: "localhost".to_string(),
            port: 5432,
            database: "bookscape_explorer".to_string(),
            user: "postgres".to_string(),
            password: None,
        }
    }

    #[tokio::test]
    async fn unknown_label_fails_before_connecting() {
        let engine = Engine::new(unreachable_conf());
        let err = engine.run_query("No Such Analysis", None).await.unwrap_err();
        assert!(matches!(err, ExecError::UnknownQuery(label) if label == "No Such Analysis"));
    }

    #[tokio::test]
    async fn out_of_range_position_fails_before_connecting() {
        let engine = Engine::new(unreachable_conf());
        let err = engine.run_query_at(21, None).await.unwrap_err();
        assert!(matches!(err, ExecError::UnknownQuery(_)));
    }

    #[tokio::test]
    async fn keyword_query_without_keyword_fails_before_connecting() {
        let engine = Engine::new(unreachable_conf());
        let err = engine
            .run_query("Books with a Specific Keyword in the Title", None)
            .await
            .unwrap_err();
        assert!(
            matches!(err, ExecError::KeywordRequired(label) if label == "Books with a Specific Keyword in the Title")
        );
    }
}
