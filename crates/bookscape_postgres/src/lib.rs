//! Read-only Postgres access for the Bookscape catalog store.

pub mod conf;
pub mod errors;

mod books;

use bookscape_core::books::BookRecord;
use bookscape_core::result::{CellValue, QueryResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::{NoTls, Row};
use tracing::debug;

use crate::conf::ConnectionConf;
use crate::errors::{PostgresError, Result};

/// A single connection to the catalog store.
///
/// Callers open a fresh client per action and drop it when done; there is no
/// pooling. Dropping the client closes the connection and stops the spawned
/// driver task, so release happens on every exit path.
#[derive(Debug)]
pub struct PostgresClient {
    client: tokio_postgres::Client,
    conn_handle: tokio::task::JoinHandle<()>,
}

impl PostgresClient {
    pub async fn connect(conf: &ConnectionConf) -> Result<Self> {
        let (client, connection) = conf
            .pg_config()
            .connect(NoTls)
            .await
            .map_err(PostgresError::Connect)?;

        let conn_handle = tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!(%e, "postgres connection errored");
            }
        });

        Ok(PostgresClient {
            client,
            conn_handle,
        })
    }

    /// Execute a statement, eagerly fetching all rows.
    ///
    /// The statement is prepared first so column names are available from
    /// the result metadata even when no rows come back.
    pub async fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<QueryResult> {
        let stmt = self.client.prepare(sql).await?;
        let columns: Vec<String> = stmt
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        let rows = self.client.query(&stmt, params).await?;
        let mut decoded = Vec::with_capacity(rows.len());
        for row in &rows {
            decoded.push(decode_row(row)?);
        }

        Ok(QueryResult::try_new(columns, decoded)?)
    }

    /// Execute a statement that returns no rows (DDL, inserts). Returns the
    /// affected row count.
    pub async fn execute(&self, sql: &str) -> Result<u64> {
        Ok(self.client.execute(sql, &[]).await?)
    }

    /// Execute a sequence of statements separated by semicolons.
    pub async fn batch_execute(&self, sql: &str) -> Result<()> {
        Ok(self.client.batch_execute(sql).await?)
    }

    /// Snapshot the full `books` table.
    pub async fn load_books(&self) -> Result<Vec<BookRecord>> {
        let rows = self.client.query(books::LOAD_BOOKS_SQL, &[]).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(books::book_from_row(row)?);
        }
        Ok(records)
    }
}

impl Drop for PostgresClient {
    fn drop(&mut self) {
        // Close the driver task together with the client.
        self.conn_handle.abort();
    }
}

fn decode_row(row: &Row) -> Result<Vec<CellValue>> {
    let mut cells = Vec::with_capacity(row.len());
    for (idx, column) in row.columns().iter().enumerate() {
        cells.push(decode_cell(row, idx, column.type_(), column.name())?);
    }
    Ok(cells)
}

fn decode_cell(row: &Row, idx: usize, typ: &Type, name: &str) -> Result<CellValue> {
    let cell = match typ {
        &Type::BOOL => row.try_get::<_, Option<bool>>(idx)?.map(CellValue::Bool),
        &Type::INT2 => row
            .try_get::<_, Option<i16>>(idx)?
            .map(|v| CellValue::Int(v as i64)),
        &Type::INT4 => row
            .try_get::<_, Option<i32>>(idx)?
            .map(|v| CellValue::Int(v as i64)),
        &Type::INT8 => row.try_get::<_, Option<i64>>(idx)?.map(CellValue::Int),
        &Type::FLOAT4 => row
            .try_get::<_, Option<f32>>(idx)?
            .map(|v| CellValue::Float(v as f64)),
        &Type::FLOAT8 => row.try_get::<_, Option<f64>>(idx)?.map(CellValue::Float),
        // Aggregates like AVG and STDDEV come back as NUMERIC.
        &Type::NUMERIC => row
            .try_get::<_, Option<Decimal>>(idx)?
            .and_then(|v| v.to_f64())
            .map(CellValue::Float),
        &Type::CHAR | &Type::BPCHAR | &Type::VARCHAR | &Type::TEXT | &Type::NAME => {
            row.try_get::<_, Option<String>>(idx)?.map(CellValue::Text)
        }
        other => {
            return Err(PostgresError::UnsupportedPostgresType {
                column: name.to_string(),
                ty: other.to_string(),
            })
        }
    };

    Ok(cell.unwrap_or(CellValue::Null))
}
