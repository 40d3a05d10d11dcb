#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("unknown query: {0}")]
    UnknownQuery(String),

    #[error("query '{0}' requires a keyword before it can be executed")]
    KeywordRequired(String),

    #[error(transparent)]
    Postgres(#[from] bookscape_postgres::errors::PostgresError),
}

pub type Result<T, E = ExecError> = std::result::Result<T, E>;
