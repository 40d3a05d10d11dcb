#[derive(Debug, thiserror::Error)]
pub enum PostgresError {
    #[error("Failed to connect to Postgres instance: {0}")]
    Connect(#[source] tokio_postgres::Error),

    #[error("Unsupported Postgres type for column '{column}': {ty}")]
    UnsupportedPostgresType { column: String, ty: String },

    #[error("Missing or ill-typed column '{column}' in books row: {source}")]
    InvalidBookColumn {
        column: &'static str,
        source: tokio_postgres::Error,
    },

    #[error(transparent)]
    TokioPostgres(#[from] tokio_postgres::Error),

    #[error(transparent)]
    Core(#[from] bookscape_core::errors::CoreError),
}

pub type Result<T, E = PostgresError> = std::result::Result<T, E>;
