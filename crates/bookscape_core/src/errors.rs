#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("row {row_idx} has {got} values, expected {expected}")]
    RowWidthMismatch {
        row_idx: usize,
        expected: usize,
        got: usize,
    },
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
