use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported {contract} schema version: {version}")]
    UnsupportedSchema {
        contract: &'static str,
        version: u32,
    },
}
