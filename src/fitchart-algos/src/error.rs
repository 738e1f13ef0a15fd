use thiserror::Error;

#[derive(Debug, Error)]
#[error("{self:?}")]
pub enum ChartError {
    InvalidPattern(String),
}
