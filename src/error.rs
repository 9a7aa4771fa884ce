use thiserror::Error;

pub type RangeResult<T> = Result<T, RangeError>;

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid selection index input: `{input}`")]
    InvalidIndex { input: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
