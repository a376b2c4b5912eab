use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("bitmap holds {words} words but {rows} rows need {required}")]
    BitmapTooSmall {
        rows: usize,
        words: usize,
        required: usize,
    },
    #[error("unknown comparison operator: {0}")]
    UnknownCmpOp(String),
    #[error("unknown boolean operator: {0}")]
    UnknownBoolOp(String),
    #[error("unknown signing: {0}")]
    UnknownSigning(String),
}
