use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unknown set name: {name}")]
    UnknownSet { name: String },

    #[error("Unknown section name: {name}")]
    UnknownSection { name: String },
}
