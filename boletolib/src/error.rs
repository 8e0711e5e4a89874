//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoletoError {
    /// После удаления нецифровых символов длина не 44 и не 46/47/48.
    #[error("unrecognized code length: {len} digits")]
    UnrecognizedLength { len: usize },

    #[error("malformed numeric field {field}: {value:?}")]
    MalformedNumericField { field: &'static str, value: String },

    /// Нарушен инвариант сборки (например, не разбирается базовая дата).
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoletoError {
    /// Ошибка относится к самому коду (а не к вводу-выводу отчёта).
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            BoletoError::UnrecognizedLength { .. } | BoletoError::MalformedNumericField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BoletoError>;
