//! boletolib — разбор и проверка кодов boleto (штрихкод из 44 цифр и «цифровая строка» из 46–48 цифр)

pub mod banks;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod model;
pub mod parser;
pub mod traits;
pub mod validator;

pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod lines;
    pub mod xml;
}

pub use error::{BoletoError, Result};
pub use model::{Boleto, BoletoKind, CodeType, Inspection};
pub use parser::{barcode_to_digitable_line, boleto_kind, code_type, parse};
pub use validator::{inspect, validate};
