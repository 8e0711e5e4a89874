//! Проверка целостности кода по контрольным разрядам блоков.

use crate::{
    codec::digits_only,
    model::{CodeType, Inspection},
    parser::{boleto_kind, code_type, parse},
};

/// `true`, если код разбирается и все три блока проходят проверку по модулю 10.
///
/// Ошибка разбора означает «невалиден» и наружу не пробрасывается.
/// Общий контрольный разряд не проверяется.
pub fn validate(code: &str) -> bool {
    match parse(code) {
        Ok(boleto) => boleto.has_valid_blocks(),
        Err(_) => false,
    }
}

/// Полная проверка одного кода для отчёта. Никогда не завершается ошибкой.
pub fn inspect(code: &str) -> Inspection {
    let digits = digits_only(code);
    let kind = boleto_kind(&digits);

    match parse(&digits) {
        Ok(boleto) => {
            let valid = boleto.has_valid_blocks();
            Inspection {
                input: code.to_string(),
                digits,
                code_type: boleto.code_type(),
                kind,
                valid,
                boleto: Some(boleto),
                error: None,
            }
        }
        Err(e) => Inspection {
            input: code.to_string(),
            code_type: code_type(&digits).unwrap_or(CodeType::Unknown),
            digits,
            kind,
            valid: false,
            boleto: None,
            error: Some(e.to_string()),
        },
    }
}
