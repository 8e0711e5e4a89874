//! Разбор цифровой строки и штрихкода в [`Boleto`].
//!
//! Штрихкод (44 цифры) сначала переводится в цифровую строку (47 цифр),
//! дальше оба вида режутся по одним и тем же смещениям.

use crate::{
    banks::bank_name,
    checksum::verification_digit,
    codec::{digits_only, substr},
    error::{BoletoError, Result},
    model::{Boleto, BoletoKind, CodeType},
};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// Базовая дата: фактор срока 0 соответствует ей самой.
pub const BASE_DATE: &str = "1997-10-07";
const BASE_DATE_FORMAT: &str = "%Y-%m-%d";

pub const BARCODE_LEN: usize = 44;
pub const DIGITABLE_LINE_LENS: [usize; 3] = [46, 47, 48];

/// Тип кода по количеству цифр. Контрольные разряды не проверяются.
pub fn code_type(code: &str) -> Result<CodeType> {
    let len = digits_only(code).len();
    match len {
        BARCODE_LEN => Ok(CodeType::Barcode),
        46..=48 => Ok(CodeType::DigitableLine),
        _ => Err(BoletoError::UnrecognizedLength { len }),
    }
}

/// Штрихкод → цифровая строка из 47 цифр.
///
/// В штрихкоде три поля банка идут подряд (позиции 19..44), а банк, валюта,
/// общий разряд, фактор срока и сумма — в начале. В цифровой строке поля
/// банка разбиты на три блока, каждый со своим контрольным разрядом.
pub fn barcode_to_digitable_line(barcode: &str) -> String {
    let block1 = format!("{}{}", substr(barcode, 0, 4), substr(barcode, 19, 5));
    let cd1 = verification_digit(&block1);

    let block2 = substr(barcode, 24, 10);
    let cd2 = verification_digit(&block2);

    let block3 = substr(barcode, 34, 10);
    let cd3 = verification_digit(&block3);

    trace!(%cd1, %cd2, %cd3, "block check digits");

    let mut line = String::with_capacity(47);
    line.push_str(&block1);
    line.push_str(&cd1);
    line.push_str(&block2);
    line.push_str(&cd2);
    line.push_str(&block3);
    line.push_str(&cd3);
    line.push_str(&substr(barcode, 4, 1));
    line.push_str(&substr(barcode, 5, 14));
    line
}

/// Разбирает цифровую строку или штрихкод. Форматирование (точки, пробелы) допускается.
pub fn parse(code: &str) -> Result<Boleto> {
    let mut line = digits_only(code);
    let code_type = code_type(&line)?;
    debug!(?code_type, digits = line.len(), "classified code");

    if code_type == CodeType::Barcode {
        line = barcode_to_digitable_line(&line);
        debug!(%line, "converted barcode to digitable line");
    }

    parse_digitable_line(&line, code_type)
}

fn parse_digitable_line(line: &str, code_type: CodeType) -> Result<Boleto> {
    let issuer_bank_code = substr(line, 0, 3);
    let issuer_bank_name = bank_name(&issuer_bank_code).to_string();

    Ok(Boleto {
        issuer_bank_name,
        currency: single_digit(line, 3),
        issuer_reserved_1: substr(line, 4, 5),
        check_digit_1: single_digit(line, 9),
        issuer_reserved_2: substr(line, 10, 10),
        check_digit_2: single_digit(line, 20),
        issuer_reserved_3: substr(line, 21, 10),
        check_digit_3: single_digit(line, 31),
        general_check_digit: single_digit(line, 32),
        due_date: due_date(&substr(line, 33, 4))?,
        amount: amount(&substr(line, 37, 10))?,
        issuer_bank_code,
        code_type,
    })
}

// Пустое или нецифровое значение читается как 0.
fn single_digit(line: &str, pos: usize) -> u8 {
    substr(line, pos, 1).parse().unwrap_or(0)
}

fn base_date() -> Result<NaiveDate> {
    NaiveDate::parse_from_str(BASE_DATE, BASE_DATE_FORMAT)
        .map_err(|e| BoletoError::Configuration(format!("base date {BASE_DATE:?}: {e}")))
}

fn due_date(factor: &str) -> Result<NaiveDate> {
    let days: u64 = factor.parse().map_err(|_| BoletoError::MalformedNumericField {
        field: "due_date",
        value: factor.to_string(),
    })?;
    base_date()?
        .checked_add_days(Days::new(days))
        .ok_or_else(|| BoletoError::MalformedNumericField {
            field: "due_date",
            value: factor.to_string(),
        })
}

fn amount(cents: &str) -> Result<Decimal> {
    let value: i64 = cents.parse().map_err(|_| BoletoError::MalformedNumericField {
        field: "amount",
        value: cents.to_string(),
    })?;
    Ok(Decimal::new(value, 2))
}

/// Тип квитанции по сегменту.
///
/// Нули в поле фактора срока и суммы — карточный счёт;
/// коды, начинающиеся с `8`, — квитанции сборов, сегмент во второй цифре;
/// всё остальное — банковская квитанция.
pub fn boleto_kind(code: &str) -> BoletoKind {
    let digits = digits_only(code);
    let len = digits.len();

    // фактор срока + сумма: в штрихкоде на позициях 5..19, в цифровой строке в конце
    let factor_and_amount = match len {
        BARCODE_LEN => substr(&digits, 5, 14),
        46..=48 => substr(&digits, len - 14, 14),
        _ => String::new(),
    };
    if all_zeros_14(&factor_and_amount) {
        return BoletoKind::CreditCard;
    }

    let mut chars = digits.chars();
    if chars.next() != Some('8') {
        return BoletoKind::Bank;
    }
    match chars.next() {
        Some('1') => BoletoKind::CityHalls,
        Some('2') => BoletoKind::Sanitation,
        Some('3') => BoletoKind::ElectricityAndGas,
        Some('4') => BoletoKind::Telecommunications,
        Some('5') => BoletoKind::GovernmentAgencies,
        Some('6') | Some('9') => BoletoKind::PaymentBooklets,
        Some('7') => BoletoKind::TrafficFines,
        _ => BoletoKind::Bank,
    }
}

fn all_zeros_14(s: &str) -> bool {
    s.len() == 14 && s.bytes().all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn base_date_parses() {
        assert_eq!(base_date().expect("base date"), date(1997, 10, 7));
    }

    #[test]
    fn classify_by_length() {
        assert_eq!(code_type(&"1".repeat(44)).unwrap(), CodeType::Barcode);
        for n in DIGITABLE_LINE_LENS {
            assert_eq!(code_type(&"1".repeat(n)).unwrap(), CodeType::DigitableLine);
        }
        assert!(matches!(
            code_type(&"1".repeat(45)),
            Err(BoletoError::UnrecognizedLength { len: 45 })
        ));
        assert!(matches!(code_type(""), Err(BoletoError::UnrecognizedLength { len: 0 })));
    }

    #[test]
    fn classify_ignores_formatting() {
        let line = "34191.75124 34567.871230 41234.560005 8 92850000026035";
        assert_eq!(code_type(line).unwrap(), CodeType::DigitableLine);
    }

    #[test]
    fn barcode_conversion_layout() {
        let line = barcode_to_digitable_line("34191990600000005001092664672997197273480000");
        assert_eq!(line, "34191092636467299719072734800005199060000000500");
        assert_eq!(line.len(), 47);
    }

    #[test]
    fn embedded_check_digits_match_blocks() {
        let bc = "74898992100000845361121577703702280000282105";
        let line = barcode_to_digitable_line(bc);
        assert_eq!(substr(&line, 9, 1), verification_digit(&substr(&line, 0, 9)));
        assert_eq!(substr(&line, 20, 1), verification_digit(&substr(&line, 10, 10)));
        assert_eq!(substr(&line, 31, 1), verification_digit(&substr(&line, 21, 10)));
    }

    #[test]
    fn short_barcode_does_not_panic() {
        let line = barcode_to_digitable_line("3419");
        assert!(line.starts_with("3419"));
    }

    #[test]
    fn due_date_offsets() {
        assert_eq!(due_date("0000").unwrap(), date(1997, 10, 7));
        assert_eq!(due_date("1000").unwrap(), date(2000, 7, 3));
        assert_eq!(due_date("9285").unwrap(), date(2023, 3, 10));
        assert!(matches!(
            due_date(""),
            Err(BoletoError::MalformedNumericField { field: "due_date", .. })
        ));
    }

    #[test]
    fn amount_is_hundredths() {
        assert_eq!(amount("0000026035").unwrap(), Decimal::from_str("260.35").unwrap());
        assert_eq!(amount("0000000000").unwrap(), Decimal::ZERO);
        assert!(matches!(
            amount(""),
            Err(BoletoError::MalformedNumericField { field: "amount", .. })
        ));
    }

    #[test]
    fn kinds_by_segment() {
        let cases = [
            ("826700000035 645607980002 010002351038 822024116714", BoletoKind::Sanitation),
            ("836800000033 380600863225 535337514090 100168807509", BoletoKind::ElectricityAndGas),
            ("85860000000 4 83740385242 0 43070124241 5 85141630306 0", BoletoKind::GovernmentAgencies),
            ("856500000026 056505152027 411292024030 335182000000", BoletoKind::GovernmentAgencies),
            ("846800000008 550000791008 011193989719 924101544345", BoletoKind::Telecommunications),
            ("73990.00004 00001.223320 90126.130344400000000000000", BoletoKind::CreditCard),
            ("34191.75124 34567.871230 41234.560005 8 92850000026035", BoletoKind::Bank),
        ];
        for (code, want) in cases {
            assert_eq!(boleto_kind(code), want, "{code}");
        }
    }

    #[test]
    fn zero_reserved_fields_are_not_credit_card() {
        // цифровая строка: нули на 5..19 относятся к полям банка
        assert_eq!(
            boleto_kind("34191000000000000000041234560005892850000026035"),
            BoletoKind::Bank
        );
        // штрихкод: нулевой хвост относится к полям банка
        assert_eq!(
            boleto_kind("34191990600000005001092600000000000000000000"),
            BoletoKind::Bank
        );
        assert_eq!(
            boleto_kind("73994000000000000000000000001223329012613034"),
            BoletoKind::CreditCard
        );
    }

    #[test]
    fn kind_of_short_input_is_bank() {
        assert_eq!(boleto_kind(""), BoletoKind::Bank);
        assert_eq!(boleto_kind("000"), BoletoKind::Bank);
    }
}
