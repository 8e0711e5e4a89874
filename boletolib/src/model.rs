//! Доменные модели: разобранная квитанция и строка отчёта.

use crate::checksum::mod10_is_valid;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Откуда пришёл текст кода.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeType {
    DigitableLine,
    Barcode,
    Unknown,
}

impl CodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeType::DigitableLine => "DIGITABLE_LINE",
            CodeType::Barcode => "BARCODE",
            CodeType::Unknown => "UNKNOWN",
        }
    }
}

/// Тип квитанции по префиксу сегмента.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoletoKind {
    CreditCard,
    CityHalls,
    Sanitation,
    ElectricityAndGas,
    Telecommunications,
    GovernmentAgencies,
    PaymentBooklets,
    TrafficFines,
    Bank,
}

impl BoletoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoletoKind::CreditCard => "CREDIT_CARD",
            BoletoKind::CityHalls => "CITY_HALLS",
            BoletoKind::Sanitation => "SANITATION",
            BoletoKind::ElectricityAndGas => "ELECTRICITY_AND_GAS",
            BoletoKind::Telecommunications => "TELECOMMUNICATIONS",
            BoletoKind::GovernmentAgencies => "GOVERNMENT_AGENCIES",
            BoletoKind::PaymentBooklets => "PAYMENT_BOOKLETS",
            BoletoKind::TrafficFines => "TRAFFIC_FINES",
            BoletoKind::Bank => "BANK",
        }
    }
}

/// Разобранная квитанция. Создаётся парсером (или читается из отчёта), после создания не меняется.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boleto {
    pub(crate) issuer_bank_code: String,
    pub(crate) issuer_bank_name: String,
    pub(crate) currency: u8,
    pub(crate) issuer_reserved_1: String,
    pub(crate) check_digit_1: u8,
    pub(crate) issuer_reserved_2: String,
    pub(crate) check_digit_2: u8,
    pub(crate) issuer_reserved_3: String,
    pub(crate) check_digit_3: u8,
    pub(crate) general_check_digit: u8,
    pub(crate) due_date: NaiveDate,
    pub(crate) amount: Decimal,
    pub(crate) code_type: CodeType,
}

impl Boleto {
    pub fn issuer_bank_code(&self) -> &str {
        &self.issuer_bank_code
    }

    /// Пустая строка, если банка нет в справочнике.
    pub fn issuer_bank_name(&self) -> &str {
        &self.issuer_bank_name
    }

    pub fn currency(&self) -> u8 {
        self.currency
    }

    pub fn issuer_reserved_1(&self) -> &str {
        &self.issuer_reserved_1
    }

    pub fn check_digit_1(&self) -> u8 {
        self.check_digit_1
    }

    pub fn issuer_reserved_2(&self) -> &str {
        &self.issuer_reserved_2
    }

    pub fn check_digit_2(&self) -> u8 {
        self.check_digit_2
    }

    pub fn issuer_reserved_3(&self) -> &str {
        &self.issuer_reserved_3
    }

    pub fn check_digit_3(&self) -> u8 {
        self.check_digit_3
    }

    /// Общий контрольный разряд. Не пересчитывается, хранится как есть.
    pub fn general_check_digit(&self) -> u8 {
        self.general_check_digit
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Сумма в реалах, масштаб 2 (сентаво / 100).
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn amount_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or_default()
    }

    pub fn code_type(&self) -> CodeType {
        self.code_type
    }

    /// Все три блока проходят проверку по модулю 10.
    pub fn has_valid_blocks(&self) -> bool {
        self.blocks().iter().all(|b| mod10_is_valid(b))
    }

    /// Три блока цифровой строки с их контрольными разрядами.
    pub fn blocks(&self) -> [String; 3] {
        [
            format!(
                "{}{}{}{}",
                self.issuer_bank_code, self.currency, self.issuer_reserved_1, self.check_digit_1
            ),
            format!("{}{}", self.issuer_reserved_2, self.check_digit_2),
            format!("{}{}", self.issuer_reserved_3, self.check_digit_3),
        ]
    }
}

/// Результат проверки одного кода — строка отчёта.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inspection {
    pub input: String,
    pub digits: String,
    pub code_type: CodeType,
    pub kind: BoletoKind,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boleto: Option<Boleto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
