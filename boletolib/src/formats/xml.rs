//! Упрощённый XML-отчёт: <Report><Inspection>...</Inspection></Report>

use crate::{
    error::{BoletoError, Result},
    model::Inspection,
};
use quick_xml::se::to_string;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize, Debug)]
struct XmlBoleto<'a> {
    bank_code: &'a str,
    bank_name: &'a str,
    currency: u8,
    reserved_1: &'a str,
    check_digit_1: u8,
    reserved_2: &'a str,
    check_digit_2: u8,
    reserved_3: &'a str,
    check_digit_3: u8,
    general_check_digit: u8,
    due_date: String,
    amount: String,
}

#[derive(Serialize, Debug)]
struct XmlInspection<'a> {
    input: &'a str,
    digits: &'a str,
    code_type: &'static str,
    kind: &'static str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    boleto: Option<XmlBoleto<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Serialize, Debug)]
#[serde(rename = "Report")]
struct XmlReport<'a> {
    #[serde(rename = "Inspection")]
    inspections: Vec<XmlInspection<'a>>,
}

pub struct SimpleXml;

impl crate::traits::WriteReport for SimpleXml {
    fn write<W: Write>(mut w: W, report: &[Inspection]) -> Result<()> {
        let inspections = report
            .iter()
            .map(|i| XmlInspection {
                input: &i.input,
                digits: &i.digits,
                code_type: i.code_type.as_str(),
                kind: i.kind.as_str(),
                valid: i.valid,
                boleto: i.boleto.as_ref().map(|b| XmlBoleto {
                    bank_code: b.issuer_bank_code(),
                    bank_name: b.issuer_bank_name(),
                    currency: b.currency(),
                    reserved_1: b.issuer_reserved_1(),
                    check_digit_1: b.check_digit_1(),
                    reserved_2: b.issuer_reserved_2(),
                    check_digit_2: b.check_digit_2(),
                    reserved_3: b.issuer_reserved_3(),
                    check_digit_3: b.check_digit_3(),
                    general_check_digit: b.general_check_digit(),
                    due_date: b.due_date().format("%Y-%m-%d").to_string(),
                    amount: b.amount().to_string(),
                }),
                error: i.error.as_deref(),
            })
            .collect();

        let s = to_string(&XmlReport { inspections }).map_err(|e| BoletoError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
