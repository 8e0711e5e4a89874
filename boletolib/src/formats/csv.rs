//! CSV: на входе — колонка `code` (остальные колонки игнорируются), на выходе — плоский отчёт:
//! input,digits,code_type,kind,valid,bank_code,bank_name,currency,reserved_1,check_digit_1,reserved_2,check_digit_2,reserved_3,check_digit_3,general_check_digit,due_date,amount,error

use crate::{
    error::Result,
    model::{BoletoKind, CodeType, Inspection},
};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    code: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    input: &'a str,
    digits: &'a str,
    code_type: CodeType,
    kind: BoletoKind,
    valid: bool,

    bank_code: Option<&'a str>,
    bank_name: Option<&'a str>,
    currency: Option<u8>,
    reserved_1: Option<&'a str>,
    check_digit_1: Option<u8>,
    reserved_2: Option<&'a str>,
    check_digit_2: Option<u8>,
    reserved_3: Option<&'a str>,
    check_digit_3: Option<u8>,
    general_check_digit: Option<u8>,
    due_date: Option<String>,
    amount: Option<String>,

    error: Option<&'a str>,
}

pub struct Csv;

impl crate::traits::ReadCodes for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>> {
        let mut rdr = ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(r);
        let mut codes = Vec::new();
        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            if !row.code.is_empty() {
                codes.push(row.code);
            }
        }
        Ok(codes)
    }
}

impl crate::traits::WriteReport for Csv {
    fn write<W: Write>(mut w: W, report: &[Inspection]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for i in report {
            let b = i.boleto.as_ref();
            let out = CsvOutRow {
                input: &i.input,
                digits: &i.digits,
                code_type: i.code_type,
                kind: i.kind,
                valid: i.valid,
                bank_code: b.map(|b| b.issuer_bank_code()),
                bank_name: b.map(|b| b.issuer_bank_name()),
                currency: b.map(|b| b.currency()),
                reserved_1: b.map(|b| b.issuer_reserved_1()),
                check_digit_1: b.map(|b| b.check_digit_1()),
                reserved_2: b.map(|b| b.issuer_reserved_2()),
                check_digit_2: b.map(|b| b.check_digit_2()),
                reserved_3: b.map(|b| b.issuer_reserved_3()),
                check_digit_3: b.map(|b| b.check_digit_3()),
                general_check_digit: b.map(|b| b.general_check_digit()),
                due_date: b.map(|b| b.due_date().format("%Y-%m-%d").to_string()),
                amount: b.map(|b| b.amount().to_string()),
                error: i.error.as_deref(),
            };
            wrt.serialize(out)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
