//! JSON-отчёт: массив проверок.

use crate::{error::Result, model::Inspection};
use std::io::Write;

pub struct Json;

impl crate::traits::WriteReport for Json {
    fn write<W: Write>(mut w: W, report: &[Inspection]) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, report)?;
        writeln!(w)?;
        Ok(())
    }
}
