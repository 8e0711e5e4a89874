//! Трэйты чтения кодов и записи отчётов на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Inspection};
use std::io::{BufRead, Write};

pub trait ReadCodes {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>>;
}

pub trait WriteReport {
    fn write<W: Write>(w: W, report: &[Inspection]) -> Result<()>;
}
