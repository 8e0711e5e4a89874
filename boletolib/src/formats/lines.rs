//! Простой текст: один код на строку, `#` — комментарий.

use crate::error::Result;
use std::io::BufRead;

pub struct Lines;

impl crate::traits::ReadCodes for Lines {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>> {
        let mut codes = Vec::new();
        for line in r.lines() {
            let line = line?;
            let code = line.trim();
            if code.is_empty() || code.starts_with('#') {
                continue;
            }
            codes.push(code.to_string());
        }
        Ok(codes)
    }
}
