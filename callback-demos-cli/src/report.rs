//! Report rendering
//!
//! Text reports print each logged line as-is; JSON reports group the lines
//! by the unit that produced them.

use crate::config::OutputFormat;
use anyhow::Result;
use callback_demos::Unit;
use serde::Serialize;
use std::io::Write;

/// Lines logged by one unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitReport {
    pub unit: Unit,
    pub lines: Vec<String>,
}

/// Write reports in the requested format
pub fn write_reports<W: Write>(out: &mut W, reports: &[UnitReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in reports.iter().flat_map(|r| &r.lines) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<UnitReport> {
        vec![
            UnitReport {
                unit: Unit::Greet,
                lines: vec!["Hello, Alice!".to_string()],
            },
            UnitReport {
                unit: Unit::Number,
                lines: vec!["Result: 5".to_string()],
            },
        ]
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_reports(&mut out, &sample(), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Alice!\nResult: 5\n");
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_reports(&mut out, &sample(), OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["unit"], "greet");
        assert_eq!(parsed[0]["lines"][0], "Hello, Alice!");
        assert_eq!(parsed[1]["unit"], "number");
    }
}
