//! Unit selection and execution

use crate::config::UnitInputs;
use crate::console::{Console, Transcript};
use crate::types::{DemoError, Result};
use crate::units::{greet, number, record, welcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the independent demo units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Callback invoked with a fixed name
    Greet,
    /// Callback invoked per record entry
    Record,
    /// Callback invoked with a divided number
    Number,
    /// Plain delegation, no callback
    Welcome,
}

impl Unit {
    /// All units, in canonical order
    pub const ALL: [Unit; 4] = [Unit::Greet, Unit::Record, Unit::Number, Unit::Welcome];

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Greet => "greet",
            Unit::Record => "record",
            Unit::Number => "number",
            Unit::Welcome => "welcome",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DemoError::UnknownUnit(s.to_string()))
    }
}

/// Run a single unit's driver
pub fn run_unit(unit: Unit, inputs: &UnitInputs, console: &mut dyn Console) -> Result<()> {
    log::debug!("Running unit: {}", unit);

    match unit {
        Unit::Greet => greet::run(console)?,
        Unit::Record => record::run(&inputs.record, console)?,
        Unit::Number => number::run(inputs.number, console)?,
        Unit::Welcome => welcome::get_user(console)?,
    }
    Ok(())
}

/// Run units one after another, in the order given
///
/// Stops at the first unit whose output cannot be written.
pub fn run_units(units: &[Unit], inputs: &UnitInputs, console: &mut dyn Console) -> Result<()> {
    for &unit in units {
        run_unit(unit, inputs, console)?;
    }
    Ok(())
}

/// Run a unit into a fresh transcript and return its lines
pub fn transcript(unit: Unit, inputs: &UnitInputs) -> Result<Vec<String>> {
    let mut transcript = Transcript::new();
    run_unit(unit, inputs, &mut transcript)?;
    Ok(transcript.into_lines())
}
