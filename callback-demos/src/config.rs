//! Inputs fed to the demo units
//!
//! Only the record and the number are configurable. The greeting argument
//! and the welcomed user are fixed inside their units.

use crate::types::Record;
use serde::{Deserialize, Serialize};

/// Number fed to the numeric unit when nothing else is configured
pub const DEFAULT_NUMBER: f64 = 20.0;

/// Inputs for a run of the demo units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInputs {
    /// Record walked by the record unit
    #[serde(default = "Record::person")]
    pub record: Record,

    /// Number divided by the numeric unit
    #[serde(default = "default_number")]
    pub number: f64,
}

fn default_number() -> f64 {
    DEFAULT_NUMBER
}

impl Default for UnitInputs {
    fn default() -> Self {
        Self {
            record: Record::person(),
            number: DEFAULT_NUMBER,
        }
    }
}

impl UnitInputs {
    /// Create inputs with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: replace the record
    pub fn with_record(mut self, record: Record) -> Self {
        self.record = record;
        self
    }

    /// Builder method: replace the number
    pub fn with_number(mut self, number: f64) -> Self {
        self.number = number;
        self
    }
}
