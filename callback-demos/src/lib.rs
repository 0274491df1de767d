//! Callback Demos Library
//!
//! Small, independent units that each demonstrate one way of passing a
//! function to another function and invoking it.
//!
//! # Units
//!
//! - [`units::greet`]: a caller invokes a producer with a fixed name
//! - [`units::record`]: a caller invokes a closure once per record entry
//! - [`units::number`]: a caller divides a number and hands the result on
//! - [`units::welcome`]: plain delegation between two functions, no callback
//!
//! Units log through a [`Console`], so the same code prints to stdout in
//! the CLI and records into a [`Transcript`] in tests.
//!
//! # Example Usage
//!
//! ```
//! use callback_demos::{run_units, Transcript, Unit, UnitInputs};
//!
//! let mut transcript = Transcript::new();
//! run_units(&Unit::ALL, &UnitInputs::default(), &mut transcript).unwrap();
//!
//! assert_eq!(transcript.lines()[0], "Hello, Alice!");
//! assert_eq!(transcript.lines().len(), 6);
//! ```

// Public modules
pub mod config;
pub mod console;
pub mod runner;
pub mod types;
pub mod units;

// Re-export main types for convenience
pub use config::UnitInputs;
pub use console::{Console, StdoutConsole, Transcript};
pub use runner::{run_unit, run_units, transcript, Unit};
pub use types::{format_number, DemoError, Record, Result, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
