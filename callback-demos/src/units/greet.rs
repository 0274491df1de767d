//! Direct callback invocation
//!
//! A caller receives a function and invokes it with a fixed argument,
//! logging whatever the function returns.

use crate::console::Console;
use std::io;

/// Argument the caller always passes to its callback
pub const CALLBACK_ARGUMENT: &str = "Alice";

/// Producer: build a greeting for `name`
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Invoke `callback` once with [`CALLBACK_ARGUMENT`] and log its return value
pub fn execute_callback<F>(callback: F, console: &mut dyn Console) -> io::Result<()>
where
    F: FnOnce(&str) -> String,
{
    log::trace!("Invoking callback with {:?}", CALLBACK_ARGUMENT);
    let result = callback(CALLBACK_ARGUMENT);
    console.log(&result)
}

/// Driver: pass [`greet`] as the callback
pub fn run(console: &mut dyn Console) -> io::Result<()> {
    execute_callback(greet, console)
}
