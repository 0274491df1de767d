//! Numeric transform with a callback

use crate::console::Console;
use crate::types::format_number;
use std::io;

/// Fixed divisor applied before the callback runs
pub const DIVISOR: f64 = 4.0;

/// Divide `number` by [`DIVISOR`] and hand the quotient to `callback`
///
/// Plain floating-point division: `21.0` yields `5.25`, not `5`.
pub fn number_processor<F>(number: f64, callback: F)
where
    F: FnOnce(f64),
{
    let result = number / DIVISOR;
    log::trace!("{} / {} = {}", number, DIVISOR, result);
    callback(result);
}

/// Driver: log the quotient as `Result: <n>`
pub fn run(number: f64, console: &mut dyn Console) -> io::Result<()> {
    let mut outcome = Ok(());
    number_processor(number, |result| {
        outcome = console.log(&format!("Result: {}", format_number(result)));
    });
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    fn collect(number: f64) -> Vec<f64> {
        let mut results = Vec::new();
        number_processor(number, |result| results.push(result));
        results
    }

    #[test]
    fn test_whole_quotient() {
        assert_eq!(collect(20.0), vec![5.0]);
    }

    #[test]
    fn test_fraction_is_preserved() {
        assert_eq!(collect(21.0), vec![5.25]);
        assert_eq!(collect(-2.0), vec![-0.5]);
    }

    #[test]
    fn test_run_formats_result() {
        let mut transcript = Transcript::new();
        run(20.0, &mut transcript).unwrap();
        run(21.0, &mut transcript).unwrap();
        run(4e21, &mut transcript).unwrap();
        run(1e-6, &mut transcript).unwrap();
        assert_eq!(
            transcript.lines(),
            ["Result: 5", "Result: 5.25", "Result: 1e+21", "Result: 2.5e-7"]
        );
    }
}
