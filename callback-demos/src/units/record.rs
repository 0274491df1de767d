//! Record iteration with a per-entry callback

use crate::console::Console;
use crate::types::{Record, Value};
use std::io;

/// Invoke `callback(key, value)` for every entry of `record`, in insertion order
///
/// Each entry is visited exactly once. Records have no inherited entries, so
/// there is nothing to filter out.
pub fn process_object<F>(record: &Record, mut callback: F)
where
    F: FnMut(&str, &Value),
{
    for (key, value) in record.iter() {
        log::trace!("Visiting entry {:?}", key);
        callback(key, value);
    }
}

/// Driver: log each entry as `key: value`
///
/// Stops logging at the first failed write and returns that error.
pub fn run(record: &Record, console: &mut dyn Console) -> io::Result<()> {
    let mut outcome = Ok(());
    process_object(record, |key, value| {
        if outcome.is_ok() {
            outcome = console.log(&format!("{}: {}", key, value));
        }
    });
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_visits_entries_in_insertion_order() {
        let mut visited = Vec::new();
        process_object(&Record::person(), |key, value| {
            visited.push((key.to_string(), value.clone()));
        });

        assert_eq!(
            visited,
            vec![
                ("name".to_string(), Value::from("John")),
                ("age".to_string(), Value::Int(30)),
                ("city".to_string(), Value::from("New York")),
            ]
        );
    }

    #[test]
    fn test_empty_record_never_invokes_callback() {
        let mut calls = 0;
        process_object(&Record::new(), |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_run_logs_person() {
        let mut transcript = Transcript::new();
        run(&Record::person(), &mut transcript).unwrap();
        assert_eq!(
            transcript.lines(),
            ["name: John", "age: 30", "city: New York"]
        );
    }
}
