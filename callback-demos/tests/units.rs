// Cross-unit behaviour: idempotence and order independence
use callback_demos::units::{greet, number, record};
use callback_demos::{run_units, transcript, Record, Transcript, Unit, UnitInputs, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn running_twice_gives_same_output_twice() {
    init_logging();
    let inputs = UnitInputs::default();

    let mut transcript = Transcript::new();
    run_units(&Unit::ALL, &inputs, &mut transcript).unwrap();
    run_units(&Unit::ALL, &inputs, &mut transcript).unwrap();

    let lines = transcript.lines();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[..6], lines[6..]);
}

#[test]
fn unit_output_does_not_depend_on_order() {
    init_logging();
    let inputs = UnitInputs::default();

    let mut reversed = Unit::ALL;
    reversed.reverse();

    let mut out = Transcript::new();
    run_units(&reversed, &inputs, &mut out).unwrap();

    let expected: Vec<String> = reversed
        .iter()
        .flat_map(|&unit| transcript(unit, &inputs).unwrap())
        .collect();
    assert_eq!(out.into_lines(), expected);
    assert_eq!(transcript(Unit::Welcome, &inputs).unwrap(), vec!["Welcome, Sarah!"]);
}

#[test]
fn greet_callback_runs_exactly_once() {
    let mut calls = 0;
    let mut transcript = Transcript::new();

    greet::execute_callback(
        |name| {
            calls += 1;
            greet::greet(name)
        },
        &mut transcript,
    )
    .unwrap();

    assert_eq!(calls, 1);
    assert_eq!(transcript.lines(), ["Hello, Alice!"]);
}

#[test]
fn record_callback_sees_each_entry_once_in_order() {
    let mut calls = Vec::new();
    record::process_object(&Record::person(), |key, value| {
        calls.push(format!("{}={}", key, value));
    });

    assert_eq!(calls, vec!["name=John", "age=30", "city=New York"]);
}

#[test]
fn record_with_mixed_values() {
    let mut mixed = Record::new();
    mixed.insert("active", true);
    mixed.insert("ratio", 0.75);
    mixed.insert("count", Value::Int(-3));

    let mut transcript = Transcript::new();
    record::run(&mixed, &mut transcript).unwrap();

    assert_eq!(
        transcript.lines(),
        ["active: true", "ratio: 0.75", "count: -3"]
    );
}

#[test]
fn number_callback_keeps_fraction() {
    let mut results = Vec::new();
    number::number_processor(20.0, |r| results.push(r));
    number::number_processor(21.0, |r| results.push(r));

    assert_eq!(results, vec![5.0, 5.25]);
}
