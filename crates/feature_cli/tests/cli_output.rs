use std::process::{Command, Output};

fn run_cli() -> Output {
    Command::new(env!("CARGO_BIN_EXE_feature_cli"))
        .output()
        .expect("cli binary should run")
}

#[test]
fn cli_prints_only_the_status_line() {
    let output = run_cli();

    assert!(output.status.success());
    assert_eq!(output.stdout, b"Processing v4 with optimization\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn repeated_runs_print_identical_output() {
    let first = run_cli();
    let second = run_cli();

    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(second.stdout, b"Processing v4 with optimization\n");
}
