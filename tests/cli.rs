use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn answers_on_stdout() -> anyhow::Result<()> {
    Command::cargo_bin("big_calc")?
        .arg("--quiet")
        .write_stdin("123 + 456\n20!\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(">> 579\n"))
        .stdout(predicate::str::contains(">> 2432902008176640000\n"))
        .stdout(predicate::str::contains("Arbitrary Precision Calculator").not());
    Ok(())
}

#[test]
fn errors_are_not_fatal() -> anyhow::Result<()> {
    Command::cargo_bin("big_calc")?
        .args(&["--prompt", ""])
        .write_stdin("5 / 0\n5 / 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Division by zero.\n"))
        .stdout(predicate::str::contains("Quotient: 2, Remainder: 1\n"));
    Ok(())
}

#[test]
fn logs_stay_off_stdout() -> anyhow::Result<()> {
    Command::cargo_bin("big_calc")?
        .args(&["-q", "-vv"])
        .env_remove("RUST_LOG")
        .write_stdin("1 - 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("expression rejected").not())
        .stderr(predicate::str::contains("expression rejected"));
    Ok(())
}
