//! An interactive calculator over arbitrary-precision non-negative integers.
//!
//! Each input line holds a single operation (`a + b`, `a - b`, `a * b`, `a / b` or `n!`)
//! and gets a single answer line. The arithmetic itself lives in [`big_digits`].

mod error;
mod parser;
mod session;

pub use crate::error::{CalcError, Result};
pub use crate::parser::{Command, Expression, Operator, Value};
pub use crate::session::{Session, SessionConfig, Summary, BANNER, UNSUPPORTED};

/// Parses and evaluates one line, the way the session answers it.
/// `Ok(None)` means the line was `exit`.
pub fn evaluate_line(line: &str) -> Result<Option<String>> {
    match Command::parse(line)? {
        Command::Exit => Ok(None),
        Command::Unsupported => Ok(Some(UNSUPPORTED.to_owned())),
        Command::Evaluate(expr) => Ok(Some(expr.evaluate()?.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use crate::evaluate_line;

    #[test]
    fn it_works() {
        let lines = ["123 + 456", "1000 - 1", "123456789 * 987654321", "100 / 3", "10!", "exit"];
        for line in lines {
            println!("{} => {:?}", line, evaluate_line(line));
        }
        assert_eq!(evaluate_line("123456789 * 987654321").unwrap().unwrap(), "121932631112635269");
        assert_eq!(evaluate_line("100 / 3").unwrap().unwrap(), "Quotient: 33, Remainder: 1");
        assert_eq!(evaluate_line("exit"), Ok(None));
        assert_eq!(
            evaluate_line("1 / 0").unwrap_err().to_string(),
            "Division by zero."
        );
    }
}
