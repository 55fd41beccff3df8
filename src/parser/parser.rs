use big_digits::BigUint;
use tracing::debug;

use super::ast::{Expression, Operator};
use crate::error::{CalcError, Result};

/// What one input line asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Evaluate(Expression),
    /// No operator in the line at all.
    Unsupported,
}

impl Command {
    /// Classifies a line by the first operator found in [`Operator::PRIORITY`] order.
    ///
    /// For a factorial every `!` is dropped and the rest is the operand. Any other
    /// operator has to split the line into exactly two operands. Operands are trimmed
    /// before they are parsed, so blanks around operators are fine but blanks inside
    /// a number are not.
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();

        if line.eq_ignore_ascii_case("exit") {
            return Ok(Command::Exit);
        }

        let op = match Operator::PRIORITY.iter().copied().find(|op| line.contains(op.symbol())) {
            Some(op) => op,
            None => return Ok(Command::Unsupported),
        };

        let expr = match op {
            Operator::Fac => Expression::Factorial(operand(&line.replace(op.symbol(), ""))?),
            Operator::Add => {
                let (x, y) = operands(line, op)?;
                Expression::Add(x, y)
            },
            Operator::Sub => {
                let (x, y) = operands(line, op)?;
                Expression::Sub(x, y)
            },
            Operator::Mul => {
                let (x, y) = operands(line, op)?;
                Expression::Mul(x, y)
            },
            Operator::Div => {
                let (x, y) = operands(line, op)?;
                Expression::Div(x, y)
            },
        };
        debug!(operator = %op.symbol(), "parsed expression");

        Ok(Command::Evaluate(expr))
    }
}

fn operand(text: &str) -> Result<BigUint> {
    Ok(BigUint::parse(text.trim())?)
}

fn operands(line: &str, op: Operator) -> Result<(BigUint, BigUint)> {
    let parts: Vec<&str> = line.split(op.symbol()).collect();
    match parts.as_slice() {
        [x, y] => Ok((operand(x)?, operand(y)?)),
        _ => Err(CalcError::MalformedExpression { operator: op.symbol(), found: parts.len() }),
    }
}

#[cfg(test)]
mod test {
    use big_digits::{BigUint, Error};

    use super::Command;
    use crate::error::CalcError;
    use crate::parser::ast::Expression;

    fn num(s: &str) -> BigUint {
        s.parse().unwrap()
    }

    #[test]
    fn test_exit() {
        for line in ["exit", "EXIT", "  Exit \n"] {
            assert_eq!(Command::parse(line), Ok(Command::Exit));
        }
        assert_eq!(Command::parse("exit!"), Err(CalcError::Arithmetic(Error::InvalidFormat)));
    }

    #[test]
    fn test_factorial() {
        let five = Ok(Command::Evaluate(Expression::Factorial(num("5"))));
        assert_eq!(Command::parse("5!"), five);
        assert_eq!(Command::parse(" 5 ! "), five);
        assert_eq!(Command::parse("!5"), five);
        assert_eq!(Command::parse("5!!"), five);
        // `!` is looked for first, so the `+` stays inside the operand
        assert_eq!(Command::parse("3 + 4!"), Err(CalcError::Arithmetic(Error::InvalidFormat)));
    }

    #[test]
    fn test_binary() {
        assert_eq!(
            Command::parse("123 + 456"),
            Ok(Command::Evaluate(Expression::Add(num("123"), num("456"))))
        );
        assert_eq!(
            Command::parse("10-3"),
            Ok(Command::Evaluate(Expression::Sub(num("10"), num("3"))))
        );
        assert_eq!(
            Command::parse("007 * 6"),
            Ok(Command::Evaluate(Expression::Mul(num("7"), num("6"))))
        );
        assert_eq!(
            Command::parse("100 / 3"),
            Ok(Command::Evaluate(Expression::Div(num("100"), num("3"))))
        );
        // `+` outranks `*`
        assert_eq!(Command::parse("2 * 3 + 4"), Err(CalcError::Arithmetic(Error::InvalidFormat)));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            Command::parse("1 + 2 + 3"),
            Err(CalcError::MalformedExpression { operator: '+', found: 3 })
        );
        assert_eq!(Command::parse("-5"), Err(CalcError::Arithmetic(Error::InvalidFormat)));
        assert_eq!(Command::parse("1 2 + 3"), Err(CalcError::Arithmetic(Error::InvalidFormat)));
        assert_eq!(Command::parse("1e5 + 2"), Err(CalcError::Arithmetic(Error::InvalidFormat)));
    }

    #[test]
    fn test_unsupported() {
        for line in ["", "   ", "hello", "2 ^ 8", "7 % 2"] {
            assert_eq!(Command::parse(line), Ok(Command::Unsupported));
        }
    }
}
