use std::fmt;

use big_digits::BigUint;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Fac,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Order in which a line is scanned for operators. The first one present decides
    /// how the whole line is read.
    pub const PRIORITY: [Operator; 5] = [
        Operator::Fac,
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Fac => '!',
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// A single-operator expression with its operands already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Factorial(BigUint),
    Add(BigUint, BigUint),
    Sub(BigUint, BigUint),
    Mul(BigUint, BigUint),
    Div(BigUint, BigUint),
}

impl Expression {
    pub fn operator(&self) -> Operator {
        match self {
            Expression::Factorial(_) => Operator::Fac,
            Expression::Add(..) => Operator::Add,
            Expression::Sub(..) => Operator::Sub,
            Expression::Mul(..) => Operator::Mul,
            Expression::Div(..) => Operator::Div,
        }
    }
    pub fn evaluate(&self) -> Result<Value> {
        let value = match self {
            Expression::Factorial(n) => Value::Number(n.factorial()),
            Expression::Add(x, y) => Value::Number(x.add(y)),
            Expression::Sub(x, y) => Value::Number(x.subtract(y)?),
            Expression::Mul(x, y) => Value::Number(x.multiply(y)),
            Expression::Div(x, y) => {
                let (quotient, remainder) = x.divide(y)?;
                Value::Division { quotient, remainder }
            },
        };
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(BigUint),
    Division { quotient: BigUint, remainder: BigUint },
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Division { quotient, remainder } => {
                write!(f, "Quotient: {}, Remainder: {}", quotient, remainder)
            },
        }
    }
}
