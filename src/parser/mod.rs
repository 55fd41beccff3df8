pub mod ast;
#[allow(clippy::module_inception)]
pub mod parser;

pub use self::ast::{Expression, Operator, Value};
pub use self::parser::Command;
