/// Everything that can go wrong with a single input line.
///
/// The session reports these and keeps reading; none of them ends it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Arithmetic(#[from] big_digits::Error),
    /// The operator did not split the line into exactly two operands, as in `1 + 2 + 3`.
    #[error("Expected exactly two operands around `{operator}`, found {found}.")]
    MalformedExpression { operator: char, found: usize },
}

pub type Result<T> = std::result::Result<T, CalcError>;
