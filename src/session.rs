use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::CalcError;
use crate::parser::Command;

pub const BANNER: [&str; 3] = [
    "Arbitrary Precision Calculator",
    "Supported operations: +, -, *, /, !",
    "Type 'exit' to quit the REPL.",
];

pub const UNSUPPORTED: &str = "Unsupported operation.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Written (and flushed) before every line is read.
    pub prompt: String,
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { prompt: ">> ".to_owned(), banner: true }
    }
}

/// Counts of what happened over a whole session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub evaluated: usize,
    pub errors: usize,
    pub unsupported: usize,
}

/// Reads one expression per line and writes one answer per line.
///
/// Only failures of the streams themselves end a session early. A bad expression is
/// answered with an `Error: ...` line and the next line is read as usual.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

enum Flow {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Session { input, output, config }
    }

    /// Runs until `exit` or the end of the input.
    pub fn run(mut self) -> io::Result<Summary> {
        let mut summary = Summary::default();
        info!(prompt = %self.config.prompt, "session started");

        if self.config.banner {
            for line in BANNER.iter() {
                writeln!(self.output, "{}", line)?;
            }
        }

        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                // keep the next shell prompt off the last `>> `
                writeln!(self.output)?;
                break;
            }

            // undecodable bytes become U+FFFD and are rejected as operands
            let line = String::from_utf8_lossy(&buf);
            if let Flow::Exit = self.respond(&line, &mut summary)? {
                break;
            }
        }

        self.output.flush()?;
        info!(
            evaluated = summary.evaluated,
            errors = summary.errors,
            unsupported = summary.unsupported,
            "session finished"
        );
        Ok(summary)
    }

    fn respond(&mut self, line: &str, summary: &mut Summary) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                self.report(line, &err, summary)?;
                return Ok(Flow::Continue);
            },
        };

        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Unsupported => {
                summary.unsupported += 1;
                writeln!(self.output, "{}", UNSUPPORTED)?;
            },
            Command::Evaluate(expr) => {
                debug!(operator = %expr.operator().symbol(), ?expr, "evaluating");
                match expr.evaluate() {
                    Ok(value) => {
                        summary.evaluated += 1;
                        writeln!(self.output, "{}", value)?;
                    },
                    Err(err) => self.report(line, &err, summary)?,
                }
            },
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, line: &str, err: &CalcError, summary: &mut Summary) -> io::Result<()> {
        warn!(line = line.trim(), error = %err, "expression rejected");
        summary.errors += 1;
        writeln!(self.output, "Error: {}", err)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn quiet() -> SessionConfig {
        SessionConfig { prompt: String::new(), banner: false }
    }

    fn transcript(input: &str, config: SessionConfig) -> (String, Summary) {
        let mut output = Vec::new();
        let summary = Session::new(Cursor::new(input), &mut output, config).run().unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn answers_each_line() {
        let (out, summary) = transcript("123 + 456\n100 / 3\n10!\nexit\n", quiet());
        assert_eq!(out, "579\nQuotient: 33, Remainder: 1\n3628800\n");
        assert_eq!(summary, Summary { evaluated: 3, errors: 0, unsupported: 0 });
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (out, summary) = transcript("123 - 456\n123 / 0\nabc\n1 + 1\nEXIT\n", quiet());
        assert_eq!(
            out,
            "Error: Result would be negative, not supported in this implementation.\n\
             Error: Division by zero.\n\
             Unsupported operation.\n\
             2\n"
        );
        assert_eq!(summary, Summary { evaluated: 1, errors: 2, unsupported: 1 });
    }

    #[test]
    fn stops_at_exit() {
        let (out, summary) = transcript("exit\n1 + 1\n", quiet());
        assert_eq!(out, "");
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn undecodable_line_is_an_error() {
        let mut output = Vec::new();
        let input: &[u8] = b"\xff\xfe + 1\n1 + 1\n";
        let summary = Session::new(Cursor::new(input), &mut output, quiet()).run().unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Error: Only non-negative integers are supported.\n2\n\n"
        );
        assert_eq!(summary, Summary { evaluated: 1, errors: 1, unsupported: 0 });
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (out, _) = transcript("2 * 21", SessionConfig::default());
        let expected = format!("{}\n>> 42\n>> \n", BANNER.join("\n"));
        assert_eq!(out, expected);
    }
}
