// ccprune-core/src/infrastructure/prompt.rs

use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::domain::ports::Confirmer;

/// Asks on `output` and reads one line from `input`. Only `y`/`Y` accepts;
/// anything else, including end of input, refuses.
pub struct ConsoleConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsoleConfirmer<io::BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirmer for ConsoleConfirmer<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "\n{question} [y/N] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            // EOF: nobody said yes
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

/// `--yes`: never asks.
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(true)
    }
}
