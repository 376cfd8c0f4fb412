use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, question: &str) -> io::Result<bool>;
}

/// Prompts on stdout and reads one line from stdin. Blocks until a line arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str) -> io::Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        let mut response = String::new();
        io::stdin().lock().read_line(&mut response)?;
        Ok(is_affirmative(&response))
    }
}

/// Only `y` or `Y` counts as yes. The line terminator is ignored, nothing else is.
pub fn is_affirmative(response: &str) -> bool {
    let answer = response.trim_end_matches(['\n', '\r']);
    answer.eq_ignore_ascii_case("y")
}
