use std::io::{self, BufRead, Write};

/// Line-oriented terminal access used by the session.
pub trait Console {
    /// Shows `prompt` and reads one line. `None` means the input was closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        let mut stdout = self.stdout.lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{line}")
    }
}

/// Parses a menu answer. Anything that isn't an integer becomes 0, which no menu accepts.
pub fn parse_choice(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}

/// Whether `choice` picks one of `options` entries numbered from 1.
pub fn valid_choice(choice: i64, options: usize) -> bool {
    usize::try_from(choice).is_ok_and(|choice| (1..=options).contains(&choice))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numbers_parse_to_zero() {
        assert_eq!(parse_choice("abc"), 0);
        assert_eq!(parse_choice(""), 0);
        assert_eq!(parse_choice("1.5"), 0);
        assert_eq!(parse_choice(" 3\n"), 3);
        assert_eq!(parse_choice("-1"), -1);
    }

    #[test]
    fn only_menu_positions_are_valid() {
        let options = 4;
        for input in ["0", "5", "-1", "synonyms", ""] {
            assert!(!valid_choice(parse_choice(input), options), "{input:?} was accepted");
        }
        for input in ["1", "2", "3", "4"] {
            assert!(valid_choice(parse_choice(input), options), "{input:?} was rejected");
        }
    }

    #[test]
    fn std_console_defaults_to_the_process_streams() {
        let _console: StdConsole = Default::default();
    }

    #[test]
    fn bounds_follow_the_option_count() {
        assert!(valid_choice(5, 5));
        assert!(!valid_choice(1, 0));
    }
}
