use crate::common::outcome::{Outcome, Tone};

const RESET: &str = "\x1b[0m";

/// Renders outcomes for the terminal, with or without ANSI colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn render(&self, outcome: &Outcome) -> String {
        if !self.color {
            return outcome.message.clone();
        }
        let code = match outcome.tone {
            Tone::Success => "\x1b[32m",
            Tone::Failure => "\x1b[31m",
            Tone::Info => "\x1b[34m",
        };
        format!("{code}{}{RESET}", outcome.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styler_returns_message_untouched() {
        let out = Styler::plain().render(&Outcome::failure("Account not found!"));
        assert_eq!(out, "Account not found!");
    }

    #[test]
    fn colored_styler_wraps_by_tone() {
        let s = Styler::new(true);
        assert_eq!(
            s.render(&Outcome::success("ok")),
            "\x1b[32mok\x1b[0m"
        );
        assert_eq!(s.render(&Outcome::failure("no")), "\x1b[31mno\x1b[0m");
        assert_eq!(
            s.render(&Outcome::info("Balance: 1.00")),
            "\x1b[34mBalance: 1.00\x1b[0m"
        );
    }
}
