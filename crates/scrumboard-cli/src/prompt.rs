use scrumboard_client::Confirmation;
use std::io::{self, BufRead, Write};

/// Asks on stderr and reads the answer from stdin. Anything but `y` or
/// `yes` counts as no, including end of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{} [y/N] ", prompt).and_then(|_| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
