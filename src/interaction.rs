//! User interaction port
//!
//! Every decision the lifecycle needs from a human flows through the
//! `Interaction` trait: retry-or-cancel while another instance holds the
//! lock, yes-or-no for the shared component, and success notifications.
//! No policy lives here; implementations only collect answers and render
//! messages.

use inquire::{Confirm, InquireError};

use crate::error::{AppstageError, Result};
use crate::ui::display;

/// Answer to a retry-or-cancel question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryChoice {
    Retry,
    Cancel,
}

/// Answer to a yes-or-no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Capability for putting decisions in front of a human
pub trait Interaction {
    /// Ask whether to retry a contended acquisition or give up
    fn ask_retry_or_cancel(&self, title: &str, message: &str) -> Result<RetryChoice>;

    /// Ask a yes/no question; anything but an explicit yes is `No`
    fn ask_yes_no(&self, title: &str, message: &str) -> Result<Answer>;

    /// Surface an informational message
    fn notify(&self, title: &str, message: &str);
}

/// Interactive terminal prompts
pub struct ConsoleInteraction;

impl Interaction for ConsoleInteraction {
    fn ask_retry_or_cancel(&self, title: &str, message: &str) -> Result<RetryChoice> {
        display::print_prompt_title(title);

        let answer = Confirm::new(message)
            .with_default(true)
            .with_help_message("Press Enter to retry, or 'n' to cancel")
            .prompt();

        match answer {
            Ok(true) => Ok(RetryChoice::Retry),
            Ok(false) => Ok(RetryChoice::Cancel),
            // Dismissing the prompt is a decision, not a failure.
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(RetryChoice::Cancel)
            }
            Err(e) => Err(AppstageError::PromptFailed {
                reason: e.to_string(),
            }),
        }
    }

    fn ask_yes_no(&self, title: &str, message: &str) -> Result<Answer> {
        display::print_prompt_title(title);

        let answer = Confirm::new(message)
            .with_default(false)
            .with_help_message("Press 'y' to confirm, Enter to decline")
            .prompt();

        match answer {
            Ok(true) => Ok(Answer::Yes),
            Ok(false) => Ok(Answer::No),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(Answer::No)
            }
            Err(e) => Err(AppstageError::PromptFailed {
                reason: e.to_string(),
            }),
        }
    }

    fn notify(&self, title: &str, message: &str) {
        display::notify(title, message);
    }
}

/// Fixed answers for non-interactive runs driven by CLI flags
pub struct PresetAnswers {
    retry: RetryChoice,
    answer: Answer,
}

impl PresetAnswers {
    /// Answer every retry question with `retry` and every yes/no with `answer`
    pub fn new(retry: RetryChoice, answer: Answer) -> Self {
        Self { retry, answer }
    }
}

impl Interaction for PresetAnswers {
    fn ask_retry_or_cancel(&self, _title: &str, _message: &str) -> Result<RetryChoice> {
        Ok(self.retry)
    }

    fn ask_yes_no(&self, _title: &str, _message: &str) -> Result<Answer> {
        Ok(self.answer)
    }

    fn notify(&self, title: &str, message: &str) {
        display::notify(title, message);
    }
}
