//! Confirmation gate for destructive repository operations.
//!
//! Delete and clear must ask before they take effect. The caller injects the
//! provider: the CLI prompts on stdin, `--force` and tests use [`AutoConfirm`].

pub const DELETE_ONE_PROMPT: &str = "Delete this feedback?";
pub const DELETE_ALL_PROMPT: &str = "Delete all feedbacks?";

/// Answers a yes/no question before a destructive operation runs.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Answers every prompt with the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirmation for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

impl<F> Confirmation for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
