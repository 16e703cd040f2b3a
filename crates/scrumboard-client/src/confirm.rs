//! User confirmation before destructive actions.
//!
//! `Confirmation` is the blocking form: it returns the answer directly and
//! may hold the calling thread while the user decides. `AsyncConfirmation`
//! is what the controller awaits. Every `Confirmation` is usable as an
//! `AsyncConfirmation`.

use async_trait::async_trait;

pub trait Confirmation: Send + Sync {
    /// Ask the user a yes/no question; `true` means go ahead
    fn confirm(&self, prompt: &str) -> bool;
}

#[async_trait]
pub trait AsyncConfirmation: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

#[async_trait]
impl<T: Confirmation + ?Sized> AsyncConfirmation for T {
    async fn confirm(&self, prompt: &str) -> bool {
        Confirmation::confirm(self, prompt)
    }
}

/// Answers yes without asking, for non-interactive use
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!("Auto-confirmed: {}", prompt);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Prompt {}
        impl Confirmation for Prompt {
            fn confirm(&self, prompt: &str) -> bool;
        }
    }

    #[tokio::test]
    async fn test_sync_confirmation_is_awaitable() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_confirm()
            .with(eq("Delete?"))
            .times(1)
            .return_const(false);

        let confirmation: &dyn AsyncConfirmation = &prompt;
        assert!(!confirmation.confirm("Delete?").await);
    }

    #[tokio::test]
    async fn test_always_confirm() {
        let confirmation: &dyn AsyncConfirmation = &AlwaysConfirm;
        assert!(confirmation.confirm("anything").await);
    }
}
