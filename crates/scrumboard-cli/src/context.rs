use scrumboard_client::{
    AlwaysConfirm, AsyncConfirmation, BoardController, Collaborators, FileSessionStorage,
    HttpBoardStore, SessionStorage, StoredSessionGuard,
};
use scrumboard_core::{AppConfig, ScrumboardResult};
use scrumboard_domain::CurrentUser;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::Cli;
use crate::prompt::TerminalConfirmation;

/// Settings resolved from flags, environment and the config file
pub struct CliContext {
    pub base_url: String,
    pub storage: FileSessionStorage,
    pub debounce: Duration,
}

impl CliContext {
    /// Flags and environment take precedence over the config file
    pub fn load(cli: &Cli) -> Self {
        let config = AppConfig::load();
        let base_url = cli
            .url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| config.effective_base_url().to_string());
        let session_file = cli
            .session
            .clone()
            .unwrap_or_else(|| config.effective_session_file());

        tracing::debug!(
            "Using service {} and session file {}",
            base_url,
            session_file.display()
        );

        Self {
            base_url,
            storage: FileSessionStorage::new(session_file),
            debounce: config.effective_debounce(),
        }
    }

    /// The stored user, if a readable record exists
    pub async fn stored_user(&self) -> ScrumboardResult<Option<CurrentUser>> {
        match self.storage.read_current_user().await? {
            Some(record) => CurrentUser::from_record(Some(&record)).map(Some),
            None => Ok(None),
        }
    }

    /// Build a controller that asks on the terminal before destructive
    /// actions, unless `assume_yes` is set
    pub async fn controller(&self, assume_yes: bool) -> ScrumboardResult<Arc<BoardController>> {
        let confirmation: Arc<dyn AsyncConfirmation> = if assume_yes {
            Arc::new(AlwaysConfirm)
        } else {
            Arc::new(TerminalConfirmation)
        };

        // An unreadable record surfaces from `initialize`; until then go
        // without a token
        let token = self.stored_user().await.ok().flatten().and_then(|u| u.token);
        let store = HttpBoardStore::new(&self.base_url)?.with_token(token);

        let controller = BoardController::initialize(
            Collaborators {
                store: Arc::new(store),
                session: Arc::new(StoredSessionGuard::new(self.storage.clone())),
                storage: Arc::new(self.storage.clone()),
                confirmation,
            },
            self.debounce,
        )
        .await?;

        Ok(Arc::new(controller))
    }
}
