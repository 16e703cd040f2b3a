use crate::cli::SessionAction;
use crate::context::CliContext;
use crate::output;
use scrumboard_domain::{CurrentUser, UserId};
use serde::Serialize;

/// What the CLI prints about a stored session; the token itself is never
/// echoed
#[derive(Serialize)]
struct SessionView {
    id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    has_token: bool,
    path: String,
}

impl SessionView {
    fn new(user: &CurrentUser, ctx: &CliContext) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            has_token: user.token.is_some(),
            path: ctx.storage.path().display().to_string(),
        }
    }
}

pub async fn handle(ctx: &CliContext, action: SessionAction) -> anyhow::Result<()> {
    match action {
        SessionAction::Set {
            user_id,
            username,
            token,
        } => {
            let user = CurrentUser {
                id: user_id,
                username,
                token,
            };
            ctx.storage.write(&user).await?;
            output::output_success(SessionView::new(&user, ctx));
        }
        SessionAction::Show => match ctx.stored_user().await? {
            Some(user) => output::output_success(SessionView::new(&user, ctx)),
            None => output::output_error(&format!(
                "No session stored at {}",
                ctx.storage.path().display()
            )),
        },
    }
    Ok(())
}
