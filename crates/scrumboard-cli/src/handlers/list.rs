use crate::cli::ListAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Create { name } => {
            let controller = ctx.controller(false).await?;
            match controller.create_list(name.as_str()).await {
                Some(list) => output::output_success(&list),
                None => output::output_error(&format!("Failed to create list '{}'", name)),
            }
        }
        ListAction::Delete { index, yes } => {
            let controller = ctx.controller(yes).await?;
            controller.load_board().await;

            let Some(list) = controller.snapshot().list(index).cloned() else {
                output::output_error(&format!("No list at position {}", index));
            };

            let deleted = controller
                .confirm_and_delete_list(index, &list, &list.name)
                .await;
            output::output_success(serde_json::json!({
                "deleted": deleted,
                "list": list.id,
                "remaining": controller.snapshot().lists.len(),
            }));
        }
    }
    Ok(())
}
