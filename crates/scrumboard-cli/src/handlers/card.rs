use crate::cli::CardAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Create { list_index, title } => {
            let controller = ctx.controller(false).await?;
            controller.load_board().await;

            let Some(target) = controller.snapshot().list(list_index).cloned() else {
                output::output_error(&format!("No list at position {}", list_index));
            };

            match controller.create_card(&target, title).await {
                Some(card) => output::output_success(&card),
                None => output::output_error(&format!(
                    "Failed to create card in list '{}'",
                    target.name
                )),
            }
        }
    }
    Ok(())
}
