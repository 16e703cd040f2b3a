use crate::cli::{ProfileAction, ProfileSetArgs};
use crate::context::CliContext;
use crate::output;
use scrumboard_domain::FieldUpdate;
use serde_json::Value;

pub async fn handle(ctx: &CliContext, action: ProfileAction) -> anyhow::Result<()> {
    let controller = ctx.controller(false).await?;
    let user_id = controller.current_user().id;
    controller.load_user_profile(user_id).await;

    match action {
        ProfileAction::Show => {
            output::output_success(controller.snapshot().user_data);
        }
        ProfileAction::Set(args) => {
            let update = field_update(&args);
            controller.edit_profile_field(args.field, update);
            match controller.flush_profile_edits().await {
                Some(result) => output::output_success(result?),
                None => output::output_success(controller.snapshot().user_data),
            }
        }
    }
    Ok(())
}

/// Values that parse as JSON keep their type; anything else is a string
fn field_update(args: &ProfileSetArgs) -> FieldUpdate<Value> {
    let value = args.value.as_ref().map(|raw| {
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()))
    });
    FieldUpdate::from_flags(value, args.clear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Option<&str>, clear: bool) -> ProfileSetArgs {
        ProfileSetArgs {
            field: "f".to_string(),
            value: value.map(str::to_string),
            clear,
        }
    }

    #[test]
    fn test_field_update_parsing() {
        assert_eq!(field_update(&args(Some("42"), false)), FieldUpdate::Set(json!(42)));
        assert_eq!(
            field_update(&args(Some("Sara"), false)),
            FieldUpdate::Set(json!("Sara"))
        );
        assert_eq!(field_update(&args(None, true)), FieldUpdate::Clear);
    }
}
