use crate::cli::{BoardAction, CardViewArgs};
use crate::context::CliContext;
use crate::output;
use scrumboard_domain::{CardOrdering, CompositeFilter, ListFilter, Tag, TagFilter, TitleFilter};

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    let controller = ctx.controller(false).await?;

    match action {
        BoardAction::Show => {
            controller.start().await;
            output::output_success(controller.snapshot());
        }
        BoardAction::Cards(args) => {
            let filter = card_filter(&args);
            controller.load_board().await;
            controller.set_ordering(CardOrdering::new(args.sort.into(), !args.ascending));
            let state = controller.snapshot();
            output::output_list(state.visible_cards(&filter));
        }
    }
    Ok(())
}

fn card_filter(args: &CardViewArgs) -> CompositeFilter {
    let mut filter = CompositeFilter::new();
    if let Some(ref tag) = args.tag {
        let Some(known) = Tag::lookup(tag) else {
            output::output_error(&format!("Unknown tag colour: {}", tag));
        };
        filter = filter.with_filter(Box::new(TagFilter::new(known.color)));
    }
    if let Some(ref query) = args.query {
        filter = filter.with_filter(Box::new(TitleFilter::new(query)));
    }
    if let Some(list) = args.list {
        filter = filter.with_filter(Box::new(ListFilter::new(list)));
    }
    filter
}
