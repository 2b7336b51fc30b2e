use cartwise_grocery::{Command, stats};
use cartwise_shared::Storage;
use chrono::Utc;
use clap::ValueEnum;

use super::render;
use crate::config::SuggestionsConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatView {
    #[default]
    Items,
    Categories,
    Stores,
}

pub fn suggest<S: Storage>(cmd: &Command<S>, config: &SuggestionsConfig) {
    let suggestions = cmd.suggestions(Utc::now(), config.limit);
    print!("{}", render::suggestions(&suggestions));
}

pub fn reminders<S: Storage>(cmd: &Command<S>, config: &SuggestionsConfig) {
    let reminders = cmd.reminders(Utc::now(), config.due_soon_ratio);
    print!("{}", render::reminders(&reminders));
}

pub fn stats<S: Storage>(cmd: &Command<S>, view: StatView, config: &SuggestionsConfig) {
    let rendered = match view {
        StatView::Items => {
            render::item_stats(&stats::top_items(&cmd.items, config.top_items), Utc::now())
        }
        StatView::Categories => render::tallies(&stats::by_category(&cmd.items)),
        StatView::Stores => render::tallies(&stats::by_store(&cmd.items)),
    };

    print!("{rendered}");
}
