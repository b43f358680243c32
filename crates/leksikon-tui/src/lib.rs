//! leksikon TUI — ratatui lexicon browser.
//!
//! Three panes on the browse tab: regions on the left, the current page of
//! entries on the right, and the search bar at the bottom. `Enter` on an
//! entry opens it in its own tab.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use leksikon_core::{config::Config, LexiconStore};
use leksikon_feeds::{CorpusClient, SearchSession};

/// Run the browser over `store`.
///
/// With `remote` set, query edits are sent to the corpus API at
/// `config.remote.base_url` instead of searching `store`; a Tokio runtime is
/// started for the lifetime of the app to carry those requests.
pub fn run(config: Config, store: LexiconStore, remote: bool) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);

    if !remote {
        tracing::info!(entries = store.len(), "tui: browsing local lexicon");
        return App::new(store, config, theme, None).run();
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();
    let client = CorpusClient::from_config(&config.remote);
    tracing::info!(base_url = client.base_url(), "tui: searching remote corpus");
    let session = SearchSession::new(client, config.search.debounce());
    App::new(store, config, theme, Some(session)).run()
}
