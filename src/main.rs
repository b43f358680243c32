use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use leksikon::report::{self, Emphasis};
use leksikon::server::{self, ApiState};
use leksikon_core::config::Config;
use leksikon_core::search::filter_region_terms;
use leksikon_core::view::LexiconView;
use leksikon_core::{LexiconSource, LexiconStore, RegionTerm};
use leksikon_feeds::CorpusClient;

const DEBUG_LOG: &str = "/tmp/leksikon-debug.log";

#[derive(Parser)]
#[command(name = "leksikon", about = "East Java cultural lexicon — browse, search, serve")]
struct Cli {
    /// Verbose logs. The browser writes them to /tmp/leksikon-debug.log
    /// (tail -f to inspect); other commands write to stderr.
    #[arg(long, global = true)]
    debug: bool,

    /// Load this config file instead of ~/.config/leksikon/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Browse the lexicon in the terminal (default).
    Browse {
        /// Search the corpus API instead of the local lexicon.
        #[arg(long)]
        remote: bool,
    },
    /// Print ranked search results.
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        remote: bool,
    },
    /// Print the terms of one region, optionally quick-filtered.
    Region {
        region: String,
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long)]
        remote: bool,
    },
    /// Serve the JSON API.
    Serve {
        /// Overrides `server.bind`.
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Cmd::Browse { remote: false });

    init_logging(cli.debug, matches!(command, Cmd::Browse { .. }))?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config: falling back to defaults");
            Config::defaults()
        }),
    };
    let store = LexiconStore::open(config.lexicon.data_path.as_deref())?;

    match command {
        Cmd::Browse { remote } => {
            let remote = remote || config.remote.enabled;
            leksikon_tui::run(config, store, remote)
        }
        Cmd::Search {
            query,
            page,
            remote,
        } => search(&config, store, &query, page, remote),
        Cmd::Region {
            region,
            filter,
            remote,
        } => region_terms(&config, &store, &region, &filter, remote),
        Cmd::Serve { bind } => {
            let addr = match bind {
                Some(addr) => addr,
                None => config
                    .server
                    .bind
                    .parse()
                    .with_context(|| format!("invalid server.bind {:?}", config.server.bind))?,
            };
            let state = Arc::new(ApiState {
                store,
                page_size: config.lexicon.page_size,
            });
            tokio::runtime::Runtime::new()?.block_on(server::serve(addr, state))
        }
    }
}

fn init_logging(debug: bool, tui: bool) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if tui {
        // The terminal belongs to the browser; log to a file or not at all.
        if debug {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(DEBUG_LOG)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter("debug"))
                .init();
            tracing::info!("leksikon debug log started — tail -f {DEBUG_LOG}");
        }
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(if debug { "debug" } else { "info" }))
        .init();
    Ok(())
}

fn search(
    config: &Config,
    store: LexiconStore,
    query: &str,
    page: usize,
    remote: bool,
) -> anyhow::Result<()> {
    let page_size = config.lexicon.page_size;
    let view = if remote {
        let client = CorpusClient::from_config(&config.remote);
        let results = tokio::runtime::Runtime::new()?
            .block_on(client.search(query))
            .with_context(|| format!("searching {}", client.base_url()))?;
        // Already ranked by the corpus; page through them as delivered.
        LexiconView::new(results, page_size)
    } else {
        let mut view = LexiconView::new(store.entries().to_vec(), page_size);
        view.set_query(query);
        view
    };

    // Page 1 always exists, even with no hits: it carries the summary.
    if page == 0 || page > view.total_pages().max(1) {
        anyhow::bail!("page {page} out of range (1–{})", view.total_pages().max(1));
    }

    let mut out = std::io::stdout().lock();
    report::write_page(&mut out, &view.page_at(page), query, Emphasis::detect())?;
    out.flush()?;
    Ok(())
}

fn region_terms(
    config: &Config,
    store: &LexiconStore,
    region: &str,
    filter: &str,
    remote: bool,
) -> anyhow::Result<()> {
    let terms: Vec<RegionTerm> = if remote {
        let client = CorpusClient::from_config(&config.remote);
        tokio::runtime::Runtime::new()?
            .block_on(client.region_terms(region))
            .with_context(|| format!("fetching region {region} from {}", client.base_url()))?
    } else {
        store
            .region(region)
            .with_context(|| {
                format!("unknown region {region:?}; known: {}", store.regions().join(", "))
            })?
            .iter()
            .map(|item| RegionTerm::from(&item.entry))
            .collect()
    };

    let kept = filter_region_terms(&terms, filter);
    let mut out = std::io::stdout().lock();
    report::write_region_terms(&mut out, region, &kept, filter, Emphasis::detect())?;
    out.flush()?;
    Ok(())
}
