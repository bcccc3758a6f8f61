//! Line-oriented browse session.
//!
//! Reads facet commands from stdin, feeds them to a [`Dispatcher`], and prints
//! the result list whenever the displayed results change.

use std::sync::Arc;
use std::time::Duration;
use storefront_core::config::Config;
use storefront_session::commands::HELP;
use storefront_session::{
    Command, CommandError, Dispatcher, FacetSelection, HttpProductsApi, QueryCache, ResultSnapshot,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run a browse session against the products endpoint at `api_url`.
pub async fn run(config: &Config, api_url: &str) -> anyhow::Result<()> {
    let timeout = Duration::from_millis(config.session.timeout_ms);
    let api = Arc::new(HttpProductsApi::new(api_url, timeout));
    tracing::info!(endpoint = api.endpoint(), "browse session started");

    let cache = Arc::new(QueryCache::new());
    let mut results = cache.subscribe();
    let quiet = Duration::from_millis(config.session.debounce_ms);
    let mut dispatcher = Dispatcher::new(api, cache, quiet);

    print_selection(dispatcher.selection());
    dispatcher.refetch();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Facet(event)) => {
                        let snapshot = dispatcher.apply(event);
                        print_selection(&snapshot);
                    }
                    Ok(Command::Refresh) => {
                        dispatcher.refetch();
                    }
                    Ok(Command::Show) => print_selection(dispatcher.selection()),
                    Ok(Command::Help) => println!("{HELP}"),
                    Err(CommandError::Empty) => {}
                    Err(err) => eprintln!("{err}"),
                }
            }
            changed = results.changed() => {
                if changed.is_err() {
                    break;
                }
                if let Some(snapshot) = results.borrow_and_update().clone() {
                    print_results(&snapshot);
                }
            }
        }
    }

    dispatcher.cancel_pending();
    Ok(())
}

fn print_selection(selection: &FacetSelection) {
    let join = |terms: Vec<&str>| if terms.is_empty() { "-".to_string() } else { terms.join(",") };
    let colors = join(selection.color.iter().map(|c| c.as_str()).collect());
    let sizes = join(selection.size.iter().map(|s| s.as_str()).collect());
    let (low, high) = selection.price.display_bounds();
    let price = match selection.price.preset() {
        Some(preset) => preset.label().to_string(),
        None => format!("{low:.0} $ - {high:.0} $"),
    };
    println!(
        "color={colors} size={sizes} price=[{price}] sort={}",
        selection.sort.label()
    );
}

fn print_results(snapshot: &ResultSnapshot) {
    if snapshot.hits.is_empty() {
        println!("-- no products match these filters --");
        return;
    }
    println!("-- {} products (#{}) --", snapshot.hits.len(), snapshot.seq);
    for hit in snapshot.hits.iter() {
        let name = hit.metadata_str("name").unwrap_or(&hit.id);
        match hit.metadata_f64("price") {
            Some(price) => println!("  {name:<32} {price:>6.2} $"),
            None => println!("  {name}"),
        }
    }
}
