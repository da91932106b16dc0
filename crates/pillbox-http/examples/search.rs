//! Remote search example.
//!
//! Types a term into a remote-search component backed by a real endpoint and
//! prints the rendered rows and emitted events.
//!
//! Run with:
//! ```bash
//! RUST_LOG=pillbox=debug cargo run -p pillbox-http --example search -- \
//!     --url https://example.com/tags/search --term rust
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pillbox::harness::Harness;
use pillbox::message::{InputMsg, Message};
use pillbox::render::ListView;
use pillbox::{Config, Multiselect};
use pillbox_http::HttpBackend;

#[derive(Parser, Debug)]
#[command(about = "Run one remote search through a pillbox component")]
struct Args {
    /// Search endpoint, queried with `q` and `preselects`.
    #[arg(long)]
    url: String,

    /// Term to type.
    #[arg(long)]
    term: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

fn main() -> Result<(), pillbox::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let backend = HttpBackend::with_timeout(Duration::from_secs(args.timeout))?;
    let config = Config::new()
        .with_search_url(args.url)
        .with_debounce(Duration::ZERO);

    let mut harness = Harness::new(Multiselect::new(config, Arc::new(backend))?);
    harness.send(Message::new(InputMsg::new(args.term)));
    harness.run_until_empty();

    let ms = harness.model_mut();
    match ms.list() {
        ListView::Rows(rows) => {
            for row in rows {
                println!("{}\t{}", row.item.value, row.item.text);
            }
        }
        ListView::NoResults => println!("{}", ms.config().no_results_message),
        ListView::Addable => println!("{}", ms.config().addable_placeholder),
    }
    for event in ms.drain_events() {
        println!("event: {} {}", event.name(), event.detail());
    }
    Ok(())
}
