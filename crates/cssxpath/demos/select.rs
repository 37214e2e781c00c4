//! Select elements from an HTML file (or stdin) with a CSS selector
//!
//! ```text
//! cargo run -p cssxpath --example select -- "ul > li:first-child" page.html
//! RUST_LOG=debug cargo run -p cssxpath --example select -- "div p" < page.html
//! ```

use std::io::Read;

use anyhow::{Context, bail};
use cssxpath::{CssSelect, css_to_xpath};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(selector) = args.next() else {
        bail!("usage: select <selector> [file]");
    };

    let html = match args.next() {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("failed to read stdin")?;
            html
        }
    };

    tracing::info!(selector = %selector, bytes = html.len(), "selecting");
    println!("xpath: {}", css_to_xpath(&selector));

    let found = CssSelect::new(&html).select(&selector);
    println!("{}", serde_json::to_string_pretty(&found)?);
    tracing::info!("{} match(es)", found.len());
    Ok(())
}
