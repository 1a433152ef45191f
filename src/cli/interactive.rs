//! Interactive command handler
//!
//! Reads one widget event per line from stdin and prints the page whenever
//! it changes. Typed input is debounced exactly as in the widget.

use crate::cli::ServiceArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render::Page;
use crate::scheduler::Scheduler;
use crate::widget::{Controller, Event};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

const EVENT_BUFFER: usize = 64;

/// Interactive command arguments
#[derive(Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub service: ServiceArgs,
}

/// Run the interactive command
pub async fn run(args: InteractiveArgs) -> Result<()> {
    let config = Config::load()?;
    let formatter = args.service.formatter(&config)?;
    let service = args.service.service(&config)?;
    let widget = Controller::new(service, Scheduler::new(config.debounce()), config.projector());

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            match line.parse::<Event>() {
                Ok(event) => {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
                Err(e) => eprintln!("{}", e),
            }
        }
        Ok::<_, std::io::Error>(())
    });

    let mut last = Page::default();
    widget
        .run(rx, |page| {
            if *page == last {
                return;
            }
            match formatter.format(page) {
                Ok(output) => println!("{}", output),
                Err(e) => warn!("failed to format page: {}", e),
            }
            last = page.clone();
        })
        .await;

    match reader.await {
        Ok(result) => result?,
        Err(e) => warn!("stdin reader stopped: {}", e),
    }
    Ok(())
}
