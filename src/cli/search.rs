//! Search command handler
//!
//! Fills the query fields from arguments, confirms, and prints the page
//! once the search has been rendered.

use crate::cli::ServiceArgs;
use crate::config::Config;
use crate::error::Result;
use crate::query::QueryField;
use crate::scheduler::Scheduler;
use crate::widget::{Controller, Event};
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text search term
    #[arg(long, short = 'q', default_value = "")]
    pub q: String,

    /// Latitude, forwarded as typed
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude, forwarded as typed
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,

    /// Search radius, forwarded as typed
    #[arg(long, short = 'r')]
    pub radius: Option<String>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let formatter = args.service.formatter(&config)?;
    let service = args.service.service(&config)?;

    let mut widget = Controller::new(service, Scheduler::new(config.debounce()), config.projector());

    let fields = [
        (QueryField::Term, Some(args.q)),
        (QueryField::Latitude, args.lat),
        (QueryField::Longitude, args.lng),
        (QueryField::Radius, args.radius),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            widget.handle(Event::Input(field, value));
        }
    }
    widget.handle(Event::Confirm);
    widget.settle().await;

    print!("{}", formatter.format(widget.page())?);
    Ok(())
}
