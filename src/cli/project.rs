//! Project command handler
//!
//! Runs the projector against the configured bounds and viewport.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::projection::{format_coord, Coordinates, PixelPoint};
use clap::{Args, Subcommand};

/// Project command arguments
#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub direction: Direction,
}

#[derive(Subcommand)]
pub enum Direction {
    /// Geographic coordinate to page pixel
    ToPixel {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,
    },

    /// Page pixel to geographic coordinate
    ToGeo {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
}

/// Run the project command
pub fn run(args: ProjectArgs) -> Result<()> {
    let config = Config::load()?;
    let projector = config.projector();

    if projector.bounds().is_degenerate() {
        return Err(Error::Config(
            "map bounds have zero width or height".to_string(),
        ));
    }

    match args.direction {
        Direction::ToPixel { lat, lng } => {
            let point = projector.to_pixel(Coordinates::new(lat, lng));
            let note = if projector.viewport().contains(point) {
                ""
            } else {
                " (outside map)"
            };
            println!("{:.2} {:.2}{}", point.x, point.y, note);
        }
        Direction::ToGeo { x, y } => {
            let coords = projector.to_geo(PixelPoint::new(x, y));
            println!("{} {}", format_coord(coords.lat), format_coord(coords.lng));
        }
    }

    Ok(())
}
