//! Human-readable page formatter

use crate::constants::text::TABLE_HEADER;
use crate::error::Result;
use crate::render::{Page, PageFormatter};

/// Text formatter - message line, results table and marker list
pub struct TextFormatter;

impl PageFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable page"
    }

    fn format(&self, page: &Page) -> Result<String> {
        let mut output = String::new();

        if page.message.visible {
            output.push_str(&format!("{}\n", page.message.text));
        }

        if page.table.visible {
            let mut widths = TABLE_HEADER.map(str::len);
            for row in &page.table.rows {
                for (width, cell) in widths.iter_mut().zip(&row.cells) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            let header = TABLE_HEADER.map(String::from);
            output.push_str(&format_line("   ", &header, &widths));
            for row in &page.table.rows {
                let mark = if row.highlighted { " * " } else { "   " };
                output.push_str(&format_line(mark, &row.cells, &widths));
            }

            output.push_str("\nMarkers:\n");
            for marker in &page.markers {
                output.push_str(&format!(
                    "  #{} ({:.6}, {:.6}) at ({:.1}, {:.1}) {}\n",
                    marker.id,
                    marker.coords.lat,
                    marker.coords.lng,
                    marker.position.x,
                    marker.position.y,
                    marker.color()
                ));
            }
        }

        Ok(output)
    }
}

fn format_line(prefix: &str, cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}{}\n", prefix, padded.join(" | ").trim_end())
}
