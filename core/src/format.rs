//! Text rendering for task lists and single-task detail views.
//!
//! Columns are left-aligned with fixed minimum widths: 3 for the list view's
//! glyph and position cells, 14 for the detail view's labels. Timestamps
//! render as `Mmm/DD @HH:00` in their own UTC offset.

use std::io::Write;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::ClientError;
use crate::types::Task;

const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short]/[day] @[hour]:00");

const GLYPH_PENDING: &str = "𝘅";
const GLYPH_DONE: &str = "✅";

/// Render one line per task: completion glyph, 1-based display position,
/// task text. Display position is not the server ID.
pub fn print_items(w: &mut dyn Write, items: &[Task]) -> Result<(), ClientError> {
    for (i, item) in items.iter().enumerate() {
        let glyph = if item.done { GLYPH_DONE } else { GLYPH_PENDING };
        writeln!(w, "{:<3}{:<3}{}", glyph, i + 1, item.task)?;
    }
    Ok(())
}

/// Render the detail block for a single task. The `CompletedAt` line only
/// appears for completed tasks; `completed_at` is meaningless otherwise.
pub fn print_item(w: &mut dyn Write, item: &Task) -> Result<(), ClientError> {
    writeln!(w, "{:<14}{}", "Task:", item.task)?;
    writeln!(w, "{:<14}{}", "Created at:", format_time(item.created_at)?)?;

    if item.done {
        writeln!(w, "{:<14}{}", "Completed:", "Yes")?;
        writeln!(w, "{:<14}{}", "CompletedAt:", format_time(item.completed_at)?)?;
    } else {
        writeln!(w, "{:<14}{}", "Completed:", "No")?;
    }

    Ok(())
}

fn format_time(ts: OffsetDateTime) -> Result<String, ClientError> {
    ts.format(&TIME_FORMAT)
        .map_err(|e| ClientError::Encode(e.to_string()))
}
