//! Display refresh background task

use std::io::{self, Write};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::timer::TimerSnapshot;

const BAR_WIDTH: usize = 20;

/// Text progress bar filled by the elapsed share of the countdown
pub fn progress_bar(snapshot: &TimerSnapshot, width: usize) -> String {
    let filled = (snapshot.elapsed_fraction() * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// One status line for the terminal
pub fn render_line(snapshot: &TimerSnapshot) -> String {
    format!(
        "{} {} {:<8} stack {}",
        snapshot.display,
        progress_bar(snapshot, BAR_WIDTH),
        snapshot.phase.as_str(),
        snapshot.stack,
    )
}

fn render(snapshot: &TimerSnapshot, json: bool) -> io::Result<()> {
    let line = if json {
        serde_json::to_string(snapshot).map_err(io::Error::other)?
    } else {
        render_line(snapshot)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()
}

/// Background task that redraws on every published snapshot
pub async fn display_task(mut snapshots: watch::Receiver<TimerSnapshot>, json: bool) {
    let initial = snapshots.borrow_and_update().clone();
    if let Err(e) = render(&initial, json) {
        warn!("Failed to render display: {}", e);
    }

    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        if let Err(e) = render(&snapshot, json) {
            warn!("Failed to render display: {}", e);
        }
    }

    debug!("Snapshot channel closed, stopping display");
}
