//! Waiting indicator shown while the runner has produced no output yet.
//!
//! A background task redraws a braille glyph and the elapsed time in place
//! every tick. The only shared state is an atomic stop flag: the main flow
//! flips it once, the task reads it each tick. Stopping joins the task and
//! clears the status line, so a stopped spinner leaves no residue.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::Colorize;
use tokio::task::JoinHandle;

use crate::constants::{SPINNER_FRAMES, SPINNER_TICK_MS};

/// Handle to a running indicator task.
pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Spawn the indicator, measuring elapsed time from `started`.
    pub fn start(started: Instant) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = tokio::spawn(async move {
            let mut frame = 0;
            while !flag.load(Ordering::Relaxed) {
                let elapsed = started.elapsed().as_secs_f64();
                print!(
                    "\r{}",
                    format!("{} Thinking... ({:.1}s)", SPINNER_FRAMES[frame], elapsed).dimmed()
                );
                io::stdout().flush().ok();
                tokio::time::sleep(Duration::from_millis(SPINNER_TICK_MS)).await;
                frame = (frame + 1) % SPINNER_FRAMES.len();
            }
        });
        Self { stop, handle }
    }

    /// Stop the indicator permanently and clear its line.
    pub async fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.await;
        clear_line();
    }
}

/// Overwrite the status line with spaces and return the cursor to column 0.
fn clear_line() {
    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    print!("\r{}\r", " ".repeat(width.min(80)));
    io::stdout().flush().ok();
}
