//! Optional memory readings for the runner process.
//!
//! Samples the child's resident set through `ps` on a slow cadence and
//! prints dimmed readings to stderr. Display only: every failure in here is
//! swallowed, and the poller can never affect the run result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use tokio::task::JoinHandle;

use crate::constants::MEM_POLL_INTERVAL_SECS;

/// Handle to a running memory poller task.
pub struct MemPoller {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl MemPoller {
    /// Spawn the poller for the child with the given pid.
    pub fn start(pid: u32) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(MEM_POLL_INTERVAL_SECS)).await;
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                if let Some(rss_kb) = sample_rss_kb(pid).await {
                    let mb = rss_kb as f64 / 1024.0;
                    eprintln!("{}", format!("   [runner memory: {:.1} MB]", mb).dimmed());
                }
            }
        });
        Self { stop, handle }
    }

    /// Stop the poller and wait for it to finish.
    pub async fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        self.handle.abort();
        let _ = self.handle.await;
    }
}

/// Resident set size of `pid` in kilobytes, or `None` on any failure.
async fn sample_rss_kb(pid: u32) -> Option<u64> {
    let output = tokio::process::Command::new("ps")
        .args(["-o", "rss=", "-p", &pid.to_string()])
        .output()
        .await
        .ok()?;
    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}
