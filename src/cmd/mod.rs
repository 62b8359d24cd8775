pub mod demo;
pub mod encrypt;
pub mod solve;
pub mod train;

use cipherforge::optimizer::ProgressCallback;
use tracing::info;

/// Logs search progress at each report interval.
pub struct CliLogger;

impl ProgressCallback for CliLogger {
    fn on_progress(&self, iteration: usize, best_score: f64, best_plaintext: &str, ips: f64) -> bool {
        let preview: String = best_plaintext
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(48)
            .collect();
        info!(
            "Iter {:7} | Best: {:.2} | {:.0} it/s | {}",
            iteration, best_score, ips, preview
        );
        true
    }
}
