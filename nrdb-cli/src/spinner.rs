//! Progress spinner shown while the card catalog loads.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A single steady-ticking spinner, hidden in quiet mode.
pub(crate) struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub(crate) fn start(msg: impl Into<String>, quiet: bool) -> Self {
        if quiet {
            return Self {
                pb: ProgressBar::hidden(),
            };
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb.set_message(msg.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    pub(crate) fn finish(self) {
        self.pb.finish_and_clear();
    }
}
