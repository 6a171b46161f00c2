use indicatif::{ProgressBar, ProgressStyle};

use dups_compare::ProgressObserver;

const TEMPLATE: &str = "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Terminal progress bar on stderr. Hidden automatically when stderr is not
/// a terminal.
#[derive(Debug, Clone)]
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(message: &'static str) -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(message);
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self { bar: ProgressBar::hidden() }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl ProgressObserver for BarProgress {
    fn on_start(&self, total: u64) {
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    fn on_advance(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn on_finish(&self) {
        self.bar.finish_and_clear();
    }
}
