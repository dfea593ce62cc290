use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const PROGRESS_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Uses indicatif for the lookup progress bar. Warnings raised while the bar
/// is active are printed above it.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| eprintln!("{}", message)),
            _ => eprintln!("{}", message),
        }
    }

    fn report_completion(&self, message: &str) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("📖 Loading package-lock.json");
        reporter.report_progress(1, 2, Some("lodash"));
        reporter.report_error("⚠️  Warning: test");
        reporter.report_progress(2, 2, Some("debug"));
        reporter.report_completion("✅ done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_error_without_progress_bar() {
        let reporter = StderrProgressReporter::default();
        reporter.report_error("⚠️  Warning: no bar yet");
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
