//! Progress reporting for content generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use polyglot_application::ProgressNotifier;
use polyglot_domain::ContentKind;
use std::sync::Mutex;

/// Reports progress with an indicatif bar over the parallel requests
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn display_name(kind: ContentKind) -> &'static str {
        match kind {
            ContentKind::Vocabulary => "Vocabulary",
            ContentKind::Quiz => "Quiz",
            ContentKind::Summary => "Summary",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_generation_start(&self, total_requests: usize) {
        let pb = ProgressBar::new(total_requests as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Generating");
        pb.set_message("Analyzing video...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_request_complete(&self, kind: ContentKind, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), Self::display_name(kind))
            } else {
                format!("{} {}", "x".red(), Self::display_name(kind))
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_generation_complete(&self, success: bool) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut bar| bar.take()) {
            if success {
                pb.finish_with_message(format!("{}", "Study material ready!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "Generation failed".red()));
            }
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_generation_start(&self, total_requests: usize) {
        eprintln!(
            "{} {} ({} requests)",
            "->".cyan(),
            "Generating study material".bold(),
            total_requests
        );
    }

    fn on_request_complete(&self, kind: ContentKind, success: bool) {
        let name = ProgressReporter::display_name(kind);
        if success {
            eprintln!("  {} {}", "v".green(), name);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), name);
        }
    }

    fn on_generation_complete(&self, _success: bool) {
        eprintln!();
    }
}
