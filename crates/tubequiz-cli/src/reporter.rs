//! Console progress reporter.

use tubequiz_core::progress::{ProgressReporter, Stage};

/// Writes one status line per pipeline event to stderr.
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_stage(&self, stage: Stage) {
        match stage {
            Stage::Done => eprintln!("Done."),
            _ => eprintln!("{stage}..."),
        }
    }

    fn on_section_summarized(&self, section: usize, total: usize) {
        eprintln!("  Summarized section {section}/{total}");
    }

    fn on_question_generated(&self, part: usize, total: usize) {
        eprintln!("  Generated question {part}/{total}");
    }

    fn on_question_failed(&self, part: usize, total: usize, error: &str) {
        eprintln!("  Skipped question {part}/{total}: {error}");
    }
}
