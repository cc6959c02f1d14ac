use alloc::boxed::Box;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use std::panic;

/// Runs many labeled test cases, letting every case run even if earlier ones panic,
/// then panics when dropped if any case failed, naming the failed cases.
///
/// Use this for randomized tests with many seeds, where knowing *which* seeds fail is
/// the useful part of the report.
///
/// ```
/// use gridset::util::MultiFailure;
///
/// let mut cases = MultiFailure::new();
/// for seed in 0..10u64 {
///     cases.catch(seed, || assert!(seed < 100));
/// }
/// assert!(cases.failed_labels().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MultiFailure {
    attempted: usize,
    failed: Vec<String>,
}

impl MultiFailure {
    /// Constructs a [`MultiFailure`] which has run no cases.
    #[inline(never)]
    #[must_use = "this is useless if never invoked to collect failures"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `case`. If it panics, records `label` as failed and returns [`None`];
    /// the panic is reported again when this [`MultiFailure`] is dropped.
    #[inline(never)]
    pub fn catch<L, O, F>(&mut self, label: L, case: F) -> Option<O>
    where
        L: core::fmt::Display,
        F: FnOnce() -> O + panic::UnwindSafe,
    {
        self.attempted += 1;
        match panic::catch_unwind(case) {
            Ok(output) => Some(output),
            Err(_) => {
                // The panic hook has already printed the case's own message.
                self.failed.push(label.to_string());
                None
            }
        }
    }

    /// Labels of the cases which have failed so far.
    pub fn failed_labels(&self) -> &[String] {
        &self.failed
    }
}

impl Drop for MultiFailure {
    #[inline(never)]
    fn drop(&mut self) {
        if std::thread::panicking() || self.failed.is_empty() {
            return;
        }

        let message = format!(
            "{failed} of {attempted} cases failed: {labels}",
            failed = self.failed.len(),
            attempted = self.attempted,
            labels = self.failed.join(", "),
        );
        std::eprintln!("\n{message}");
        // `resume_unwind` skips the panic hook, so the summary is not printed twice.
        panic::resume_unwind(Box::new(message));
    }
}
