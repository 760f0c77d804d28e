//! Global library settings.
//!
//! [`Settings`] holds the **rejection attempt cap**, the maximum number of
//! candidates a validated rejection sampler draws before reporting
//! `Error::RejectionLimit`. It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the cap is stored behind a `Mutex` so that it can be
//! changed from any thread. Tests that change it should use
//! [`ScopedRejectionLimit`] so the previous value is restored.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by the randvar library.
pub struct Settings {
    /// `None` means rejection loops never give up.
    rejection_limit: Mutex<Option<u64>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            rejection_limit: Mutex::new(None),
        })
    }

    // A poisoned lock still holds a valid `Option<u64>`.
    fn lock(&self) -> MutexGuard<'_, Option<u64>> {
        self.rejection_limit
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current rejection attempt cap, or `None` when unbounded.
    pub fn rejection_limit(&self) -> Option<u64> {
        *self.lock()
    }

    /// Install a rejection attempt cap. A cap of zero is stored as one so
    /// that every sampler draws at least one candidate.
    pub fn set_rejection_limit(&self, attempts: u64) {
        let attempts = attempts.max(1);
        tracing::debug!(attempts, "rejection limit installed");
        *self.lock() = Some(attempts);
    }

    /// Remove the cap, restoring unbounded rejection loops.
    pub fn reset_rejection_limit(&self) {
        tracing::debug!("rejection limit cleared");
        *self.lock() = None;
    }
}

/// RAII guard that installs a rejection cap and restores the previous one
/// when dropped.
#[must_use = "the previous limit is restored as soon as the guard is dropped"]
pub struct ScopedRejectionLimit {
    previous: Option<u64>,
}

impl ScopedRejectionLimit {
    /// Install `attempts` as the cap for the lifetime of the guard.
    pub fn new(attempts: u64) -> Self {
        let settings = Settings::instance();
        let previous = settings.rejection_limit();
        settings.set_rejection_limit(attempts);
        Self { previous }
    }
}

impl Drop for ScopedRejectionLimit {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(attempts) => settings.set_rejection_limit(attempts),
            None => settings.reset_rejection_limit(),
        }
    }
}
