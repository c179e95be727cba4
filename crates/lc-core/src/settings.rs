//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date treated as "today"
//! by grid building and availability checks when the caller does not pass
//! one explicitly.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! The evaluation date is stored behind a `Mutex` so that it can be changed
//! from any thread.  Tests that pin it should use [`ScopedEvaluationDate`],
//! which restores the previous value on drop.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by leavecal.
pub struct Settings {
    /// The pinned evaluation date as a day serial, `None` for "use the clock".
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the pinned evaluation date serial, if any.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Pin the evaluation date to the given serial.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }

    fn replace_evaluation_date_serial(&self, serial: Option<i32>) -> Option<i32> {
        let mut guard = self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned");
        std::mem::replace(&mut *guard, serial)
    }
}

/// Pins the evaluation date for the lifetime of the guard.
///
/// ```
/// use lc_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _pin = ScopedEvaluationDate::new(45_000);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(45_000));
/// }
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Pin the evaluation date to `serial`, remembering the previous value.
    pub fn new(serial: i32) -> Self {
        let previous = Settings::instance().replace_evaluation_date_serial(Some(serial));
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        Settings::instance().replace_evaluation_date_serial(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_date_restores_previous_value() {
        let settings = Settings::instance();
        let outer = ScopedEvaluationDate::new(100);
        {
            let _inner = ScopedEvaluationDate::new(200);
            assert_eq!(settings.evaluation_date_serial(), Some(200));
        }
        assert_eq!(settings.evaluation_date_serial(), Some(100));
        drop(outer);
    }
}
