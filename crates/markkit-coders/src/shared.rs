//! Thread-safe coder handle.
//!
//! The serial and VIN coders read, emit and advance their counter in one
//! step. When several print stations draw from one sequence, that step has
//! to run under a lock or two stations can emit the same value.

use crate::coders::Coder;
use crate::strategy::CoderStrategy;
use markkit_core::{thread_safe, CoderConfiguration, CoderError, ThreadSafe};
use std::sync::Arc;

/// A coder shared between threads; every operation takes the lock once
#[derive(Debug, Clone)]
pub struct SharedCoder {
    inner: ThreadSafe<Coder>,
}

impl SharedCoder {
    pub fn new(coder: impl Into<Coder>) -> Self {
        Self {
            inner: thread_safe(coder.into()),
        }
    }

    pub fn generate_code(&self) -> String {
        self.inner.lock().generate_code()
    }

    /// Generate `count` consecutive codes without other callers interleaving
    pub fn generate_batch(&self, count: usize) -> Vec<String> {
        self.inner.lock().generate_batch(count)
    }

    pub fn preview(&self) -> String {
        self.inner.lock().preview()
    }

    pub fn configuration(&self) -> CoderConfiguration {
        self.inner.lock().configuration()
    }

    pub fn set_configuration(&self, config: &CoderConfiguration) -> Result<(), CoderError> {
        self.inner.lock().set_configuration(config)
    }

    pub fn reset(&self) {
        self.inner.lock().reset()
    }

    /// Run `f` with exclusive access to the underlying coder
    pub fn with<R>(&self, f: impl FnOnce(&mut Coder) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Whether both handles point at the same coder
    pub fn ptr_eq(&self, other: &SharedCoder) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
