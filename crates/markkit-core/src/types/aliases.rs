//! Type aliases for shared ownership of coder state.
//!
//! A coder field lives inside one document and is normally driven from a
//! single thread. When several print stations must draw from the same
//! sequence, the coder is moved behind a [`ThreadSafe`] handle so that each
//! increment-then-compare step runs under one lock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use markkit_core::types::*;
//!
//! // Instead of: Arc<Mutex<SerialNumberCoder>>
//! let serial: ThreadSafe<SerialNumberCoder> = thread_safe(SerialNumberCoder::default());
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when a settings surface and its host share one coder on the UI thread.
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>>)
// =============================================================================

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A UI callback receiving a setting id and its new value as text.
pub type SettingChangedCallback = Box<dyn Fn(&str, &str)>;

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Wrap a value for single-threaded sharing.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Wrap a value for cross-thread sharing behind a mutex.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_mutation_is_visible() {
        let counter = shared(0_u32);
        let other = Rc::clone(&counter);
        *other.borrow_mut() += 5;
        assert_eq!(*counter.borrow(), 5);
    }

    #[test]
    fn test_thread_safe_counter() {
        let counter = thread_safe(0_u64);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let c = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        *c.lock() += 1;
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(*counter.lock(), 4000);
    }
}
