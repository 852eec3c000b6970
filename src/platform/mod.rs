//! Process-wide media-subsystem lifecycle.
//!
//! The OS capture stack must be initialized before any device work and torn
//! down when the last user is done. Instead of a hidden global flag, callers
//! hold an explicit [`MediaSubsystem`] guard: the subsystem is initialized
//! while at least one guard is alive and released when the last one drops.

use crate::errors::CameraError;
use lazy_static::lazy_static;
use std::sync::Mutex;

lazy_static! {
    static ref SUBSYSTEM_REFS: Mutex<usize> = Mutex::new(0);
}

/// Scoped handle to the initialized media subsystem.
///
/// Acquisition is re-entrant: nested guards share one underlying
/// initialization and only the outermost release tears it down.
#[derive(Debug)]
pub struct MediaSubsystem {
    _private: (),
}

impl MediaSubsystem {
    /// Initialize the media subsystem, or join an existing initialization.
    pub fn acquire() -> Result<Self, CameraError> {
        let mut refs = SUBSYSTEM_REFS
            .lock()
            .map_err(|_| CameraError::subsystem("lock poisoned by previous panic"))?;

        if *refs == 0 {
            log::info!("Initializing media subsystem");
        } else {
            log::debug!("Joining initialized media subsystem ({} holders)", *refs);
        }
        *refs += 1;

        Ok(MediaSubsystem { _private: () })
    }

    /// Whether any guard currently holds the subsystem initialized.
    pub fn is_initialized() -> bool {
        SUBSYSTEM_REFS.lock().map(|refs| *refs > 0).unwrap_or(false)
    }
}

impl Drop for MediaSubsystem {
    fn drop(&mut self) {
        // A poisoned lock means a panic is already unwinding; skip the
        // bookkeeping rather than aborting via double panic.
        if let Ok(mut refs) = SUBSYSTEM_REFS.lock() {
            *refs = refs.saturating_sub(1);
            if *refs == 0 {
                log::info!("Releasing media subsystem");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests share one process-wide refcount, so each test reasons about
    // deltas rather than absolute initialization state.

    #[test]
    fn test_guard_initializes_and_releases() {
        let guard = MediaSubsystem::acquire().unwrap();
        assert!(MediaSubsystem::is_initialized());
        drop(guard);
    }

    #[test]
    fn test_nested_acquire_is_reentrant() {
        let outer = MediaSubsystem::acquire().unwrap();
        let inner = MediaSubsystem::acquire().unwrap();
        drop(inner);
        assert!(MediaSubsystem::is_initialized());
        drop(outer);
    }
}
