use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Pointer listeners that outlive the handle's own hit area.
///
/// Acquired when a drag starts so moves and releases keep arriving after the
/// pointer leaves the handle, released when the drag session ends.
#[cfg_attr(test, mockall::automock)]
pub trait PointerCapture {
    fn acquire(&self);
    fn release(&self);
}

/// Holds a capture for as long as it lives.
pub struct CaptureGuard {
    capture: Rc<dyn PointerCapture>,
}

impl CaptureGuard {
    pub fn acquire(capture: Rc<dyn PointerCapture>) -> Self {
        capture.acquire();
        Self { capture }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.release();
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard").finish_non_exhaustive()
    }
}

/// Counts outstanding acquisitions. Useful for embedders that only need to
/// know whether some scrollbar currently owns the pointer.
#[derive(Debug, Default)]
pub struct CaptureCounter {
    active: Cell<usize>,
}

impl CaptureCounter {
    pub fn active(&self) -> usize {
        self.active.get()
    }

    pub fn is_captured(&self) -> bool {
        self.active.get() > 0
    }
}

impl PointerCapture for CaptureCounter {
    fn acquire(&self) {
        self.active.set(self.active.get() + 1);
    }

    fn release(&self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let counter = Rc::new(CaptureCounter::default());
        {
            let _guard = CaptureGuard::acquire(counter.clone());
            assert!(counter.is_captured());
        }
        assert_eq!(counter.active(), 0);
    }

    #[test]
    fn test_counter_never_underflows() {
        let counter = CaptureCounter::default();
        counter.release();
        assert_eq!(counter.active(), 0);
    }
}
