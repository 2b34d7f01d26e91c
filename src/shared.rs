//! Interrupt-safe cell for handing a player to its callbacks.
//!
//! Timer and drain callbacks run in interrupt context while the main loop
//! reconfigures the same player. [`Shared`] keeps the player behind a
//! `critical-section` mutex so both sides take turns.

use core::cell::RefCell;

use critical_section::Mutex;

/// A value shared between the main loop and interrupt handlers.
///
/// The cell starts empty so it can live in a `static`; install the value
/// once the hardware is set up.
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Shared<T> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store `value`, returning the one it replaces.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(value)))
    }

    /// Remove the value, leaving the cell empty.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Run `f` on the value inside a critical section.
    ///
    /// Returns `None` if nothing is installed or the value is already
    /// borrowed further up the stack.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        })
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow()
                .map_or(true, |slot| slot.is_some())
        })
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}
