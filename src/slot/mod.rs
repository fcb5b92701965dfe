//! `Slot` — a nullable value container with inline storage.
//!
//! A `Slot<T>` holds exactly one `T` or nothing. The value lives directly
//! inside the slot (no heap allocation, no `T: Default` requirement) as a
//! `MaybeUninit<T>` guarded by an engaged flag; construction and destruction
//! of the value are performed in place at exactly the moments the API
//! promises.
//!
//! ## Access model
//!
//! - [`Slot::get`] / [`Slot::get_mut`] — safe, presence-checked views.
//! - [`Slot::value`] / [`Slot::value_mut`] — checked accessors that fail
//!   with [`EmptyAccessError`] on an empty slot.
//! - [`Slot::value_unchecked`] / [`Slot::value_unchecked_mut`] — the
//!   zero-check fast path for callers who have already established
//!   engagement; skipping the proof is undefined behavior, by contract.

mod inner;
mod raw;

use core::fmt;

use crate::error::EmptyAccessError;
use inner::Inner;

/// A container that holds exactly one `T` in inline storage, or nothing.
///
/// The slot never allocates: empty and engaged slots occupy the same
/// storage, sized and aligned for `T`. Dropping an engaged slot drops the
/// value in place exactly once.
///
/// # Examples
///
/// ```
/// use alcove::Slot;
///
/// let mut slot = Slot::empty();
/// assert!(!slot.has_value());
///
/// slot.set("inline".to_string());
/// assert_eq!(slot.value().map(String::as_str), Ok("inline"));
///
/// let taken = slot.take();
/// assert_eq!(taken.as_deref(), Some("inline"));
/// assert!(!slot.has_value());
/// ```
pub struct Slot<T> {
    inner: Inner<T>,
}

impl<T> Slot<T> {
    /// Creates a new empty slot. No `T` is constructed.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            inner: Inner::vacant(),
        }
    }

    /// Creates a slot engaged with `value`, moved directly into the
    /// slot's storage.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            inner: Inner::occupied(value),
        }
    }

    /// Returns `true` if the slot currently holds a value.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.inner.engaged
    }

    /// Gets a shared reference to the value if the slot is engaged.
    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        if !self.inner.engaged {
            return None;
        }
        // SAFETY: `engaged` is set, so the slot is initialized.
        unsafe { Some(raw::assume_init_ref(&self.inner.value)) }
    }

    /// Gets an exclusive reference to the value if the slot is engaged.
    #[inline(always)]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if !self.inner.engaged {
            return None;
        }
        // SAFETY: `engaged` is set; `&mut self` gives exclusivity.
        unsafe { Some(raw::assume_init_mut(&mut self.inner.value)) }
    }

    /// Gets a shared reference to the value, failing if the slot is empty.
    ///
    /// This is the checked counterpart of [`Slot::value_unchecked`] and the
    /// only read path that can fail.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the slot holds no value.
    #[inline]
    pub fn value(&self) -> Result<&T, EmptyAccessError> {
        self.get().ok_or(EmptyAccessError)
    }

    /// Gets an exclusive reference to the value, failing if the slot is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if the slot holds no value.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccessError> {
        self.get_mut().ok_or(EmptyAccessError)
    }

    /// Gets a shared reference to the value with no engagement check.
    ///
    /// This is a deliberate zero-cost fast path; nothing is validated at
    /// runtime in release builds.
    ///
    /// # Safety
    ///
    /// The slot must be engaged. Calling this on an empty slot is undefined
    /// behavior.
    #[inline(always)]
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.inner.engaged, "unchecked access to empty slot");
        // SAFETY: caller asserts the slot is engaged.
        unsafe { raw::assume_init_ref(&self.inner.value) }
    }

    /// Gets an exclusive reference to the value with no engagement check.
    ///
    /// # Safety
    ///
    /// The slot must be engaged. Calling this on an empty slot is undefined
    /// behavior.
    #[inline(always)]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.inner.engaged, "unchecked access to empty slot");
        // SAFETY: caller asserts the slot is engaged; `&mut self` gives
        // exclusivity.
        unsafe { raw::assume_init_mut(&mut self.inner.value) }
    }

    /// Returns a raw pointer to the slot's storage.
    ///
    /// The pointer is always valid to obtain; it is only valid to read
    /// through while the slot is engaged.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.inner.value.as_ptr()
    }

    /// Returns a raw mutable pointer to the slot's storage.
    ///
    /// The pointer is always valid to obtain; it is only valid to read or
    /// write through as an initialized `T` while the slot is engaged.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.inner.value.as_mut_ptr()
    }

    /// Installs `value` into the slot and returns a reference to it.
    ///
    /// An empty slot constructs the value in place and becomes engaged. An
    /// engaged slot assigns through the live value: the previous value is
    /// dropped and the new one moved into its place, with no flag churn.
    #[inline]
    pub fn set(&mut self, value: T) -> &mut T {
        if self.inner.engaged {
            // SAFETY: `engaged` is set, so the slot is initialized.
            let live = unsafe { raw::assume_init_mut(&mut self.inner.value) };
            *live = value;
            live
        } else {
            let live = self.inner.value.write(value);
            self.inner.engaged = true;
            live
        }
    }

    /// Installs `value` and returns the previously held value, if any.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let prior = self.take();
        self.inner.value.write(value);
        self.inner.engaged = true;
        prior
    }

    /// Moves the value out of the slot, leaving it empty.
    ///
    /// This is the explicit "transfer and disengage" operation: the source
    /// is left empty and reusable, never in a moved-from limbo.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if !self.inner.engaged {
            return None;
        }
        self.inner.engaged = false;
        // SAFETY: the flag was set and has now been cleared, so this read
        // is the value's only remaining owner.
        Some(unsafe { raw::read_out(&self.inner.value) })
    }

    /// Exchanges the contents of two slots without cloning.
    ///
    /// All four engagement combinations are handled: two engaged slots swap
    /// values in place, an engaged/empty pair transfers the value across,
    /// and two empty slots are left untouched.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.inner.engaged, other.inner.engaged) {
            (true, true) => {
                // SAFETY: both flags are set, so both slots are initialized.
                unsafe { raw::swap_slots(&mut self.inner.value, &mut other.inner.value) }
            }
            (true, false) => {
                self.inner.engaged = false;
                // SAFETY: `self` was engaged and its flag is now cleared;
                // the value moves into `other` under its freshly set flag.
                let value = unsafe { raw::read_out(&self.inner.value) };
                other.inner.value.write(value);
                other.inner.engaged = true;
            }
            (false, true) => {
                other.inner.engaged = false;
                // SAFETY: `other` was engaged and its flag is now cleared.
                let value = unsafe { raw::read_out(&other.inner.value) };
                self.inner.value.write(value);
                self.inner.engaged = true;
            }
            (false, false) => {}
        }
    }

    /// Destroys the held value in place, if any, leaving the slot empty.
    ///
    /// Idempotent: resetting an empty slot is a no-op.
    #[inline]
    pub fn reset(&mut self) {
        if self.inner.engaged {
            // Clear the flag before running the destructor so a panicking
            // drop cannot run twice.
            self.inner.engaged = false;
            // SAFETY: the flag was set, so the slot holds a live value that
            // has not been dropped.
            unsafe { raw::drop_in_place(&mut self.inner.value) };
        }
    }

    /// Consumes the slot and returns the held value, if any.
    #[inline]
    pub fn into_inner(mut self) -> Option<T> {
        self.take()
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Slot<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Slot<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::new(value.clone()),
            None => Self::empty(),
        }
    }

    /// Copy-assigns from `source`, branching on the engagement of both
    /// sides rather than destroying and reconstructing:
    ///
    /// | `self`   | `source` | action |
    /// |----------|----------|--------|
    /// | empty    | empty    | no-op |
    /// | empty    | engaged  | clone-construct in place, become engaged |
    /// | engaged  | empty    | drop in place, become empty |
    /// | engaged  | engaged  | `T::clone_from` into the live value |
    ///
    /// The engaged/engaged case goes through `T::clone_from`, so a `T` that
    /// reuses its own resources on assignment keeps that behavior.
    fn clone_from(&mut self, source: &Self) {
        match (self.inner.engaged, source.inner.engaged) {
            (true, true) => {
                // SAFETY: both flags are set, so both slots are initialized.
                let live = unsafe { raw::assume_init_mut(&mut self.inner.value) };
                let src = unsafe { raw::assume_init_ref(&source.inner.value) };
                live.clone_from(src);
            }
            (true, false) => self.reset(),
            (false, true) => {
                // SAFETY: `source` is engaged.
                let src = unsafe { raw::assume_init_ref(&source.inner.value) };
                self.inner.value.write(src.clone());
                self.inner.engaged = true;
            }
            (false, false) => {}
        }
    }
}

impl<T> From<T> for Slot<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Slot<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::empty(),
        }
    }
}

impl<T> From<Slot<T>> for Option<T> {
    #[inline]
    fn from(slot: Slot<T>) -> Self {
        slot.into_inner()
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Slot").field(value).finish(),
            None => f.write_str("Slot(<empty>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem;

    #[test]
    fn test_storage_layout_follows_t() {
        assert_eq!(mem::align_of::<Slot<u64>>(), mem::align_of::<u64>());
        assert!(mem::size_of::<Slot<u64>>() >= mem::size_of::<u64>());
        assert_eq!(mem::align_of::<Slot<[u8; 3]>>(), mem::align_of::<[u8; 3]>());
    }

    #[test]
    fn test_flag_transitions() {
        let mut slot = Slot::empty();
        assert!(!slot.has_value());

        slot.set(1u32);
        assert!(slot.has_value());

        slot.reset();
        assert!(!slot.has_value());

        slot.reset();
        assert!(!slot.has_value());
    }

    #[test]
    fn test_pointer_accessors_track_storage() {
        let mut slot = Slot::new(9u8);
        let before = slot.as_ptr();
        slot.set(5);
        assert_eq!(slot.as_ptr(), before);
        // SAFETY: slot is engaged.
        assert_eq!(unsafe { *slot.as_ptr() }, 5);
    }

    #[test]
    fn test_unchecked_access_under_proven_engagement() {
        let mut slot = Slot::new(String::from("fast"));
        assert!(slot.has_value());
        // SAFETY: engagement established on the line above.
        unsafe {
            assert_eq!(slot.value_unchecked(), "fast");
            slot.value_unchecked_mut().push_str("-path");
            assert_eq!(slot.value_unchecked(), "fast-path");
        }
    }

    #[test]
    fn test_set_returns_live_reference() {
        let mut slot = Slot::empty();
        *slot.set(10u32) += 5;
        assert_eq!(slot.value(), Ok(&15));
    }
}
