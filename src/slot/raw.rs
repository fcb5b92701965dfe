//! Unsafe, centralized operations on the `MaybeUninit<T>` storage slot.
//!
//! The container keeps its value in a `MaybeUninit<T>` guarded by an
//! engaged flag, and every operation that touches the uninitialized side of
//! that storage funnels through here, so there is one place to audit:
//! reference conjuring, bitwise moves out of the slot, byte swaps between
//! slots, and in-place drops.
//!
//! ## Core invariant
//! For all callers in this crate, the slot is initialized *exactly when* the
//! owning container's engaged flag is set, and every operation here that
//! consumes or destroys the value is paired with a flag update in the same
//! caller.
//!
//! References produced here obey the usual aliasing rules; the borrow on
//! the slot argument carries over to the result.

use core::{mem::MaybeUninit, ptr};

/// Conjures a shared reference to the value held in an initialized slot.
///
/// # Safety
/// - The slot's engaged flag must be set (the value is initialized).
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Conjures an exclusive reference to the value held in an initialized
/// slot.
///
/// # Safety
/// - The slot's engaged flag must be set (the value is initialized).
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; exclusivity comes from
    // the `&mut` argument.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves the initialized value out of a slot.
///
/// # Safety
/// - The slot must be initialized.
/// - The caller must clear the engaged flag (or refill the slot) in the
///   same operation, so the value cannot be dropped twice.
#[inline(always)]
pub(crate) unsafe fn read_out<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization + `ptr::read` contract.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Swaps the contents of two slots by bytes.
///
/// # Safety
/// - Both slots must be initialized, so the exchanged bytes stay paired
///   with engaged flags on both sides.
#[inline(always)]
pub(crate) unsafe fn swap_slots<T>(a: &mut MaybeUninit<T>, b: &mut MaybeUninit<T>) {
    // SAFETY: `&mut` arguments guarantee valid, non-aliasing pointers.
    unsafe { ptr::swap(a.as_mut_ptr(), b.as_mut_ptr()) }
}

/// Drops the initialized value in place.
///
/// # Safety
/// - The slot must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
