//! # `alcove` - Inline Nullable Value Slot
//!
//! A generic nullable-value container that holds exactly one value of a
//! caller-chosen `T`, or nothing, in inline storage. No heap allocation is
//! ever performed and `T` is not required to implement `Default`.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **Audited unsafe foundation**: every raw slot operation (uninitialized
//!   reads, in-place drops, reference conjuring) lives in a single
//!   `pub(crate)` module with explicit per-function contracts.
//! - **Exact lifetime bookkeeping**: the contained value is constructed in
//!   place when the slot becomes engaged and dropped in place exactly once
//!   when the slot is reset, overwritten, or dropped.
//! - **Layout fidelity**: the slot's storage derives its size and alignment
//!   from `T` itself, verified by compile-time assertions below.
//!
//! ### Access Model
//! - **Checked access**: [`Slot::value`] / [`Slot::value_mut`] return
//!   `Err(EmptyAccessError)` on an empty slot — the only failing operations
//!   in the crate.
//! - **Safe presence-checked views**: [`Slot::get`] / [`Slot::get_mut`]
//!   return `Option<&T>` with no way to touch absent storage.
//! - **Unchecked escape hatch**: [`Slot::value_unchecked`] and friends skip
//!   the engagement check entirely. They are `unsafe fn`s whose contract is
//!   the caller's proof of engagement; misuse is undefined behavior, not a
//!   runtime error.
//!
//! ## Example
//!
//! ```rust
//! use alcove::Slot;
//!
//! let mut slot = Slot::new(42);
//! assert!(slot.has_value());
//! assert_eq!(slot.value(), Ok(&42));
//!
//! slot.reset();
//! assert!(!slot.has_value());
//! assert!(slot.value().is_err());
//!
//! slot.set(7);
//! assert_eq!(slot.value(), Ok(&7));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod slot;

pub use error::EmptyAccessError;
pub use slot::Slot;

// Compile-time assertions for the storage layout contract.
const _: () = {
    use core::mem;

    // The slot's alignment follows `T`, never a fixed default.
    assert!(mem::align_of::<Slot<u8>>() == mem::align_of::<u8>());
    assert!(mem::align_of::<Slot<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<Slot<u128>>() == mem::align_of::<u128>());

    // Storage always reserves room for a full `T`, engaged or not.
    assert!(mem::size_of::<Slot<u64>>() >= mem::size_of::<u64>());
    assert!(mem::size_of::<Slot<[u64; 4]>>() >= mem::size_of::<[u64; 4]>());

    // The engaged flag rides alongside the value; no hidden indirection.
    assert!(mem::size_of::<Slot<u8>>() <= mem::size_of::<u8>() * 2);
    assert!(mem::size_of::<Slot<u64>>() <= mem::size_of::<u64>() * 2);
};
