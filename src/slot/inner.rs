use core::mem::MaybeUninit;

/// `value` leads so `engaged` can occupy its tail padding.
pub(super) struct Inner<T> {
    pub(super) value: MaybeUninit<T>,
    pub(super) engaged: bool,
}

impl<T> Inner<T> {
    /// An uninitialized slot with the flag cleared.
    #[inline(always)]
    pub(super) const fn vacant() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            engaged: false,
        }
    }

    /// A slot holding `value`, flag set.
    #[inline(always)]
    pub(super) const fn occupied(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            engaged: true,
        }
    }
}
