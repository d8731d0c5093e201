/// Request for pre-reserved capacity, without any initial element.
///
/// It is consumed by the [`SimpleVec`](crate::SimpleVec) constructors:
/// ```
/// use simple_vec::{reserve, SimpleVec};
///
/// let v: SimpleVec<u32> = reserve(16).into();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveHint {
	capacity: usize
}

impl ReserveHint {
	#[inline]
	pub const fn new(capacity: usize) -> ReserveHint {
		ReserveHint { capacity }
	}

	/// Requested capacity.
	#[inline]
	pub const fn capacity(&self) -> usize {
		self.capacity
	}
}

/// Shorthand for [`ReserveHint::new`].
#[inline]
pub const fn reserve(capacity: usize) -> ReserveHint {
	ReserveHint::new(capacity)
}
