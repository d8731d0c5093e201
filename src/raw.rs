use std::{
	alloc::{
		self,
		Layout
	},
	marker::PhantomData,
	mem,
	ptr::NonNull
};
use crate::ReserveError;

/// Exclusively owned heap block of `capacity` slots of `T`.
///
/// This type does not in anyway inspect the memory that it manages. When dropped it *will*
/// free its memory, but it *won't* try to drop its contents. It is up to the user of `RawBuf`
/// to handle the actual things *stored* inside of a `RawBuf`.
///
/// A zero capacity never allocates, and neither does a zero-sized `T`.
pub struct RawBuf<T> {
	ptr: NonNull<T>,
	capacity: usize,
	marker: PhantomData<T>
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> Drop for RawBuf<T> {
	fn drop(&mut self) {
		if let Some((ptr, layout)) = self.current_memory() {
			trace!(target: "simple_vec::raw", "releasing {} slots ({} bytes)", self.capacity, layout.size());
			unsafe {
				alloc::dealloc(ptr.as_ptr(), layout)
			}
		}
	}
}

impl<T> Default for RawBuf<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T> RawBuf<T> {
	/// Creates an empty buffer without allocating.
	#[inline]
	pub const fn new() -> Self {
		RawBuf {
			ptr: NonNull::dangling(),
			capacity: 0,
			marker: PhantomData
		}
	}

	/// Allocates a buffer of exactly `capacity` uninitialized slots.
	///
	/// # Panics
	///
	/// Panics if the byte size of the buffer overflows.
	/// Aborts through [`handle_alloc_error`](std::alloc::handle_alloc_error) if the
	/// allocator fails.
	#[inline]
	pub fn allocate(capacity: usize) -> Self {
		handle_reserve(Self::try_allocate(capacity))
	}

	/// The same as `allocate`, but returns on errors instead of panicking or aborting.
	pub fn try_allocate(capacity: usize) -> Result<Self, ReserveError> {
		if capacity == 0 {
			return Ok(Self::new())
		}

		let layout = Layout::array::<T>(capacity).map_err(|_| ReserveError::CapacityOverflow)?;
		alloc_guard(layout.size())?;

		let ptr = if layout.size() == 0 {
			NonNull::dangling()
		} else {
			// SAFETY: the layout has a non-zero size.
			let ptr = unsafe { alloc::alloc(layout) };
			NonNull::new(ptr.cast::<T>()).ok_or(ReserveError::AllocError { layout })?
		};

		trace!(target: "simple_vec::raw", "allocated {} slots ({} bytes)", capacity, layout.size());

		Ok(RawBuf {
			ptr,
			capacity,
			marker: PhantomData
		})
	}

	/// Start address of the buffer.
	///
	/// Dangling (but well aligned) when nothing is allocated.
	#[inline]
	pub fn ptr(&self) -> *mut T {
		self.ptr.as_ptr()
	}

	/// Number of slots in the buffer.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Exchanges the ownership of the two blocks.
	#[inline]
	pub fn swap(&mut self, other: &mut RawBuf<T>) {
		mem::swap(self, other)
	}

	/// Returns the current allocated memory and layout.
	///
	/// Returns `None` if nothing is allocated, or if the size of `T` is 0.
	fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
		if self.capacity == 0 || mem::size_of::<T>() == 0 {
			None
		} else {
			// We have an allocated chunk of memory, so we can bypass runtime
			// checks to get our current layout.
			unsafe {
				let align = mem::align_of::<T>();
				let size = mem::size_of::<T>() * self.capacity;
				let layout = Layout::from_size_align_unchecked(size, align);
				Some((self.ptr.cast(), layout))
			}
		}
	}
}

// Central function for reserve error handling.
#[inline]
pub(crate) fn handle_reserve<R>(result: Result<R, ReserveError>) -> R {
	match result {
		Err(ReserveError::CapacityOverflow) => capacity_overflow(),
		Err(ReserveError::AllocError { layout }) => alloc::handle_alloc_error(layout),
		Ok(r) => r
	}
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// On 64-bit we just need to check for overflow since trying to allocate
// `> isize::MAX` bytes will surely fail. On 32-bit and 16-bit we need to add
// an extra guard for this in case we're running on a platform which can use
// all 4GB in user-space, e.g., PAE or x32.
#[inline]
fn alloc_guard(alloc_size: usize) -> Result<(), ReserveError> {
	if mem::size_of::<usize>() < 8 && alloc_size > isize::MAX as usize {
		Err(ReserveError::CapacityOverflow)
	} else {
		Ok(())
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_capacity_does_not_allocate() {
		let buf: RawBuf<u64> = RawBuf::allocate(0);
		assert_eq!(buf.capacity(), 0);
		assert_eq!(buf.ptr(), NonNull::<u64>::dangling().as_ptr());
		assert!(buf.current_memory().is_none());
	}

	#[test]
	fn allocates_exact_capacity() {
		let buf: RawBuf<u32> = RawBuf::allocate(7);
		assert_eq!(buf.capacity(), 7);
		let (_, layout) = buf.current_memory().unwrap();
		assert_eq!(layout.size(), 7 * mem::size_of::<u32>());
		assert_eq!(layout.align(), mem::align_of::<u32>());
	}

	#[test]
	fn zero_sized_slots_are_not_allocated() {
		let buf: RawBuf<()> = RawBuf::allocate(1024);
		assert_eq!(buf.capacity(), 1024);
		assert!(buf.current_memory().is_none());
	}

	#[test]
	fn swap_exchanges_blocks() {
		let mut a: RawBuf<u8> = RawBuf::allocate(4);
		let mut b: RawBuf<u8> = RawBuf::new();
		let a_ptr = a.ptr();
		a.swap(&mut b);
		assert_eq!(a.capacity(), 0);
		assert_eq!(b.capacity(), 4);
		assert_eq!(b.ptr(), a_ptr);
	}

	#[test]
	fn oversized_request_is_an_overflow() {
		let result = RawBuf::<u64>::try_allocate(usize::MAX);
		assert_eq!(result.err(), Some(ReserveError::CapacityOverflow));
	}
}
