//! Error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Checked access to an index that is not less than the length of the array.
///
/// The array is left untouched when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
	/// Requested index.
	pub index: usize,

	/// Length of the array at the time of the access.
	pub len: usize
}

impl fmt::Display for OutOfRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "index {} out of range for length {}", self.index, self.len)
	}
}

impl Error for OutOfRange {}

/// Failure to grow the backing storage of an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReserveError {
	/// The requested capacity does not fit in the address space.
	CapacityOverflow,

	/// The allocator refused to provide a block for the given layout.
	AllocError {
		/// Layout of the refused block.
		layout: Layout
	}
}

impl fmt::Display for ReserveError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CapacityOverflow => write!(f, "capacity overflow"),
			Self::AllocError { layout } => write!(
				f,
				"memory allocation of {} bytes (align {}) failed",
				layout.size(),
				layout.align()
			)
		}
	}
}

impl Error for ReserveError {}
