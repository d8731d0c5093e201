//! This crate provides the [`SimpleVec`] data structure,
//! a contiguous growable array with value semantics.
//! Appending to a full array doubles its capacity (starting from 1),
//! which makes appends amortized constant time.
//! The capacity is never reduced implicitly.
//!
//! ## Basic usage
//!
//! ```rust
//! use simple_vec::{simple_vec, SimpleVec};
//!
//! let mut v = SimpleVec::new();
//! v.push_back(1);
//! v.push_back(2);
//! v.push_back(3);
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//!
//! let w = simple_vec![1, 2, 3];
//! assert_eq!(v, w);
//! assert_eq!(w.capacity(), 3);
//! ```
//!
//! Indexing is the fast path and panics past the length,
//! whereas [`SimpleVec::at`] reports the failure as an error:
//! ```rust
//! # use simple_vec::{simple_vec, OutOfRange};
//! let v = simple_vec!['a', 'b'];
//! assert_eq!(v[1], 'b');
//! assert_eq!(v.at(2), Err(OutOfRange { index: 2, len: 2 }));
//! ```
//!
//! Capacity can be requested upfront without creating any element:
//! ```rust
//! # use simple_vec::{reserve, SimpleVec};
//! let mut v: SimpleVec<String> = reserve(32).into();
//! assert!(v.is_empty());
//! v.resize(3);
//! assert_eq!(v, ["", "", ""]);
//! assert_eq!(v.capacity(), 32);
//! ```
//!
//! ## Features
//!
//! - `logging`: reports reallocations through the [`log`](https://crates.io/crates/log) crate.
#[macro_use]
mod logging;

mod error;
mod hint;
pub mod raw;
pub mod vec;

#[cfg(test)]
pub mod dropflag;

pub use error::{
	OutOfRange,
	ReserveError
};
pub use hint::{
	reserve,
	ReserveHint
};
pub use vec::{
	IntoIter,
	SimpleVec
};

/// Creates a [`SimpleVec`] containing the arguments.
///
/// Like `vec!`, it comes in two forms:
/// a list of elements, giving an array whose capacity is exactly the number of elements,
/// or an element and a length, cloning the element.
///
/// ```
/// # use simple_vec::simple_vec;
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let w = simple_vec![0u8; 4];
/// assert_eq!(w, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vec {
	() => (
		$crate::SimpleVec::new()
	);
	($elem:expr; $n:expr) => (
		$crate::SimpleVec::from_elem($n, $elem)
	);
	($($x:expr),+ $(,)?) => (
		$crate::SimpleVec::from([$($x),+])
	);
}
