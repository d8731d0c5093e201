use core::{
	borrow::{
		Borrow,
		BorrowMut
	},
	cmp::Ordering,
	fmt,
	hash::{
		Hash,
		Hasher
	},
	iter::FusedIterator,
	mem,
	ops::{
		Deref,
		DerefMut,
		Index,
		IndexMut
	},
	ptr,
	slice::{
		self,
		SliceIndex
	}
};
use crate::{
	raw::{
		RawBuf,
		handle_reserve
	},
	OutOfRange,
	ReserveError,
	ReserveHint
};

/// Contiguous growable array type.
///
/// The array owns a single [`RawBuf`] of `capacity` slots, the first `len` of which hold
/// live elements.
/// When an element is appended to a full array, the capacity doubles (starting from 1),
/// and the live elements are moved into the new buffer.
/// The capacity never shrinks unless [`shrink_to_fit`](SimpleVec::shrink_to_fit) is called.
///
/// Two access paths coexist: indexing (`v[i]`) is the fast path and panics past the length,
/// while [`at`](SimpleVec::at) reports an [`OutOfRange`] error.
///
/// # Examples
///
/// ```
/// # use simple_vec::SimpleVec;
/// let mut v = SimpleVec::new();
/// v.push_back(1);
/// v.push_back(2);
/// v.push_back(3);
/// assert_eq!(v.capacity(), 4);
///
/// v.insert(1, 9);
/// assert_eq!(v, [1, 9, 2, 3]);
/// assert_eq!(v.erase(1), 9);
/// assert!(v.at(3).is_err());
/// ```
pub struct SimpleVec<T> {
	buf: RawBuf<T>,
	len: usize
}

impl<T> Drop for SimpleVec<T> {
	fn drop(&mut self) {
		unsafe {
			// drop every element, the buffer releases its memory afterward.
			ptr::drop_in_place(self.as_mut_slice())
		}
	}
}

impl<T> SimpleVec<T> {
	/// Creates a new empty `SimpleVec`.
	///
	/// The array will not allocate until elements are pushed onto it.
	#[inline]
	pub const fn new() -> Self {
		SimpleVec {
			buf: RawBuf::new(),
			len: 0
		}
	}

	/// Creates a new empty `SimpleVec` with exactly the given capacity.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		SimpleVec {
			buf: RawBuf::allocate(capacity),
			len: 0
		}
	}

	/// Creates a new empty `SimpleVec` with the capacity requested by the hint.
	#[inline]
	pub fn with_hint(hint: ReserveHint) -> Self {
		let mut v = Self::new();
		v.reserve(hint.capacity());
		v
	}

	/// Moves the content out of this array, leaving it empty and unallocated.
	///
	/// ```
	/// # use simple_vec::simple_vec;
	/// let mut a = simple_vec![1, 2, 3];
	/// let b = a.take();
	/// assert_eq!(b, [1, 2, 3]);
	/// assert_eq!((a.len(), a.capacity()), (0, 0));
	/// ```
	#[inline]
	pub fn take(&mut self) -> Self {
		mem::replace(self, Self::new())
	}

	/// Returns the number of live elements.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns the number of allocated slots.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns a raw pointer to the array's buffer.
	///
	/// Modifying the array may cause its buffer to be reallocated,
	/// which would also make any pointers to it invalid.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.buf.ptr()
	}

	/// Returns an unsafe mutable pointer to the array's buffer.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.buf.ptr()
	}

	/// Extracts a slice containing the live elements.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.buf.ptr(), self.len)
		}
	}

	/// Extracts a mutable slice containing the live elements.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.buf.ptr(), self.len)
		}
	}

	/// Returns a reference to the element at `index`,
	/// or an [`OutOfRange`] error if `index >= len`.
	#[inline]
	pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
		let len = self.len;
		self.as_slice().get(index).ok_or(OutOfRange { index, len })
	}

	/// Returns a mutable reference to the element at `index`,
	/// or an [`OutOfRange`] error if `index >= len`.
	#[inline]
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
		let len = self.len;
		self.as_mut_slice().get_mut(index).ok_or(OutOfRange { index, len })
	}

	/// The same as `reserve`, but returns on errors instead of panicking or aborting.
	///
	/// On error the array is left untouched.
	pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ReserveError> {
		if new_capacity <= self.capacity() {
			Ok(())
		} else {
			self.relocate(new_capacity)
		}
	}

	/// Makes the capacity exactly `new_capacity` if it is currently smaller.
	///
	/// Does nothing if the capacity is already sufficient. The length is unchanged.
	///
	/// # Panics
	///
	/// Panics if the new capacity overflows.
	#[inline]
	pub fn reserve(&mut self, new_capacity: usize) {
		handle_reserve(self.try_reserve(new_capacity))
	}

	/// Reduces the capacity to the length.
	pub fn shrink_to_fit(&mut self) {
		if self.capacity() > self.len {
			handle_reserve(self.relocate(self.len))
		}
	}

	/// Appends an element to the back of the array.
	///
	/// # Panics
	///
	/// Panics if the new capacity overflows.
	#[inline]
	pub fn push_back(&mut self, value: T) {
		if self.len == self.capacity() {
			let new_capacity = handle_reserve(self.grown_capacity());
			handle_reserve(self.relocate(new_capacity));
		}

		unsafe {
			ptr::write(self.buf.ptr().add(self.len), value);
		}
		self.len += 1;
	}

	/// Appends a clone of `value` to the back of the array.
	#[inline]
	pub fn push_back_cloned(&mut self, value: &T) where T: Clone {
		self.push_back(value.clone())
	}

	/// Removes the last element and returns it, or [`None`] if the array is empty.
	#[inline]
	pub fn pop_back(&mut self) -> Option<T> {
		if self.len == 0 {
			None
		} else {
			unsafe {
				self.len -= 1;
				Some(ptr::read(self.buf.ptr().add(self.len)))
			}
		}
	}

	/// Inserts an element at position `index`, shifting all elements after it to the right.
	///
	/// Inserting at `len` appends. A full array grows with the same policy as
	/// [`push_back`](SimpleVec::push_back), and the elements are laid out around the new one
	/// directly in the new buffer.
	///
	/// Returns a reference to the inserted element.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn insert(&mut self, index: usize, element: T) -> &mut T {
		let len = self.len;
		if index > len {
			panic!("insertion index (is {}) should be <= len (which is {})", index, len);
		}

		unsafe {
			if len < self.capacity() {
				let p = self.buf.ptr().add(index);
				// Shift everything over to make space. (Duplicating the
				// `index`th element into two consecutive places.)
				ptr::copy(p, p.add(1), len - index);
				// Write it in, overwriting the first copy of the `index`th
				// element.
				ptr::write(p, element);
			} else {
				let new_capacity = handle_reserve(self.grown_capacity());
				let mut buf = RawBuf::allocate(new_capacity);
				debug!("insert at {}: capacity {} -> {}", index, self.capacity(), new_capacity);

				let src = self.buf.ptr();
				let dst = buf.ptr();
				ptr::copy_nonoverlapping(src, dst, index);
				ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
				ptr::write(dst.add(index), element);

				self.buf.swap(&mut buf);
			}

			self.len = len + 1;
			&mut *self.buf.ptr().add(index)
		}
	}

	/// Inserts a clone of `element` at position `index`.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	#[inline]
	pub fn insert_cloned(&mut self, index: usize, element: &T) -> &mut T where T: Clone {
		self.insert(index, element.clone())
	}

	/// Removes and returns the element at position `index`,
	/// shifting all elements after it to the left.
	///
	/// The element that followed the removed one now sits at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= len`.
	pub fn erase(&mut self, index: usize) -> T {
		let len = self.len;
		if index >= len {
			panic!("removal index (is {}) should be < len (is {})", index, len);
		}

		unsafe {
			// the place we are taking from.
			let p = self.buf.ptr().add(index);
			// copy it out, unsafely having a copy of the value on
			// the stack and in the array at the same time.
			let ret = ptr::read(p);

			// Shift everything down to fill in that spot.
			ptr::copy(p.add(1), p, len - index - 1);
			self.len = len - 1;
			ret
		}
	}

	/// Shortens the array, keeping the first `len` elements and dropping
	/// the rest.
	///
	/// If `len` is greater or equal to the array's current length, this has no
	/// effect.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the array.
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len {
			return
		}

		unsafe {
			let remaining_len = self.len - len;
			let s = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), remaining_len);
			self.len = len;
			ptr::drop_in_place(s);
		}
	}

	/// Clears the array, removing all values.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the array.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Resizes the array in-place so that `len` is equal to `new_len`.
	///
	/// If `new_len` is greater than `len`, the array is extended by the
	/// difference, with each additional slot filled with the result of
	/// calling the closure `f`. When `new_len` exceeds the capacity, the
	/// capacity becomes exactly `new_len`.
	/// If `new_len` is less than `len`, the array is simply truncated and
	/// its capacity is unchanged.
	pub fn resize_with<F>(&mut self, new_len: usize, f: F) where F: FnMut() -> T {
		self.resize_by(new_len, ExtendFunc(f))
	}

	/// Resizes the array in-place so that `len` is equal to `new_len`,
	/// filling new slots with `T::default()`.
	///
	/// See [`resize_with`](SimpleVec::resize_with) for the capacity rules.
	pub fn resize(&mut self, new_len: usize) where T: Default {
		self.resize_by(new_len, ExtendDefault)
	}

	/// Exchanges the content of two arrays, without any element-wise work.
	#[inline]
	pub fn swap(&mut self, other: &mut SimpleVec<T>) {
		self.buf.swap(&mut other.buf);
		mem::swap(&mut self.len, &mut other.len);
	}

	/// Replaces the content of this array with a copy of `source`.
	///
	/// The copy is fully built before it replaces the current content,
	/// so a failed allocation leaves this array unchanged.
	#[inline]
	pub fn assign_from(&mut self, source: &SimpleVec<T>) where T: Clone {
		self.clone_from(source)
	}

	/// Moves the content of `source` into this array.
	///
	/// `source` receives the previous content of this array.
	#[inline]
	pub fn assign_take(&mut self, source: &mut SimpleVec<T>) {
		self.swap(source)
	}

	/// Clones and appends all elements in a slice to the array.
	#[inline]
	pub fn extend_from_slice(&mut self, other: &[T]) where T: Clone {
		self.extend(other.iter().cloned())
	}

	/// Capacity after one doubling step.
	#[inline]
	fn grown_capacity(&self) -> Result<usize, ReserveError> {
		match self.capacity() {
			0 => Ok(1),
			capacity => capacity.checked_mul(2).ok_or(ReserveError::CapacityOverflow)
		}
	}

	/// Makes room for `additional` more elements, growing at least by doubling.
	fn grow_for(&mut self, additional: usize) {
		let required = match self.len.checked_add(additional) {
			Some(required) => required,
			None => handle_reserve(Err(ReserveError::CapacityOverflow))
		};

		if required > self.capacity() {
			let grown = handle_reserve(self.grown_capacity());
			handle_reserve(self.relocate(required.max(grown)))
		}
	}

	/// Moves the live elements into a fresh buffer of exactly `new_capacity` slots.
	///
	/// The new buffer is adopted only once it is filled.
	fn relocate(&mut self, new_capacity: usize) -> Result<(), ReserveError> {
		debug_assert!(new_capacity >= self.len);

		let mut buf = RawBuf::try_allocate(new_capacity)?;
		debug!("relocating {} elements: capacity {} -> {}", self.len, self.capacity(), new_capacity);

		unsafe {
			ptr::copy_nonoverlapping(self.buf.ptr(), buf.ptr(), self.len);
		}

		// the old buffer is released without touching the moved elements.
		self.buf.swap(&mut buf);
		Ok(())
	}

	fn resize_by<E: ExtendWith<T>>(&mut self, new_len: usize, value: E) {
		let len = self.len;

		if new_len < len {
			self.truncate(new_len)
		} else if new_len > len {
			if new_len > self.capacity() {
				handle_reserve(self.relocate(new_len))
			}

			self.extend_with(new_len - len, value)
		}
	}

	/// Extend the array by `n` values, using the given generator.
	///
	/// The capacity must already be sufficient.
	fn extend_with<E: ExtendWith<T>>(&mut self, n: usize, mut value: E) {
		debug_assert!(self.len + n <= self.capacity());

		unsafe {
			let mut ptr = self.buf.ptr().add(self.len);
			// Use SetLenOnDrop to work around bug where compiler
			// may not realize the store through `ptr` through self.len
			// don't alias.
			let mut local_len = SetLenOnDrop::new(&mut self.len);

			// Write all elements except the last one
			for _ in 1..n {
				ptr::write(ptr, value.next());
				ptr = ptr.add(1);
				// Increment the length in every step in case next() panics
				local_len.increment_len(1);
			}

			if n > 0 {
				// We can write the last element directly without cloning needlessly
				ptr::write(ptr, value.last());
				local_len.increment_len(1);
			}

			// len set by scope guard
		}
	}
}

impl<T: Default> SimpleVec<T> {
	/// Creates an array of `len` default values, with a capacity of exactly `len`.
	pub fn with_len(len: usize) -> Self {
		let mut v = Self::with_capacity(len);
		v.extend_with(len, ExtendDefault);
		v
	}
}

impl<T: Clone> SimpleVec<T> {
	/// Creates an array of `len` clones of `value`, with a capacity of exactly `len`.
	pub fn from_elem(len: usize, value: T) -> Self {
		let mut v = Self::with_capacity(len);
		v.extend_with(len, ExtendElement(value));
		v
	}
}

// Set the length of the array when the `SetLenOnDrop` value goes out of scope.
//
// The idea is: The length field in SetLenOnDrop is a local variable
// that the optimizer will see does not alias with any stores through the array's data
// pointer. This is a workaround for alias analysis issue #32155
struct SetLenOnDrop<'a> {
	len: &'a mut usize,
	local_len: usize
}

impl<'a> SetLenOnDrop<'a> {
	#[inline]
	fn new(len: &'a mut usize) -> Self {
		SetLenOnDrop { local_len: *len, len }
	}

	#[inline]
	fn increment_len(&mut self, increment: usize) {
		self.local_len += increment;
	}
}

impl Drop for SetLenOnDrop<'_> {
	#[inline]
	fn drop(&mut self) {
		*self.len = self.local_len;
	}
}

// This code generalizes `extend_with_{element,default,func}`.
trait ExtendWith<T> {
	fn next(&mut self) -> T;
	fn last(self) -> T;
}

struct ExtendElement<T>(T);
impl<T: Clone> ExtendWith<T> for ExtendElement<T> {
	fn next(&mut self) -> T {
		self.0.clone()
	}
	fn last(self) -> T {
		self.0
	}
}

struct ExtendDefault;
impl<T: Default> ExtendWith<T> for ExtendDefault {
	fn next(&mut self) -> T {
		Default::default()
	}
	fn last(self) -> T {
		Default::default()
	}
}

struct ExtendFunc<F>(F);
impl<T, F: FnMut() -> T> ExtendWith<T> for ExtendFunc<F> {
	fn next(&mut self) -> T {
		(self.0)()
	}
	fn last(mut self) -> T {
		(self.0)()
	}
}

impl<T> Default for SimpleVec<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T> From<ReserveHint> for SimpleVec<T> {
	#[inline]
	fn from(hint: ReserveHint) -> Self {
		Self::with_hint(hint)
	}
}

impl<T: Clone> Clone for SimpleVec<T> {
	/// Copies the live elements into an array whose capacity is exactly their count.
	fn clone(&self) -> Self {
		let mut v = Self::with_capacity(self.len);
		v.extend_from_slice(self);
		v
	}

	fn clone_from(&mut self, source: &Self) {
		let mut v = source.clone();
		self.swap(&mut v);
	}
}

impl<T> Deref for SimpleVec<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T> DerefMut for SimpleVec<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
	type Output = I::Output;

	#[inline]
	fn index(&self, index: I) -> &Self::Output {
		Index::index(self.as_slice(), index)
	}
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
	#[inline]
	fn index_mut(&mut self, index: I) -> &mut Self::Output {
		IndexMut::index_mut(self.as_mut_slice(), index)
	}
}

impl<'v, T> IntoIterator for &'v SimpleVec<T> {
	type Item = &'v T;
	type IntoIter = slice::Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

impl<'v, T> IntoIterator for &'v mut SimpleVec<T> {
	type Item = &'v mut T;
	type IntoIter = slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_mut_slice().iter_mut()
	}
}

/// An iterator that moves out of a [`SimpleVec`].
pub struct IntoIter<T> {
	buf: RawBuf<T>,
	offset: usize,
	end: usize
}

impl<T> IntoIter<T> {
	/// Returns the remaining items of this iterator as a slice.
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.buf.ptr().add(self.offset), self.end - self.offset)
		}
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.offset < self.end {
			let i = self.offset;
			self.offset += 1;
			unsafe {
				Some(ptr::read(self.buf.ptr().add(i)))
			}
		} else {
			None
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end - self.offset;
		(len, Some(len))
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<T> {
		if self.offset < self.end {
			self.end -= 1;
			unsafe {
				Some(ptr::read(self.buf.ptr().add(self.end)))
			}
		} else {
			None
		}
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
	fn drop(&mut self) {
		unsafe {
			// only drop remaining elements.
			let remaining = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(self.offset), self.end - self.offset);
			ptr::drop_in_place(remaining)
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<T> IntoIterator for SimpleVec<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(mut self) -> Self::IntoIter {
		// `self` is left empty, there is nothing left for it to drop.
		let buf = mem::replace(&mut self.buf, RawBuf::new());
		let end = mem::replace(&mut self.len, 0);

		IntoIter {
			buf,
			offset: 0,
			end
		}
	}
}

impl<T> Extend<T> for SimpleVec<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
		let iterator = iterator.into_iter();
		let (lower, _) = iterator.size_hint();
		self.grow_for(lower);

		for element in iterator {
			self.push_back(element)
		}
	}
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVec<T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iterator: I) {
		self.extend(iterator.into_iter().copied())
	}
}

impl<T> core::iter::FromIterator<T> for SimpleVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
		let mut v = Self::new();
		v.extend(iterator);
		v
	}
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
	/// Moves the elements in order into an array of capacity exactly `N`.
	fn from(array: [T; N]) -> Self {
		let mut v = Self::with_capacity(N);
		for element in IntoIterator::into_iter(array) {
			v.push_back(element)
		}
		v
	}
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
	#[inline]
	fn from(s: &[T]) -> Self {
		let mut v = Self::with_capacity(s.len());
		v.extend_from_slice(s);
		v
	}
}

impl<T> From<Vec<T>> for SimpleVec<T> {
	#[inline]
	fn from(vec: Vec<T>) -> Self {
		let mut v = Self::with_capacity(vec.len());
		v.extend(vec);
		v
	}
}

impl<T> From<SimpleVec<T>> for Vec<T> {
	#[inline]
	fn from(v: SimpleVec<T>) -> Vec<T> {
		v.into_iter().collect()
	}
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

impl<T: Hash> Hash for SimpleVec<T> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(&**self, state)
	}
}

impl<T> AsRef<[T]> for SimpleVec<T> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<T> AsMut<[T]> for SimpleVec<T> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T> Borrow<[T]> for SimpleVec<T> {
	#[inline]
	fn borrow(&self) -> &[T] {
		self
	}
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
	#[inline]
	fn borrow_mut(&mut self) -> &mut [T] {
		self
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U] SimpleVec<T>, SimpleVec<U> }
impl_slice_eq1! { [T, U] SimpleVec<T>, Vec<U> }
impl_slice_eq1! { [T, U] Vec<T>, SimpleVec<U> }
impl_slice_eq1! { [T, U] SimpleVec<T>, [U] }
impl_slice_eq1! { ['a, T, U] SimpleVec<T>, &'a [U] }
impl_slice_eq1! { ['a, T, U] SimpleVec<T>, &'a mut [U] }
impl_slice_eq1! { ['a, T, U] &'a [T], SimpleVec<U> }
impl_slice_eq1! { [T, U, const N: usize] SimpleVec<T>, [U; N] }
impl_slice_eq1! { ['a, T, U, const N: usize] SimpleVec<T>, &'a [U; N] }

impl<T: Eq> Eq for SimpleVec<T> {}

/// Lexicographic order: a prefix orders before any longer array.
impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		PartialOrd::partial_cmp(&**self, &**other)
	}
}

impl<T: Ord> Ord for SimpleVec<T> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		Ord::cmp(&**self, &**other)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dropflag::{DropCount, Droppable};
	use crate::{reserve, simple_vec};

	#[test]
	fn starts_empty_and_unallocated() {
		let v: SimpleVec<i32> = SimpleVec::new();
		assert_eq!(v.len(), 0);
		assert_eq!(v.capacity(), 0);
		assert!(v.is_empty());
	}

	#[test]
	fn hint_reserves_without_elements() {
		let v: SimpleVec<String> = SimpleVec::from(reserve(5));
		assert_eq!(v.len(), 0);
		assert_eq!(v.capacity(), 5);

		let v: SimpleVec<String> = SimpleVec::with_hint(reserve(0));
		assert_eq!(v.capacity(), 0);
	}

	#[test]
	fn with_len_fills_defaults() {
		let v: SimpleVec<i32> = SimpleVec::with_len(4);
		assert_eq!(v, [0, 0, 0, 0]);
		assert_eq!(v.capacity(), 4);
	}

	#[test]
	fn from_elem_fills_clones() {
		let v = SimpleVec::from_elem(3, String::from("x"));
		assert_eq!(v, ["x", "x", "x"]);
		assert_eq!(v.capacity(), 3);

		let empty = SimpleVec::from_elem(0, 7u8);
		assert_eq!((empty.len(), empty.capacity()), (0, 0));
	}

	#[test]
	fn push_back_doubles_capacity() {
		let mut v = SimpleVec::new();
		let mut capacities = Vec::new();
		for i in 0..9 {
			v.push_back(i);
			capacities.push(v.capacity());
		}
		assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
		assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
	}

	#[test]
	fn push_back_moves_non_clone_values() {
		let mut v = SimpleVec::new();
		v.push_back(Box::new(1));
		v.push_back(Box::new(2));
		v.push_back(Box::new(3));
		assert_eq!(*v[2], 3);
	}

	#[test]
	fn push_back_cloned_keeps_the_source() {
		let s = String::from("abc");
		let mut v = SimpleVec::new();
		v.push_back_cloned(&s);
		assert_eq!(v[0], s);
	}

	#[test]
	fn reserve_never_shrinks() {
		let mut v = simple_vec![1, 2, 3];
		v.reserve(10);
		assert_eq!(v.capacity(), 10);
		v.reserve(2);
		assert_eq!(v.capacity(), 10);
		assert_eq!(v, [1, 2, 3]);
	}

	#[test]
	fn try_reserve_overflow_leaves_array_intact() {
		let mut v = simple_vec![1u64, 2, 3];
		assert_eq!(v.try_reserve(usize::MAX), Err(ReserveError::CapacityOverflow));
		assert_eq!(v, [1, 2, 3]);
		assert_eq!(v.capacity(), 3);
	}

	#[test]
	fn checked_access() {
		let mut v = simple_vec![10, 20];
		assert_eq!(v.at(1), Ok(&20));
		assert_eq!(v.at(2), Err(OutOfRange { index: 2, len: 2 }));
		*v.at_mut(0).unwrap() = 11;
		assert_eq!(v.at_mut(5), Err(OutOfRange { index: 5, len: 2 }));
		assert_eq!(v, [11, 20]);
	}

	#[test]
	#[should_panic]
	fn unchecked_access_past_len_panics() {
		let mut v = SimpleVec::with_capacity(4);
		v.push_back(1);
		let _ = v[1];
	}

	#[test]
	fn insert_within_capacity_shifts() {
		let mut v = SimpleVec::with_capacity(4);
		v.extend_from_slice(&[1, 2, 3]);
		*v.insert(0, 0) += 100;
		assert_eq!(v, [100, 1, 2, 3]);
		assert_eq!(v.capacity(), 4);
	}

	#[test]
	fn insert_into_full_array_doubles() {
		let mut v = simple_vec![1, 2, 3, 4];
		assert_eq!(*v.insert(2, 9), 9);
		assert_eq!(v, [1, 2, 9, 3, 4]);
		assert_eq!(v.capacity(), 8);

		let mut empty = SimpleVec::new();
		empty.insert(0, 'a');
		assert_eq!(empty.capacity(), 1);
		empty.insert_cloned(1, &'b');
		assert_eq!(empty, ['a', 'b']);
		assert_eq!(empty.capacity(), 2);
	}

	#[test]
	#[should_panic(expected = "insertion index (is 4) should be <= len (which is 3)")]
	fn insert_past_len_panics() {
		let mut v = simple_vec![1, 2, 3];
		v.insert(4, 0);
	}

	#[test]
	fn erase_shifts_left() {
		let mut v = simple_vec!['a', 'b', 'c'];
		assert_eq!(v.erase(0), 'a');
		assert_eq!(v, ['b', 'c']);
		assert_eq!(v.erase(1), 'c');
		assert_eq!(v, ['b']);
		assert_eq!(v.capacity(), 3);
	}

	#[test]
	#[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
	fn erase_on_empty_panics() {
		let mut v: SimpleVec<i32> = SimpleVec::new();
		v.erase(0);
	}

	#[test]
	fn pop_back_returns_last() {
		let mut v = simple_vec![1, 2];
		assert_eq!(v.pop_back(), Some(2));
		assert_eq!(v.pop_back(), Some(1));
		assert_eq!(v.pop_back(), None);
		assert_eq!(v.capacity(), 2);
	}

	#[test]
	fn resize_rules() {
		let mut v = SimpleVec::with_capacity(4);
		v.extend_from_slice(&[1, 2, 3]);

		// grows within capacity
		v.resize(4);
		assert_eq!(v, [1, 2, 3, 0]);
		assert_eq!(v.capacity(), 4);

		// grows beyond capacity to exactly the new length
		v.resize(6);
		assert_eq!(v, [1, 2, 3, 0, 0, 0]);
		assert_eq!(v.capacity(), 6);

		// shrinks without touching the capacity
		v.resize(1);
		assert_eq!(v, [1]);
		assert_eq!(v.capacity(), 6);

		let mut n = 0;
		v.resize_with(3, || { n += 1; n });
		assert_eq!(v, [1, 1, 2]);
	}

	#[test]
	fn clear_keeps_capacity() {
		let mut v = simple_vec![1, 2, 3];
		v.clear();
		assert!(v.is_empty());
		assert_eq!(v.capacity(), 3);
		v.push_back(4);
		assert_eq!(v, [4]);
	}

	#[test]
	fn shrink_to_fit_releases_spare_slots() {
		let mut v = SimpleVec::with_capacity(10);
		v.push_back(1);
		v.shrink_to_fit();
		assert_eq!(v.capacity(), 1);
		v.clear();
		v.shrink_to_fit();
		assert_eq!(v.capacity(), 0);
	}

	#[test]
	fn swap_exchanges_everything() {
		let mut a = simple_vec![1, 2, 3];
		let mut b = SimpleVec::with_capacity(8);
		b.push_back(9);
		a.swap(&mut b);
		assert_eq!((a.len(), a.capacity()), (1, 8));
		assert_eq!((b.len(), b.capacity()), (3, 3));
		assert_eq!(a, [9]);
		assert_eq!(b, [1, 2, 3]);
	}

	#[test]
	fn clone_trims_capacity() {
		let mut a = SimpleVec::with_capacity(16);
		a.extend_from_slice(&[1, 2, 3]);
		let b = a.clone();
		assert_eq!(a, b);
		assert_eq!(b.capacity(), 3);
	}

	#[test]
	fn assignments() {
		let source = simple_vec![String::from("a"), String::from("b")];
		let mut target = simple_vec![String::from("z")];
		target.assign_from(&source);
		assert_eq!(target, source);
		assert_eq!(target.capacity(), 2);

		let mut moved = simple_vec![String::from("m")];
		target.assign_take(&mut moved);
		assert_eq!(target, ["m"]);
		assert_eq!(moved, ["a", "b"]);
	}

	#[test]
	fn take_leaves_empty() {
		let mut a = simple_vec![1, 2];
		let b = a.take();
		assert_eq!(b, [1, 2]);
		assert_eq!((a.len(), a.capacity()), (0, 0));
		a.push_back(3);
		assert_eq!(a, [3]);
	}

	#[test]
	fn ordering_is_lexicographic() {
		let a = simple_vec![1, 2];
		let b = simple_vec![1, 2, 0];
		let c = simple_vec![1, 3];
		assert!(a < b);
		assert!(b < c);
		assert!(a <= a.clone());
		assert!(c > a);
		assert!(c >= b);
		assert_ne!(a, b);
		assert_eq!(a.cmp(&c), Ordering::Less);
	}

	#[test]
	fn into_iter_yields_in_order() {
		let v = simple_vec![1, 2, 3, 4];
		let mut it = v.into_iter();
		assert_eq!(it.next(), Some(1));
		assert_eq!(it.next_back(), Some(4));
		assert_eq!(it.len(), 2);
		assert_eq!(it.as_slice(), &[2, 3]);
		assert_eq!(it.collect::<Vec<_>>(), [2, 3]);
	}

	#[test]
	fn elements_are_dropped_once() {
		let count = DropCount::default();
		{
			let mut v = SimpleVec::new();
			for i in 0..10 {
				v.push_back(Droppable::new(i, &count));
			}
			v.insert(3, Droppable::new(100, &count));
			assert_eq!(count.get(), 0);

			drop(v.erase(0));
			assert_eq!(count.get(), 1);

			drop(v.pop_back());
			assert_eq!(count.get(), 2);

			v.truncate(5);
			assert_eq!(count.get(), 6);
			assert_eq!(v.iter().map(|d| d.data).collect::<Vec<_>>(), [1, 2, 100, 3, 4]);

			let c = v.clone();
			drop(c);
			assert_eq!(count.get(), 11);
		}
		assert_eq!(count.get(), 16);
	}

	#[test]
	fn partially_consumed_into_iter_drops_the_rest() {
		let count = DropCount::default();
		let v: SimpleVec<_> = (0..5).map(|i| Droppable::new(i, &count)).collect();
		let mut it = v.into_iter();
		let first = it.next().unwrap();
		assert_eq!(first.data, 0);
		drop(it);
		assert_eq!(count.get(), 4);
		drop(first);
		assert_eq!(count.get(), 5);
	}

	#[test]
	fn zero_sized_elements() {
		let mut v = SimpleVec::new();
		for _ in 0..5 {
			v.push_back(());
		}
		assert_eq!(v.len(), 5);
		assert_eq!(v.capacity(), 8);
		v.insert(2, ());
		assert_eq!(v.erase(0), ());
		assert_eq!(v.len(), 5);
	}

	#[test]
	fn conversions() {
		let v: SimpleVec<i32> = vec![1, 2, 3].into();
		assert_eq!(v.capacity(), 3);
		let back: Vec<i32> = v.into();
		assert_eq!(back, [1, 2, 3]);

		let s: &[i32] = &[4, 5];
		let v = SimpleVec::from(s);
		assert_eq!(v, s);
		assert_eq!(format!("{:?}", v), "[4, 5]");
	}
}
