//! This module is for testing only

use std::rc::Rc;
use std::cell::Cell;

pub type DropCount = Rc<Cell<usize>>;

/// Value that counts how many times a value carrying the same counter was dropped.
#[derive(Debug)]
pub struct Droppable {
	pub data: i32,
	pub dropcount: DropCount
}

impl Droppable {
	pub fn new(data: i32, dropcount: &DropCount) -> Droppable {
		Droppable {
			data,
			dropcount: dropcount.clone()
		}
	}
}

impl Clone for Droppable {
	fn clone(&self) -> Droppable {
		Droppable::new(self.data, &self.dropcount)
	}
}

impl Drop for Droppable {
	fn drop(&mut self) {
		self.dropcount.set(self.dropcount.get() + 1);
	}
}

#[test]
fn dropcount() {
	let count = DropCount::default();
	let a = Droppable::new(1, &count);
	let b = a.clone();
	assert_eq!(0, count.get());
	std::mem::drop(a);
	assert_eq!(1, count.get());
	std::mem::drop(b);
	assert_eq!(2, count.get());
}
