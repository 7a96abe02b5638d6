use std::fmt::{Binary, Debug, Formatter};
use std::ops::{BitAnd, BitOr};

const BITS: usize = 32;

/// A fixed-width bit-field made of `WORDS` 32-bit words.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitField<const WORDS: usize> {
	values: [u32; WORDS],
}

impl<const WORDS: usize> Default for BitField<WORDS> {
	fn default() -> Self {
		Self { values: [0; WORDS] }
	}
}

impl<const WORDS: usize> BitField<WORDS> {
	/// Create a new [BitField] with every bit cleared.
	pub const fn new() -> Self {
		Self { values: [0; WORDS] }
	}

	/// Number of bits the [BitField] can hold.
	pub const fn capacity() -> usize {
		WORDS * BITS
	}

	/// Get the value of the bit at index `i`.
	/// Out of range indices read as unset.
	///
	/// # Arguments
	/// * `i` - The index of the element to retrieve
	#[inline(always)]
	pub fn get(&self, i: usize) -> bool {
		let (position, shift) = Self::pos_shift(i);
		match self.values.get(position) {
			Some(value) => value & (1 << shift) != 0,
			None => false,
		}
	}

	/// Set the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the element to modify
	///
	/// # Panics
	/// If `i` is not below [capacity](Self::capacity).
	#[inline(always)]
	pub fn set(&mut self, i: usize, value: bool) {
		assert!(i < Self::capacity(), "bit {} out of range for a {} bit field", i, Self::capacity());
		let (position, shift) = Self::pos_shift(i);
		match value {
			true => self.values[position] |= 1 << shift,
			false => self.values[position] &= !(1 << shift),
		}
	}

	/// Check if every bit set in `self` is also set in `other`.
	/// The empty [BitField] is a subset of everything.
	///
	/// # Arguments
	/// * `other` - The bitfield to check against
	pub fn is_subset_of(&self, other: &Self) -> bool {
		self.values.iter().zip(other.values.iter()).all(|(mask, bits)| (bits & mask) == *mask)
	}

	/// Set all bits to 0.
	pub fn clear(&mut self) {
		self.values.fill(0);
	}

	/// Check whether no bit is set.
	pub fn is_empty(&self) -> bool {
		self.values.iter().all(|v| *v == 0)
	}

	/// Number of set bits.
	pub fn count_ones(&self) -> usize {
		self.values.iter().map(|v| v.count_ones() as usize).sum()
	}

	/// Iterate over the indices of set bits in ascending order.
	pub fn iter_ones(&self) -> BitFieldIterator<'_, WORDS> {
		BitFieldIterator {
			index: 0,
			current: self.values.first().copied().unwrap_or(0),
			values: &self.values,
		}
	}

	/// Raw words, least significant bit first.
	pub fn words(&self) -> &[u32; WORDS] {
		&self.values
	}

	#[inline(always)]
	fn pos_shift(a: usize) -> (usize, usize) {
		(a / BITS, a % BITS)
	}
}

impl<const WORDS: usize> BitAnd for BitField<WORDS> {
	type Output = Self;

	fn bitand(mut self, rhs: Self) -> Self::Output {
		for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
			*lhs &= rhs;
		}
		self
	}
}

impl<const WORDS: usize> BitOr for BitField<WORDS> {
	type Output = Self;

	fn bitor(mut self, rhs: Self) -> Self::Output {
		for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
			*lhs |= rhs;
		}
		self
	}
}

impl<const WORDS: usize> Binary for BitField<WORDS> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for value in self.values.iter().rev() {
			write!(f, "{:032b}", value)?;
		}
		Ok(())
	}
}

impl<const WORDS: usize> Debug for BitField<WORDS> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.iter_ones()).finish()
	}
}

/// Iterates over the indices of set bits of a [BitField].
pub struct BitFieldIterator<'l, const WORDS: usize> {
	index: usize,
	current: u32,
	values: &'l [u32; WORDS],
}

impl<const WORDS: usize> Iterator for BitFieldIterator<'_, WORDS> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		while self.current == 0 {
			self.index += 1;
			if self.index >= WORDS {
				return None;
			}
			self.current = self.values[self.index];
		}

		let bit = self.current.trailing_zeros() as usize;
		self.current &= self.current - 1;
		Some(self.index * BITS + bit)
	}
}
