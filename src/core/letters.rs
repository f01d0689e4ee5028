//! Compact set of lowercase letters
//!
//! One bit per letter `a..=z`. Bytes outside that range are ignored on insert and
//! never reported as members.

use std::fmt;

/// A set of lowercase ASCII letters backed by a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// Set containing exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    /// Add a letter, returning whether it was newly inserted
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh && bit != 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        bit != 0 && self.0 & bit != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'r'));
        assert!(!set.insert(b'r'));
        assert!(set.contains(b'r'));
        assert!(!set.contains(b'a'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ignores_non_letters() {
        let mut set = LetterSet::EMPTY;
        assert!(!set.insert(b'!'));
        assert!(!set.insert(b'A'));
        assert!(set.is_empty());
        assert!(!set.contains(b'!'));
    }

    #[test]
    fn subset_and_disjoint() {
        let crane: LetterSet = b"crane".iter().copied().collect();
        let ran: LetterSet = b"ran".iter().copied().collect();
        let xyz: LetterSet = b"xyz".iter().copied().collect();

        assert!(ran.is_subset(crane));
        assert!(!crane.is_subset(ran));
        assert!(LetterSet::EMPTY.is_subset(ran));
        assert!(crane.is_disjoint(xyz));
        assert!(!crane.is_disjoint(ran));
        assert_eq!(ran.union(xyz).len(), 6);
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"crane".iter().copied().collect();
        assert_eq!(set.to_string(), "acenr");
    }
}
