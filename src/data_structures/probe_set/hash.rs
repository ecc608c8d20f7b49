// Copyright (c) 2025 Lanai Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash and equality strategies for the probe sets.
//!
//! A set never inspects its elements directly: every placement decision goes
//! through a [`SetStrategy`] injected at construction. The strategy must be
//! consistent for the whole lifetime of the set, meaning elements that compare
//! equal must hash identically. Breaking that rule does not cause undefined
//! behavior, but lookups may miss elements and duplicates may be stored.

use std::hash::{Hash, Hasher};

/// A hash function paired with the equality relation it is consistent with.
pub trait SetStrategy<T: ?Sized> {
    /// Maps an element to an unsigned hash value.
    fn hash(&self, element: &T) -> u64;

    /// Returns `true` when `a` and `b` denote the same set member.
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, S: SetStrategy<T> + ?Sized> SetStrategy<T> for &S {
    fn hash(&self, element: &T) -> u64 {
        (**self).hash(element)
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }
}

/// Polynomial string hash: `h = 31 * h + byte` over the UTF-8 bytes.
///
/// Each byte is read as a signed 8-bit value, so bytes at or above `0x80`
/// are sign-extended before the add. Arithmetic wraps at 32 bits, which keeps
/// slot placement identical across platforms for ASCII and non-ASCII text
/// alike. Equality is byte-wise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StrHash;

impl StrHash {
    /// Computes the 32-bit polynomial hash of `s`.
    pub fn hash_str(s: &str) -> u32 {
        s.bytes()
            .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(byte as i8 as u32))
    }
}

impl SetStrategy<str> for StrHash {
    fn hash(&self, element: &str) -> u64 {
        u64::from(Self::hash_str(element))
    }

    fn equals(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

impl SetStrategy<String> for StrHash {
    fn hash(&self, element: &String) -> u64 {
        u64::from(Self::hash_str(element))
    }

    fn equals(&self, a: &String, b: &String) -> bool {
        a == b
    }
}

/// Strategy for any `Hash + Eq` type, hashed with FNV-1a.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FnvStrategy;

impl<T: Hash + Eq + ?Sized> SetStrategy<T> for FnvStrategy {
    fn hash(&self, element: &T) -> u64 {
        let mut hasher = fnv::FnvHasher::default();
        element.hash(&mut hasher);
        hasher.finish()
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Strategy built from a caller-supplied hash function and equality function.
///
/// # Examples
///
/// ```
/// use lanai_set::data_structures::probe_set::{FnStrategy, SetStrategy};
///
/// // Case-insensitive ASCII matching
/// let strategy = FnStrategy::new(
///     |s: &str| s.bytes().map(|b| u64::from(b.to_ascii_lowercase())).sum::<u64>(),
///     |a: &str, b: &str| a.eq_ignore_ascii_case(b),
/// );
///
/// assert!(strategy.equals("Kona", "KONA"));
/// assert_eq!(strategy.hash("Kona"), strategy.hash("kona"));
/// ```
#[derive(Clone, Copy)]
pub struct FnStrategy<H, E> {
    hash_fn: H,
    equals_fn: E,
}

impl<H, E> FnStrategy<H, E> {
    /// Pairs a hash function with its equality function.
    ///
    /// # Arguments
    ///
    /// * `hash_fn` - Maps an element to an unsigned hash value.
    /// * `equals_fn` - Decides whether two elements are the same member.
    pub fn new(hash_fn: H, equals_fn: E) -> Self {
        Self { hash_fn, equals_fn }
    }
}

impl<T, H, E> SetStrategy<T> for FnStrategy<H, E>
where
    T: ?Sized,
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    fn hash(&self, element: &T) -> u64 {
        (self.hash_fn)(element)
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals_fn)(a, b)
    }
}

impl<H, E> std::fmt::Debug for FnStrategy<H, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStrategy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_hash_known_values() {
        assert_eq!(StrHash::hash_str(""), 0);
        assert_eq!(StrHash::hash_str("a"), 97);
        assert_eq!(StrHash::hash_str("cat"), 98_262);
        assert_eq!(StrHash::hash_str("dog"), 99_644);
        assert_eq!(StrHash::hash_str("bird"), 3_024_057);
    }

    #[test]
    fn test_str_hash_sign_extends_high_bytes() {
        // "é" is 0xC3 0xA9: 31 * -61 + -87 = -1978, wrapped to 32 bits
        assert_eq!(StrHash::hash_str("é"), 4_294_965_318);
        assert_eq!(StrHash::hash_str("\u{7f}"), 127);
        assert_eq!(StrHash.hash("é"), 4_294_965_318);
    }

    #[test]
    fn test_str_hash_wraps() {
        // Long inputs overflow 32 bits and must wrap instead of panicking
        let long = "z".repeat(64);
        assert_eq!(StrHash.hash(long.as_str()), u64::from(StrHash::hash_str(&long)));
    }

    #[test]
    fn test_str_hash_owned_matches_borrowed() {
        let owned = "kahuna".to_string();
        assert_eq!(
            SetStrategy::<String>::hash(&StrHash, &owned),
            SetStrategy::<str>::hash(&StrHash, "kahuna")
        );
    }

    #[test]
    fn test_fnv_strategy_stability() {
        let first = FnvStrategy.hash(&42u64);
        let second = FnvStrategy.hash(&42u64);
        assert_eq!(first, second);
        assert_ne!(FnvStrategy.hash("input1"), FnvStrategy.hash("input2"));
        assert!(FnvStrategy.equals("same", "same"));
    }

    #[test]
    fn test_fn_strategy_delegates() {
        let strategy = FnStrategy::new(
            |x: &u32| u64::from(*x % 10),
            |a: &u32, b: &u32| a % 10 == b % 10,
        );
        assert_eq!(strategy.hash(&13), 3);
        assert!(strategy.equals(&13, &23));
        assert!(!strategy.equals(&13, &24));
    }

    #[test]
    fn test_strategy_by_reference() {
        let strategy = FnvStrategy;
        let by_ref = &strategy;
        assert_eq!(SetStrategy::<u8>::hash(&by_ref, &7), FnvStrategy.hash(&7u8));
    }
}
