//! Arbitrary-precision non-negative integers in a power-of-ten base.
//!
//! Values are immutable: every operation returns a fresh [`Huge`], so
//! instances may be freely cloned, cached, and read from multiple threads.

mod cmp;
mod fmt;
mod ops;
mod parse;

use thiserror::Error;

/// A non-negative integer of unbounded size.
///
/// Limbs are stored least-significant-first, each in `[0, BASE)` where
/// `BASE = 10^DIGITS`. The representation is always normalized: at least
/// one limb, and no most-significant zero limb unless the value is zero
/// (which is exactly `[0]`).
///
/// `DIGITS` must be in `1..=9` so that a limb, and the sum of two limbs
/// plus a carry, fit in a `u32`. The default of 9 packs nine decimal
/// digits per limb; tests use `Huge<1>` to keep worked examples legible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Huge<const DIGITS: u32 = 9>(Vec<u32>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HugeError {
  #[error("subtraction would produce a negative value")]
  NegativeResult,
  #[error("division by zero")]
  DivisionByZero,
  #[error("invalid decimal digits")]
  InvalidDigits,
}

impl<const DIGITS: u32> Huge<DIGITS> {
  /// The base each limb is expressed in; also the carry/borrow threshold.
  pub const BASE: u32 = 10u32.pow(DIGITS);

  pub fn zero() -> Self {
    Huge(vec![0])
  }

  pub fn is_zero(&self) -> bool {
    self.0 == [0]
  }

  /// Trims most-significant zero limbs down to a minimum length of one.
  pub(crate) fn new(mut limbs: Vec<u32>) -> Self {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
      limbs.pop();
    }
    if limbs.is_empty() {
      limbs.push(0);
    }
    debug_assert!(limbs.iter().all(|&limb| limb < Self::BASE));
    Huge(limbs)
  }

  pub(crate) fn limbs(&self) -> &[u32] {
    &self.0
  }

  /// The limb at `index`, treating limbs past the end as zero.
  pub(crate) fn limb(&self, index: usize) -> u32 {
    self.0.get(index).copied().unwrap_or(0)
  }

  /// Converts back to a machine integer, if the value fits.
  pub fn to_u64(&self) -> Option<u64> {
    let mut value = 0u64;
    for &limb in self.0.iter().rev() {
      value = value.checked_mul(Self::BASE as u64)?.checked_add(limb as u64)?;
    }
    Some(value)
  }
}

impl<const DIGITS: u32> Default for Huge<DIGITS> {
  fn default() -> Self {
    Self::zero()
  }
}

impl<const DIGITS: u32> From<u64> for Huge<DIGITS> {
  fn from(mut n: u64) -> Self {
    let mut limbs = Vec::new();
    loop {
      limbs.push((n % Self::BASE as u64) as u32);
      n /= Self::BASE as u64;
      if n == 0 {
        break;
      }
    }
    Huge(limbs)
  }
}

impl<const DIGITS: u32> From<u32> for Huge<DIGITS> {
  fn from(n: u32) -> Self {
    (n as u64).into()
  }
}

impl<const DIGITS: u32> From<usize> for Huge<DIGITS> {
  fn from(n: usize) -> Self {
    (n as u64).into()
  }
}

#[cfg(test)]
mod tests {
  use crate::Huge;

  #[test]
  fn from_native() {
    assert_eq!(Huge::<9>::from(0u64), Huge::zero());
    assert_eq!(Huge::<9>::from(124155u64).to_string(), "124155");
    assert_eq!(Huge::<1>::from(124155u64).to_string(), "124155");
    assert_eq!(Huge::<9>::from(u64::MAX).to_string(), "18446744073709551615");
  }

  #[test]
  fn to_u64_round_trip() {
    for n in [0u64, 1, 9, 10, 999_999_999, 1_000_000_000, u64::MAX] {
      assert_eq!(Huge::<9>::from(n).to_u64(), Some(n));
      assert_eq!(Huge::<3>::from(n).to_u64(), Some(n));
    }
  }

  #[test]
  fn to_u64_overflow() {
    let big = Huge::<9>::parse_decimal("18446744073709551616").unwrap();
    assert_eq!(big.to_u64(), None);
  }
}
