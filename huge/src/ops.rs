use std::ops::{Add, Mul};

use crate::{Huge, HugeError};

impl<const DIGITS: u32> Add for &Huge<DIGITS> {
  type Output = Huge<DIGITS>;

  fn add(self, rhs: &Huge<DIGITS>) -> Huge<DIGITS> {
    let mut limbs = Vec::with_capacity(self.limbs().len().max(rhs.limbs().len()) + 1);
    let mut carry = 0;
    let mut index = 0;
    while index < self.limbs().len() || index < rhs.limbs().len() || carry != 0 {
      let sum = self.limb(index) + rhs.limb(index) + carry;
      if sum < Huge::<DIGITS>::BASE {
        limbs.push(sum);
        carry = 0;
      } else {
        limbs.push(sum - Huge::<DIGITS>::BASE);
        carry = 1;
      }
      index += 1;
    }
    // no zero limb is ever appended past the last real carry
    Huge(limbs)
  }
}

impl<const DIGITS: u32> Add for Huge<DIGITS> {
  type Output = Huge<DIGITS>;

  fn add(self, rhs: Huge<DIGITS>) -> Huge<DIGITS> {
    &self + &rhs
  }
}

impl<const DIGITS: u32> Mul for &Huge<DIGITS> {
  type Output = Huge<DIGITS>;

  /// Schoolbook multiplication. All intermediates are widened to `u64` so
  /// `result[i+j] + a[i]*b[j] + carry` cannot truncate before the
  /// modulo/carry split.
  fn mul(self, rhs: &Huge<DIGITS>) -> Huge<DIGITS> {
    let base = Huge::<DIGITS>::BASE as u64;
    let mut limbs = vec![0u32; self.limbs().len() + rhs.limbs().len()];
    for (i, &a) in self.limbs().iter().enumerate() {
      let mut carry = 0u64;
      let mut j = 0;
      // continue past rhs while a carry remains, to flush it forward
      while j < rhs.limbs().len() || carry != 0 {
        let total = limbs[i + j] as u64 + a as u64 * rhs.limb(j) as u64 + carry;
        limbs[i + j] = (total % base) as u32;
        carry = total / base;
        j += 1;
      }
    }
    Huge::new(limbs)
  }
}

impl<const DIGITS: u32> Mul for Huge<DIGITS> {
  type Output = Huge<DIGITS>;

  fn mul(self, rhs: Huge<DIGITS>) -> Huge<DIGITS> {
    &self * &rhs
  }
}

impl<const DIGITS: u32> Huge<DIGITS> {
  /// Subtraction over non-negative magnitudes; fails with
  /// [`HugeError::NegativeResult`] when `rhs > self`.
  pub fn sub(&self, rhs: &Self) -> Result<Self, HugeError> {
    if rhs > self {
      return Err(HugeError::NegativeResult);
    }
    let len = self.limbs().len().max(rhs.limbs().len());
    let mut limbs = Vec::with_capacity(len);
    let mut borrow = 0;
    for index in 0..len {
      match self.limb(index).checked_sub(rhs.limb(index) + borrow) {
        Some(limb) => {
          limbs.push(limb);
          borrow = 0;
        }
        None => {
          limbs.push(self.limb(index) + Self::BASE - rhs.limb(index) - borrow);
          borrow = 1;
        }
      }
    }
    Ok(Self::new(limbs))
  }

  /// Truncating division and remainder in one pass, by long division from
  /// the most significant limb of `self` downward. Fails with
  /// [`HugeError::DivisionByZero`] on a zero divisor.
  pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), HugeError> {
    if rhs.is_zero() {
      return Err(HugeError::DivisionByZero);
    }
    if self < rhs {
      return Ok((Self::zero(), self.clone()));
    }
    let mut quotient = Vec::with_capacity(self.limbs().len());
    let mut partial = Self::zero();
    for &limb in self.limbs().iter().rev() {
      partial = partial.push_low(limb);
      let digit = partial.quotient_digit(rhs);
      if digit != 0 {
        partial = partial.sub(&rhs.mul_limb(digit))?;
      }
      quotient.push(digit);
    }
    // quotient limbs were produced most-significant-first
    quotient.reverse();
    Ok((Self::new(quotient), partial))
  }

  pub fn div(&self, rhs: &Self) -> Result<Self, HugeError> {
    Ok(self.div_rem(rhs)?.0)
  }

  pub fn rem(&self, rhs: &Self) -> Result<Self, HugeError> {
    Ok(self.div_rem(rhs)?.1)
  }

  /// `self * BASE + limb`, built by direct limb prepend.
  fn push_low(&self, limb: u32) -> Self {
    if self.is_zero() {
      return Huge(vec![limb]);
    }
    let mut limbs = Vec::with_capacity(self.limbs().len() + 1);
    limbs.push(limb);
    limbs.extend_from_slice(self.limbs());
    Huge(limbs)
  }

  /// The largest digit in `[0, BASE)` with `divisor * digit <= self`,
  /// found by binary search rather than repeated trial subtraction.
  fn quotient_digit(&self, divisor: &Self) -> u32 {
    if self < divisor {
      return 0;
    }
    let (mut low, mut high) = (0, Self::BASE - 1);
    while low < high {
      let mid = (low + high + 1) / 2;
      if divisor.mul_limb(mid) <= *self {
        low = mid;
      } else {
        high = mid - 1;
      }
    }
    low
  }

  /// Multiplication by a single limb.
  fn mul_limb(&self, n: u32) -> Self {
    let base = Self::BASE as u64;
    let mut limbs = Vec::with_capacity(self.limbs().len() + 1);
    let mut carry = 0u64;
    for &limb in self.limbs() {
      let total = limb as u64 * n as u64 + carry;
      limbs.push((total % base) as u32);
      carry = total / base;
    }
    if carry != 0 {
      limbs.push(carry as u32);
    }
    Self::new(limbs)
  }
}

#[cfg(test)]
mod tests {
  use crate::{Huge, HugeError};

  fn check_add<const DIGITS: u32>(a: u64, b: u64) {
    let sum = Huge::<DIGITS>::from(a) + Huge::from(b);
    assert_eq!(sum.to_string(), (a + b).to_string(), "{a} + {b}");
  }

  #[test]
  fn add() {
    check_add::<9>(10, 11);
    check_add::<9>(99999999, 1);
    check_add::<9>(999999999, 1);
    check_add::<9>(1600000000, 1600000000);
    check_add::<9>(921436, 226274);
    check_add::<1>(999999999, 1);
    check_add::<1>(921436, 226274);
  }

  #[test]
  fn add_is_commutative_and_associative() {
    let a = Huge::<9>::parse_decimal("999999999999999999999").unwrap();
    let b = Huge::parse_decimal("123456789").unwrap();
    let c = Huge::parse_decimal("100000000000000000").unwrap();
    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
  }

  fn check_sub<const DIGITS: u32>(a: u64, b: u64) {
    let difference = Huge::<DIGITS>::from(a).sub(&Huge::from(b)).unwrap();
    assert_eq!(difference.to_string(), (a - b).to_string(), "{a} - {b}");
  }

  #[test]
  fn sub() {
    check_sub::<9>(21, 10);
    check_sub::<9>(10, 10);
    check_sub::<9>(0, 0);
    check_sub::<9>(1, 0);
    check_sub::<9>(1000000000, 999999999);
    check_sub::<1>(1000000000, 999999999);
  }

  #[test]
  fn sub_trims_high_zero_limbs() {
    let a = Huge::<9>::parse_decimal("1000000000000000000").unwrap();
    let b = Huge::parse_decimal("999999999999999999").unwrap();
    assert_eq!(a.sub(&b).unwrap().to_string(), "1");
  }

  #[test]
  fn sub_negative_result() {
    let a = Huge::<9>::from(10u32);
    let b = Huge::from(21u32);
    assert_eq!(a.sub(&b), Err(HugeError::NegativeResult));
  }

  fn check_mul<const DIGITS: u32>(a: u64, b: u64) {
    let product = Huge::<DIGITS>::from(a) * Huge::from(b);
    assert_eq!(product.to_string(), (a * b).to_string(), "{a} * {b}");
  }

  #[test]
  fn mul() {
    check_mul::<9>(3, 7);
    check_mul::<9>(31, 72);
    check_mul::<9>(31114, 7354622);
    check_mul::<9>(0, 7354622);
    check_mul::<1>(31114, 7354622);
    check_mul::<2>(999, 999);
  }

  #[test]
  fn mul_is_commutative() {
    let a = Huge::<9>::parse_decimal("123456789012345678901234567890").unwrap();
    let b = Huge::parse_decimal("98765432109876543210").unwrap();
    assert_eq!(&a * &b, &b * &a);
  }

  #[test]
  fn mul_wide() {
    // forces multi-limb carries through the u64 intermediates
    let a = Huge::<9>::parse_decimal("999999999999999999999999999").unwrap();
    let b = Huge::parse_decimal("999999999999999999").unwrap();
    assert_eq!(
      (&a * &b).to_string(),
      "999999999999999998999999999000000000000000001",
    );
  }

  fn check_div_rem<const DIGITS: u32>(a: u64, b: u64) {
    let (quotient, remainder) = Huge::<DIGITS>::from(a).div_rem(&Huge::from(b)).unwrap();
    assert_eq!(quotient.to_string(), (a / b).to_string(), "{a} / {b}");
    assert_eq!(remainder.to_string(), (a % b).to_string(), "{a} % {b}");
  }

  #[test]
  fn div_rem() {
    check_div_rem::<9>(0, 10);
    check_div_rem::<9>(10, 2);
    check_div_rem::<9>(11, 2);
    check_div_rem::<9>(15, 3);
    check_div_rem::<9>(20, 3);
    check_div_rem::<9>(31114, 1532);
    check_div_rem::<9>(111111, 111);
    check_div_rem::<9>(201414, 52352);
    check_div_rem::<1>(111111, 111);
    check_div_rem::<1>(201414, 52352);
  }

  #[test]
  fn div_by_zero() {
    let a = Huge::<9>::from(10u32);
    assert_eq!(a.div(&Huge::zero()), Err(HugeError::DivisionByZero));
    assert_eq!(a.rem(&Huge::zero()), Err(HugeError::DivisionByZero));
    assert_eq!(Huge::<9>::zero().div(&Huge::zero()), Err(HugeError::DivisionByZero));
  }

  #[test]
  fn rem_of_smaller_dividend_is_itself() {
    let a = Huge::<9>::from(10u32);
    let b = Huge::from(21u32);
    assert_eq!(a.rem(&b).unwrap(), a);
    assert_eq!(a.div(&b).unwrap(), Huge::zero());
  }

  #[test]
  fn division_identity() {
    // a == (a / b) * b + (a % b), and a % b < b
    let a = Huge::<9>::parse_decimal("123456789012345678901234567890123").unwrap();
    for b in ["1", "2", "97", "1000000000", "123456789012345", "999999999999999999999"] {
      let b = Huge::parse_decimal(b).unwrap();
      let (quotient, remainder) = a.div_rem(&b).unwrap();
      assert_eq!(&(&quotient * &b) + &remainder, a);
      assert!(remainder < b);
      assert_eq!(a.rem(&b).unwrap(), remainder);
      assert_eq!(a.sub(&(&quotient * &b)).unwrap(), remainder);
    }
  }

  #[test]
  fn quotient_digit_at_base_boundary() {
    // quotient digits of BASE - 1 exercise the top of the binary search
    let base = Huge::<9>::from(Huge::<9>::BASE);
    let max_digit = Huge::from(Huge::<9>::BASE - 1);
    let a = &(&base * &base) + &max_digit;
    let (quotient, remainder) = a.div_rem(&base).unwrap();
    assert_eq!(quotient, base);
    assert_eq!(remainder, max_digit);
  }
}
