use std::cmp::Ordering;

use crate::Huge;

impl<const DIGITS: u32> Ord for Huge<DIGITS> {
  /// Magnitude comparison: scan from the most significant limb of the
  /// longer operand down to limb zero, treating missing limbs as zero.
  /// No length pre-check is needed; the zero-padding rule already makes
  /// shorter operands compare correctly.
  fn cmp(&self, other: &Self) -> Ordering {
    for index in (0..self.limbs().len().max(other.limbs().len())).rev() {
      match self.limb(index).cmp(&other.limb(index)) {
        Ordering::Equal => {}
        unequal => return unequal,
      }
    }
    Ordering::Equal
  }
}

impl<const DIGITS: u32> PartialOrd for Huge<DIGITS> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

#[cfg(test)]
mod tests {
  use crate::Huge;

  fn huge(text: &str) -> Huge {
    Huge::parse_decimal(text).unwrap()
  }

  #[test]
  fn ordering() {
    assert_eq!(huge("0"), Huge::zero());
    assert!(huge("10") > huge("0"));
    assert!(huge("15") < huge("16"));
    assert!(huge("1600000000") < huge("1600000001"));
    assert!(huge("1600000000") > huge("1001"));
    assert!(huge("16000000014124235235240") >= huge("1001"));
    assert!(huge("16") != huge("5"));
  }

  #[test]
  fn ordering_is_total() {
    let values = ["0", "1", "999999999", "1000000000", "1000000001"];
    for a in values {
      for b in values {
        let (a, b) = (huge(a), huge(b));
        assert_eq!([a < b, a == b, a > b].iter().filter(|&&held| held).count(), 1);
      }
    }
  }
}
