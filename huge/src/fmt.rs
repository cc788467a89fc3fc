use std::fmt::{self, Display};

use crate::Huge;

impl<const DIGITS: u32> Display for Huge<DIGITS> {
  /// The most significant limb prints unpadded; every other limb is
  /// zero-padded to `DIGITS` characters, so the output is the minimal
  /// decimal representation ("0" for zero, otherwise no leading zeros).
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut limbs = self.limbs().iter().rev();
    if let Some(most) = limbs.next() {
      write!(f, "{most}")?;
    }
    for limb in limbs {
      write!(f, "{limb:0width$}", width = DIGITS as usize)?;
    }
    Ok(())
  }
}
