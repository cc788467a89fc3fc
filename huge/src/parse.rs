use std::str::FromStr;

use crate::{Huge, HugeError};

impl<const DIGITS: u32> Huge<DIGITS> {
  /// Parses a decimal string, packing `DIGITS` characters per limb from
  /// the end of the string; the final, possibly short, chunk becomes the
  /// most significant limb. Leading zeros are tolerated.
  pub fn parse_decimal(text: &str) -> Result<Self, HugeError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(|b| b.is_ascii_digit()) {
      return Err(HugeError::InvalidDigits);
    }
    let size = DIGITS as usize;
    let mut limbs = Vec::with_capacity(bytes.len().div_ceil(size));
    for chunk in bytes.rchunks(size) {
      // a chunk of at most DIGITS <= 9 decimal digits cannot overflow u32
      limbs.push(chunk.iter().fold(0, |limb, &b| limb * 10 + (b - b'0') as u32));
    }
    Ok(Self::new(limbs))
  }

  /// The permissive construction: any malformed input collapses to zero
  /// instead of failing the caller. Prefer [`Huge::parse_decimal`] unless
  /// the fail-closed-to-zero behavior is genuinely wanted.
  pub fn from_decimal_lossy(text: &str) -> Self {
    Self::parse_decimal(text).unwrap_or_else(|_| Self::zero())
  }
}

impl<const DIGITS: u32> FromStr for Huge<DIGITS> {
  type Err = HugeError;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    Self::parse_decimal(text)
  }
}
