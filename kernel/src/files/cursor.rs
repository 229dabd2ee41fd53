#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SeekMethod {
  Absolute(usize),
  Relative(isize),
}

impl SeekMethod {
  /// Relative moves saturate at both ends of the address range
  pub fn from_current_position(&self, current: usize) -> usize {
    match self {
      SeekMethod::Absolute(pos) => *pos,
      SeekMethod::Relative(off) if *off < 0 => current.saturating_sub(off.unsigned_abs()),
      SeekMethod::Relative(off) => current.saturating_add(*off as usize),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::SeekMethod;

  #[test]
  fn seek_positions() {
    assert_eq!(SeekMethod::Absolute(30).from_current_position(12), 30);
    assert_eq!(SeekMethod::Relative(20).from_current_position(5), 25);
    assert_eq!(SeekMethod::Relative(-10).from_current_position(64), 54);

    let underflow = SeekMethod::Relative(-15).from_current_position(12);
    assert_eq!(underflow, 0);

    let overflow = SeekMethod::Relative(0x200).from_current_position(usize::MAX - 0x100);
    assert_eq!(overflow, usize::MAX);
  }
}
