#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeviceError {
  /// No driver is installed under the requested device number
  NoSuchDevice,
  /// Every slot in the device registry is taken
  RegistryFull,
}
