use alloc::boxed::Box;
use alloc::sync::Arc;
use syscall::files::OpenFlags;
use crate::files::{FileHandle, FileResult, FileTable};
use crate::params::NDEV;
use super::driver::DeviceDriverType;
use super::errors::DeviceError;

/// Associates a unique device name with the driver installed in a slot
pub struct InstalledDevice {
  pub name: Box<str>,
  pub driver: Arc<DeviceDriverType>,
}

impl InstalledDevice {
  pub fn matches_name(&self, name: &str) -> bool {
    *self.name == *name
  }
}

const EMPTY_SLOT: Option<InstalledDevice> = None;

/// Fixed-size table of installed drivers. Device numbers start at 1, so that
/// 0 never names a device.
pub struct DeviceRegistry {
  devices: [Option<InstalledDevice>; NDEV],
}

impl DeviceRegistry {
  pub const fn new() -> Self {
    Self {
      devices: [EMPTY_SLOT; NDEV],
    }
  }

  /// Get a reference to a device driver, given its device number
  pub fn get_device(&self, number: usize) -> Option<&Arc<DeviceDriverType>> {
    if number == 0 {
      return None;
    }
    let installed = self.devices.get(number - 1)?.as_ref()?;
    Some(&installed.driver)
  }

  /// Look up a device number by its name
  pub fn get_device_number_by_name(&self, seek: &str) -> Option<usize> {
    self.devices
      .iter()
      .position(|slot| match slot {
        Some(installed) => installed.matches_name(seek),
        None => false,
      })
      .map(|index| index + 1)
  }

  pub fn get_device_by_name(&self, name: &str) -> Option<&Arc<DeviceDriverType>> {
    let number = self.get_device_number_by_name(name)?;
    self.get_device(number)
  }

  pub fn get_device_name(&self, number: usize) -> Option<&str> {
    if number == 0 {
      return None;
    }
    let installed = self.devices.get(number - 1)?.as_ref()?;
    Some(&*installed.name)
  }

  /// Install a driver in the first empty slot and return its device number
  pub fn register_driver(&mut self, name: &str, driver: Arc<DeviceDriverType>) -> Result<usize, DeviceError> {
    let index = match self.devices.iter().position(|slot| slot.is_none()) {
      Some(index) => index,
      None => {
        log::warn!("no room to register device {}", name);
        return Err(DeviceError::RegistryFull);
      },
    };
    self.devices[index] = Some(InstalledDevice {
      name: Box::from(name),
      driver,
    });
    log::debug!("registered device {} as {}", name, index + 1);
    Ok(index + 1)
  }

  /// Open a device as a custom-backed file in the table
  pub fn open(&self, table: &FileTable, number: usize, flags: OpenFlags) -> FileResult<FileHandle> {
    let driver = self.get_device(number).ok_or(DeviceError::NoSuchDevice)?;
    table.bind_custom(Arc::clone(driver), flags.is_readable(), flags.is_writable())
  }
}

impl Default for DeviceRegistry {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use alloc::sync::Arc;
  use syscall::files::OpenFlags;
  use crate::devices::{DeviceError, NullDriver, ZeroDriver};
  use crate::files::{FileError, FileTable};
  use crate::params::NDEV;
  use crate::testing::MemoryFileSystem;
  use super::DeviceRegistry;

  #[test]
  fn register_and_look_up() {
    let mut registry = DeviceRegistry::new();
    assert!(registry.get_device(0).is_none());
    assert!(registry.get_device(1).is_none());
    assert_eq!(registry.register_driver("NULL", Arc::new(NullDriver::new())), Ok(1));
    assert_eq!(registry.register_driver("ZERO", Arc::new(ZeroDriver::new())), Ok(2));
    assert_eq!(registry.get_device_number_by_name("ZERO"), Some(2));
    assert_eq!(registry.get_device_number_by_name("COM1"), None);
    assert_eq!(registry.get_device_name(1), Some("NULL"));
    assert!(registry.get_device_by_name("NULL").is_some());
  }

  #[test]
  fn registry_fills_up() {
    let mut registry = DeviceRegistry::new();
    for _ in 0..NDEV {
      registry.register_driver("NULL", Arc::new(NullDriver::new())).unwrap();
    }
    let result = registry.register_driver("ZERO", Arc::new(ZeroDriver::new()));
    assert_eq!(result, Err(DeviceError::RegistryFull));
  }

  #[test]
  fn open_devices_through_table() {
    let mut registry = DeviceRegistry::new();
    let null = registry.register_driver("NULL", Arc::new(NullDriver::new())).unwrap();
    let zero = registry.register_driver("ZERO", Arc::new(ZeroDriver::new())).unwrap();
    let table = FileTable::new(Arc::new(MemoryFileSystem::new()));

    let mut buffer = [0xff; 6];
    let null_file = registry.open(&table, null, OpenFlags::RDWR).unwrap();
    assert_eq!(table.read(null_file, &mut buffer), Ok(0));
    assert_eq!(table.write(null_file, b"gone"), Ok(4));

    let zero_file = registry.open(&table, zero, OpenFlags::RDONLY).unwrap();
    assert_eq!(table.read(zero_file, &mut buffer), Ok(6));
    assert_eq!(buffer, [0; 6]);
    assert_eq!(table.write(zero_file, b"x"), Err(FileError::PermissionDenied));

    let missing = registry.open(&table, 9, OpenFlags::RDONLY);
    assert_eq!(missing, Err(FileError::Device(DeviceError::NoSuchDevice)));
  }
}
