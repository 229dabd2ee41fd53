//! Devices plug into the file table as custom backends. Each installed driver
//! lives in a slot of the device registry, and opening a device binds a new
//! file handle directly to its driver.

use alloc::sync::Arc;
use spin::{Once, RwLock};

pub mod driver;
pub mod errors;
pub mod installed;
pub mod null;
pub mod zero;

pub use driver::{DeviceDriver, DeviceDriverType};
pub use errors::DeviceError;
pub use installed::DeviceRegistry;
pub use null::NullDriver;
pub use zero::ZeroDriver;

pub static DEVICES: RwLock<DeviceRegistry> = RwLock::new(DeviceRegistry::new());

static BUILTIN_DRIVERS: Once<()> = Once::new();

pub fn get_device_number_by_name(name: &str) -> Option<usize> {
  let devices = DEVICES.read();
  devices.get_device_number_by_name(name)
}

pub fn get_driver_for_device(number: usize) -> Option<Arc<DeviceDriverType>> {
  let devices = DEVICES.read();
  devices.get_device(number).cloned()
}

/// Install the drivers that every kernel provides
pub fn init() {
  BUILTIN_DRIVERS.call_once(|| {
    let mut all_devices = DEVICES.write();
    for (name, driver) in [
      ("NULL", Arc::new(NullDriver::new()) as Arc<DeviceDriverType>),
      ("ZERO", Arc::new(ZeroDriver::new()) as Arc<DeviceDriverType>),
    ] {
      if let Err(err) = all_devices.register_driver(name, driver) {
        log::warn!("failed to install {}: {:?}", name, err);
      }
    }
  });
}
