//! device-registry: ordered catalog of addressable home devices

mod types;
pub use types::{Device, DeviceType, IntensityRange};

mod error;
pub use error::{RegistryError, Result};

mod loader;
pub use loader::{load_registry_file, parse_registry_yaml, DeviceRegistry, RegistryFile};

mod catalog;
pub use catalog::{default_devices, default_home};

mod metrics;
pub use metrics::{CommandMetrics, MetricsHub};
