use crate::error::{RegistryError, Result};
use crate::types::Device;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Ordered catalog of devices.
///
/// Iteration order is the order the devices were supplied in; the entity
/// resolver's tie-breaks depend on it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Validate and wrap `devices`, keeping their order.
    ///
    /// Ids must be unique and non-blank. Names and locations must be
    /// non-blank; the resolver matches them as substrings.
    pub fn new(devices: Vec<Device>) -> Result<Self> {
        let mut seen = HashSet::new();
        for d in &devices {
            if d.id.trim().is_empty() {
                return Err(RegistryError::EmptyId(d.name.clone()));
            }
            if !seen.insert(d.id.as_str()) {
                return Err(RegistryError::DuplicateId(d.id.clone()));
            }
            if d.name.trim().is_empty() {
                return Err(RegistryError::EmptyName(d.id.clone()));
            }
            if d.location.trim().is_empty() {
                return Err(RegistryError::EmptyLocation(d.id.clone()));
            }
            if !d.supports_intensity && d.intensity.is_some() {
                return Err(RegistryError::UnexpectedIntensity(d.id.clone()));
            }
        }
        Ok(Self { devices })
    }

    pub(crate) fn from_trusted(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Distinct locations in order of first appearance.
    pub fn locations(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for d in &self.devices {
            if !out.contains(&d.location.as_str()) {
                out.push(&d.location);
            }
        }
        out
    }

    pub fn by_location<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a Device> {
        self.devices.iter().filter(move |d| d.location == location)
    }

    /// Owned copy of the device list, for consumers that evolve device state.
    pub fn snapshot(&self) -> Vec<Device> {
        self.devices.clone()
    }
}

impl<'a> IntoIterator for &'a DeviceRegistry {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// On-disk registry layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub devices: Vec<Device>,
}

pub fn parse_registry_yaml(raw: &str) -> anyhow::Result<DeviceRegistry> {
    let file: RegistryFile = serde_yaml::from_str(raw).context("decoding registry yaml")?;
    let reg = DeviceRegistry::new(file.devices)?;
    Ok(reg)
}

pub fn load_registry_file(path: impl AsRef<Path>) -> anyhow::Result<DeviceRegistry> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading registry: {}", path.display()))?;
    let reg =
        parse_registry_yaml(&raw).with_context(|| format!("loading registry: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        devices = reg.len(),
        "device registry loaded"
    );
    Ok(reg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceType;
    use std::io::Write;

    const SAMPLE: &str = r#"
devices:
  - id: lamp-study-1
    name: Study Lamp
    type: light
    location: Study
    supports_intensity: true
    intensity: 40
  - id: fan-study-1
    name: Desk Fan
    type: fan
    location: Study
  - id: tv-den-1
    name: Den TV
    type: tv
    location: Den
    active: true
"#;

    #[test]
    fn test_parse_yaml_preserves_order() {
        let reg = parse_registry_yaml(SAMPLE).unwrap();
        let ids: Vec<&str> = reg.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["lamp-study-1", "fan-study-1", "tv-den-1"]);
        let lamp = reg.get("lamp-study-1").unwrap();
        assert_eq!(lamp.device_type, DeviceType::Light);
        assert_eq!(lamp.intensity, Some(40));
        assert!(!lamp.active);
        assert!(reg.get("tv-den-1").unwrap().active);
        assert!(!reg.get("fan-study-1").unwrap().supports_intensity);
    }

    #[test]
    fn test_load_registry_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let reg = load_registry_file(file.path()).unwrap();
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_registry_file("/nonexistent/registry.yaml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/registry.yaml"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let raw = "devices:\n  - id: x\n    name: X\n    type: toaster\n    location: Kitchen\n";
        assert!(parse_registry_yaml(raw).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let d = Device::switchable("dup", "A", DeviceType::Tv, "Den");
        let err = DeviceRegistry::new(vec![d.clone(), d]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("dup".into()));
    }

    #[test]
    fn test_empty_id_rejected() {
        let d = Device::switchable(" ", "Nameless", DeviceType::Tv, "Den");
        let err = DeviceRegistry::new(vec![d]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyId("Nameless".into()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let raw = "devices:\n  - id: a\n    name: \"\"\n    type: light\n    location: Porch\n  - id: b\n    name: Porch Lamp\n    type: light\n    location: Porch\n";
        let err = parse_registry_yaml(raw).unwrap_err();
        assert!(format!("{err:#}").contains("device a has an empty name"));

        let d = Device::switchable("fan", "  ", DeviceType::Fan, "Den");
        let err = DeviceRegistry::new(vec![d]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyName("fan".into()));
    }

    #[test]
    fn test_blank_location_rejected() {
        let d = Device::switchable("fan", "Den Fan", DeviceType::Fan, "");
        let err = DeviceRegistry::new(vec![d]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyLocation("fan".into()));
    }

    #[test]
    fn test_intensity_without_capability_rejected() {
        let mut d = Device::switchable("tv", "TV", DeviceType::Tv, "Den");
        d.intensity = Some(50);
        let err = DeviceRegistry::new(vec![d]).unwrap_err();
        assert_eq!(err, RegistryError::UnexpectedIntensity("tv".into()));
    }

    #[test]
    fn test_locations_first_appearance() {
        let reg = crate::default_home();
        assert_eq!(
            reg.locations(),
            vec!["Living Room", "Kitchen", "Bedroom", "Home", "Laundry Room"]
        );
        let kitchen: Vec<&str> = reg.by_location("Kitchen").map(|d| d.id.as_str()).collect();
        assert_eq!(
            kitchen,
            vec!["light-kitchen-1", "outlet-kitchen-1", "refrigerator-kitchen-1"]
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let reg = crate::default_home();
        let mut snap = reg.snapshot();
        snap[0].active = true;
        assert!(!reg.devices()[0].active);
    }
}
