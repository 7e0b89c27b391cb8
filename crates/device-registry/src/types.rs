use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of appliance a device represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Light,
    Tv,
    Fan,
    Outlet,
    Thermostat,
    Refrigerator,
    Washer,
}

impl DeviceType {
    pub const ALL: [DeviceType; 7] = [
        DeviceType::Light,
        DeviceType::Tv,
        DeviceType::Fan,
        DeviceType::Outlet,
        DeviceType::Thermostat,
        DeviceType::Refrigerator,
        DeviceType::Washer,
    ];

    /// Lowercase type name, as spoken in utterances ("turn on the fan").
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Light => "light",
            DeviceType::Tv => "tv",
            DeviceType::Fan => "fan",
            DeviceType::Outlet => "outlet",
            DeviceType::Thermostat => "thermostat",
            DeviceType::Refrigerator => "refrigerator",
            DeviceType::Washer => "washer",
        }
    }

    /// Slider range for the intensity value of this type.
    pub fn intensity_range(&self) -> IntensityRange {
        match self {
            DeviceType::Thermostat => IntensityRange { min: 60, max: 90 },
            _ => IntensityRange { min: 10, max: 100 },
        }
    }

    pub fn unit_suffix(&self) -> &'static str {
        match self {
            DeviceType::Thermostat => "°F",
            _ => "%",
        }
    }

    /// Name of the adjustable quantity ("temperature" or "intensity").
    pub fn intensity_noun(&self) -> &'static str {
        match self {
            DeviceType::Thermostat => "temperature",
            _ => "intensity",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive bounds for a device's intensity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityRange {
    pub min: i64,
    pub max: i64,
}

impl IntensityRange {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// An addressable device in the home.
///
/// Identity, type, location and capability are fixed for the lifetime of the
/// process; only `active` and `intensity` change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub location: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub supports_intensity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<i64>,
}

impl Device {
    /// A device without intensity control, initially off.
    pub fn switchable(
        id: impl Into<String>,
        name: impl Into<String>,
        device_type: DeviceType,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            device_type,
            location: location.into(),
            active: false,
            supports_intensity: false,
            intensity: None,
        }
    }

    /// A device with intensity control, initially off at `intensity`.
    pub fn dimmable(
        id: impl Into<String>,
        name: impl Into<String>,
        device_type: DeviceType,
        location: impl Into<String>,
        intensity: i64,
    ) -> Self {
        Self {
            supports_intensity: true,
            intensity: Some(intensity),
            ..Self::switchable(id, name, device_type, location)
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Display label for the current intensity, e.g. "72°F" or "Speed: 50%".
    pub fn intensity_label(&self) -> Option<String> {
        let value = self.intensity?;
        Some(match self.device_type {
            DeviceType::Thermostat => format!("{value}°F"),
            DeviceType::Fan => format!("Speed: {value}%"),
            _ => format!("{value}%"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_are_lowercase() {
        for t in DeviceType::ALL {
            assert_eq!(t.as_str(), t.as_str().to_lowercase());
            assert_eq!(t.to_string(), t.as_str());
        }
    }

    #[test]
    fn test_intensity_ranges() {
        assert_eq!(
            DeviceType::Thermostat.intensity_range(),
            IntensityRange { min: 60, max: 90 }
        );
        let light = DeviceType::Light.intensity_range();
        assert!(light.contains(10) && light.contains(100));
        assert!(!light.contains(5));
        assert_eq!(light.clamp(150), 100);
        assert_eq!(DeviceType::Thermostat.intensity_range().clamp(40), 60);
    }

    #[test]
    fn test_intensity_labels() {
        let thermostat = Device::dimmable("t", "T", DeviceType::Thermostat, "Home", 72);
        let fan = Device::dimmable("f", "F", DeviceType::Fan, "Bedroom", 50);
        let light = Device::dimmable("l", "L", DeviceType::Light, "Kitchen", 80);
        let tv = Device::switchable("tv", "TV", DeviceType::Tv, "Living Room");

        assert_eq!(thermostat.intensity_label().as_deref(), Some("72°F"));
        assert_eq!(fan.intensity_label().as_deref(), Some("Speed: 50%"));
        assert_eq!(light.intensity_label().as_deref(), Some("80%"));
        assert_eq!(tv.intensity_label(), None);
    }

    #[test]
    fn test_device_serde_field_names() {
        let light = Device::dimmable("light-1", "Light", DeviceType::Light, "Kitchen", 80);
        let json = serde_json::to_value(&light).unwrap();
        assert_eq!(json["type"], "light");
        assert_eq!(json["supports_intensity"], true);
        assert_eq!(json["intensity"], 80);

        let tv = Device::switchable("tv-1", "TV", DeviceType::Tv, "Den");
        let json = serde_json::to_value(&tv).unwrap();
        assert!(json.get("intensity").is_none());
    }
}
