use crate::{Device, DeviceRegistry, DeviceType};

/// The built-in home: nine devices across five rooms, all switched off.
///
/// Entry order matters to the entity resolver and must not be rearranged.
pub fn default_devices() -> Vec<Device> {
    vec![
        Device::dimmable(
            "light-living-1",
            "Living Room Light",
            DeviceType::Light,
            "Living Room",
            80,
        ),
        Device::dimmable(
            "light-kitchen-1",
            "Kitchen Light",
            DeviceType::Light,
            "Kitchen",
            100,
        ),
        Device::dimmable(
            "light-bedroom-1",
            "Bedroom Light",
            DeviceType::Light,
            "Bedroom",
            70,
        ),
        Device::switchable("tv-living-1", "Living Room TV", DeviceType::Tv, "Living Room"),
        Device::dimmable("fan-bedroom-1", "Bedroom Fan", DeviceType::Fan, "Bedroom", 50),
        Device::switchable(
            "outlet-kitchen-1",
            "Kitchen Outlet",
            DeviceType::Outlet,
            "Kitchen",
        ),
        Device::dimmable(
            "thermostat-home-1",
            "Home Thermostat",
            DeviceType::Thermostat,
            "Home",
            72,
        ),
        Device::switchable(
            "refrigerator-kitchen-1",
            "Refrigerator",
            DeviceType::Refrigerator,
            "Kitchen",
        ),
        Device::switchable(
            "washer-laundry-1",
            "Washing Machine",
            DeviceType::Washer,
            "Laundry Room",
        ),
    ]
}

pub fn default_home() -> DeviceRegistry {
    DeviceRegistry::from_trusted(default_devices())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_home_validates() {
        let reg = DeviceRegistry::new(default_devices()).unwrap();
        assert_eq!(reg.len(), 9);
        assert_eq!(reg, default_home());
    }

    #[test]
    fn test_default_home_order() {
        let reg = default_home();
        let ids: Vec<&str> = reg.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "light-living-1",
                "light-kitchen-1",
                "light-bedroom-1",
                "tv-living-1",
                "fan-bedroom-1",
                "outlet-kitchen-1",
                "thermostat-home-1",
                "refrigerator-kitchen-1",
                "washer-laundry-1",
            ]
        );
    }

    #[test]
    fn test_shipped_yaml_matches_catalog() {
        let raw = include_str!("../../../configs/home.yaml");
        let reg = crate::parse_registry_yaml(raw).unwrap();
        assert_eq!(reg, default_home());
    }

    #[test]
    fn test_default_home_starts_inactive() {
        assert!(default_home().iter().all(|d| !d.active));
    }
}
