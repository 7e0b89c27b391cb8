//! Device and location resolution against the registry

use device_registry::{Device, DeviceRegistry};

/// What an utterance refers to. Either, both or neither may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub device: Option<&'a Device>,
    pub location: Option<&'a str>,
}

/// Resolve the device and location mentioned in a lowercased utterance.
///
/// Greedy and registry-order dependent:
/// 1. the first device whose full name appears wins outright;
/// 2. otherwise each device whose type name appears becomes the tentative
///    pick, and the first of those whose location also appears is locked in;
/// 3. if no location is known yet, the first device whose location appears
///    supplies it (and becomes the device when none was picked).
pub fn resolve<'a>(text: &str, registry: &'a DeviceRegistry) -> Resolution<'a> {
    if let Some(device) = match_name(text, registry) {
        return Resolution {
            device: Some(device),
            location: None,
        };
    }

    let mut resolution = match_type(text, registry);

    if resolution.location.is_none() {
        if let Some(device) = registry.iter().find(|d| mentions(text, &d.location)) {
            resolution.location = Some(device.location.as_str());
            if resolution.device.is_none() {
                resolution.device = Some(device);
            }
        }
    }

    resolution
}

fn match_name<'a>(text: &str, registry: &'a DeviceRegistry) -> Option<&'a Device> {
    registry.iter().find(|d| mentions(text, &d.name))
}

fn match_type<'a>(text: &str, registry: &'a DeviceRegistry) -> Resolution<'a> {
    let mut out = Resolution::default();
    for device in registry {
        if !text.contains(device.device_type.as_str()) {
            continue;
        }
        out.device = Some(device);
        if mentions(text, &device.location) {
            out.location = Some(device.location.as_str());
            break;
        }
    }
    out
}

fn mentions(text: &str, phrase: &str) -> bool {
    text.contains(&phrase.to_lowercase())
}
