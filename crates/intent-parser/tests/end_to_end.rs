use device_registry::{default_home, Device, DeviceRegistry, DeviceType};
use intent_parser::{
    execute, feedback, ActionKind, CommandParser, ExecutionOutcome, SessionConfig, TurnOutcome,
    VoiceSession,
};

fn find<'a>(devices: &'a [Device], id: &str) -> &'a Device {
    devices.iter().find(|d| d.id == id).unwrap()
}

#[test]
fn kitchen_light_turns_on() {
    let parser = CommandParser::new(default_home());
    let cmd = parser.parse("turn on the kitchen light");
    assert_eq!(cmd.action, ActionKind::TurnOn);
    assert_eq!(cmd.device_id.as_deref(), Some("light-kitchen-1"));
    assert_eq!(feedback(&cmd, parser.registry()), "Turning on Kitchen Light.");

    let devices = parser.registry().snapshot();
    match execute(&cmd, &devices) {
        ExecutionOutcome::Applied { devices, .. } => {
            let light = find(&devices, "light-kitchen-1");
            assert!(light.active);
            assert_eq!(light.intensity, Some(100));
        }
        other => unreachable!("unexpected outcome {other:?}"),
    }
}

#[test]
fn bedroom_fan_speed_is_scaled() {
    let mut session = VoiceSession::new(default_home(), SessionConfig::default());
    let report = session
        .handle_transcript("set the bedroom fan speed to 8")
        .unwrap();
    assert_eq!(report.command.action, ActionKind::SetIntensity);
    assert_eq!(report.command.device_type, Some(DeviceType::Fan));
    assert_eq!(report.command.intensity, Some(80));
    assert!(matches!(report.outcome, TurnOutcome::Executed { .. }));

    let fan = find(session.devices(), "fan-bedroom-1");
    assert!(fan.active);
    assert_eq!(fan.intensity, Some(80));
}

#[test]
fn name_match_beats_type_and_location_words() {
    let registry = DeviceRegistry::new(vec![
        Device::dimmable("lamp-north", "Reading Lamp", DeviceType::Light, "Study", 60),
        Device::dimmable("lamp-south", "Porch Lamp", DeviceType::Light, "Porch", 60),
    ])
    .unwrap();
    let parser = CommandParser::new(registry);
    let cmd = parser.parse("turn on the porch lamp, not the light in the study");
    assert_eq!(cmd.device_id.as_deref(), Some("lamp-south"));
    assert_eq!(cmd.location, None);
}

#[test]
fn location_mention_adopts_first_device_there() {
    let mut session = VoiceSession::new(default_home(), SessionConfig::default());
    let before_tv = find(session.devices(), "tv-living-1").clone();
    let report = session
        .handle_transcript("set the living room brightness to 30%")
        .unwrap();
    assert_eq!(report.command.location.as_deref(), Some("Living Room"));
    assert_eq!(report.command.intensity, Some(30));

    let light = find(session.devices(), "light-living-1");
    assert!(light.active);
    assert_eq!(light.intensity, Some(30));
    assert_eq!(find(session.devices(), "tv-living-1"), &before_tv);
}

#[test]
fn sequence_of_commands_evolves_state() {
    let mut session = VoiceSession::new(default_home(), SessionConfig::default());
    for text in [
        "turn on the living room tv",
        "toggle the living room tv",
        "toggle the living room tv",
        "power off the washing machine",
    ] {
        session.handle_transcript(text).unwrap();
    }
    assert!(find(session.devices(), "tv-living-1").active);
    assert!(!find(session.devices(), "washer-laundry-1").active);
    assert_eq!(session.history().len(), 4);
}
