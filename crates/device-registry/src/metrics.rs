use prometheus::core::Collector;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};

#[derive(Clone)]
pub struct CommandMetrics {
    pub parsed: IntCounter,
    pub unknown: IntCounter,
    pub executed: IntCounter,
    pub unmatched: IntCounter,
}

#[derive(Clone)]
pub struct MetricsHub {
    pub registry: Registry,
    pub devices_loaded: IntGauge,
    pub commands: CommandMetrics,
}

impl MetricsHub {
    /// Counters on a fresh Prometheus registry.
    pub fn new() -> Result<Self, String> {
        Self::with_registry(Registry::new())
    }

    /// Counters on an existing registry, e.g. one shared with other
    /// subsystems. Fails if any `hh_*` metric is already registered there.
    pub fn with_registry(registry: Registry) -> Result<Self, String> {
        let devices_loaded = IntGauge::new("hh_devices_loaded", "Number of devices in the registry")
            .map_err(|e| format!("metrics init error: {e}"))?;
        let parsed = IntCounter::new("hh_commands_parsed", "Total utterances parsed")
            .map_err(|e| format!("metrics init error: {e}"))?;
        let unknown = IntCounter::new("hh_commands_unknown", "Utterances with no recognised action")
            .map_err(|e| format!("metrics init error: {e}"))?;
        let executed = IntCounter::new("hh_commands_executed", "Commands applied to devices")
            .map_err(|e| format!("metrics init error: {e}"))?;
        let unmatched = IntCounter::new("hh_commands_unmatched", "Commands with no matching device")
            .map_err(|e| format!("metrics init error: {e}"))?;
        let commands = CommandMetrics {
            parsed,
            unknown,
            executed,
            unmatched,
        };
        let collectors: [Box<dyn Collector>; 5] = [
            Box::new(devices_loaded.clone()),
            Box::new(commands.parsed.clone()),
            Box::new(commands.unknown.clone()),
            Box::new(commands.executed.clone()),
            Box::new(commands.unmatched.clone()),
        ];
        for c in collectors {
            registry
                .register(c)
                .map_err(|e| format!("metrics register error: {e}"))?;
        }
        Ok(Self {
            registry,
            devices_loaded,
            commands,
        })
    }

    pub fn encode_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            return format!("error encoding metrics: {e}");
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_includes_counters() {
        let hub = MetricsHub::new().unwrap();
        hub.devices_loaded.set(9);
        hub.commands.parsed.inc();
        hub.commands.unmatched.inc();
        let text = hub.encode_text();
        assert!(text.contains("hh_devices_loaded 9"));
        assert!(text.contains("hh_commands_parsed 1"));
        assert!(text.contains("hh_commands_unmatched 1"));
        assert!(text.contains("hh_commands_executed 0"));
    }

    #[test]
    fn test_registration_conflict_reported() {
        let shared = Registry::new();
        let first = MetricsHub::with_registry(shared.clone()).unwrap();
        first.commands.parsed.inc();

        let err = MetricsHub::with_registry(shared).err().unwrap();
        assert!(err.starts_with("metrics register error"), "{err}");
    }
}
