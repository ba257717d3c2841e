use sonant_sdk::{logger, registry, SonantPlugin};

/// Silences the host: every notification writes 0.0 into registry slot 0
/// and reports the value that was displaced.
#[derive(Default)]
struct SignalMutePlugin;

impl SonantPlugin for SignalMutePlugin {
    fn name(&self) -> &'static str {
        "signal-mute"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn enable(&self) -> i32 {
        9999
    }

    fn disable(&self) -> i32 {
        999
    }

    fn process_signal(&self, handle: u64) {
        let displaced = registry::set_signal(0, 0.0);
        logger::log(&format!("muted slot 0 at {handle:#x}, was {displaced}"));
    }
}

sonant_sdk::export_plugin!(SignalMutePlugin);

// Module for tests
#[cfg(test)]
mod tests;
