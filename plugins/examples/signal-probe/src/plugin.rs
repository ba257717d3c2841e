use sonant_sdk::{logger, registry, SonantPlugin};

/// Reads slot 0 of the host's signal registry on every notification and
/// reports the value through the host logger, tagged with the handle the
/// host passed in.
#[derive(Default)]
struct SignalProbePlugin;

impl SonantPlugin for SignalProbePlugin {
    fn name(&self) -> &'static str {
        "signal-probe"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn icon(&self) -> Vec<u8> {
        include_bytes!("../assets/probe.png").to_vec()
    }

    fn enable(&self) -> i32 {
        logger::log("signal probe attached");
        2343
    }

    fn disable(&self) -> i32 {
        logger::log("signal probe detached");
        123
    }

    fn process_signal(&self, handle: u64) {
        let signal = registry::get_signal(0);
        logger::log(&format!("signal at {handle:#x} is: {signal}"));
    }
}

sonant_sdk::export_plugin!(SignalProbePlugin);

// Module for tests
#[cfg(test)]
mod tests;
