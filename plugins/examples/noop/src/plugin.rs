use sonant_sdk::SonantPlugin;

/// Does nothing, on purpose. The host sees a well-behaved plugin that
/// reports fixed status codes and leaves every signal untouched; useful as
/// a template and as a load-path smoke test.
#[derive(Default)]
struct NoopPlugin;

impl SonantPlugin for NoopPlugin {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn enable(&self) -> i32 {
        5
    }

    fn disable(&self) -> i32 {
        10
    }

    fn process_signal(&self, _handle: u64) {}
}

sonant_sdk::export_plugin!(NoopPlugin);

// Module for tests
#[cfg(test)]
mod tests;
