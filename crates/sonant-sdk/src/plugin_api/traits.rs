use crate::plugin_api::version::VersionRange;

/// Version of the capability API this SDK build exposes.
///
/// The host compares a plugin's [`SonantPlugin::compatible_api_versions`]
/// against its own API version before enabling the plugin.
pub const SDK_API_VERSION: &str = "0.1.0";

/// Constraint advertised by plugins that accept the current API line.
const DEFAULT_API_REQ: &str = "^0.1";

/// Capability trait that all Sonant plugins must implement.
///
/// The host owns the threading and reentrancy model for every method here;
/// implementations are required to be `Send + Sync` and must not panic.
pub trait SonantPlugin: Send + Sync {
    /// Stable identifier for the plugin, used in host logs.
    fn name(&self) -> &'static str;

    /// The version of the plugin itself (not the API).
    fn version(&self) -> &str;

    /// API versions this plugin was built to work with.
    ///
    /// The default accepts the current API line. Plugins that need a
    /// narrower constraint override this.
    fn compatible_api_versions(&self) -> Vec<VersionRange> {
        match VersionRange::from_constraint(DEFAULT_API_REQ) {
            Ok(range) => vec![range],
            Err(e) => {
                log::error!(
                    "failed to parse default API requirement ('{}'): {}",
                    DEFAULT_API_REQ,
                    e
                );
                // Empty means "compatible with nothing"; the host will
                // refuse to enable the plugin.
                vec![]
            }
        }
    }

    /// Encoded image the host may render for this plugin at load time.
    ///
    /// Empty means no icon.
    fn icon(&self) -> Vec<u8> {
        Vec::new()
    }

    /// Called by the host once the plugin is loaded. Returns a status code
    /// that the host records; the meaning of the code is plugin-defined.
    fn enable(&self) -> i32;

    /// Counterpart of [`enable`](SonantPlugin::enable), called before the
    /// host drops the plugin. Returns a status code.
    fn disable(&self) -> i32;

    /// Handle one signal notification from the host.
    ///
    /// `handle` is an opaque identifier owned by the host. Implementations
    /// must accept any value, including 0 and `u64::MAX`.
    fn process_signal(&self, handle: u64);
}
