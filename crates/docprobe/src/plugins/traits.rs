//! Base plugin trait definition.
//!
//! All format analyzers implement [`Plugin`], which provides identification
//! and lifecycle methods. Plugins are stored as `Arc<dyn DocumentAnalyzer>`
//! and called through shared references, so implementations must be
//! `Send + Sync` and use interior mutability for any state.

use crate::Result;

/// Base trait that all plugins must implement.
///
/// # Example
///
/// ```rust
/// use docprobe::plugins::Plugin;
/// use docprobe::Result;
///
/// struct MyPlugin;
///
/// impl Plugin for MyPlugin {
///     fn name(&self) -> &str {
///         "my-plugin"
///     }
///
///     fn version(&self) -> String {
///         "1.0.0".to_string()
///     }
///
///     fn initialize(&self) -> Result<()> {
///         Ok(())
///     }
///
///     fn shutdown(&self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Unique name for this plugin: lowercase, hyphen-separated, no whitespace.
    fn name(&self) -> &str;

    /// Semantic version of this plugin (`MAJOR.MINOR.PATCH`).
    fn version(&self) -> String;

    /// Called once when the plugin is registered. Registration is aborted if
    /// this returns an error.
    fn initialize(&self) -> Result<()>;

    /// Called when the plugin is removed from the registry or the registry is
    /// cleared.
    fn shutdown(&self) -> Result<()>;

    /// Optional plugin description for listings and logging.
    fn description(&self) -> &str {
        ""
    }
}
