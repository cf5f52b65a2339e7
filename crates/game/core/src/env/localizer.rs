//! Localization oracle for resolving display strings.

/// Resolves a fixed localization key (e.g. `"PTU.Master"`) to display text.
pub trait Localizer: Send + Sync {
    /// Returns the display string for `key`.
    ///
    /// Implementations return the key itself when no translation exists, so a
    /// lookup never fails.
    fn localize(&self, key: &str) -> String;
}

/// Localizer that echoes every key back unchanged.
///
/// Used when no language table is loaded; sheets then show the raw keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyLocalizer;

impl Localizer for KeyLocalizer {
    fn localize(&self, key: &str) -> String {
        key.to_owned()
    }
}
