pub mod assets;
pub mod coords;
pub mod error;
pub mod session;

/// Canonical coordinate config file name, hand-edited by the user.
pub const CONFIG_FILE: &str = "coordinates.json";

/// Auto-generated template file name. Never loaded as the active config —
/// the user renames/copies it to [`CONFIG_FILE`] to promote it.
pub const TEMPLATE_FILE: &str = "coordinates_template.json";
