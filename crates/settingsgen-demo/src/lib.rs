//! Accessors generated at build time from `settings.json` and
//! `settingsgen-demo.settings.json` in this directory.

include!(concat!(env!("OUT_DIR"), "/settingsgen.rs"));

pub use settingsgen_demo_internal_settings::InternalSettings;
pub use settingsgen_demo_settings::Settings;
