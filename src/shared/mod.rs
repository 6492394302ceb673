//! Geteilte Typen ausserhalb der Kern-Domaene.

pub mod settings;

pub use settings::{FileSettingsStore, SessionSettings, SettingsStore, RECENT_FILES_MAX};
