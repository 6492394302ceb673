//! Persistente Session-Einstellungen: Layout-Blob, zuletzt geoeffnete
//! Dateien, Audio-Vorbelegung.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Maximale Laenge der Liste zuletzt geoeffneter Dateien.
pub const RECENT_FILES_MAX: usize = 10;

/// Einstellungen, die eine Session ueberdauern.
/// Liegen als TOML-Datei neben der Binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionSettings {
    /// Opakes Layout-Blob des Docking-Hosts; Format gehoert dem Host.
    #[serde(default)]
    pub window_layout: Option<String>,
    /// Zuletzt geoeffnete Dateien, neueste zuerst.
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    /// Zuletzt gewaehltes Audio-Geraet, Vorbelegung des Setup-Dialogs.
    #[serde(default)]
    pub audio_device: Option<String>,
}

impl SessionSettings {
    /// Laedt Einstellungen aus einer TOML-Datei.
    /// Fehlende oder kaputte Datei: Standardwerte, der Start geht weiter.
    pub fn load_from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Einstellungen nicht lesbar ({e}), verwende Standardwerte");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Einstellungen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Pfad der Einstellungs-Datei neben der Binary; Fallback auf das
    /// Arbeitsverzeichnis, wenn der Binary-Pfad nicht ermittelbar ist.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("schaltplan_studio.toml")))
            .unwrap_or_else(|| PathBuf::from("schaltplan_studio.toml"))
    }

    /// Traegt einen Pfad vorne in die Liste zuletzt geoeffneter Dateien ein.
    /// Ein schon vorhandener Eintrag rueckt nach vorn statt zu doppeln; die
    /// Liste bleibt auf [`RECENT_FILES_MAX`] begrenzt.
    pub fn push_recent(&mut self, path: &Path) {
        self.recent_files.retain(|known| known != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(RECENT_FILES_MAX);
    }
}

/// Einstellungs-Dienst, wird dem Controller beim Start injiziert.
/// Tests haengen hier einen In-Memory-Store ein.
pub trait SettingsStore {
    /// Laedt die Einstellungen; bei Fehlern Standardwerte.
    fn load(&self) -> SessionSettings;

    /// Persistiert die Einstellungen.
    fn save(&self, settings: &SessionSettings) -> anyhow::Result<()>;
}

/// Dateibasierter Einstellungs-Dienst (TOML).
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store am Standardpfad neben der Binary.
    pub fn at_default_location() -> Self {
        Self::new(SessionSettings::config_path())
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> SessionSettings {
        SessionSettings::load_from_file(&self.path)
    }

    fn save(&self, settings: &SessionSettings) -> anyhow::Result<()> {
        settings.save_to_file(&self.path)
    }
}
