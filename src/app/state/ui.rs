//! Von der Oberflaeche gerenderter UI-Zustand.

/// Flags und Meldungen fuer die Oberflaeche.
/// Der Kern oeffnet keine Dialoge selbst; er setzt Flags, der Host rendert
/// und meldet das Ergebnis als Intent zurueck.
#[derive(Default)]
pub struct UiState {
    /// Datei-Oeffnen-Dialog anzeigen; das Ergebnis kommt als `FileSelected`.
    pub show_open_dialog: bool,
    /// Meldung fuer die Statusleiste.
    pub status_message: Option<String>,
    /// Nutzersichtbare Fehlermeldung (IO, Dateiformat, Simulation).
    pub error_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
