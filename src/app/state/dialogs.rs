//! Zustand des Schliessen-Bestaetigungsdialogs.

use std::path::PathBuf;

/// Phasen des Schliessen-Protokolls der Session.
///
/// `ConfirmPending` wird nur betreten, wenn mindestens ein Dokument
/// ungespeicherte Aenderungen hat; ohne dirty Dokumente geht es direkt
/// nach `Closing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePhase {
    /// Kein Schliessen-Vorgang aktiv.
    #[default]
    Idle,
    /// Dialog offen, die Entscheidung des Nutzers steht aus.
    ConfirmPending,
    /// Schliessen bestaetigt; der Host darf Fenster und Prozess abbauen.
    Closing,
    /// Schliessen abgebrochen; die Session laeuft unveraendert weiter.
    Aborted,
}

/// Eintrag der Dirty-Liste im Schliessen-Dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DirtyDocument {
    pub document_id: u64,
    pub title: String,
    pub path: Option<PathBuf>,
}

/// Zustand des Schliessen-Dialogs: Phase plus die beim Protokollstart
/// eingesammelte Liste der dirty Dokumente.
#[derive(Default)]
pub struct CloseConfirmState {
    pub phase: ClosePhase,
    pub dirty_documents: Vec<DirtyDocument>,
}

impl CloseConfirmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, solange die Oberflaeche den Dialog anzeigen soll.
    pub fn visible(&self) -> bool {
        self.phase == ClosePhase::ConfirmPending
    }
}
