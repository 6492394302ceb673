//! Zentraler Zustand der Session.

use crate::app::command_log::CommandLog;
use crate::app::state::{CloseConfirmState, UiState};
use crate::core::{DocumentHandle, DocumentRegistry};
use crate::shared::SessionSettings;

/// Aktueller Bindungskontext des Property-Panels.
///
/// Spiegelt, was dem Host-Panel zuletzt gebunden wurde: das besitzende
/// Dokument und dessen inspizierbare Komponenten. Eingehende
/// Eigenschaftsaenderungen werden gegen diesen Kontext verbucht, nie gegen
/// das gerade aktive Dokument.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelBinding {
    /// Dokument, dem die Bindung exklusiv gehoert.
    pub document_id: u64,
    /// Gebundene inspizierbare Komponenten.
    pub components: Vec<u64>,
}

/// Gesamtzustand der Session.
/// Alle Mutationen laufen ueber Commands durch den
/// [`crate::app::SessionController`] auf einem Thread.
pub struct SessionState {
    /// Alle geoeffneten Dokumente.
    pub documents: DocumentRegistry,
    /// Aktives Dokument; `None`, wenn keines offen ist.
    pub active_document: Option<u64>,
    /// Panel-Bindung; `None` heisst leeres Panel.
    pub panel_binding: Option<PanelBinding>,
    /// Geladene Einstellungen (Layout-Blob, zuletzt geoeffnete Dateien).
    pub settings: SessionSettings,
    /// Flags und Meldungen fuer die Oberflaeche.
    pub ui: UiState,
    /// Zustand des Schliessen-Protokolls.
    pub close_confirm: CloseConfirmState,
    /// Verlauf ausgefuehrter Commands.
    pub command_log: CommandLog,
    /// Signal an den Host, Fenster und Prozess kontrolliert abzubauen.
    pub should_exit: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            documents: DocumentRegistry::new(),
            active_document: None,
            panel_binding: None,
            settings: SessionSettings::default(),
            ui: UiState::new(),
            close_confirm: CloseConfirmState::new(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Handle des aktiven Dokuments.
    pub fn active_handle(&self) -> Option<&DocumentHandle> {
        self.active_document.and_then(|id| self.documents.get(id))
    }

    pub fn active_handle_mut(&mut self) -> Option<&mut DocumentHandle> {
        self.active_document
            .and_then(|id| self.documents.get_mut(id))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
