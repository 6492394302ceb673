//! Session-Commands: ausfuehrbare Zustandsaenderungen.

use std::path::PathBuf;

use crate::core::{PropertyId, PropertyValue};
use crate::host::{AudioSetup, ToolKind};

/// Vom Controller ausgefuehrte Commands.
///
/// Jeder Command mutiert den [`crate::app::SessionState`] ueber genau einen
/// Handler; die Reihenfolge innerhalb eines Intents bleibt erhalten.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Datei-Oeffnen-Dialog anfordern.
    RequestOpenDialog,
    /// Datei laden bzw. das bereits geoeffnete Dokument fokussieren.
    OpenDocument { path: PathBuf },
    /// Neues ungespeichertes Dokument anlegen.
    CreateDocument,
    /// Aktives Dokument speichern.
    SaveActiveDocument,
    /// Alle Dokumente in Registrierungsreihenfolge speichern.
    SaveAllDocuments,
    /// Aktives Dokument schliessen (Layout vorher sichern).
    CloseActiveDocument,
    /// Bestimmtes Dokument schliessen.
    CloseDocument { document_id: u64 },
    /// Schliessen-Protokoll der Session starten.
    BeginCloseSession,
    /// Schliessen-Dialog: verwerfen und beenden.
    ConfirmCloseDiscard,
    /// Schliessen-Dialog: speichern und beenden.
    ConfirmCloseSave,
    /// Schliessen-Dialog: abbrechen.
    CancelClose,
    /// Aktives Dokument wechseln und Panel umbinden.
    ActivateDocument { document_id: u64 },
    /// Selektion eines Dokuments an das Property-Panel geben.
    PublishSelection { document_id: u64, elements: Vec<u64> },
    /// Property-Panel fokussieren.
    FocusPropertyPanel { document_id: u64 },
    /// Eigenschaftsaenderung in der Undo-Historie verbuchen.
    RecordPropertyEdit {
        property: PropertyId,
        old_values: Vec<(u64, PropertyValue)>,
    },
    /// Undo auf dem aktiven Dokument.
    Undo,
    /// Redo auf dem aktiven Dokument.
    Redo,
    /// Werkzeug auf dem aktiven Editor installieren.
    InstallTool { tool: ToolKind },
    /// Simulationssitzung starten.
    LaunchSimulation { audio: AudioSetup },
    /// Status- und Fehlermeldung leeren.
    DismissStatus,
}
