//! Kernbibliothek von Schaltplan-Studio.
//!
//! Verwaltet die Editing-Session eines Schaltplan-Editors mit mehreren
//! gleichzeitig geoeffneten Dokumenten: Registry mit Pfad-Identitaet,
//! Undo-Historie pro Dokument, Selektions-Bruecke zum Property-Panel,
//! Dirty-Verfolgung und das Schliessen-Protokoll. Editor-Flaeche,
//! Docking-Host, Panel und Simulation haengen ueber die Kontrakte in
//! [`host`] an; die Oberflaeche selbst lebt ausserhalb dieser Bibliothek.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use app::{
    ClosePhase, CloseConfirmState, CommandLog, DirtyDocument, PanelBinding, SessionCommand,
    SessionController, SessionHost, SessionIntent, SessionState, UiState,
};
pub use core::{
    canonicalize_document_path, DocumentHandle, DocumentRegistry, EditRecord, EditStack,
    PropertyId, PropertyValue, UNTITLED_TITLE,
};
pub use host::{
    AudioSetup, DockHost, DocumentError, PropertyPanel, SchematicEditor, SchematicLoader,
    SimulationHost, ToolKind,
};
pub use shared::{FileSettingsStore, SessionSettings, SettingsStore, RECENT_FILES_MAX};
