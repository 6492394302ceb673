//! Kontrakt der Schaltplan-Editor-Instanzen und ihres Loaders.
//!
//! Der Session-Kern besitzt pro Dokument genau eine Editor-Instanz exklusiv
//! und spricht sie nur ueber `SchematicEditor` an. Geometrie, Rendering und
//! das Dateiformat bleiben vollstaendig auf der Editor-Seite.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{PropertyId, PropertyValue};

/// Fehler beim Laden oder Speichern eines Schaltplans.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Datei nicht lesbar oder nicht schreibbar.
    #[error("IO-Fehler bei {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Datei lesbar, aber kein gueltiger Schaltplan.
    #[error("Ungueltiges Dateiformat bei {}: {reason}", path.display())]
    FileFormat { path: PathBuf, reason: String },
}

/// Interaktionswerkzeug auf der Editor-Flaeche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolKind {
    /// Leitungen zwischen Anschluessen ziehen.
    Wire,
    /// Bauteil eines bestimmten Typs platzieren (Typ-Schluessel aus dem
    /// Komponentenmodell des Editors).
    Symbol { component: String },
}

/// Editing-Flaeche eines einzelnen Schaltplans.
///
/// Save-Dialoge und die Schliessen-Rueckfrage gehoeren dem Editor; der Kern
/// sieht nur deren Ausgang. `Ok(false)` bei [`save`](Self::save) heisst
/// "Nutzer hat abgebrochen" und ist Kontrollfluss, kein Fehler.
pub trait SchematicEditor {
    /// Aktueller Dateipfad; `None` fuer ungespeicherte neue Dokumente.
    /// Ein Save-As im Editor kann den Pfad aendern.
    fn file_path(&self) -> Option<PathBuf>;

    /// Editor-eigenes Flag fuer ungespeicherte Aenderungen.
    fn has_pending_edits(&self) -> bool;

    /// Speichert den Schaltplan, bei Bedarf ueber einen Save-As-Dialog.
    fn save(&mut self) -> Result<bool, DocumentError>;

    /// Editor-eigene Rueckfrage vor Schliessen bzw. Neuladen.
    /// `for_reopen` unterscheidet "Dokument schliessen" von "Datei verwerfen
    /// und neu laden"; `false` ist ein Veto.
    fn can_close(&mut self, for_reopen: bool) -> bool;

    /// Inspizierbare Komponente eines Schaltplan-Elements.
    /// `None` fuer Leitungen und andere Elemente ohne Eigenschaften.
    fn component_of(&self, element_id: u64) -> Option<u64>;

    /// Liest den aktuellen Wert einer Eigenschaft aus dem Komponentenmodell.
    fn property_value(&self, component_id: u64, property: &PropertyId) -> Option<PropertyValue>;

    /// Schreibt einen Eigenschaftswert zurueck (Undo/Redo-Pfad).
    /// `false`, wenn Komponente oder Eigenschaft nicht existieren.
    fn set_property(
        &mut self,
        component_id: u64,
        property: &PropertyId,
        value: &PropertyValue,
    ) -> bool;

    /// Installiert das Interaktionswerkzeug auf der Editor-Flaeche.
    fn install_tool(&mut self, tool: ToolKind);
}

/// Erstellt und laedt Editor-Instanzen.
pub trait SchematicLoader {
    /// Laedt einen Schaltplan aus einer Datei.
    /// Bei einem Fehler bleibt die Session unveraendert; der Aufrufer meldet
    /// den Fehler an die Oberflaeche.
    fn load(&self, path: &Path) -> Result<Box<dyn SchematicEditor>, DocumentError>;

    /// Erstellt ein leeres, noch ungespeichertes Dokument.
    fn create(&self) -> Box<dyn SchematicEditor>;
}
