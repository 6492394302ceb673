//! Session-Intents: Absichten aus Oberflaeche und Editoren, noch ohne
//! Seiteneffekte.

use std::path::PathBuf;

use crate::core::{PropertyId, PropertyValue};
use crate::host::{AudioSetup, ToolKind};

/// Absichtserklaerungen der UI- und Editor-Schicht.
///
/// Intents beschreiben, was passieren soll, nicht wie. Das Mapping in
/// [`crate::app::intent_mapping`] uebersetzt sie in ausfuehrbare Commands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    /// Nutzer moechte eine Datei oeffnen (Dialog anzeigen).
    OpenFileRequested,
    /// Dateiauswahl-Dialog hat einen Pfad geliefert; auch der Klick auf
    /// einen Eintrag der zuletzt-geoeffnet-Liste landet hier.
    FileSelected { path: PathBuf },
    /// Nutzer moechte ein neues leeres Dokument.
    NewDocumentRequested,
    /// Aktives Dokument speichern.
    SaveActiveRequested,
    /// Alle Dokumente speichern.
    SaveAllRequested,
    /// Aktives Dokument schliessen.
    CloseActiveRequested,
    /// Ein bestimmtes Dokument schliessen (Tab-Schliessen-Knopf).
    DocumentCloseRequested { document_id: u64 },
    /// Session beenden (Fenster-Schliessen, Menue Beenden).
    CloseSessionRequested,
    /// Schliessen-Dialog: Aenderungen verwerfen und beenden.
    CloseDiscardConfirmed,
    /// Schliessen-Dialog: erst speichern, dann beenden.
    CloseSaveConfirmed,
    /// Schliessen-Dialog: abbrechen, alles bleibt offen.
    CloseCancelled,
    /// Docking-Host hat den aktiven Tab gewechselt.
    DocumentActivated { document_id: u64 },
    /// Ein Editor meldet eine neue Selektion von Schaltplan-Elementen.
    SelectionChanged { document_id: u64, elements: Vec<u64> },
    /// Editor-Geste "Selektion bearbeiten": Property-Panel fokussieren.
    EditSelectionRequested { document_id: u64 },
    /// Das Property-Panel hat einen Wert geaendert und meldet die alten
    /// Werte pro Komponente; die neuen stehen schon im Komponentenmodell.
    PropertyValueChanged {
        property: PropertyId,
        old_values: Vec<(u64, PropertyValue)>,
    },
    /// Letzten Edit des aktiven Dokuments zuruecknehmen.
    UndoRequested,
    /// Zurueckgenommenen Edit erneut anwenden.
    RedoRequested,
    /// Werkzeug aus der Toolbox gewaehlt.
    ToolSelected { tool: ToolKind },
    /// Simulation fuer das aktive Dokument starten.
    SimulationRequested { audio: AudioSetup },
    /// Status- bzw. Fehlermeldung wegklicken.
    StatusDismissed,
}
