//! Edit-Records: typisierte Eigenschaftsaenderungen fuer die Undo-Historie.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::host::SchematicEditor;

/// Stabiler Eigenschafts-Schluessel aus dem Komponentenmodell.
///
/// Der Session-Kern interpretiert den Schluessel nicht, er reicht ihn nur
/// zwischen Property-Panel und Editor durch (keine Reflection im Kern).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId(String);

impl PropertyId {
    /// Erstellt einen Schluessel aus dem vom Komponentenmodell gelieferten Namen.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Liefert den Schluessel als String-Slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Eigenschaftswert, wie ihn das Komponentenmodell liefert.
///
/// Fuer den Kern opak: Werte werden gespeichert und beim Undo/Redo
/// unveraendert zurueckgeschrieben, nie ausgewertet. Serialisierbar, damit
/// Hosts Werte ueber Prozess- oder Persistenzgrenzen tragen koennen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Freitext (z.B. Bauteilname, Modellbezeichnung)
    Text(String),
    /// Numerischer Wert (z.B. Widerstand, Kapazitaet)
    Number(f64),
    /// Schalter (z.B. Polaritaet)
    Flag(bool),
}

/// Ein Eintrag der Undo-Historie.
///
/// `Composite` buendelt die Edits einer Mehrfachselektion, damit ein
/// einzelner Undo-Schritt die gesamte Gruppe zuruecknimmt.
#[derive(Debug, Clone, PartialEq)]
pub enum EditRecord {
    /// Eine Feldaenderung an genau einer Komponente
    Property {
        /// Komponenten-ID aus dem Komponentenmodell
        entity_id: u64,
        /// Geaenderte Eigenschaft
        property: PropertyId,
        /// Wert vor der Aenderung (Undo-Ziel)
        old_value: PropertyValue,
        /// Wert nach der Aenderung (Redo-Ziel)
        new_value: PropertyValue,
    },
    /// Geordnete Gruppe von Edits, die als eine Einheit gilt
    Composite {
        /// Mitglieder in Anwendungsreihenfolge
        edits: Vec<EditRecord>,
    },
}

impl EditRecord {
    /// Baut aus einer Edit-Liste einen einzelnen Record.
    ///
    /// Genau ein Element wird ausgepackt statt in ein Composite verpackt,
    /// so bleibt die Historie fuer Einzel-Edits flach.
    pub fn composite(mut edits: Vec<EditRecord>) -> EditRecord {
        if edits.len() == 1 {
            return edits.remove(0);
        }
        EditRecord::Composite { edits }
    }

    /// Anzahl der enthaltenen Einzel-Edits (Composite zaehlt Mitglieder).
    pub fn len(&self) -> usize {
        match self {
            EditRecord::Property { .. } => 1,
            EditRecord::Composite { edits } => edits.iter().map(EditRecord::len).sum(),
        }
    }

    /// Gibt `true` zurueck, wenn der Record keine Einzel-Edits enthaelt.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wendet den Edit vorwaerts an (Redo-Richtung).
    ///
    /// Composite-Mitglieder werden in Originalreihenfolge angewendet.
    pub fn apply(&self, editor: &mut dyn SchematicEditor) {
        match self {
            EditRecord::Property {
                entity_id,
                property,
                new_value,
                ..
            } => {
                if !editor.set_property(*entity_id, property, new_value) {
                    log::warn!(
                        "Redo: Komponente {} kennt Eigenschaft '{}' nicht mehr",
                        entity_id,
                        property
                    );
                }
            }
            EditRecord::Composite { edits } => {
                for edit in edits {
                    edit.apply(editor);
                }
            }
        }
    }

    /// Nimmt den Edit zurueck (Undo-Richtung).
    ///
    /// Composite-Mitglieder werden in umgekehrter Reihenfolge
    /// zurueckgenommen, damit abhaengige Aenderungen sauber rueckabgewickelt
    /// werden.
    pub fn revert(&self, editor: &mut dyn SchematicEditor) {
        match self {
            EditRecord::Property {
                entity_id,
                property,
                old_value,
                ..
            } => {
                if !editor.set_property(*entity_id, property, old_value) {
                    log::warn!(
                        "Undo: Komponente {} kennt Eigenschaft '{}' nicht mehr",
                        entity_id,
                        property
                    );
                }
            }
            EditRecord::Composite { edits } => {
                for edit in edits.iter().rev() {
                    edit.revert(editor);
                }
            }
        }
    }
}
