//! Lineare Undo/Redo-Historie mit Cursor, eine pro Dokument.

use crate::core::EditRecord;
use crate::host::SchematicEditor;


/// Undo/Redo-Historie eines Dokuments.
///
/// `history[..cursor]` sind angewendete Edits (Undo-Kandidaten),
/// `history[cursor..]` zurueckgenommene (Redo-Kandidaten). `saved_cursor`
/// haelt die Cursor-Position des letzten Speicherns fest; weicht der Cursor
/// davon ab, gilt das Dokument als dirty.
pub struct EditStack {
    history: Vec<EditRecord>,
    cursor: usize,
    /// `None`, wenn die gespeicherte Position beim Verwerfen der
    /// Vorwaertshistorie verloren ging; das Dokument bleibt dann bis zum
    /// naechsten Speichern dirty, egal wohin der Cursor wandert.
    saved_cursor: Option<usize>,
}

impl EditStack {
    /// Frische Historie; der leere Zustand zaehlt als gespeichert.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            cursor: 0,
            saved_cursor: Some(0),
        }
    }

    /// Haengt einen bereits angewendeten Edit an der Cursor-Position an.
    ///
    /// Die Vorwaertshistorie wird verworfen. Der Edit selbst wird hier nicht
    /// ausgefuehrt: das Panel bzw. der Editor hat die Aenderung schon auf das
    /// Komponentenmodell angewendet.
    pub fn record(&mut self, edit: EditRecord) {
        self.history.truncate(self.cursor);
        if let Some(saved) = self.saved_cursor {
            if saved > self.cursor {
                self.saved_cursor = None;
            }
        }
        self.history.push(edit);
        self.cursor += 1;
    }

    /// Nimmt den Edit vor dem Cursor zurueck. `false` am Anfang der Historie.
    pub fn undo(&mut self, editor: &mut dyn SchematicEditor) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.history[self.cursor].revert(editor);
        true
    }

    /// Wendet den Edit am Cursor erneut an. `false` am Ende der Historie.
    pub fn redo(&mut self, editor: &mut dyn SchematicEditor) -> bool {
        if self.cursor == self.history.len() {
            return false;
        }
        self.history[self.cursor].apply(editor);
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Merkt die aktuelle Cursor-Position als gespeicherten Zustand.
    pub fn mark_saved(&mut self) {
        self.saved_cursor = Some(self.cursor);
    }

    /// `true`, solange der Cursor nicht auf der zuletzt gespeicherten
    /// Position steht.
    pub fn dirty(&self) -> bool {
        self.saved_cursor != Some(self.cursor)
    }

    /// Anzahl der Eintraege in der Historie.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for EditStack {
    fn default() -> Self {
        Self::new()
    }
}
