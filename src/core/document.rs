//! Dokument-Handle: ein geoeffneter Schaltplan samt Editor und Historie.

use std::path::{Path, PathBuf};

use crate::core::{EditRecord, EditStack};
use crate::host::SchematicEditor;

/// Anzeigename fuer Dokumente ohne Datei.
pub const UNTITLED_TITLE: &str = "untitled";

/// Ein geoeffnetes Dokument.
///
/// Haelt die Editor-Instanz exklusiv, dazu Anzeige-Metadaten und die
/// Undo-Historie. Die `id` dient zugleich als View-Schluessel im
/// Docking-Host; der Kern verweist auf Views nur ueber diesen Schluessel,
/// nie ueber View-Objekte.
pub struct DocumentHandle {
    id: u64,
    editor: Box<dyn SchematicEditor>,
    /// Kanonischer Pfad; `None` fuer ungespeicherte neue Dokumente.
    /// Aenderungen laufen ueber die Registry, damit der Pfad-Index stimmt.
    file_path: Option<PathBuf>,
    edits: EditStack,
    /// Zuletzt publizierte inspizierbare Selektion. Beim Dokumentwechsel
    /// wird das Panel daraus neu gebunden.
    bound_components: Vec<u64>,
}

impl DocumentHandle {
    pub(crate) fn new(id: u64, editor: Box<dyn SchematicEditor>, file_path: Option<PathBuf>) -> Self {
        Self {
            id,
            editor,
            file_path,
            edits: EditStack::new(),
            bound_components: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub(crate) fn set_file_path(&mut self, file_path: Option<PathBuf>) {
        self.file_path = file_path;
    }

    /// Anzeigename: Dateiname ohne Verzeichnis, sonst [`UNTITLED_TITLE`].
    pub fn title(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_TITLE.to_string())
    }

    pub fn editor(&self) -> &dyn SchematicEditor {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> &mut dyn SchematicEditor {
        self.editor.as_mut()
    }

    pub fn edits(&self) -> &EditStack {
        &self.edits
    }

    /// Verbucht einen bereits angewendeten Edit in der Historie.
    pub fn record(&mut self, edit: EditRecord) {
        self.edits.record(edit);
    }

    pub fn undo(&mut self) -> bool {
        self.edits.undo(self.editor.as_mut())
    }

    pub fn redo(&mut self) -> bool {
        self.edits.redo(self.editor.as_mut())
    }

    /// `true`, wenn seit dem letzten Speichern Edits offen sind.
    pub fn dirty(&self) -> bool {
        self.edits.dirty()
    }

    pub(crate) fn mark_saved(&mut self) {
        self.edits.mark_saved();
    }

    /// Ersetzt den Editor nach einem Neuladen der Datei.
    /// Historie und Selektion gehoerten dem alten Inhalt und werden verworfen.
    pub(crate) fn replace_editor(&mut self, editor: Box<dyn SchematicEditor>) {
        self.editor = editor;
        self.edits = EditStack::new();
        self.bound_components.clear();
    }

    pub fn bound_components(&self) -> &[u64] {
        &self.bound_components
    }

    pub(crate) fn set_bound_components(&mut self, components: Vec<u64>) {
        self.bound_components = components;
    }
}
