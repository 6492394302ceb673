//! Dokument-Registry: hoechstens ein Handle pro kanonischem Dateipfad.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::core::DocumentHandle;
use crate::host::{DocumentError, SchematicEditor};


/// Kanonisiert einen Pfad fuer den Identitaetsvergleich.
///
/// Zwei Oeffnen-Anfragen meinen genau dann dasselbe Dokument, wenn ihre
/// kanonischen absoluten Pfade uebereinstimmen; Symlinks und relative
/// Bestandteile sind dann aufgeloest. Schlaegt die Aufloesung fehl (Datei
/// existiert nicht, Verzeichnis nicht lesbar), wird das als IO-Fehler des
/// Dokuments gemeldet.
pub fn canonicalize_document_path(path: &Path) -> Result<PathBuf, DocumentError> {
    std::fs::canonicalize(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Menge der aktuell geoeffneten Dokumente.
///
/// Die IndexMap haelt die Registrierungsreihenfolge fest: `save_all` und die
/// Dirty-Liste des Schliessen-Dialogs iterieren deterministisch darueber.
/// Ungespeicherte neue Dokumente haben keinen Pfad und nehmen nicht an der
/// Pfad-Deduplizierung teil.
pub struct DocumentRegistry {
    documents: IndexMap<u64, DocumentHandle>,
    /// Kanonischer Pfad -> Dokument-ID, nur fuer Dokumente mit Datei.
    by_path: HashMap<PathBuf, u64>,
    next_id: u64,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
            by_path: HashMap::new(),
            next_id: 1,
        }
    }

    /// Findet das geoeffnete Dokument zu einem beliebig geschriebenen Pfad.
    /// `None`, wenn der Pfad nicht aufloesbar oder nicht geoeffnet ist.
    pub fn find_by_path(&self, path: &Path) -> Option<u64> {
        let canonical = std::fs::canonicalize(path).ok()?;
        self.find_by_canonical(&canonical)
    }

    /// Lookup fuer bereits kanonisierte Pfade.
    pub fn find_by_canonical(&self, canonical: &Path) -> Option<u64> {
        self.by_path.get(canonical).copied()
    }

    /// Registriert ein geladenes Dokument unter seinem kanonischen Pfad.
    /// Der Aufrufer hat den Pfad kanonisiert und per Lookup sichergestellt,
    /// dass er noch nicht registriert ist.
    pub fn insert_opened(&mut self, editor: Box<dyn SchematicEditor>, canonical: PathBuf) -> u64 {
        debug_assert!(
            !self.by_path.contains_key(&canonical),
            "Pfad doppelt registriert: {}",
            canonical.display()
        );
        let id = self.allocate_id();
        self.by_path.insert(canonical.clone(), id);
        self.documents
            .insert(id, DocumentHandle::new(id, editor, Some(canonical)));
        id
    }

    /// Registriert ein neues ungespeichertes Dokument. Keine Deduplizierung:
    /// beliebig viele namenlose Dokumente koennen nebeneinander existieren.
    pub fn insert_untitled(&mut self, editor: Box<dyn SchematicEditor>) -> u64 {
        let id = self.allocate_id();
        self.documents
            .insert(id, DocumentHandle::new(id, editor, None));
        id
    }

    /// Entfernt ein Dokument und gibt das Handle heraus.
    /// Die Schliessen-Bestaetigung muss der Aufrufer vorher eingeholt haben.
    pub fn remove(&mut self, document_id: u64) -> Option<DocumentHandle> {
        let handle = self.documents.shift_remove(&document_id)?;
        if let Some(path) = handle.file_path() {
            // Nur loeschen, wenn der Eintrag noch auf dieses Dokument zeigt;
            // eine Rekey-Kollision kann ihn umgebogen haben.
            if self.by_path.get(path) == Some(&document_id) {
                let path = path.to_path_buf();
                self.by_path.remove(&path);
            }
        }
        Some(handle)
    }

    /// Haengt ein Dokument nach einem Save-As auf den neuen kanonischen Pfad
    /// um. Zeigt der Pfad bereits auf ein anderes offenes Dokument, gewinnt
    /// das frisch gespeicherte: der Index wird umgebogen, das verdraengte
    /// Dokument bleibt offen, ist aber nicht mehr per Pfad auffindbar.
    pub fn rekey(&mut self, document_id: u64, new_canonical: PathBuf) {
        let Some(handle) = self.documents.get_mut(&document_id) else {
            log::error!("Rekey fuer unbekanntes Dokument {document_id}");
            debug_assert!(false, "Rekey fuer unbekanntes Dokument");
            return;
        };
        let old_path = handle.file_path().map(Path::to_path_buf);
        handle.set_file_path(Some(new_canonical.clone()));

        if let Some(old) = old_path {
            if self.by_path.get(&old) == Some(&document_id) {
                self.by_path.remove(&old);
            }
        }
        if let Some(displaced) = self.by_path.insert(new_canonical.clone(), document_id) {
            if displaced != document_id {
                log::warn!(
                    "Pfad {} zeigte auf Dokument {displaced}, jetzt auf {document_id}",
                    new_canonical.display()
                );
            }
        }
    }

    pub fn get(&self, document_id: u64) -> Option<&DocumentHandle> {
        self.documents.get(&document_id)
    }

    pub fn get_mut(&mut self, document_id: u64) -> Option<&mut DocumentHandle> {
        self.documents.get_mut(&document_id)
    }

    /// Iteriert in Registrierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentHandle> {
        self.documents.values()
    }

    /// Dokument-IDs in Registrierungsreihenfolge.
    pub fn ids(&self) -> Vec<u64> {
        self.documents.keys().copied().collect()
    }

    /// IDs der Dokumente mit ungespeicherten Aenderungen, in
    /// Registrierungsreihenfolge.
    pub fn dirty_ids(&self) -> Vec<u64> {
        self.documents
            .values()
            .filter(|handle| handle.dirty())
            .map(DocumentHandle::id)
            .collect()
    }

    /// ID des zuletzt registrierten Dokuments.
    pub fn last_id(&self) -> Option<u64> {
        self.documents.keys().last().copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
