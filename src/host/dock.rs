//! Kontrakt des Docking-/Fenster-Hosts.

use std::path::Path;

/// Nimmt Dokument-Views auf und persistiert die Panel-Anordnung.
///
/// Das Layout-Blob ist fuer den Kern opak: Inhalt und Format gehoeren dem
/// Host, der Kern reicht es nur zwischen Host und Einstellungen durch.
/// Views werden ueber die Dokument-ID angesprochen; der Kern haelt keine
/// Referenz auf View-Objekte.
pub trait DockHost {
    /// Meldet ein neues Dokument zur Anzeige an (Tab oder Fenster).
    fn add_document(&mut self, document_id: u64, title: &str, path: Option<&Path>);

    /// Aktualisiert Titel und Tooltip-Pfad einer Dokument-View.
    fn set_title(&mut self, document_id: u64, title: &str, path: Option<&Path>);

    /// Holt die View in den Vordergrund und gibt ihr den Fokus.
    fn focus_view(&mut self, document_id: u64);

    /// Entfernt die View eines geschlossenen Dokuments.
    fn close_view(&mut self, document_id: u64);

    /// Serialisiert die aktuelle Panel- und Dokument-Anordnung.
    fn save_layout(&self) -> String;

    /// Stellt eine gespeicherte Anordnung wieder her.
    /// Fehler behandelt der Aufrufer; ein korruptes Blob darf den Start
    /// nicht blockieren.
    fn load_layout(&mut self, blob: &str) -> anyhow::Result<()>;
}
