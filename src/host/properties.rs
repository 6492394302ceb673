//! Kontrakt des Property-Inspektions-Panels.

/// Zeigt die Eigenschaften der gebundenen Komponenten an.
///
/// Der Bindungskontext gehoert exklusiv dem Dokument, das zuletzt ein
/// Selektionsereignis ausgeloest hat; jeder Wechsel ersetzt ihn komplett.
/// Das Panel wendet Wertaenderungen selbst auf das Komponentenmodell an und
/// meldet sie dem Kern nur zur Verbuchung in der Undo-Historie.
pub trait PropertyPanel {
    /// Ersetzt den Bindungskontext vollstaendig (kein Merge mit der
    /// vorherigen Selektion).
    fn bind(&mut self, document_id: u64, components: &[u64]);

    /// Loest die Bindung; das Panel zeigt nichts mehr an.
    fn clear(&mut self);

    /// Gibt dem Panel den Eingabefokus.
    fn focus(&mut self);
}
