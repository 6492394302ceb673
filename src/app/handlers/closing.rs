//! Handler fuer das Schliessen-Protokoll der Session.
//!
//! Das Protokoll laeuft ueber die Phasen in
//! [`crate::app::state::ClosePhase`]: `Idle -> ConfirmPending` nur bei
//! ungespeicherten Aenderungen, von dort per Nutzerentscheidung nach
//! `Closing` oder `Aborted`. Erst `Closing` setzt `should_exit`; der Host
//! baut dann Fenster und Prozess ab.

use std::path::Path;

use crate::app::controller::SessionHost;
use crate::app::handlers::documents::{self, SaveOutcome};
use crate::app::state::{ClosePhase, DirtyDocument, SessionState};

/// Startet das Schliessen-Protokoll.
///
/// Ohne dirty Dokumente wird direkt geschlossen. Sonst wird die Dirty-Liste
/// fuer den Dialog eingesammelt und auf die Entscheidung des Nutzers
/// gewartet; bis dahin aendert sich nichts an der Session.
pub fn begin(state: &mut SessionState) {
    let dirty = collect_dirty(state);
    if dirty.is_empty() {
        state.close_confirm.phase = ClosePhase::Closing;
        state.should_exit = true;
        log::info!("Session wird geschlossen, keine ungespeicherten Aenderungen");
        return;
    }

    log::info!("Schliessen-Rueckfrage: {} Dokument(e) dirty", dirty.len());
    state.close_confirm.dirty_documents = dirty;
    state.close_confirm.phase = ClosePhase::ConfirmPending;
}

/// Nutzer verwirft alle Aenderungen: Schliessen geht weiter, ohne dass
/// irgendein Dokument gespeichert wird.
pub fn confirm_discard(state: &mut SessionState) {
    if state.close_confirm.phase != ClosePhase::ConfirmPending {
        log::debug!("Verwerfen ohne offenen Schliessen-Dialog ignoriert");
        return;
    }
    state.close_confirm.phase = ClosePhase::Closing;
    state.close_confirm.dirty_documents.clear();
    state.should_exit = true;
    log::info!("Session wird geschlossen, Aenderungen verworfen");
}

/// Nutzer will erst speichern: alle dirty Dokumente der Dialog-Liste werden
/// der Reihe nach gespeichert, dann wird geschlossen.
///
/// Schlaegt ein Speichern fehl oder bricht der Nutzer einen Save-As-Dialog
/// ab, wird das Schliessen abgebrochen; alle Dokumente bleiben offen.
/// Bereits gespeicherte Dokumente bleiben gespeichert.
pub fn confirm_save(state: &mut SessionState, host: &mut SessionHost) {
    if state.close_confirm.phase != ClosePhase::ConfirmPending {
        log::debug!("Speichern-und-Schliessen ohne offenen Dialog ignoriert");
        return;
    }

    let pending: Vec<u64> = state
        .close_confirm
        .dirty_documents
        .iter()
        .map(|entry| entry.document_id)
        .collect();
    for document_id in pending {
        if documents::save_document(state, host, document_id) != SaveOutcome::Saved {
            state.close_confirm.phase = ClosePhase::Aborted;
            state.close_confirm.dirty_documents.clear();
            log::warn!("Schliessen abgebrochen: Dokument {document_id} nicht gespeichert");
            return;
        }
    }

    state.close_confirm.phase = ClosePhase::Closing;
    state.close_confirm.dirty_documents.clear();
    state.should_exit = true;
    log::info!("Alle Aenderungen gespeichert, Session wird geschlossen");
}

/// Nutzer bricht ab: Dialog zu, Session laeuft unveraendert weiter.
pub fn cancel(state: &mut SessionState) {
    if state.close_confirm.phase != ClosePhase::ConfirmPending {
        log::debug!("Abbrechen ohne offenen Schliessen-Dialog ignoriert");
        return;
    }
    state.close_confirm.phase = ClosePhase::Aborted;
    state.close_confirm.dirty_documents.clear();
    log::info!("Schliessen abgebrochen");
}

/// Dirty-Dokumente in Registrierungsreihenfolge, mit Anzeige-Metadaten
/// fuer die Dialog-Liste.
fn collect_dirty(state: &SessionState) -> Vec<DirtyDocument> {
    state
        .documents
        .iter()
        .filter(|handle| handle.dirty())
        .map(|handle| DirtyDocument {
            document_id: handle.id(),
            title: handle.title(),
            path: handle.file_path().map(Path::to_path_buf),
        })
        .collect()
}
