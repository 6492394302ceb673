//! Handler fuer Undo und Redo auf dem aktiven Dokument.

use crate::app::state::SessionState;

/// Nimmt den letzten Edit des aktiven Dokuments zurueck.
/// Leere Historie oder fehlendes Dokument: stiller No-Op.
pub fn undo(state: &mut SessionState) {
    let Some(handle) = state.active_handle_mut() else {
        log::debug!("Undo: kein aktives Dokument");
        return;
    };
    if handle.undo() {
        log::info!("Edit zurueckgenommen (Dokument {})", handle.id());
    } else {
        log::debug!("Undo: Historie leer");
    }
}

/// Wendet den zuletzt zurueckgenommenen Edit erneut an.
pub fn redo(state: &mut SessionState) {
    let Some(handle) = state.active_handle_mut() else {
        log::debug!("Redo: kein aktives Dokument");
        return;
    };
    if handle.redo() {
        log::info!("Edit erneut angewendet (Dokument {})", handle.id());
    } else {
        log::debug!("Redo: nichts zurueckgenommen");
    }
}
