//! Handler fuer Werkzeugwahl und Simulationsstart.

use crate::app::controller::SessionHost;
use crate::app::handlers::documents;
use crate::app::state::SessionState;
use crate::host::{AudioSetup, ToolKind};

/// Installiert ein Werkzeug auf dem aktiven Editor und gibt dessen View
/// den Fokus, damit die naechste Maus-Interaktion dort landet.
pub fn install_tool(state: &mut SessionState, host: &mut SessionHost, tool: ToolKind) {
    let Some(document_id) = state.active_document else {
        log::debug!("Werkzeugwahl ohne aktives Dokument ignoriert");
        return;
    };
    let Some(handle) = state.documents.get_mut(document_id) else {
        log::warn!("Werkzeugwahl fuer unbekanntes Dokument {document_id}");
        return;
    };
    log::debug!("Werkzeug {tool:?} auf Dokument {document_id}");
    handle.editor_mut().install_tool(tool);
    host.dock.focus_view(document_id);
}

/// Startet eine Simulationssitzung fuer das aktive Dokument.
/// Das gewaehlte Audio-Geraet wird als Vorbelegung fuer den naechsten
/// Setup-Dialog in den Einstellungen gemerkt.
pub fn launch(state: &mut SessionState, host: &mut SessionHost, audio: AudioSetup) {
    let Some(document_id) = state.active_document else {
        log::debug!("Simulationsstart ohne aktives Dokument ignoriert");
        return;
    };

    state.settings.audio_device = Some(audio.device.clone());
    documents::persist_settings(state, host);

    match host.simulation.launch(document_id, &audio) {
        Ok(()) => log::info!(
            "Simulation gestartet: Dokument {document_id}, Geraet '{}'",
            audio.device
        ),
        Err(e) => {
            log::warn!("Simulationsstart fehlgeschlagen: {e}");
            state.ui.error_message = Some(format!("Simulation konnte nicht starten: {e}"));
        }
    }
}
