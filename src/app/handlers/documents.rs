//! Handler fuer Dokument-Operationen: Oeffnen, Neu, Speichern, Schliessen
//! und Aktivieren.

use std::path::{Path, PathBuf};

use crate::app::controller::SessionHost;
use crate::app::state::{PanelBinding, SessionState};
use crate::core::{canonicalize_document_path, UNTITLED_TITLE};
use crate::host::DocumentError;

/// Ergebnis eines einzelnen Speichervorgangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SaveOutcome {
    Saved,
    /// Nutzer hat den Save-As-Dialog des Editors abgebrochen.
    Declined,
    Failed,
}

/// Fordert den Datei-Oeffnen-Dialog an; der Host rendert ihn und meldet
/// die Auswahl als `FileSelected` zurueck.
pub fn request_open(state: &mut SessionState) {
    state.ui.show_open_dialog = true;
}

/// Oeffnet eine Datei oder fokussiert das bereits geoeffnete Dokument.
///
/// Identitaet entscheidet der kanonische Pfad. Ist das Dokument schon offen,
/// fragt der Editor nach (`can_close(true)`) und laedt bei Zustimmung den
/// Inhalt frisch; Handle und View bleiben dieselben. Eine Ablehnung laesst
/// die Session komplett unveraendert.
pub fn open(state: &mut SessionState, host: &mut SessionHost, path: PathBuf) {
    state.ui.show_open_dialog = false;

    let canonical = match canonicalize_document_path(&path) {
        Ok(canonical) => canonical,
        Err(e) => {
            surface_error(state, &e);
            return;
        }
    };

    if let Some(document_id) = state.documents.find_by_canonical(&canonical) {
        host.dock.focus_view(document_id);
        state.active_document = Some(document_id);
        reload_in_place(state, host, document_id, &canonical);
        return;
    }

    match host.loader.load(&canonical) {
        Ok(editor) => {
            let document_id = state.documents.insert_opened(editor, canonical.clone());
            let title = document_title(state, document_id);
            host.dock.add_document(document_id, &title, Some(&canonical));
            host.dock.focus_view(document_id);
            state.active_document = Some(document_id);
            state.settings.push_recent(&canonical);
            persist_settings(state, host);
            log::info!("Dokument geoeffnet: {} (id {document_id})", canonical.display());
        }
        Err(e) => surface_error(state, &e),
    }
}

/// Laedt den Inhalt eines bereits geoeffneten Dokuments neu.
fn reload_in_place(
    state: &mut SessionState,
    host: &mut SessionHost,
    document_id: u64,
    canonical: &Path,
) {
    let accepted = match state.documents.get_mut(document_id) {
        Some(handle) => handle.editor_mut().can_close(true),
        None => {
            log::error!("Neuladen fuer unbekanntes Dokument {document_id}");
            debug_assert!(false, "Neuladen fuer unbekanntes Dokument");
            return;
        }
    };
    if !accepted {
        log::debug!("Neuladen abgelehnt: {}", canonical.display());
        return;
    }

    match host.loader.load(canonical) {
        Ok(editor) => {
            if let Some(handle) = state.documents.get_mut(document_id) {
                handle.replace_editor(editor);
            }
            // Historie und Selektion gehoerten dem alten Inhalt.
            if state
                .panel_binding
                .as_ref()
                .is_some_and(|binding| binding.document_id == document_id)
            {
                state.panel_binding = None;
                host.properties.clear();
            }
            log::info!("Dokument neu geladen: {}", canonical.display());
        }
        Err(e) => surface_error(state, &e),
    }
}

/// Legt ein neues ungespeichertes Dokument an. Neue Dokumente werden nie
/// dedupliziert; beliebig viele koennen nebeneinander offen sein.
pub fn create(state: &mut SessionState, host: &mut SessionHost) {
    let editor = host.loader.create();
    let document_id = state.documents.insert_untitled(editor);
    host.dock.add_document(document_id, UNTITLED_TITLE, None);
    host.dock.focus_view(document_id);
    state.active_document = Some(document_id);
    log::info!("Neues Dokument angelegt (id {document_id})");
}

/// Speichert das aktive Dokument.
pub fn save_active(state: &mut SessionState, host: &mut SessionHost) {
    let Some(document_id) = state.active_document else {
        log::debug!("Speichern: kein aktives Dokument");
        return;
    };
    save_document(state, host, document_id);
}

/// Speichert alle Dokumente in Registrierungsreihenfolge.
/// Der erste Fehlschlag oder Abbruch stoppt die Sequenz; schon gespeicherte
/// Dokumente bleiben gespeichert, die restlichen unveraendert.
pub fn save_all(state: &mut SessionState, host: &mut SessionHost) {
    for document_id in state.documents.ids() {
        if save_document(state, host, document_id) != SaveOutcome::Saved {
            log::warn!("Speichern aller Dokumente bei Dokument {document_id} gestoppt");
            return;
        }
    }
}

/// Speichert ein Dokument ueber den Editor-Kontrakt.
///
/// Nach erfolgreichem Speichern wird die Cursor-Position der Historie als
/// gespeichert markiert. Hat ein Save-As im Editor den Pfad geaendert,
/// ziehen Registry, View-Titel und Dateiverlauf nach.
pub(crate) fn save_document(
    state: &mut SessionState,
    host: &mut SessionHost,
    document_id: u64,
) -> SaveOutcome {
    let Some(handle) = state.documents.get_mut(document_id) else {
        log::error!("Speichern fuer unbekanntes Dokument {document_id}");
        debug_assert!(false, "Speichern fuer unbekanntes Dokument");
        return SaveOutcome::Failed;
    };
    let title = handle.title();

    match handle.editor_mut().save() {
        Ok(true) => {}
        Ok(false) => {
            log::info!("Speichern abgebrochen: {title}");
            state.ui.status_message = Some(format!("Speichern abgebrochen: {title}"));
            return SaveOutcome::Declined;
        }
        Err(e) => {
            log::warn!("Speichern fehlgeschlagen: {e}");
            state.ui.error_message = Some(e.to_string());
            return SaveOutcome::Failed;
        }
    }
    handle.mark_saved();
    let reported_path = handle.editor().file_path();
    let known_path = handle.file_path().map(Path::to_path_buf);

    // Save-As im Editor kann den Pfad geaendert haben: Registry, Titel und
    // Dateiverlauf nachziehen.
    if let Some(reported) = reported_path {
        match canonicalize_document_path(&reported) {
            Ok(canonical) => {
                if known_path.as_deref() != Some(canonical.as_path()) {
                    state.documents.rekey(document_id, canonical.clone());
                    let new_title = document_title(state, document_id);
                    host.dock.set_title(document_id, &new_title, Some(&canonical));
                    state.settings.push_recent(&canonical);
                    persist_settings(state, host);
                    log::info!(
                        "Dokument {document_id} nach Save-As auf {} umregistriert",
                        canonical.display()
                    );
                }
            }
            Err(e) => log::warn!("Pfad nach Speichern nicht kanonisierbar: {e}"),
        }
    }

    state.ui.status_message = Some(format!("Gespeichert: {}", document_title(state, document_id)));
    SaveOutcome::Saved
}

/// Schliesst das aktive Dokument; vorher wird das Layout gesichert.
/// Die Layout-Sicherung bleibt auch dann bestehen, wenn der Editor das
/// Schliessen anschliessend ablehnt.
pub fn close_active(state: &mut SessionState, host: &mut SessionHost) {
    let Some(document_id) = state.active_document else {
        log::debug!("Schliessen: kein aktives Dokument");
        return;
    };
    persist_layout(state, host);
    close_document(state, host, document_id);
}

/// Schliesst ein Dokument nach editor-eigener Rueckfrage.
/// Das Veto des Editors laesst alles unveraendert.
pub fn close_document(state: &mut SessionState, host: &mut SessionHost, document_id: u64) {
    let accepted = match state.documents.get_mut(document_id) {
        Some(handle) => handle.editor_mut().can_close(false),
        None => {
            log::warn!("Schliessen fuer unbekanntes Dokument {document_id}");
            return;
        }
    };
    if !accepted {
        log::debug!("Schliessen abgelehnt: Dokument {document_id}");
        return;
    }

    state.documents.remove(document_id);
    host.dock.close_view(document_id);

    if state
        .panel_binding
        .as_ref()
        .is_some_and(|binding| binding.document_id == document_id)
    {
        state.panel_binding = None;
        host.properties.clear();
    }
    if state.active_document == Some(document_id) {
        // Der Docking-Host meldet seine tatsaechliche Tab-Wahl als
        // DocumentActivated nach; bis dahin deterministisch das zuletzt
        // registrierte Dokument.
        state.active_document = state.documents.last_id();
    }
    log::info!("Dokument geschlossen (id {document_id})");
}

/// Wechselt das aktive Dokument und bindet das Property-Panel atomar auf
/// dessen zuletzt publizierte Selektion um. Ein Mischzustand aus zwei
/// Dokumenten entsteht dabei nie.
pub fn activate(state: &mut SessionState, host: &mut SessionHost, document_id: u64) {
    let Some(handle) = state.documents.get(document_id) else {
        log::warn!("Aktivierung fuer unbekanntes Dokument {document_id}");
        return;
    };
    let components = handle.bound_components().to_vec();
    state.active_document = Some(document_id);
    state.panel_binding = Some(PanelBinding {
        document_id,
        components: components.clone(),
    });
    host.properties.bind(document_id, &components);
    log::debug!(
        "Dokument {document_id} aktiv, {} Komponente(n) gebunden",
        components.len()
    );
}

/// Sichert das aktuelle Docking-Layout in den Einstellungen.
fn persist_layout(state: &mut SessionState, host: &mut SessionHost) {
    state.settings.window_layout = Some(host.dock.save_layout());
    persist_settings(state, host);
}

/// Schreibt die Einstellungen weg; Fehler blockieren den Ablauf nicht.
pub(crate) fn persist_settings(state: &SessionState, host: &mut SessionHost) {
    if let Err(e) = host.settings.save(&state.settings) {
        log::warn!("Einstellungen nicht gespeichert: {e}");
    }
}

/// Meldet einen Dokumentfehler an die Oberflaeche.
/// Der Session-Zustand bleibt dabei unveraendert.
fn surface_error(state: &mut SessionState, error: &DocumentError) {
    log::warn!("{error}");
    state.ui.error_message = Some(error.to_string());
}

fn document_title(state: &SessionState, document_id: u64) -> String {
    state
        .documents
        .get(document_id)
        .map(|handle| handle.title())
        .unwrap_or_else(|| UNTITLED_TITLE.to_string())
}
