//! Session-Controller: zentrale Verarbeitung aller Ereignisse.

use crate::app::events::{SessionCommand, SessionIntent};
use crate::app::state::SessionState;
use crate::app::{handlers, intent_mapping};
use crate::host::{DockHost, PropertyPanel, SchematicLoader, SimulationHost};
use crate::shared::SettingsStore;

/// Die injizierten Host-Kontrakte, ein Satz pro Session.
///
/// Der Controller besitzt die Kollaborateure; Handler bekommen sie als
/// `&mut SessionHost` neben dem Zustand gereicht.
pub struct SessionHost {
    /// Laedt und erstellt Editor-Instanzen.
    pub loader: Box<dyn SchematicLoader>,
    /// Docking- und Fenster-Host.
    pub dock: Box<dyn DockHost>,
    /// Property-Inspektions-Panel.
    pub properties: Box<dyn PropertyPanel>,
    /// Simulations-Subsystem.
    pub simulation: Box<dyn SimulationHost>,
    /// Einstellungs-Dienst.
    pub settings: Box<dyn SettingsStore>,
}

/// Orchestriert Intents und Commands auf dem [`SessionState`].
///
/// Alles laeuft auf einem Thread: Intents werden gemappt, die entstandenen
/// Commands in Reihenfolge ausgefuehrt. Waehrend ein Command laeuft, kommt
/// kein zweiter dazwischen.
pub struct SessionController {
    host: SessionHost,
}

impl SessionController {
    pub fn new(host: SessionHost) -> Self {
        Self { host }
    }

    /// Laedt die Einstellungen und stellt das persistierte Docking-Layout
    /// wieder her. Ein fehlgeschlagener Layout-Restore wird nur geloggt;
    /// ein korruptes Blob darf den Start nicht blockieren.
    pub fn startup(&mut self, state: &mut SessionState) {
        state.settings = self.host.settings.load();
        if let Some(blob) = state.settings.window_layout.clone() {
            match self.host.dock.load_layout(&blob) {
                Ok(()) => log::info!("Fenster-Layout wiederhergestellt"),
                Err(e) => {
                    log::warn!("Layout-Restore fehlgeschlagen, Standard-Anordnung: {e}");
                }
            }
        }
    }

    /// Verarbeitet einen Intent: mappen, dann alle Commands ausfuehren.
    pub fn handle_intent(
        &mut self,
        state: &mut SessionState,
        intent: SessionIntent,
    ) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Fuehrt einen Command aus und dispatcht an den zustaendigen Handler.
    pub fn handle_command(
        &mut self,
        state: &mut SessionState,
        command: SessionCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        let host = &mut self.host;
        match command {
            // Dokumente
            SessionCommand::RequestOpenDialog => handlers::documents::request_open(state),
            SessionCommand::OpenDocument { path } => handlers::documents::open(state, host, path),
            SessionCommand::CreateDocument => handlers::documents::create(state, host),
            SessionCommand::SaveActiveDocument => handlers::documents::save_active(state, host),
            SessionCommand::SaveAllDocuments => handlers::documents::save_all(state, host),
            SessionCommand::CloseActiveDocument => handlers::documents::close_active(state, host),
            SessionCommand::CloseDocument { document_id } => {
                handlers::documents::close_document(state, host, document_id)
            }
            SessionCommand::ActivateDocument { document_id } => {
                handlers::documents::activate(state, host, document_id)
            }

            // Schliessen-Protokoll
            SessionCommand::BeginCloseSession => handlers::closing::begin(state),
            SessionCommand::ConfirmCloseDiscard => handlers::closing::confirm_discard(state),
            SessionCommand::ConfirmCloseSave => handlers::closing::confirm_save(state, host),
            SessionCommand::CancelClose => handlers::closing::cancel(state),

            // Selektion und Eigenschaften
            SessionCommand::PublishSelection {
                document_id,
                elements,
            } => handlers::selection::publish_selection(state, host, document_id, elements),
            SessionCommand::FocusPropertyPanel { document_id } => {
                handlers::selection::focus_properties(state, host, document_id)
            }
            SessionCommand::RecordPropertyEdit {
                property,
                old_values,
            } => handlers::selection::record_property_edit(state, property, old_values),

            // Historie
            SessionCommand::Undo => handlers::history::undo(state),
            SessionCommand::Redo => handlers::history::redo(state),

            // Werkzeug und Simulation
            SessionCommand::InstallTool { tool } => {
                handlers::simulation::install_tool(state, host, tool)
            }
            SessionCommand::LaunchSimulation { audio } => {
                handlers::simulation::launch(state, host, audio)
            }

            // Oberflaeche
            SessionCommand::DismissStatus => {
                state.ui.status_message = None;
                state.ui.error_message = None;
            }
        }
        Ok(())
    }
}
