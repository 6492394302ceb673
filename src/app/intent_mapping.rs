//! Uebersetzt Session-Intents in ausfuehrbare Commands.
//!
//! Das Mapping ist der einzige Ort, an dem Intents interpretiert werden.
//! Es liest den Zustand nur; Mutationen passieren ausschliesslich in den
//! Command-Handlern. Ein leerer Vec heisst: der Intent ist im aktuellen
//! Zustand nicht ausfuehrbar und verpufft.

use crate::app::events::{SessionCommand, SessionIntent};
use crate::app::state::SessionState;


pub fn map_intent_to_commands(
    state: &SessionState,
    intent: SessionIntent,
) -> Vec<SessionCommand> {
    match intent {
        SessionIntent::OpenFileRequested => vec![SessionCommand::RequestOpenDialog],
        SessionIntent::FileSelected { path } => vec![SessionCommand::OpenDocument { path }],
        SessionIntent::NewDocumentRequested => vec![SessionCommand::CreateDocument],
        SessionIntent::SaveActiveRequested => vec![SessionCommand::SaveActiveDocument],
        SessionIntent::SaveAllRequested => vec![SessionCommand::SaveAllDocuments],
        SessionIntent::CloseActiveRequested => {
            // Ohne aktives Dokument ist Schliessen nicht ausfuehrbar.
            if state.active_document.is_none() {
                return Vec::new();
            }
            vec![SessionCommand::CloseActiveDocument]
        }
        SessionIntent::DocumentCloseRequested { document_id } => {
            vec![SessionCommand::CloseDocument { document_id }]
        }
        SessionIntent::CloseSessionRequested => vec![SessionCommand::BeginCloseSession],
        SessionIntent::CloseDiscardConfirmed => vec![SessionCommand::ConfirmCloseDiscard],
        SessionIntent::CloseSaveConfirmed => vec![SessionCommand::ConfirmCloseSave],
        SessionIntent::CloseCancelled => vec![SessionCommand::CancelClose],
        SessionIntent::DocumentActivated { document_id } => {
            vec![SessionCommand::ActivateDocument { document_id }]
        }
        SessionIntent::SelectionChanged {
            document_id,
            elements,
        } => vec![SessionCommand::PublishSelection {
            document_id,
            elements,
        }],
        SessionIntent::EditSelectionRequested { document_id } => {
            vec![SessionCommand::FocusPropertyPanel { document_id }]
        }
        SessionIntent::PropertyValueChanged {
            property,
            old_values,
        } => vec![SessionCommand::RecordPropertyEdit {
            property,
            old_values,
        }],
        SessionIntent::UndoRequested => vec![SessionCommand::Undo],
        SessionIntent::RedoRequested => vec![SessionCommand::Redo],
        SessionIntent::ToolSelected { tool } => {
            // Werkzeuge brauchen eine Editor-Flaeche.
            if state.active_document.is_none() {
                return Vec::new();
            }
            vec![SessionCommand::InstallTool { tool }]
        }
        SessionIntent::SimulationRequested { audio } => {
            // Simuliert wird immer das aktive Dokument.
            if state.active_document.is_none() {
                return Vec::new();
            }
            vec![SessionCommand::LaunchSimulation { audio }]
        }
        SessionIntent::StatusDismissed => vec![SessionCommand::DismissStatus],
    }
}
