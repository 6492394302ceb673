//! Application-Schicht: Controller, Zustand, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod state;

pub use command_log::CommandLog;
pub use controller::{SessionController, SessionHost};
pub use events::{SessionCommand, SessionIntent};
pub use state::{ClosePhase, CloseConfirmState, DirtyDocument, PanelBinding, SessionState, UiState};
