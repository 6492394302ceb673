//! Session-Zustand und Dialog-Zustaende.

pub mod dialogs;
pub mod session_state;
pub mod ui;

pub use dialogs::{ClosePhase, CloseConfirmState, DirtyDocument};
pub use session_state::{PanelBinding, SessionState};
pub use ui::UiState;
