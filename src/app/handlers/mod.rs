//! Feature-Handler fuer die Command-Verarbeitung.
//!
//! Jedes Modul buendelt die Commands eines Feature-Bereichs; der
//! [`crate::app::SessionController`] dispatcht dorthin. Handler arbeiten
//! auf `SessionState` und den Host-Kontrakten, kennen aber weder
//! Oberflaeche noch Dateiformate.

pub mod closing;
pub mod documents;
pub mod history;
pub mod selection;
pub mod simulation;
