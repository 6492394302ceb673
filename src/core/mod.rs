//! Kern-Domaene: Dokumente, Registry und Undo-Historie.

pub mod document;
pub mod edit;
pub mod edit_stack;
pub mod registry;

pub use document::{DocumentHandle, UNTITLED_TITLE};
pub use edit::{EditRecord, PropertyId, PropertyValue};
pub use edit_stack::EditStack;
pub use registry::{canonicalize_document_path, DocumentRegistry};
