//! Kontrakte der externen Kollaborateure.
//!
//! Editor, Docking-Host, Property-Panel und Simulation laufen ausserhalb des
//! Session-Kerns. Jeder Kontrakt ist bewusst schmal gehalten: der Kern
//! orchestriert nur, die Subsysteme behalten ihre eigene Logik.

pub mod dock;
pub mod editor;
pub mod properties;
pub mod simulation;

pub use dock::DockHost;
pub use editor::{DocumentError, SchematicEditor, SchematicLoader, ToolKind};
pub use properties::PropertyPanel;
pub use simulation::{AudioSetup, SimulationHost};
