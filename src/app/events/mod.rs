//! Intent- und Command-Typen fuer den Ereignisfluss der Session.

mod command;
mod intent;

pub use command::SessionCommand;
pub use intent::SessionIntent;
