//! Verlauf ausgefuehrter Commands fuer Tests und Fehlersuche.

use crate::app::events::SessionCommand;

/// Obergrenze des Verlaufs; aeltere Eintraege fallen heraus.
const MAX_ENTRIES: usize = 1000;

/// Haelt ausgefuehrte Commands als Debug-Strings in Ausfuehrungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<String>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verbucht einen Command, bevor der Handler laeuft.
    pub fn record(&mut self, command: &SessionCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(format!("{command:?}"));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&String> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
