//! Verlauf der ausgeführten Store-Mutationen.
//!
//! Die Status-Bar zeigt den jüngsten Eintrag; Tests prüfen darüber den
//! Ablauf Intent → Commands.

use super::AppCommand;

/// Obergrenze; beim Erreichen fällt die ältere Hälfte weg.
const CAPACITY: usize = 1000;

/// Begrenzter, geordneter Command-Verlauf.
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.commands.len() >= CAPACITY {
            self.commands.drain(..CAPACITY / 2);
        }
        self.commands.push(command.clone());
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.commands.last()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Alle Einträge, ältester zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.commands
    }
}
