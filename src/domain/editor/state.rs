//! Editor states and main menu choices

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// States of the interactive chain editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    MainMenu,
    Toggling,
    Building,
    Reordering,
    Resetting,
    SaveAndExit,
    ExitWithoutSaving,
}

impl EditorState {
    /// Whether the session ends after this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::SaveAndExit | Self::ExitWithoutSaving)
    }
}

/// Options offered on the main menu, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Toggle,
    Build,
    Reorder,
    Reset,
    SaveAndExit,
    ExitWithoutSaving,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        Self::Toggle,
        Self::Build,
        Self::Reorder,
        Self::Reset,
        Self::SaveAndExit,
        Self::ExitWithoutSaving,
    ];

    pub fn number(&self) -> usize {
        match self {
            Self::Toggle => 1,
            Self::Build => 2,
            Self::Reorder => 3,
            Self::Reset => 4,
            Self::SaveAndExit => 5,
            Self::ExitWithoutSaving => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle => "Toggle fallback on/off",
            Self::Build => "Build a new chain",
            Self::Reorder => "Reorder chain",
            Self::Reset => "Reset chain to default",
            Self::SaveAndExit => "Save and exit",
            Self::ExitWithoutSaving => "Exit without saving",
        }
    }

    pub fn next_state(&self) -> EditorState {
        match self {
            Self::Toggle => EditorState::Toggling,
            Self::Build => EditorState::Building,
            Self::Reorder => EditorState::Reordering,
            Self::Reset => EditorState::Resetting,
            Self::SaveAndExit => EditorState::SaveAndExit,
            Self::ExitWithoutSaving => EditorState::ExitWithoutSaving,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.number().to_string() == input)
            .ok_or_else(|| DomainError::validation(format!("Invalid option '{}'", input)))
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.number(), self.label())
    }
}
