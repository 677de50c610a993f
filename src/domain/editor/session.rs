//! Interactive chain editor state machine

use tracing::{debug, info};

use super::{ChainBuilder, EditorState, MenuChoice, Prompter};
use crate::domain::model::ModelCatalog;
use crate::domain::{ConfigStore, DomainError, FallbackChain, FallbackConfig};

const FINISH_SIGNALS: [&str; 2] = ["0", "done"];

/// How an editing session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The configuration was written to the store
    Saved(FallbackConfig),
    /// In-memory changes were dropped
    Discarded,
}

/// Editor owning one in-memory configuration for the length of a session.
///
/// Nothing reaches the store until the operator picks "Save and exit".
#[derive(Debug)]
pub struct ChainEditor<'a> {
    config: FallbackConfig,
    default_chain: FallbackChain,
    catalog: &'a ModelCatalog,
}

impl<'a> ChainEditor<'a> {
    pub fn new(
        config: FallbackConfig,
        default_chain: FallbackChain,
        catalog: &'a ModelCatalog,
    ) -> Self {
        Self {
            config,
            default_chain,
            catalog,
        }
    }

    pub fn config(&self) -> &FallbackConfig {
        &self.config
    }

    /// Drive the session until a terminal state is reached.
    ///
    /// Validation problems are reported through the prompter and never end
    /// the session. A failed save is returned as an error.
    pub async fn run<P>(
        mut self,
        prompter: &mut P,
        store: &dyn ConfigStore,
    ) -> Result<EditorOutcome, DomainError>
    where
        P: Prompter + ?Sized,
    {
        let mut state = EditorState::MainMenu;
        while !state.is_terminal() {
            debug!(?state, "Editor state");
            state = self.step(state, prompter)?;
        }

        if state == EditorState::ExitWithoutSaving {
            prompter.show("Exited without saving.");
            return Ok(EditorOutcome::Discarded);
        }

        store.save(&self.config).await?;
        info!(
            enabled = self.config.is_enabled(),
            chain_len = self.config.chain().len(),
            "Fallback configuration saved"
        );
        prompter.show("Configuration saved.");

        Ok(EditorOutcome::Saved(self.config))
    }

    /// Perform one transition; terminal states are returned unchanged
    pub fn step<P>(
        &mut self,
        state: EditorState,
        prompter: &mut P,
    ) -> Result<EditorState, DomainError>
    where
        P: Prompter + ?Sized,
    {
        match state {
            EditorState::MainMenu => return self.main_menu(prompter),
            EditorState::Toggling => self.toggle(prompter),
            EditorState::Building => self.build(prompter)?,
            EditorState::Reordering => self.reorder(prompter)?,
            EditorState::Resetting => self.reset(prompter),
            EditorState::SaveAndExit | EditorState::ExitWithoutSaving => return Ok(state),
        }

        Ok(EditorState::MainMenu)
    }

    fn main_menu<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
    ) -> Result<EditorState, DomainError> {
        prompter.show("");
        prompter.show(&format!(
            "Fallback: {}",
            if self.config.is_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        ));
        prompter.show("Chain:");
        self.show_chain(prompter, self.config.chain());
        prompter.show("");
        for choice in MenuChoice::ALL {
            prompter.show(&choice.to_string());
        }

        let Some(input) = prompter.prompt("Select an option (1-6): ")? else {
            return Ok(EditorState::ExitWithoutSaving);
        };

        match input.parse::<MenuChoice>() {
            Ok(choice) => Ok(choice.next_state()),
            Err(e) if e.is_recoverable() => {
                prompter.error(&e.to_string());
                Ok(EditorState::MainMenu)
            }
            Err(e) => Err(e),
        }
    }

    fn toggle<P: Prompter + ?Sized>(&mut self, prompter: &mut P) {
        let enabled = self.config.toggle();
        prompter.show(&format!(
            "Fallback {}.",
            if enabled { "enabled" } else { "disabled" }
        ));
    }

    fn build<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<(), DomainError> {
        let mut builder = ChainBuilder::new(self.catalog);

        while !builder.is_exhausted() {
            prompter.show("");
            prompter.show("Available models:");
            for (index, model) in builder.available().iter().enumerate() {
                prompter.show(&format!("  {}. {} [{}]", index + 1, model.name(), model.tier()));
            }
            if !builder.chain().is_empty() {
                prompter.show("New chain so far:");
                self.show_chain(prompter, builder.chain());
            }

            let Some(input) = prompter.prompt("Add model number (0 or 'done' to finish): ")?
            else {
                prompter.show("Build abandoned, chain unchanged.");
                return Ok(());
            };
            let input = input.trim();

            if FINISH_SIGNALS.contains(&input.to_lowercase().as_str()) {
                if builder.chain().is_empty() {
                    prompter.error("Select at least one model before finishing");
                    continue;
                }
                break;
            }

            let selected = parse_position(input).and_then(|choice| builder.select(choice));
            match selected {
                Ok(model) => prompter.show(&format!("Added {}.", model.name())),
                Err(e) if e.is_recoverable() => prompter.error(&e.to_string()),
                Err(e) => return Err(e),
            }
        }

        match builder.finish() {
            Ok(chain) => {
                info!(chain_len = chain.len(), "Built new fallback chain");
                self.config.replace_chain(chain);
                prompter.show("Chain updated.");
            }
            Err(_) => prompter.show("No models selected, chain unchanged."),
        }

        Ok(())
    }

    fn reorder<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<(), DomainError> {
        if self.config.chain().is_empty() {
            prompter.error("Chain is empty, nothing to reorder");
            return Ok(());
        }

        prompter.show("");
        prompter.show("Current chain:");
        self.show_chain(prompter, self.config.chain());

        let Some(from) = prompter.prompt("Move from position: ")? else {
            return Ok(());
        };
        let Some(to) = prompter.prompt("Move to position: ")? else {
            return Ok(());
        };

        let moved = parse_position(&from)
            .and_then(|from| parse_position(&to).map(|to| (from, to)))
            .and_then(|(from, to)| self.config.move_entry(from, to));

        match moved {
            Ok(()) => prompter.show("Chain reordered."),
            Err(e) if e.is_recoverable() => prompter.error(&e.to_string()),
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn reset<P: Prompter + ?Sized>(&mut self, prompter: &mut P) {
        self.config.reset_chain(&self.default_chain);
        prompter.show("Chain reset to default.");
    }

    fn show_chain<P: Prompter + ?Sized>(&self, prompter: &mut P, chain: &FallbackChain) {
        for (index, id) in chain.iter().enumerate() {
            prompter.show(&format!("  {}. {}", index + 1, self.describe(id)));
        }
    }

    fn describe(&self, id: &str) -> String {
        match self.catalog.get(id) {
            Some(model) => format!("{} [{}]", model.name(), model.tier()),
            None => id.to_string(),
        }
    }
}

fn parse_position(input: &str) -> Result<usize, DomainError> {
    let input = input.trim();
    input
        .parse::<usize>()
        .map_err(|_| DomainError::validation(format!("'{}' is not a valid number", input)))
}
