//! Menu command - interactive chain editor

use tracing::info;

use super::CliContext;
use crate::domain::EditorOutcome;
use crate::infrastructure::console::ConsolePrompter;

/// Run the interactive editor against the configured store
pub async fn run(context: &CliContext) -> anyhow::Result<()> {
    println!("Fallback chain editor ({})", context.store_path.display());

    let editor = context.service.editor(context.catalog).await;
    let mut prompter = ConsolePrompter::stdio();

    match editor.run(&mut prompter, context.service.store()).await? {
        EditorOutcome::Saved(config) => {
            info!(path = %context.store_path.display(), "Saved fallback configuration");
            context.print_config(&config);
        }
        EditorOutcome::Discarded => info!("Editor closed without saving"),
    }

    Ok(())
}
