//! Reset command - restores the default configuration without prompting

use super::CliContext;

pub async fn run(context: &CliContext) -> anyhow::Result<()> {
    let config = context.service.reset().await?;

    println!(
        "Fallback configuration reset to defaults ({}).",
        context.store_path.display()
    );
    context.print_config(&config);

    Ok(())
}
