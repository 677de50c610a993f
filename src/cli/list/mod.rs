//! List command - prints the persisted configuration

use super::CliContext;

pub async fn run(context: &CliContext) -> anyhow::Result<()> {
    let config = context.service.load().await;

    println!("Configuration file: {}", context.store_path.display());
    context.print_config(&config);

    Ok(())
}
