//! Next command - shows the fallback decision for a failed model

use clap::Args;

use super::CliContext;
use crate::domain::{FallbackDecision, next_fallback};

/// Arguments for the next command
#[derive(Args, Clone)]
pub struct NextArgs {
    /// Model that just failed
    pub model: String,

    /// Resolve against the chain even when fallback is disabled
    #[arg(long)]
    pub ignore_disabled: bool,
}

pub async fn run(context: &CliContext, args: NextArgs) -> anyhow::Result<()> {
    let decision = decide(context, &args).await;

    println!("{}", describe(context, &args.model, &decision));
    Ok(())
}

async fn decide(context: &CliContext, args: &NextArgs) -> FallbackDecision {
    if args.ignore_disabled {
        let config = context.service.load().await;
        FallbackDecision::from_next(next_fallback(&args.model, config.chain()))
    } else {
        context.service.resolve(&args.model).await
    }
}

fn describe(context: &CliContext, model: &str, decision: &FallbackDecision) -> String {
    match decision {
        FallbackDecision::Disabled => "Fallback is disabled.".to_string(),
        FallbackDecision::Exhausted => format!("No fallback after {}: chain exhausted.", model),
        FallbackDecision::Next(next) => format!(
            "Next fallback after {}: {} ({})",
            model,
            context.catalog.display_name(next),
            next
        ),
    }
}
