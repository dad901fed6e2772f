//! Submit command - run the submission pipeline from the terminal

use crate::cli::progress::CliProgress;
use crate::cli::style::{bullet, Stylize};
use anstream::{eprintln, println};
use claris::api::HttpApi;
use claris::classify::EngineCatalog;
use claris::config::ApiConfig;
use claris::error::Result;
use claris::submit::{execute_submission, format_elapsed, plan_submission};
use claris::types::IntakeFields;

/// Run the submit command
pub async fn run_submit(fields: IntakeFields) -> Result<()> {
    // Validation failures surface here, before any network call
    let plan = plan_submission(fields)?;

    println!("Submitting as {}", plan.request.author.emphasis());
    if let Some(graphic_type) = plan.request.graphic_type {
        let catalog = EngineCatalog::default();
        println!(
            "Graphic: {} {}",
            graphic_type.to_string().accent(),
            format!("(engine: {})", catalog.recommendation(graphic_type)).muted()
        );
    }
    for stage in &plan.stages {
        println!("  {} {}", bullet(), stage.label());
    }
    println!(
        "Route: {} {}",
        plan.route.route.to_string().accent(),
        format!("(timeout {})", format_elapsed(plan.route.timeout)).muted()
    );
    println!();

    let config = ApiConfig::from_env()?;
    let api = HttpApi::new(config)?;
    let progress = CliProgress::new();

    match execute_submission(&plan, &api, &progress).await {
        Ok(outcome) => {
            println!("{}", outcome.message);
            println!(
                "{}",
                format!("Completed in {}", format_elapsed(outcome.elapsed)).muted()
            );
            Ok(())
        }
        Err(error) if error.is_recoverable() => {
            // The server may still finish this one; don't report a failure
            eprintln!(
                "{}",
                "The server may still be processing this submission. \
                 Run `claris review list` in a few minutes before resubmitting."
                    .warn()
            );
            Ok(())
        }
        Err(error) => Err(error),
    }
}
