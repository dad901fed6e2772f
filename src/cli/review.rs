//! Review commands - list and act on pending submissions

use crate::cli::style::{bullet, check, hyperlink_url, Stream, Stylize};
use anstream::println;
use claris::api::HttpApi;
use claris::config::ApiConfig;
use claris::error::{Error, Result};
use claris::media;
use claris::review::ReviewService;
use claris::types::Submission;
use dialoguer::Select;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn build_service() -> Result<ReviewService> {
    let config = ApiConfig::from_env()?;
    Ok(ReviewService::new(Arc::new(HttpApi::new(config)?)))
}

/// List submissions pending review
pub async fn run_list() -> Result<()> {
    let service = build_service()?;
    let pending = service.refresh().await?;

    if pending.is_empty() {
        println!("No submissions pending review");
        return Ok(());
    }

    println!(
        "{} submission{} pending review:",
        pending.len().to_string().accent(),
        if pending.len() == 1 { "" } else { "s" }
    );
    println!();
    for submission in &pending {
        print_submission(submission);
    }
    Ok(())
}

fn print_submission(submission: &Submission) {
    println!(
        "{} {}  {}",
        submission.id.emphasis(),
        format!("by {}", submission.author).muted(),
        submission
            .created_at
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .muted()
    );
    if !submission.raw_input.is_empty() {
        println!("  idea: {}", submission.raw_input);
    }
    if let Some(draft) = &submission.ai_draft {
        let chars = draft.chars().count();
        println!("  draft: {} chars", chars.to_string().accent());
    }
    if let Some(payload) = &submission.graphic_data {
        let kind = media::classify_payload(payload);
        println!(
            "  graphic: {} ({})",
            submission.graphic_type.to_string().accent(),
            media::export_extension(kind)
        );
    }
    for result in &submission.research_results {
        let marker = if result.error { "!" } else { "-" };
        println!(
            "  {marker} {} {}",
            result.source_name,
            hyperlink_url(Stream::Stdout, &result.url).muted()
        );
    }
    println!();
}

/// Approve a submission with edited text from a flag or a file
pub async fn run_approve(id: &str, text: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let edited = match (text, file) {
        (Some(text), None) => text,
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            Error::Validation(format!("cannot read {}: {e}", path.display()))
        })?,
        _ => {
            return Err(Error::Validation(
                "provide the edited post with exactly one of --text or --file".into(),
            ));
        }
    };

    let service = build_service()?;
    service.refresh().await?;
    let submission = service.approve(id, &edited).await?;
    println!(
        "{} Approved {} ({})",
        check(),
        submission.id.emphasis(),
        submission.status.to_string().success()
    );
    Ok(())
}

/// Reject a submission
pub async fn run_reject(id: &str, reason: Option<String>) -> Result<()> {
    let service = build_service()?;
    service.refresh().await?;
    let submission = service.reject(id, reason.as_deref()).await?;
    println!(
        "{} Rejected {} ({})",
        check(),
        submission.id.emphasis(),
        submission.status
    );
    Ok(())
}

/// Regenerate a submission's graphic from feedback
pub async fn run_regenerate(id: &str, feedback: &str) -> Result<()> {
    let service = build_service()?;
    service.refresh().await?;
    let payload = service.regenerate(id, feedback).await?;
    let kind = media::classify_payload(&payload);
    println!(
        "{} Regenerated graphic for {} ({})",
        check(),
        id.emphasis(),
        media::export_extension(kind)
    );
    Ok(())
}

/// Generate graphic variations and interactively pick one
pub async fn run_variations(id: &str, out_dir: &Path) -> Result<()> {
    let service = build_service()?;
    service.refresh().await?;
    let candidates = service.generate_variations(id).await?;

    println!(
        "Generated {} variation{}:",
        candidates.len().to_string().accent(),
        if candidates.len() == 1 { "" } else { "s" }
    );

    let mut options = Vec::with_capacity(candidates.len() + 1);
    for (index, payload) in candidates.iter().enumerate() {
        let path = write_payload(out_dir, &format!("{id}-variation-{}", index + 1), payload)?;
        println!("  {} {}", bullet(), path.display());
        options.push(format!("Variation {} ({})", index + 1, path.display()));
    }
    options.push("Keep current graphic".to_string());

    let choice = Select::new()
        .with_prompt("Set a variation as the main graphic?")
        .items(&options)
        .default(0)
        .interact()
        .map_err(|e| Error::Internal(format!("selection prompt failed: {e}")))?;

    if choice < candidates.len() {
        service.select_variation(id, &candidates[choice]).await?;
        println!(
            "{} Variation {} is now the main graphic for {}",
            check(),
            choice + 1,
            id.emphasis()
        );
    } else {
        println!("Kept the current graphic");
    }
    Ok(())
}

/// Export a submission's graphic payload to a file
pub async fn run_export(id: &str, output: Option<PathBuf>) -> Result<()> {
    let service = build_service()?;
    service.refresh().await?;
    let submission = service
        .submission(id)
        .ok_or_else(|| Error::SubmissionNotFound(id.to_string()))?;
    let payload = submission
        .graphic_data
        .as_deref()
        .ok_or_else(|| Error::Validation(format!("submission {id} has no graphic payload")))?;

    let path = match output {
        Some(path) => {
            std::fs::write(&path, media::decode_payload(payload)?)
                .map_err(|e| Error::Internal(format!("cannot write {}: {e}", path.display())))?;
            path
        }
        None => write_payload(Path::new("."), id, payload)?,
    };
    println!("{} Wrote {}", check(), path.display());
    Ok(())
}

/// Decode a payload and write it with the extension its kind maps to.
///
/// The same mapping drives preview labels, so what gets downloaded is what
/// was shown.
fn write_payload(dir: &Path, stem: &str, payload: &str) -> Result<PathBuf> {
    let file_name = media::export_file_name(stem, payload);
    let path = dir.join(file_name);
    let bytes = media::decode_payload(payload)?;
    std::fs::write(&path, bytes)
        .map_err(|e| Error::Internal(format!("cannot write {}: {e}", path.display())))?;
    Ok(path)
}
