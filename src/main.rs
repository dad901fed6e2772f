//! claris - content submission pipeline and review workflow
//!
//! CLI binary for submitting ideas to the processing endpoint and reviewing
//! the results.

use anyhow::Result;
use clap::{Parser, Subcommand};
use claris::types::{ChartData, DataSource, GraphicType, IntakeFields, UploadedImage};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "claris")]
#[command(about = "Submit content ideas and review the generated results")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an idea and/or graphic request for processing
    Submit {
        /// Submission author
        #[arg(long)]
        author: String,

        /// Raw idea text to draft a post from
        #[arg(long)]
        idea: Option<String>,

        /// Description of the graphic to generate
        #[arg(long)]
        graphic_description: Option<String>,

        /// Request a graphic alongside the idea
        #[arg(long)]
        add_graphic: bool,

        /// Graphic type (chart, diagram, concept, infographic, video);
        /// omitted means auto-detect from the description
        #[arg(long)]
        graphic_type: Option<String>,

        /// Chart start value
        #[arg(long)]
        chart_start: Option<String>,

        /// Chart end value
        #[arg(long)]
        chart_end: Option<String>,

        /// Chart time period
        #[arg(long)]
        chart_period: Option<String>,

        /// Explicit chart data points, e.g. "Q1: 100, Q2: 120"
        #[arg(long)]
        chart_points: Option<String>,

        /// Data source as JSON (repeatable), e.g.
        /// '{"dataPoint":"On-time rate","value":"94%","sourceType":"client"}'
        #[arg(long = "data-source")]
        data_sources: Vec<String>,

        /// Research URL to extract facts from (repeatable)
        #[arg(long = "research-url")]
        research_urls: Vec<String>,

        /// Image file to attach instead of generating one
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Review pending submissions
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List submissions pending review
    List,

    /// Approve a submission with edited text
    Approve {
        /// Submission id
        id: String,

        /// Edited post text
        #[arg(long)]
        text: Option<String>,

        /// Read the edited post from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Reject a submission
    Reject {
        /// Submission id
        id: String,

        /// Reason for rejection
        #[arg(long)]
        reason: Option<String>,
    },

    /// Regenerate the graphic from feedback
    Regenerate {
        /// Submission id
        id: String,

        /// What to change about the graphic
        #[arg(long)]
        feedback: String,
    },

    /// Generate graphic variations and pick one
    Variations {
        /// Submission id
        id: String,

        /// Directory to write the candidate files to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Export the graphic payload to a file
    Export {
        /// Submission id
        id: String,

        /// Output path; defaults to claris-<id>.<ext> in the current dir
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[allow(clippy::too_many_arguments)]
fn build_intake_fields(
    author: String,
    idea: Option<String>,
    graphic_description: Option<String>,
    add_graphic: bool,
    graphic_type: Option<String>,
    chart_start: Option<String>,
    chart_end: Option<String>,
    chart_period: Option<String>,
    chart_points: Option<String>,
    data_sources: Vec<String>,
    research_urls: Vec<String>,
    image: Option<PathBuf>,
) -> Result<IntakeFields> {
    let graphic_type = graphic_type
        .as_deref()
        .map(str::parse::<GraphicType>)
        .transpose()?;

    let chart_data = (chart_start.is_some()
        || chart_end.is_some()
        || chart_period.is_some()
        || chart_points.is_some())
    .then(|| ChartData {
        start_value: chart_start.unwrap_or_default(),
        end_value: chart_end.unwrap_or_default(),
        time_period: chart_period.unwrap_or_default(),
        data_points: chart_points.unwrap_or_default(),
    });

    let data_sources = data_sources
        .iter()
        .map(|raw| {
            serde_json::from_str::<DataSource>(raw)
                .map_err(|e| anyhow::anyhow!("invalid --data-source entry: {e}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let uploaded_image = image
        .map(|path| -> Result<UploadedImage> {
            let bytes = std::fs::read(&path)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
            let file_name = path
                .file_name()
                .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
            Ok(UploadedImage { file_name, bytes })
        })
        .transpose()?;

    Ok(IntakeFields {
        author,
        idea,
        graphic_description,
        add_graphic,
        graphic_type,
        chart_data,
        data_sources,
        research_urls,
        uploaded_image,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            author,
            idea,
            graphic_description,
            add_graphic,
            graphic_type,
            chart_start,
            chart_end,
            chart_period,
            chart_points,
            data_sources,
            research_urls,
            image,
        } => {
            let fields = build_intake_fields(
                author,
                idea,
                graphic_description,
                add_graphic,
                graphic_type,
                chart_start,
                chart_end,
                chart_period,
                chart_points,
                data_sources,
                research_urls,
                image,
            )?;
            cli::run_submit(fields).await?;
        }
        Commands::Review { action } => match action {
            ReviewAction::List => cli::run_list().await?,
            ReviewAction::Approve { id, text, file } => {
                cli::run_approve(&id, text, file).await?;
            }
            ReviewAction::Reject { id, reason } => cli::run_reject(&id, reason).await?,
            ReviewAction::Regenerate { id, feedback } => {
                cli::run_regenerate(&id, &feedback).await?;
            }
            ReviewAction::Variations { id, out_dir } => {
                cli::run_variations(&id, &out_dir).await?;
            }
            ReviewAction::Export { id, output } => cli::run_export(&id, output).await?,
        },
    }

    Ok(())
}
