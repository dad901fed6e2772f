//! CLI progress callback: spinner plus staged checklist
//!
//! Renders the submission pipeline as stage lines printed above an
//! indicatif spinner whose message carries the elapsed time.

use crate::cli::style::{check, cross, spinner_style, Stylize};
use async_trait::async_trait;
use claris::error::Error;
use claris::submit::{format_elapsed, ProgressCallback, Stage};
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// Progress renderer for the submit command
pub struct CliProgress {
    spinner: ProgressBar,
    current: Mutex<Option<Stage>>,
}

impl CliProgress {
    /// Create a spinner-backed progress renderer
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self {
            spinner,
            current: Mutex::new(None),
        }
    }

    fn set_spinner_message(&self, stage: Option<Stage>, elapsed: Option<Duration>) {
        let label = stage.map_or("Working", Stage::label);
        let message = elapsed.map_or_else(
            || format!("{label}..."),
            |e| format!("{label}... {}", format_elapsed(e)),
        );
        self.spinner.set_message(message);
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_stage(&self, stage: Stage) {
        let previous = {
            let mut current = self.current.lock().expect("progress state poisoned");
            current.replace(stage)
        };
        if let Some(done) = previous {
            self.spinner.println(format!("{} {}", check(), done.label()));
        }

        if stage == Stage::Complete {
            self.spinner.finish_and_clear();
            anstream::println!("{} {}", check(), stage.label().emphasis());
        } else {
            self.set_spinner_message(Some(stage), None);
            self.spinner.tick();
        }
    }

    async fn on_tick(&self, elapsed: Duration) {
        let stage = *self.current.lock().expect("progress state poisoned");
        self.set_spinner_message(stage, Some(elapsed));
        self.spinner.tick();
    }

    async fn on_error(&self, error: &Error) {
        self.spinner.finish_and_clear();
        anstream::eprintln!("{} {}", cross(), error.to_string().error());
    }

    async fn on_message(&self, message: &str) {
        self.spinner.println(message.to_string());
    }
}
