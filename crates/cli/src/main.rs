// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rk - Recipe Kit CLI

mod commands;
mod output;

use anyhow::{Context as _, Result};
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use commands::{list, source, working_copy};
use rk_adapters::{
    CopyConverter, GradleTaskExecutor, NoOpTaskExecutor, TaskExecutor, TracedConverter,
    TracedTaskExecutor,
};
use rk_validate::Context;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "rk",
    version,
    about = "Recipe Kit - Validate Android recipes against AGP versions"
)]
struct Cli {
    /// Context file with published AGP and Gradle versions
    #[arg(
        long,
        global = true,
        env = "RK_CONFIG",
        default_value = "recipe_versions.toml"
    )]
    config: PathBuf,

    /// Skip incompatible AGP versions instead of failing (--ci=false forces strict mode)
    #[arg(
        long,
        global = true,
        env = "CI",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = FalseyValueParser::new()
    )]
    ci: Option<bool>,

    /// Local Gradle installation to run tasks with
    #[arg(long, global = true)]
    gradle_path: Option<PathBuf>,

    /// Convert recipes without running their tasks
    #[arg(long, global = true)]
    no_tasks: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate source-mode recipes
    Source(source::SourceArgs),
    /// Validate release-mode working copies
    WorkingCopy(working_copy::WorkingCopyArgs),
    /// List recipes and their metadata
    List(list::ListArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_logging();
    let cli = Cli::parse();

    // Listing only reads metadata
    if let Commands::List(args) = cli.command {
        return Ok(exit_code(list::handle(args)?));
    }

    let context = Arc::new(load_context(&cli)?);
    let converter = TracedConverter::new(CopyConverter::new());

    let passed = if cli.no_tasks {
        let executor = TracedTaskExecutor::new(NoOpTaskExecutor::new());
        run(cli.command, context, converter, executor).await?
    } else {
        let gradle_path = context.gradle_path().map(Path::to_path_buf);
        let executor = TracedTaskExecutor::new(GradleTaskExecutor::new(gradle_path));
        run(cli.command, context, converter, executor).await?
    };

    Ok(exit_code(passed))
}

async fn run<T: TaskExecutor>(
    command: Commands,
    context: Arc<Context>,
    converter: TracedConverter<CopyConverter>,
    executor: T,
) -> Result<bool> {
    match command {
        Commands::Source(args) => source::handle(args, context, converter, executor).await,
        Commands::WorkingCopy(args) => {
            working_copy::handle(args, context, converter, executor).await
        }
        Commands::List(args) => list::handle(args),
    }
}

fn load_context(cli: &Cli) -> Result<Context> {
    let mut context = if cli.config.exists() {
        Context::load(&cli.config)
            .with_context(|| format!("invalid context file {}", cli.config.display()))?
    } else {
        tracing::debug!(path = %cli.config.display(), "no context file, using defaults");
        Context::default()
    };

    // An explicit flag or CI variable wins over the file, either way
    if let Some(ci) = cli.ci {
        context.set_ci(ci);
    }
    if let Some(path) = &cli.gradle_path {
        context = context.with_gradle_path(path.clone());
    }
    Ok(context)
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
