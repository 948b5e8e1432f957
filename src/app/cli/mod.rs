//! CLI Adapter.

mod input;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::adapters::{
    DotenvConfigSource, EnvConfigSource, LayeredConfigSource, MinijinjaTemplateRenderer,
};
use crate::app::AppContext;
use crate::app::config::{AppConfig, load_settings_file};
use crate::app::logging::init_logging;
use crate::domain::{
    AppError, AssembledPrompt, PromptKind, PromptRequest, PromptSettings, SCOPE_FILES, Verdict,
    parse_questions, parse_verdict,
};

use input::InputArgs;

const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Parser)]
#[command(name = "volo-prompts")]
#[command(version)]
#[command(about = "Build security-audit prompts for the Volo protocol", long_about = None)]
struct Cli {
    /// Settings file (TOML) overriding mirror defaults
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// .env file consulted after the process environment (default: ./.env if present)
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt generating targeted audit questions for one file
    #[clap(visible_alias = "q")]
    Questions {
        /// Repository-relative path of the file to focus on
        target_file: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Prompt validating a vulnerability report
    #[clap(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Prompt investigating a single security question
    #[clap(visible_alias = "a")]
    Audit {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Prompt mapping an external report onto Volo
    #[clap(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the resolved documentation URL
    BaseUrl,
    /// Print the files in audit scope
    Scope {
        /// Emit a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Classify a model reply as a report or a rejection
    Verdict {
        #[command(flatten)]
        input: InputArgs,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract generated questions from a model reply as a JSON array
    ParseQuestions {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct OutputArgs {
    /// Emit a JSON envelope with kind, base URL and fingerprint
    #[arg(long)]
    json: bool,
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// JSON shape of a rendered prompt.
#[derive(Debug, Serialize)]
struct PromptEnvelope<'a> {
    kind: PromptKind,
    base_url: &'a str,
    run_counter: String,
    fingerprint: String,
    content: &'a str,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let ctx = create_context(cli.settings.as_deref(), cli.env_file.as_deref())?;

    match cli.command {
        Commands::Questions { target_file, output } => {
            emit_prompt(&ctx, PromptRequest::new(PromptKind::Questions, target_file), &output)
        }
        Commands::Validate { input, output } => {
            emit_prompt(&ctx, PromptRequest::new(PromptKind::Validation, input.read()?), &output)
        }
        Commands::Audit { input, output } => {
            emit_prompt(&ctx, PromptRequest::new(PromptKind::Audit, input.read()?), &output)
        }
        Commands::Scan { input, output } => {
            emit_prompt(&ctx, PromptRequest::new(PromptKind::Scan, input.read()?), &output)
        }
        Commands::BaseUrl => {
            println!("{}", ctx.config().base_url());
            Ok(())
        }
        Commands::Scope { json } => run_scope(json),
        Commands::Verdict { input, json } => run_verdict(&input.read()?, json),
        Commands::ParseQuestions { input } => {
            let questions = parse_questions(&input.read()?);
            tracing::debug!(count = questions.len(), "parsed questions");
            println!("{}", serde_json::to_string_pretty(&questions)?);
            Ok(())
        }
    }
}

fn create_context(
    settings_path: Option<&Path>,
    env_file: Option<&Path>,
) -> Result<AppContext<MinijinjaTemplateRenderer>, AppError> {
    let settings = match settings_path {
        Some(path) => load_settings_file(path)?,
        None => PromptSettings::default(),
    };
    let source = match env_file {
        Some(path) => LayeredConfigSource::new()
            .with_layer(EnvConfigSource)
            .with_layer(DotenvConfigSource::load(path)?),
        None => LayeredConfigSource::env_then_dotenv(Path::new(DEFAULT_ENV_FILE))?,
    };
    let config = AppConfig::load(&source, settings)?;
    Ok(AppContext::new(config, MinijinjaTemplateRenderer::new()))
}

fn emit_prompt(
    ctx: &AppContext<MinijinjaTemplateRenderer>,
    request: PromptRequest,
    output: &OutputArgs,
) -> Result<(), AppError> {
    let prompt = ctx.build(&request)?;
    let rendered = if output.json { envelope_json(ctx.config(), &prompt)? } else { prompt.content };

    match &output.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!("✅ Wrote {} prompt to {}", request.kind(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn envelope_json(config: &AppConfig, prompt: &AssembledPrompt) -> Result<String, AppError> {
    let envelope = PromptEnvelope {
        kind: prompt.kind,
        base_url: config.base_url().as_str(),
        run_counter: config.run_counter().to_string(),
        fingerprint: prompt.fingerprint(),
        content: &prompt.content,
    };
    Ok(serde_json::to_string_pretty(&envelope)? + "\n")
}

fn run_scope(json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(SCOPE_FILES)?);
    } else {
        for path in SCOPE_FILES {
            println!("{}", path);
        }
    }
    Ok(())
}

fn run_verdict(reply: &str, json: bool) -> Result<(), AppError> {
    let verdict = parse_verdict(reply);
    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    println!("{}", verdict.label());
    if let Verdict::Report(report) = &verdict {
        if let Some(title) = &report.title {
            println!("title: {}", title);
        }
        if !report.is_complete() {
            println!("missing sections: {}", report.missing_sections.join(", "));
        }
    }
    Ok(())
}
