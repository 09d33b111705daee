//! Browser Extension Generator CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use extforge::ai::{client::ENDPOINT_ENV, HttpCompletionClient};
use extforge::cli::{self, OutputOptions};
use extforge::generator::MANIFEST_FILE;
use extforge::parser::{load_configuration, load_extra_files, load_icon};
use extforge::{packager, preview, Configuration, FileSetGenerator, ManifestOptions, Session, TargetPlatform};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "extforge")]
#[command(about = "Generate Chromium and Firefox extension packages from a configuration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlatformArg {
    Chromium,
    Firefox,
}

impl From<PlatformArg> for TargetPlatform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Chromium => TargetPlatform::Chromium,
            PlatformArg::Firefox => TargetPlatform::Firefox,
        }
    }
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Configuration file (JSON or JSON5)
    #[arg(short, long)]
    config: PathBuf,

    /// Icon image to package as icon128.png
    #[arg(long)]
    icon: Option<PathBuf>,

    /// Directory of extra scripts, pages and stylesheets to package verbatim
    #[arg(long)]
    extra_files: Option<PathBuf>,
}

#[derive(clap::Args)]
struct ManifestArgs {
    /// Also list content-script patterns under host_permissions for Chromium
    #[arg(long)]
    chromium_host_permissions: bool,
}

impl ManifestArgs {
    fn options(&self) -> ManifestOptions {
        ManifestOptions {
            chromium_host_permissions: self.chromium_host_permissions,
        }
    }
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    output: PathBuf,

    /// Also write one archive containing every platform
    #[arg(long)]
    bundle: bool,

    /// Also write unpacked folders for loading in the browser
    #[arg(long)]
    unpacked: bool,

    /// Write a markdown generation report
    #[arg(short, long)]
    report: bool,
}

impl OutputArgs {
    fn outputs(&self) -> OutputOptions {
        OutputOptions {
            bundle: self.bundle,
            unpacked: self.unpacked,
            report: self.report,
        }
    }
}

#[derive(clap::Args)]
struct AiArgs {
    /// Completion endpoint (defaults to $EXTFORGE_AI_ENDPOINT or the local server)
    #[arg(long)]
    endpoint: Option<String>,
}

impl AiArgs {
    fn client(&self) -> Result<HttpCompletionClient> {
        let client = match &self.endpoint {
            Some(endpoint) => HttpCompletionClient::new(endpoint.clone())?,
            None => HttpCompletionClient::from_env()?,
        };
        tracing::debug!(endpoint = client.endpoint(), env = ENDPOINT_ENV, "using completion endpoint");
        Ok(client)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate extension archives from a configuration file
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        manifest: ManifestArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the manifest for one platform
    Manifest {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        manifest: ManifestArgs,

        /// Target platform
        #[arg(short, long, value_enum)]
        platform: PlatformArg,
    },

    /// Print one generated file
    Preview {
        #[command(flatten)]
        source: SourceArgs,

        /// Target platform
        #[arg(short, long, value_enum)]
        platform: PlatformArg,

        /// Generated file to show, e.g. popup.html
        #[arg(short, long, default_value = "manifest.json")]
        file: String,

        /// Print a self-contained page with inlined styles instead of source
        #[arg(long)]
        live: bool,
    },

    /// Ask the AI for a new extension from a description
    Ai {
        /// What the extension should do
        prompt: String,

        /// Target platforms (defaults to all)
        #[arg(short, long, value_enum)]
        platform: Vec<PlatformArg>,

        /// Save the generated configuration as JSON
        #[arg(long)]
        save_config: Option<PathBuf>,

        #[command(flatten)]
        ai: AiArgs,

        #[command(flatten)]
        manifest: ManifestArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Ask the AI to change an existing configuration
    Regenerate {
        #[command(flatten)]
        source: SourceArgs,

        /// The change to make
        change: String,

        /// Save the updated configuration as JSON
        #[arg(long)]
        save_config: Option<PathBuf>,

        #[command(flatten)]
        ai: AiArgs,

        #[command(flatten)]
        manifest: ManifestArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the folders and files inside a built archive
    Inspect {
        /// Archive to read
        archive: PathBuf,
    },

    /// Guided mode with prompts
    Interactive {
        #[command(flatten)]
        ai: AiArgs,

        #[command(flatten)]
        manifest: ManifestArgs,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(command) => run(command),
        None => run(Commands::Interactive {
            ai: AiArgs { endpoint: None },
            manifest: ManifestArgs {
                chromium_host_permissions: false,
            },
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", "❌ Failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate { source, manifest, output } => {
            println!("{}", "Browser Extension Generator".bold().blue());
            println!("{}", "=".repeat(50).blue());
            println!();

            let config = source.load()?;
            let options = manifest.options();
            let mut session = Session::new(options);
            session.generate(config)?;
            finish(&session, options, &output)
        }

        Commands::Manifest { source, manifest, platform } => {
            let config = source.load()?;
            let files = FileSetGenerator::new(manifest.options()).generate(&config, platform.into())?;
            println!("{}", files.text(MANIFEST_FILE).unwrap_or_default());
            Ok(())
        }

        Commands::Preview { source, platform, file, live } => {
            let config = source.load()?;
            let files = extforge::generate_file_set(&config, platform.into())?;

            if live {
                println!("{}", preview::live_view(&files, &file));
                return Ok(());
            }

            let view = preview::code_view(&files, &file).with_context(|| {
                let available: Vec<_> = files.paths().collect();
                format!("{} was not generated; available: {}", file, available.join(", "))
            })?;
            eprintln!("{}", format!("── {} [{}] ──", view.path, view.language).cyan());
            println!("{}", view.content);
            Ok(())
        }

        Commands::Ai { prompt, platform, save_config, ai, manifest, output } => {
            let targets = if platform.is_empty() {
                TargetPlatform::ALL.iter().copied().collect()
            } else {
                platform.into_iter().map(TargetPlatform::from).collect()
            };
            let client = ai.client()?;
            let options = manifest.options();
            let mut session = Session::new(options);

            println!("{}", "🤖 Asking the AI for a configuration...".yellow().bold());
            block_on(session.generate_from_prompt(&client, &prompt, targets))??;

            save_current(&session, save_config.as_deref())?;
            finish(&session, options, &output)
        }

        Commands::Regenerate { source, change, save_config, ai, manifest, output } => {
            let config = source.load()?;
            let client = ai.client()?;
            let options = manifest.options();
            let mut session = Session::new(options);
            session.generate(config)?;

            println!("{}", "🤖 Asking the AI to update the configuration...".yellow().bold());
            block_on(session.regenerate(&client, &change))??;

            save_current(&session, save_config.as_deref())?;
            finish(&session, options, &output)
        }

        Commands::Inspect { archive } => {
            let bytes = std::fs::read(&archive)
                .with_context(|| format!("Failed to read {}", archive.display()))?;
            let folders = packager::archive_folders(&bytes)?;
            let entries = packager::read_archive(&bytes)?;

            println!("{} {}", "📦".bold(), archive.display().to_string().bold());
            for folder in &folders {
                println!("  {}/", folder.cyan());
                let prefix = format!("{}/", folder);
                for (name, content) in entries.iter().filter(|(name, _)| name.starts_with(&prefix)) {
                    println!("      {} ({} bytes)", &name[prefix.len()..], content.len());
                }
            }
            Ok(())
        }

        Commands::Interactive { ai, manifest } => {
            cli::run_interactive_mode(manifest.options(), ai.client()?)
        }
    }
}

impl SourceArgs {
    fn load(&self) -> Result<Configuration> {
        let mut config = load_configuration(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        if let Some(icon) = &self.icon {
            config.icon = Some(load_icon(icon)?);
        }
        if let Some(dir) = &self.extra_files {
            config.extra_files.extend(load_extra_files(dir)?);
        }

        Ok(config)
    }
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new().context("failed to initialize async runtime")?;
    Ok(runtime.block_on(future))
}

fn save_current(session: &Session, path: Option<&Path>) -> Result<()> {
    if let (Some(path), Some(config)) = (path, session.current()) {
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  - Configuration: {}", path.display());
    }
    Ok(())
}

fn finish(session: &Session, options: ManifestOptions, output: &OutputArgs) -> Result<()> {
    let (Some(config), Some(plan)) = (session.current(), session.plan()) else {
        anyhow::bail!("no extension was generated");
    };

    println!("{}", "✅ Extension generated successfully!".green().bold());
    println!();
    cli::print_plan_summary(config, plan, options);
    println!();

    let written = cli::save_outputs(config, plan, options, &output.output, output.outputs())?;
    cli::print_written(&written);
    Ok(())
}
