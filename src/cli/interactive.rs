//! Interactive CLI mode for the extension generator

use super::form::FormState;
use super::{print_plan_summary, print_written, save_outputs, OutputOptions};
use crate::ai::HttpCompletionClient;
use crate::generator::ManifestOptions;
use crate::models::{FeatureKind, PermissionKind, TargetPlatform};
use crate::parser::{load_extra_files, load_icon};
use crate::preview;
use crate::session::Session;
use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

struct Interactive {
    session: Session,
    options: ManifestOptions,
    client: HttpCompletionClient,
    runtime: Runtime,
    theme: ColorfulTheme,
}

/// Run the interactive CLI mode
pub fn run_interactive_mode(options: ManifestOptions, client: HttpCompletionClient) -> Result<()> {
    print_banner();

    let mut state = Interactive {
        session: Session::new(options),
        options,
        client,
        runtime: Runtime::new().context("failed to initialize async runtime")?,
        theme: ColorfulTheme::default(),
    };

    loop {
        println!();
        let items = vec![
            "🧩 Build an extension from a form",
            "🤖 Describe an extension for the AI",
            "✏️  Request a change to the current extension",
            "👀 Preview a generated file",
            "💾 Save archives",
            "❌ Exit",
        ];

        let selection = Select::with_theme(&state.theme)
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => state.handle_form(),
            1 => state.handle_ai(),
            2 => state.handle_regenerate(),
            3 => state.handle_preview(),
            4 => state.handle_save(),
            5 => {
                println!("\n{}", "Thanks for using extforge! 👋".green().bold());
                break;
            }
            _ => unreachable!(),
        };

        // Terminal failures end the session; everything else returns to the menu
        if let Err(e) = outcome {
            if e.downcast_ref::<dialoguer::Error>().is_some() {
                return Err(e);
            }
            eprintln!("{}", "❌ That didn't work".red().bold());
            eprintln!("{}", format!("Error: {:#}", e).red());
        }
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "╔═══════════════════════════════════════════════════════════════╗".blue());
    println!("{}", "║                                                               ║".blue());
    println!("{}", "║     🧩 extforge: Browser Extension Generator                  ║".blue().bold());
    println!("{}", "║                                                               ║".blue());
    println!("{}", "║     Describe an extension once, get ready-to-load packages    ║".blue());
    println!("{}", "║     for Chromium (MV3) and Firefox (MV2)                      ║".blue());
    println!("{}", "║                                                               ║".blue());
    println!("{}", "╚═══════════════════════════════════════════════════════════════╝".blue());
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

impl Interactive {
    fn handle_form(&mut self) -> Result<()> {
        println!("\n{}", "=== Build an Extension ===".blue().bold());
        println!();

        let initial = self
            .session
            .current()
            .map(FormState::from_configuration)
            .unwrap_or_default();
        let form = self.collect_form(initial)?;

        let config = form.to_configuration();
        let plan = self.session.generate(config.clone())?;

        println!();
        println!("{}", "✅ Extension generated!".green().bold());
        print_plan_summary(&config, plan, self.options);
        Ok(())
    }

    fn handle_ai(&mut self) -> Result<()> {
        println!("\n{}", "=== Generate with AI ===".blue().bold());
        println!();

        let description: String = Input::with_theme(&self.theme)
            .with_prompt("📝 Describe your extension")
            .allow_empty(true)
            .interact_text()?;

        let current_targets = self
            .session
            .current()
            .map(|config| config.targets.clone())
            .unwrap_or_else(|| TargetPlatform::ALL.iter().copied().collect());
        let targets = self.pick_many("🌐 Target browsers", TargetPlatform::ALL, TargetPlatform::as_str, &current_targets)?;

        let pb = spinner("Asking the AI for a configuration...");
        let result = self.runtime.block_on(self.session.generate_from_prompt(
            &self.client,
            &description,
            targets,
        ));
        pb.finish_and_clear();

        result?;
        println!("{}", "✅ Extension configuration generated successfully!".green().bold());
        self.print_current();
        Ok(())
    }

    fn handle_regenerate(&mut self) -> Result<()> {
        println!("\n{}", "=== Request a Change ===".blue().bold());
        println!();

        if self.session.current().is_none() {
            println!("{}", "Generate an extension first.".yellow());
            return Ok(());
        }

        let change: String = Input::with_theme(&self.theme)
            .with_prompt("✏️  What should change?")
            .allow_empty(true)
            .interact_text()?;

        let pb = spinner("Asking the AI to update the configuration...");
        let result = self.runtime.block_on(self.session.regenerate(&self.client, &change));
        pb.finish_and_clear();

        result?;
        println!("{}", "✅ Extension updated successfully!".green().bold());
        self.print_current();
        Ok(())
    }

    fn handle_preview(&mut self) -> Result<()> {
        let Some(plan) = self.session.plan() else {
            println!("{}", "Generate an extension first.".yellow());
            return Ok(());
        };

        let platforms: Vec<TargetPlatform> = plan.platforms().collect();
        let labels: Vec<&str> = platforms.iter().map(|p| p.as_str()).collect();
        let platform = platforms[Select::with_theme(&self.theme)
            .with_prompt("🌐 Platform")
            .items(&labels)
            .default(0)
            .interact()?];

        let Some(files) = plan.file_set(platform) else {
            return Ok(());
        };
        let paths: Vec<&str> = files.paths().collect();
        let path = paths[Select::with_theme(&self.theme)
            .with_prompt("📄 File")
            .items(&paths)
            .default(0)
            .interact()?];

        let live = Confirm::with_theme(&self.theme)
            .with_prompt("Render as a live page (with inlined styles)?")
            .default(false)
            .interact()?;

        println!();
        if live {
            println!("{}", preview::live_view(files, path));
        } else if let Some(view) = preview::code_view(files, path) {
            println!("{}", format!("── {} [{}] ──", view.path, view.language).cyan());
            println!("{}", view.content);
        }
        Ok(())
    }

    fn handle_save(&mut self) -> Result<()> {
        let (Some(config), Some(plan)) = (self.session.current(), self.session.plan()) else {
            println!("{}", "Generate an extension first.".yellow());
            return Ok(());
        };

        let output: String = Input::with_theme(&self.theme)
            .with_prompt("📂 Output directory")
            .with_initial_text("./dist")
            .interact_text()?;

        let outputs = OutputOptions {
            bundle: Confirm::with_theme(&self.theme)
                .with_prompt("📦 Also write one archive with every platform?")
                .default(false)
                .interact()?,
            unpacked: Confirm::with_theme(&self.theme)
                .with_prompt("📁 Also write unpacked folders for loading in the browser?")
                .default(true)
                .interact()?,
            report: Confirm::with_theme(&self.theme)
                .with_prompt("📄 Write a markdown report?")
                .default(true)
                .interact()?,
        };

        let written = save_outputs(config, plan, self.options, &PathBuf::from(output), outputs)?;
        println!("{}", "✅ Saved!".green().bold());
        print_written(&written);
        Ok(())
    }

    fn print_current(&self) {
        if let (Some(config), Some(plan)) = (self.session.current(), self.session.plan()) {
            print_plan_summary(config, plan, self.options);
        }
    }

    fn collect_form(&self, initial: FormState) -> Result<FormState> {
        let mut form = initial;

        form.name = self.text("🏷️  Extension name", &form.name)?;
        form.description = self.text("📝 Description", &form.description)?;
        form.version = self.text("🔢 Version", &form.version)?;
        form.author = self.text("👤 Author (optional)", &form.author)?;
        form.homepage = self.text("🔗 Homepage URL (optional)", &form.homepage)?;

        form.browsers = self.pick_many("🌐 Target browsers", TargetPlatform::ALL, TargetPlatform::as_str, &form.browsers)?;
        form.features = self.pick_many("🧩 Features", FeatureKind::ALL, FeatureKind::as_str, &form.features)?;
        form.permissions =
            self.pick_many("🔐 Permissions", PermissionKind::ALL, PermissionKind::as_str, &form.permissions)?;

        if form.features.contains(&FeatureKind::ContentScript) {
            form.match_all = Confirm::with_theme(&self.theme)
                .with_prompt("🌍 Run the content script on all URLs?")
                .default(form.match_all)
                .interact()?;

            if !form.match_all {
                let current = form.url_patterns.lines().collect::<Vec<_>>().join(", ");
                let patterns = self.text("🎯 URL match patterns (comma-separated)", &current)?;
                form.url_patterns = patterns
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
            }

            form.run_at_start = Confirm::with_theme(&self.theme)
                .with_prompt("⏱️  Inject before the page is parsed (document_start)?")
                .default(form.run_at_start)
                .interact()?;
        }

        let icon_path = self.text("🖼️  Icon image path (optional)", "")?;
        if !icon_path.trim().is_empty() {
            form.icon = Some(load_icon(icon_path.trim())?);
        }

        let extra_dir = self.text("📁 Directory with extra files (optional)", "")?;
        if !extra_dir.trim().is_empty() {
            form.extra_files = load_extra_files(extra_dir.trim())?;
        }

        Ok(form)
    }

    fn text(&self, prompt: &str, initial: &str) -> Result<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?)
    }

    fn pick_many<T: Copy + Ord>(
        &self,
        prompt: &str,
        all: &[T],
        label: fn(T) -> &'static str,
        selected: &BTreeSet<T>,
    ) -> Result<BTreeSet<T>> {
        let items: Vec<&str> = all.iter().map(|item| label(*item)).collect();
        let defaults: Vec<bool> = all.iter().map(|item| selected.contains(item)).collect();

        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .defaults(&defaults)
            .interact()?;

        Ok(chosen.into_iter().map(|index| all[index]).collect())
    }
}
