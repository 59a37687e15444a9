use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use release_gate::cli::orchestration;
use release_gate::config::{self, Config};
use release_gate::git::Git2Repository;
use release_gate::tools::{PytestRunner, SphinxBuilder, TwineUploader};
use release_gate::ui;
use release_gate::ReleaseError;

#[derive(Parser)]
#[command(
    name = "release-gate",
    version,
    about = "Tag-gated release workflow for Python projects"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, global = true, help = "Project root directory")]
    root: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the project and generate README and documentation config
    Prepare,

    /// Check that HEAD may be published and show the upload plan
    Verify,

    /// Verify HEAD, then upload the built distributions
    Publish {
        #[arg(short, long, help = "Skip confirmation prompts")]
        yes: bool,

        #[arg(long, help = "Preview what would happen without uploading")]
        dry_run: bool,
    },

    /// Build HTML documentation with sphinx-build
    Docs,

    /// Run the unit tests with py.test
    Test,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        if e
            .downcast_ref::<ReleaseError>()
            .is_some_and(ReleaseError::is_gate_failure)
        {
            eprintln!("Release gate failed, nothing was published.");
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => env::current_dir()?,
    };
    let config = config::load_config(args.config.as_deref(), &root)?;

    match args.command {
        Command::Prepare => prepare(&config, &root),
        Command::Verify => verify(&config, &root),
        Command::Publish { yes, dry_run } => publish(&config, &root, yes, dry_run),
        Command::Docs => {
            ui::display_status("Building documentation...");
            let out = orchestration::build_docs(&config, &root, &SphinxBuilder::new())?;
            ui::display_success(&format!("Documentation written to {}", out.display()));
            Ok(())
        }
        Command::Test => {
            let existing = env::var("PYTHONPATH").ok();
            orchestration::run_tests(&config, &root, &PytestRunner::new(), existing.as_deref())?;
            ui::display_success("Unit tests passed");
            Ok(())
        }
    }
}

fn prepare(config: &Config, root: &Path) -> Result<()> {
    let release_tag = orchestration::release_tag_from_env(config);
    let outcome = orchestration::prepare(config, root, release_tag.as_deref())?;

    ui::display_success(&format!(
        "Rendered {} for version {}",
        outcome.readme.display(),
        outcome.version
    ));
    if let Some(conf) = outcome.doc_conf {
        ui::display_success(&format!("Rendered {}", conf.display()));
    }
    Ok(())
}

fn verify(config: &Config, root: &Path) -> Result<()> {
    let repo = Git2Repository::open(root)?;
    let release_tag = orchestration::release_tag_from_env(config);

    let plan = orchestration::verify(config, root, &repo, release_tag.as_deref())?;
    ui::display_upload_plan(&plan);
    Ok(())
}

fn publish(config: &Config, root: &Path, yes: bool, dry_run: bool) -> Result<()> {
    let repo = Git2Repository::open(root)?;
    let release_tag = orchestration::release_tag_from_env(config);

    ui::display_status("Verifying release tag...");
    let plan = orchestration::verify(config, root, &repo, release_tag.as_deref())?;
    ui::display_upload_plan(&plan);

    let uploader = TwineUploader::new();

    if dry_run {
        ui::display_status("Dry run, would run:");
        ui::display_success(&format!(
            "  {}",
            uploader.command(&plan.repository_url, &plan.artifacts)
        ));
        orchestration::upload(&plan, &uploader, true)?;
        return Ok(());
    }

    if !yes
        && !ui::confirm_action(&format!(
            "Upload {} distribution(s) to {}?",
            plan.artifacts.len(),
            plan.repository_url
        ))?
    {
        println!("Upload cancelled by user.");
        return Ok(());
    }

    ui::display_status(&format!("Uploading to {}", plan.repository_url));
    let result = orchestration::upload(&plan, &uploader, false)?;
    ui::display_success(&format!(
        "Published {} ({} distribution(s))",
        result.tag, result.artifacts
    ));
    Ok(())
}
