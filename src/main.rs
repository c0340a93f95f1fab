mod commands;
mod core;
mod release;
mod ui;

use crate::core::context::RunContext;
use crate::core::error::{ExitCode, ReadmeError, print_error};
use crate::release::METADATA_FILE;
use crate::release::readme::validate;
use crate::ui::style::print_failure;
use clap::Parser;
use std::path::PathBuf;

/// Stamp the Unreleased section of a changelog README with a release version and date
#[derive(Parser)]
#[command(name = "readme-release")]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// README to update (default: README.org, then README.md in the current directory)
  readme: Option<PathBuf>,
  /// Override and use this version instead of the one in pyproject.toml
  #[arg(long)]
  version: Option<String>,
  /// Project metadata file holding `tool.poetry.version`
  #[arg(long, default_value = METADATA_FILE)]
  metadata: PathBuf,
  /// Show the header that would be inserted without writing the README
  #[arg(long)]
  dry_run: bool,
  /// Log each step to stderr
  #[arg(short, long)]
  verbose: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Install a stderr subscriber when `--verbose` is passed or `RUST_LOG` is set
fn init_logging(verbose: bool) {
  use tracing_subscriber::EnvFilter;

  let filter = if verbose {
    EnvFilter::new("readme_release=debug")
  } else if std::env::var_os("RUST_LOG").is_some() {
    EnvFilter::from_default_env()
  } else {
    return;
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let ctx = match RunContext::current() {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  let fails = validate(cli.readme.as_deref(), &ctx.root);
  if !fails.is_empty() {
    for msg in &fails {
      print_failure(msg);
    }
    std::process::exit(ExitCode::User.as_i32());
  }

  let args = commands::UpdateArgs {
    readme: cli.readme,
    version: cli.version,
    metadata: cli.metadata,
    dry_run: cli.dry_run,
  };

  if let Err(err) = commands::run_update(&ctx, args) {
    handle_error(err);
  }
}

fn handle_error(err: ReadmeError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
