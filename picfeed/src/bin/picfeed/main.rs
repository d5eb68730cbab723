mod commands;
mod examples;
mod output;
mod render;
mod theme;

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{
    builder::{styling::AnsiColor, Styles},
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser, Subcommand,
};
use colored::{control::ShouldColorize, Colorize};
use picfeed::App;

use commands::{
    config::{handle_config, load_config},
    shell::{handle_shell, ShellArgs},
};
use examples::{command_examples, CommandExample};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{ICONS, THEME};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("RUST_LOG", "Log filter for env_logger, e.g. picfeed=debug"),
    ("NO_COLOR", "Disable colored output when set"),
];

#[derive(Parser)]
#[command(name = "picfeed", version)]
#[command(
    about = "In-memory image sharing with accounts, follows and search",
    long_about = r#"In-memory image sharing shell that provides:

• Sign up, log in and log out (one session at a time)
• Following other accounts
• Publishing images with descriptions
• Searching the feed with keywords, `*` and `from:<user>`
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Configuration file (defaults to ./picfeed.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the command shell (interactive, piped, or from a script)
    Shell(ShellArgs),

    /// Show the effective configuration
    Config,
}

/// The clap command with themed help, shell reference and examples attached.
fn build_cli_command() -> Command {
    let use_color = ShouldColorize::from_env().should_colorize();
    let mut command = Cli::command()
        .styles(help_styles())
        .color(if use_color { ColorChoice::Auto } else { ColorChoice::Never })
        .after_long_help(render_pairs("Environment Variables:", ENVIRONMENT_VARIABLES, use_color));

    for entry in command_examples() {
        let help_text = render_long_help(entry, use_color);
        command = command.mut_subcommand(entry.name, |sub| sub.after_long_help(help_text));
    }
    command
}

/// Same palette as [`THEME`], in clap's terms.
fn help_styles() -> Styles {
    Styles::styled()
        .usage(AnsiColor::BrightBlue.on_default().bold())
        .header(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Magenta.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
        .error(AnsiColor::Red.on_default().bold())
}

fn render_long_help(entry: &CommandExample, use_color: bool) -> String {
    let mut buffer = String::new();
    if !entry.reference.is_empty() {
        buffer.push_str(&render_pairs("Shell commands:", entry.reference, use_color));
        buffer.push('\n');
    }

    let _ = writeln!(buffer, "{}", heading("Examples:", use_color));
    for group in entry.groups {
        let _ = writeln!(buffer, "  {}", group.title);
        for line in group.commands {
            let _ = writeln!(buffer, "    {} {line}", ICONS.arrow);
        }
    }
    buffer
}

fn render_pairs(title: &str, pairs: &[(&str, &str)], use_color: bool) -> String {
    let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{}", heading(title, use_color));
    for (key, description) in pairs {
        let key = format!("{key:<width$}");
        let key = if use_color { key.color(THEME.key).to_string() } else { key };
        let _ = writeln!(buffer, "  {key}  {description}");
    }
    buffer
}

fn heading(text: &str, use_color: bool) -> String {
    if use_color {
        text.color(THEME.highlight).bold().to_string()
    } else {
        text.to_string()
    }
}

fn main() {
    env_logger::init();

    let matches = build_cli_command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    if let Err(err) = execute(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });
    let config = load_config(cli.config.as_deref(), &output)?;

    match cli.command {
        Commands::Shell(args) => handle_shell(args, App::with_config(config), &output),
        Commands::Config => handle_config(&config, &output),
    }
}
