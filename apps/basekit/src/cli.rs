//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "basekit",
    version,
    about = "Scaffold and validate Base components",
    long_about = "basekit — generate Base* Vue components from fixed templates and validate every component against the library conventions.\n\nConfiguration precedence: CLI > basekit.toml > defaults.",
    after_help = "Examples:\n  basekit generate Modal\n  basekit generate Tooltip --no-slots --with-icon\n  basekit generate Dialog --prop title:string:Dialog title\n  basekit validate\n  basekit validate --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current basekit version.")]
    Version,
    /// Scaffold a component, its test suite and its story
    #[command(
        about = "Generate a component",
        long_about = "Render the component, test and story templates for <ComponentName>. The Base prefix is added when missing. Refuses to overwrite an existing component file.",
        after_help = "Examples:\n  basekit generate Modal\n  basekit generate BaseCard --no-slots"
    )]
    Generate {
        /// Component name, with or without the prefix (e.g. Modal)
        name: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Only a default slot (no prefix/suffix slots)")]
        no_slots: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Add an icon prop and icon markup")]
        with_icon: bool,
        #[arg(long, help = "Component description (default: \"A <name> component\")")]
        description: Option<String>,
        #[arg(long = "prop", value_name = "NAME:TYPE[:DESCRIPTION]", help = "Extra prop; repeatable")]
        props: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Validate every component against the conventions
    #[command(
        about = "Validate components",
        long_about = "Check every <Prefix>*.vue file in the components directory. Errors fail the run; warnings are reported only.",
        after_help = "Examples:\n  basekit validate\n  basekit validate --components-dir packages/ui/src --output json"
    )]
    Validate {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Components directory, relative to the repository root")]
        components_dir: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
