use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::store::DEFAULT_TODO_FILE;

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::BrightMagenta.on_default())
}

#[derive(Debug, Parser)]
#[command(name = "godo")]
#[command(bin_name = "godo")]
#[command(version)]
#[command(about = "godo - Directory-level todo manager")]
#[command(arg_required_else_help = true)]
#[command(after_help = concat!(
    "Examples:\n",
    "  godo a \"Implement user authentication\"\n",
    "  godo l\n",
    "  godo d 1\n",
    "  godo c"
))]
#[command(styles = cli_styles())]
pub struct Cli {
    #[arg(
        short = 'f',
        long,
        global = true,
        env = "GODO_FILE",
        default_value = DEFAULT_TODO_FILE,
        help = "Todo file, relative to the current directory."
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add a new todo.", visible_alias = "a")]
    Add(AddArgs),
    #[command(about = "List active todos.", visible_alias = "l")]
    List(ListArgs),
    #[command(about = "Mark an active todo as complete.", visible_alias = "d")]
    Done(RankArgs),
    #[command(about = "Remove an active todo.", visible_alias = "rm")]
    Remove(RankArgs),
    #[command(
        about = "Remove all completed todos, or one completed todo by rank.",
        visible_alias = "c"
    )]
    Clean(CleanArgs),
    #[command(about = "Show active todos (for shell prompt hooks).")]
    Show,
    #[command(about = "Generate or install shell completions.")]
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
#[command(about = "Add a new todo.")]
pub struct AddArgs {
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "TEXT",
        help = "Todo text; multiple words are joined with spaces."
    )]
    pub text: Vec<String>,
}

#[derive(Debug, Args)]
#[command(about = "List todos.")]
pub struct ListArgs {
    #[arg(short = 'a', long = "all", help = "Include completed todos.")]
    pub all: bool,

    #[arg(short = 'j', long, help = "Render machine-readable JSON.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RankArgs {
    #[arg(
        allow_hyphen_values = true,
        value_name = "RANK",
        help = "1-based position among active todos, as shown by `godo list`."
    )]
    pub rank: String,
}

#[derive(Debug, Args)]
#[command(about = "Clean completed todos.")]
pub struct CleanArgs {
    #[arg(
        allow_hyphen_values = true,
        value_name = "RANK",
        help = "1-based position among completed todos, as shown by `godo list --all`."
    )]
    pub rank: Option<String>,
}

#[derive(Debug, Args)]
#[command(about = "Generate or install shell completions.")]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate for. Auto-detected if omitted.")]
    pub shell: Option<Shell>,

    #[arg(
        short = 'i',
        long = "install",
        help = "Write completions to the canonical path for the shell."
    )]
    pub install: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
