use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stricture")]
#[command(author, version)]
#[command(about = "A tiered linter for agent-facing Markdown instruction documents")]
#[command(
    long_about = "Stricture classifies Markdown documents into compliance tiers by path and \
    checks each document with the rules of its tier. Strict documents (agent commands, skills, \
    rules) must follow a canonical heading order and an imperative voice; governance documents \
    and general documentation only get advisory warnings."
)]
#[command(after_help = "\
EXAMPLES:

    # Lint files
    stricture lint commands/deploy.md README.md

    # Lint against a different project root
    stricture lint --root ../prompts ../prompts/rules/*.md

    # Show which tier each file falls into
    stricture classify CLAUDE.md docs/guide.md

    # Parse and inspect the syntax tree
    stricture parse commands/deploy.md

TIERS:

  strict    commands/**/*.md, skills/**/SKILL.md, agents/**/AGENT.md,
            rules/**/*.md, AGENTS.md, CLAUDE.md
  moderate  governance/**/*.md, config-sync/**/*.md, agent-ops/**/*.md
  light     **/*.md
  none      everything else (not linted)

CONFIGURATION:

Stricture looks for configuration files in this order:
  1. Explicit --config path
  2. stricture.toml or .stricture.toml in current/parent directories
  3. ~/.config/stricture/config.toml (XDG)
  4. Built-in defaults

Example .stricture.toml:

    max-line-length = 120

    [tiers]
    strict = [\"prompts/**/*.md\"]

    [vocabulary]
    modal-verbs = [\"may\", \"might\", \"could\", \"should\"]
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, stricture will \
        search for .stricture.toml or stricture.toml in the current directory and its parents, \
        then fall back to ~/.config/stricture/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint Markdown documents with the rules of their tier
    #[command(
        long_about = "Classify each file by its path relative to the project root, parse it, \
        and run the rules of its tier. Strict findings are errors; moderate and light findings \
        are warnings."
    )]
    #[command(after_help = "\
EXIT STATUS:

    0  no errors (warnings allowed unless --strict-warnings)
    1  at least one error, or any diagnostic with --strict-warnings
    2  a file or the configuration could not be read")]
    Lint {
        /// Files to lint
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Project root that tier patterns are relative to
        #[arg(long, env = "STRICTURE_ROOT")]
        #[arg(
            long_help = "Directory that tier patterns are matched against. Defaults to the \
            `root` key of the configuration file, then the current directory."
        )]
        root: Option<PathBuf>,

        /// Exit with status 1 on warnings too
        #[arg(long)]
        strict_warnings: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Only print diagnostics and the summary
        #[arg(long, short)]
        quiet: bool,
    },
    /// Print the tier of each file
    Classify {
        /// Files to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Project root that tier patterns are relative to
        #[arg(long, env = "STRICTURE_ROOT")]
        root: Option<PathBuf>,
    },
    /// Parse and display the syntax tree for debugging
    #[command(
        long_about = "Parse a document and display its concrete syntax tree, as seen by the \
        lint rules. Useful when a rule reports something unexpected."
    )]
    Parse {
        /// Input file
        file: PathBuf,
    },
    /// List the built-in rules with their tier and severity
    Rules,
}
