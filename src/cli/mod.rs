//! CLI argument parsing for langgpt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the flags; the run logic lives in the `commands`
//! module.

use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

/// LangGPT: render a structured role prompt from named fields.
///
/// Scalar fields take a single value; list fields may be repeated to add
/// several entries. With no field flags at all (or with --interactive) the
/// fields are collected from an interactive prompt instead.
#[derive(Parser, Debug)]
#[command(name = "langgpt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Write the rendered prompt to this file instead of printing it.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Same as --output.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Collect fields interactively, one prompt per field.
    #[arg(long)]
    pub interactive: bool,

    /// Template file to render (defaults to the built-in LangGPT template).
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// YAML or JSON file with field values; flags override its entries.
    #[arg(long, value_name = "PATH")]
    pub fields_file: Option<PathBuf>,

    /// Config file (defaults to ./langgpt.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resolved template text and exit.
    #[arg(long)]
    pub dump_template: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Field values given on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Role name (e.g. "Senior code reviewer").
    #[arg(long)]
    pub role: Option<String>,

    /// Profile: background and abilities of the role.
    #[arg(long)]
    pub profile: Option<String>,

    /// Expected output format (e.g. JSON, table, markdown sections).
    #[arg(long)]
    pub output_format: Option<String>,

    /// Style requirements (e.g. concise, actionable).
    #[arg(long)]
    pub style: Option<String>,

    /// Goal; repeat to add more.
    #[arg(long = "goal", value_name = "GOAL")]
    pub goals: Vec<String>,

    /// Constraint; repeat to add more.
    #[arg(long = "constraint", value_name = "CONSTRAINT")]
    pub constraints: Vec<String>,

    /// Skill or knowledge area; repeat to add more.
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,

    /// Workflow step; repeat to add more.
    #[arg(long, value_name = "STEP")]
    pub workflow: Vec<String>,

    /// Few-shot example; repeat to add more.
    #[arg(long = "example", value_name = "EXAMPLE")]
    pub examples: Vec<String>,

    /// Context to remember; repeat to add more.
    #[arg(long, value_name = "ITEM")]
    pub memory: Vec<String>,

    /// Available tool or interface; repeat to add more.
    #[arg(long, value_name = "TOOL")]
    pub tools: Vec<String>,

    /// Safety or compliance boundary; repeat to add more.
    #[arg(long, value_name = "ITEM")]
    pub safety: Vec<String>,

    /// Self-check or acceptance criterion; repeat to add more.
    #[arg(long, value_name = "ITEM")]
    pub evaluation: Vec<String>,

    /// Execution rule or priority; repeat to add more.
    #[arg(long, value_name = "RULE")]
    pub rules: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The output path, preferring --output over --save.
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output.as_ref().or(self.save.as_ref())
    }
}
