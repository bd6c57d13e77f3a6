//! Prompt generation: gather fields, render the template, emit the result.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{LangGptError, Result};
use crate::fields::PromptFields;
use crate::interactive::Prompter;
use crate::output::Output;
use crate::template::{TemplateSource, render};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Run one generation.
///
/// # Steps
///
/// 1. Load config (`--config`, else `langgpt.yaml` in `dir`, else defaults)
/// 2. Resolve and load the template; a missing template file stops here
/// 3. Build fields from `--fields-file` and flags (flags win per field)
/// 4. Ask interactively when `--interactive` is set or no field was given
/// 5. Fill unset fields from the config defaults
/// 6. Render and emit to the output file or `stdout`
pub(crate) fn run<R, O, E>(
    cli: &Cli,
    dir: &Path,
    input: R,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let config = Config::resolve(cli.config.as_deref(), dir)?;

    let source = TemplateSource::resolve(cli.template.as_deref(), config.template.as_deref());
    let template = source.load()?;
    tracing::debug!(source = %source.describe(), bytes = template.len(), "loaded template");

    if cli.dump_template {
        stdout
            .write_all(template.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| LangGptError::Io(format!("failed to write template: {}", e)))?;
        return Ok(());
    }

    let mut fields = match &cli.fields_file {
        Some(path) => PromptFields::load(path)?,
        None => PromptFields::default(),
    }
    .overlay(PromptFields::from_args(&cli.fields));

    let interactive = cli.interactive || fields.is_empty();
    if interactive {
        tracing::debug!(explicit = cli.interactive, "collecting fields interactively");
        let answers = Prompter::new(input, &mut *stdout).collect()?;
        fields = fields.overlay(answers);
    }

    let fields = fields.merge_defaults(&config.defaults);
    let rendered = render(&template, &fields.to_context());

    let output = Output::resolve(
        cli.output_path().map(PathBuf::as_path),
        config.output.as_deref(),
    );
    tracing::debug!(?output, interactive, "emitting rendered prompt");
    output.emit(&rendered, stdout, stderr, interactive)
}
