use anyhow::{anyhow, Context};
use clap::Args;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use log::{info, LevelFilter};
use std::fs;
use std::path::Path;
use theory_encoder::{
    logic_for_name, smt, supported_logics, Diagnostics, Logic, Options, StatementSet,
};

/// General encoding options
#[derive(Args, Default)]
#[clap(next_help_heading = "General Options")]
pub struct GeneralConfig {
    /// Theory fragment to encode for (default: QF_IDL)
    #[clap(name = "logic", long, short = 'l')]
    pub logic: Option<String>,

    /// Print set-logic and declarations before the assertions
    #[clap(name = "preamble", long)]
    pub preamble: bool,

    /// Exit with an error if any statement could not be encoded
    #[clap(name = "fail-on-error", long)]
    pub fail_on_error: bool,

    /// Display detailed encoding progress
    #[clap(name = "verbose", long, short = 'v')]
    pub verbose: bool,
}

/// Read the options file, if any, and apply the command line flags on top of it.
pub fn load_options(config: Option<&Path>, general: &GeneralConfig) -> anyhow::Result<Options> {
    let mut options = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read options file {}", path.display()))?;
            Options::from_toml(&text)
                .with_context(|| format!("invalid options file {}", path.display()))?
        }
        None => Options::default(),
    };

    if let Some(logic) = &general.logic {
        options.logic = logic.clone();
    }
    options.emit_preamble |= general.preamble;
    options.fail_on_error |= general.fail_on_error;
    if general.verbose {
        options.verbosity_level = LevelFilter::Debug;
    }
    Ok(options)
}

pub fn execute(input: &Path, options: &Options) -> anyhow::Result<()> {
    let logic = logic_for_name(&options.logic).ok_or_else(|| {
        anyhow!(
            "unsupported logic `{}`, expected one of: {}",
            options.logic,
            supported_logics().join(", ")
        )
    })?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("cannot read statement file {}", input.display()))?;
    let statements = StatementSet::from_toml(&text)
        .with_context(|| format!("invalid statement file {}", input.display()))?
        .statements;
    info!(
        "encoding {} statements for {}",
        statements.len(),
        logic.theory_name()
    );

    let mut output = if options.emit_preamble {
        smt::preamble(logic.as_ref(), &statements)
    } else {
        String::new()
    };
    let mut diagnostics = Diagnostics::new();
    logic.emit_assertions(&statements, &mut output, &mut diagnostics)?;
    print!("{output}");

    if diagnostics.is_empty() {
        return Ok(());
    }

    let mut error_writer = StandardStream::stderr(ColorChoice::Auto);
    diagnostics.report(&mut error_writer)?;
    info!(
        "skipped {} of {} statements",
        diagnostics.len(),
        statements.len()
    );

    if options.fail_on_error {
        Err(anyhow!(
            "{} statement(s) could not be encoded for {}",
            diagnostics.len(),
            logic.theory_name()
        ))
    } else {
        Ok(())
    }
}
