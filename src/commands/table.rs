use crate::cli::Cli;
use crate::domain::models::Table;
use crate::error::TableError;
use crate::services::generator::generate;
use crate::services::output::{write_failure, write_table};
use crate::services::reader::LineReader;
use crate::services::validator::Validator;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// Runs the whole read → validate → generate → write pipeline once.
pub fn handle_table(cli: &Cli) -> ExitCode {
    let stdin = io::stdin();
    let result = run(cli, stdin.lock(), &mut io::stderr())
        .and_then(|table| emit(cli, &table, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(cli, &error),
    }
}

pub fn run<R: BufRead, P: Write>(
    cli: &Cli,
    input: R,
    prompt_sink: &mut P,
) -> Result<Table, TableError> {
    if let Some(prompt) = &cli.prompt {
        write!(prompt_sink, "{prompt}")?;
        prompt_sink.flush()?;
    }

    let raw = LineReader::new(cli.max_line_bytes).read_line(input)?;
    debug!(bytes = raw.byte_len(), "read input line");

    let accepted = Validator::default().validate(raw.as_bytes())?;
    info!(value = accepted.value(), "input accepted");

    let table = generate(accepted)?;
    info!(rows = table.rows.len(), "table generated");
    Ok(table)
}

/// Writes a finished table; a closed or full stdout becomes `TableError::Io`.
pub fn emit<W: Write>(cli: &Cli, table: &Table, out: &mut W) -> Result<(), TableError> {
    write_table(out, table, cli.json).map_err(TableError::from)
}

fn fail(cli: &Cli, error: &TableError) -> ExitCode {
    if error.is_rejection() {
        info!(kind = error.kind(), %error, "input rejected");
    } else {
        warn!(kind = error.kind(), %error, "run failed");
    }
    if !cli.quiet {
        // stderr is the last channel left; a failure here is only logged.
        if let Err(e) = write_failure(&mut io::stderr().lock(), error, cli.json) {
            warn!(%e, "could not write diagnostic");
        }
    }
    ExitCode::from(error.exit_code())
}
