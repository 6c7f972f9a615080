use std::{
    io::{stdin, stdout, BufWriter, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
    io::{prompt::Shell, reader, style::Styler},
    worker::processor::Processor,
};

/// In-memory bank account simulator
#[derive(Parser, Debug)]
#[command(name = "bank_simulator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run commands from a CSV script (op,account,holder,amount) instead of the menu
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Disable coloured output (also off when NO_COLOR is set)
    #[arg(long)]
    pub no_color: bool,

    /// Log filter, e.g. `info` or `bank_simulator=debug`. RUST_LOG takes precedence.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Logs go to stderr so they never interleave with the prompt on stdout.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    init_tracing(&cli.log_level);

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    let styler = Styler::new(color);
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.script {
        Some(path) => {
            info!(script = %path.display(), "running script");
            let file = std::fs::File::open(path).map_err(|source| AppError::OpenScript {
                path: path.clone(),
                source,
            })?;
            run_script(file, &mut out, styler)
        }
        None => {
            let input = stdin().lock();
            Shell::new(input, &mut out, styler).run()
        }
    }
}

/// Runs every command of a CSV script through a fresh ledger, printing one
/// outcome per command. Stops at the first malformed row.
pub fn run_script<R: Read, W: Write>(
    input: R,
    mut output: W,
    styler: Styler,
) -> Result<(), AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut ledger = Ledger::new();
    let mut processor = Processor::new();

    for command in reader::read_commands(&mut rdr)? {
        let outcome = processor.process(&mut ledger, command?)?;
        writeln!(output, "{}", styler.render(&outcome))?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_output(script: &str) -> Result<String, AppError> {
        let mut out = Vec::new();
        run_script(script.as_bytes(), &mut out, Styler::plain())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["bank_simulator"]).unwrap();
        assert!(cli.script.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn cli_accepts_script_and_flags() {
        let cli = Cli::try_parse_from([
            "bank_simulator",
            "--script",
            "ops.csv",
            "--no-color",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("ops.csv")));
        assert!(cli.no_color);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn script_prints_one_line_per_command() {
        let out = script_output(
            "op,account,holder,amount\n\
create,,Alice,100\n\
deposit,1,,50\n\
withdraw,1,,200\n\
withdraw,1,,150\n\
balance,1,,\n\
balance,99,,\n",
        )
        .unwrap();

        assert_eq!(
            out,
            "Account created successfully! Account number: 1\n\
Deposit successful!\n\
Insufficient balance!\n\
Withdrawal successful!\n\
Balance: 0.00\n\
Account not found!\n"
        );
    }

    #[test]
    fn script_stops_at_malformed_row() {
        let err = script_output(
            "op,account,holder,amount\n\
create,,Alice,100\n\
deposit,x,,5\n",
        )
        .unwrap_err();

        match err {
            AppError::Script { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
