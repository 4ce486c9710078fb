mod commands;
mod helpers;

use alma_core::AlmaError;
use clap::Parser;
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    helpers::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let alma_error = error.as_alma_error();
            eprintln!("{}", alma_error.diagnostic_line());
            eprintln!("{}", alma_error.fatal_exit_line());
            alma_error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "alma-rs", version, about = "ALMA3 Love-number run automation")]
struct Cli {
    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Args, Default)]
pub(crate) struct LayoutArgs {
    /// JSON file describing the solver and run file layout
    #[arg(long, global = true, conflicts_with = "install_dir")]
    paths: Option<PathBuf>,

    /// ALMA3 installation directory (holds alma.exe)
    #[arg(long, global = true)]
    install_dir: Option<PathBuf>,

    /// Directory for the configuration, model and output files
    #[arg(long, global = true, requires = "install_dir")]
    work_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Rewrite one parameter line of the ALMA3 configuration
    SetParam(commands::SetParamArgs),
    /// Write the ALMA3 model file from layer properties
    WriteModel(commands::WriteModelArgs),
    /// Point the configuration at the run files and start ALMA3
    Execute(commands::ExecuteArgs),
    /// Print the Love numbers of an ALMA3 output file
    ReadOutput(commands::ReadOutputArgs),
    /// Full run: layer count, model file, ALMA3, k Love numbers
    Run(commands::RunArgs),
    /// k2 of a two-layer body for a sequence of envelope radii
    Sweep(commands::SweepArgs),
}

fn dispatch_parsed(cli: Cli) -> Result<i32, CliError> {
    let paths = helpers::resolve_layout(&cli.layout)?;
    match cli.command {
        CliCommand::SetParam(args) => commands::run_set_param_command(&paths, args),
        CliCommand::WriteModel(args) => commands::run_write_model_command(&paths, args),
        CliCommand::Execute(args) => commands::run_execute_command(&paths, args),
        CliCommand::ReadOutput(args) => commands::run_read_output_command(&paths, args),
        CliCommand::Run(args) => commands::run_run_command(paths, args),
        CliCommand::Sweep(args) => commands::run_sweep_command(paths, args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(AlmaError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<AlmaError> for CliError {
    fn from(error: AlmaError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_alma_error(&self) -> AlmaError {
        match self {
            Self::Usage(message) => AlmaError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => AlmaError::internal("INTERNAL.CLI", format!("{error:#}")),
        }
    }
}
