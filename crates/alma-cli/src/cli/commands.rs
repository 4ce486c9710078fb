use super::CliError;
use super::helpers::{model_input_from_columns, parse_rheology, render_series, render_sweep};
use alma_core::{
    AlmaPaths, AlmaSession, LayerColumns, LoveNumberKind, ParsePolicy, ProcessSolver, Rheology,
    RunOptions, change_model_file, change_param, execute_alma, read_love_numbers,
};

#[derive(clap::Args)]
pub(super) struct LayerArgs {
    /// Layer radii in metres (comma separated or repeated)
    #[arg(long = "radius", value_delimiter = ',', required = true, allow_negative_numbers = true)]
    radii: Vec<f64>,

    /// Layer densities in kg/m^3
    #[arg(long = "density", value_delimiter = ',', required = true, allow_negative_numbers = true)]
    densities: Vec<f64>,

    /// Layer rigidities in Pa
    #[arg(long = "rigidity", value_delimiter = ',', required = true, allow_negative_numbers = true)]
    rigidities: Vec<f64>,

    /// Layer viscosities in Pa.s
    #[arg(long = "viscosity", value_delimiter = ',', required = true, allow_negative_numbers = true)]
    viscosities: Vec<f64>,

    /// Layer rheologies (elastic, maxwell, newton, kelvin, burgers, andrade)
    #[arg(long = "rheology", value_delimiter = ',', required = true, value_parser = parse_rheology)]
    rheologies: Vec<Rheology>,
}

impl LayerArgs {
    fn into_columns(self) -> LayerColumns {
        LayerColumns::new(
            self.radii,
            self.densities,
            self.rigidities,
            self.viscosities,
            self.rheologies,
        )
    }
}

#[derive(clap::Args)]
pub(super) struct SetParamArgs {
    /// Logical parameter name from the parameter file
    name: String,

    /// New value written in front of the parameter marker
    #[arg(allow_hyphen_values = true)]
    value: String,
}

#[derive(clap::Args)]
pub(super) struct WriteModelArgs {
    #[command(flatten)]
    layers: LayerArgs,
}

#[derive(clap::Args)]
pub(super) struct ExecuteArgs {
    /// Log the solver's stdout and stderr
    #[arg(long)]
    show_output: bool,

    /// Do not announce the start and end of the run
    #[arg(long)]
    quiet: bool,
}

#[derive(clap::Args)]
pub(super) struct ReadOutputArgs {
    /// Which output to read: h, k or l
    #[arg(long, default_value = "k")]
    kind: LoveNumberKind,

    /// Expect period, real and imaginary columns
    #[arg(long)]
    complex: bool,

    #[command(flatten)]
    format: FormatFlags,
}

#[derive(clap::Args)]
pub(super) struct RunArgs {
    #[command(flatten)]
    layers: LayerArgs,

    /// Log the solver's stdout and stderr
    #[arg(long)]
    show_output: bool,

    /// Do not announce the start and end of the run
    #[arg(long)]
    quiet: bool,

    #[command(flatten)]
    format: FormatFlags,
}

#[derive(clap::Args)]
pub(super) struct SweepArgs {
    /// Core radius in metres
    #[arg(long)]
    core_radius: f64,

    /// Envelope radii in metres, one solver run each
    #[arg(long = "atmosphere-radius", value_delimiter = ',', required = true)]
    atmosphere_radii: Vec<f64>,

    /// Envelope and core densities in kg/m^3
    #[arg(long = "density", value_delimiter = ',', required = true, allow_negative_numbers = true)]
    densities: Vec<f64>,

    /// Envelope and core rigidities in Pa
    #[arg(long = "rigidity", value_delimiter = ',', required = true, allow_negative_numbers = true)]
    rigidities: Vec<f64>,

    /// Envelope and core viscosities in Pa.s
    #[arg(long = "viscosity", value_delimiter = ',', required = true, allow_negative_numbers = true)]
    viscosities: Vec<f64>,

    /// Render results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Default)]
pub(super) struct FormatFlags {
    /// Reject output lines with unexpected column counts and empty outputs
    #[arg(long)]
    strict: bool,

    /// Render results as JSON
    #[arg(long)]
    json: bool,
}

impl FormatFlags {
    fn parse_policy(&self) -> ParsePolicy {
        if self.strict {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }
}

fn run_options(show_output: bool, quiet: bool, policy: ParsePolicy) -> RunOptions {
    RunOptions {
        show_output,
        show_start_stop: !quiet,
        parse_policy: policy,
    }
}

pub(super) fn run_set_param_command(paths: &AlmaPaths, args: SetParamArgs) -> Result<i32, CliError> {
    change_param(&args.name, &args.value, &paths.config_file, &paths.parameter_file)?;
    println!(
        "Set {} = {} in '{}'.",
        args.name,
        args.value,
        paths.config_file.display()
    );
    Ok(0)
}

pub(super) fn run_write_model_command(
    paths: &AlmaPaths,
    args: WriteModelArgs,
) -> Result<i32, CliError> {
    let columns = args.layers.into_columns();
    change_model_file(
        &columns.radii,
        &columns.densities,
        &columns.rigidities,
        &columns.viscosities,
        &columns.rheologies,
        &paths.model_file,
    )?;
    println!("Model file written to '{}'.", paths.model_file.display());
    Ok(0)
}

pub(super) fn run_execute_command(paths: &AlmaPaths, args: ExecuteArgs) -> Result<i32, CliError> {
    let options = run_options(args.show_output, args.quiet, ParsePolicy::default());
    let outcome = execute_alma(paths, &options, &ProcessSolver)?;
    outcome.into_result()?;
    Ok(0)
}

pub(super) fn run_read_output_command(
    paths: &AlmaPaths,
    args: ReadOutputArgs,
) -> Result<i32, CliError> {
    let series = read_love_numbers(paths, args.kind, args.complex, args.format.parse_policy())?;
    print!("{}", render_series(&series, args.format.json)?);
    Ok(0)
}

pub(super) fn run_run_command(paths: AlmaPaths, args: RunArgs) -> Result<i32, CliError> {
    let options = run_options(args.show_output, args.quiet, args.format.parse_policy());
    let input = model_input_from_columns(args.layers.into_columns());
    let series = AlmaSession::new(paths).run_alma(input, &options)?;
    print!("{}", render_series(&series, args.format.json)?);
    Ok(0)
}

pub(super) fn run_sweep_command(paths: AlmaPaths, args: SweepArgs) -> Result<i32, CliError> {
    let k2 = AlmaSession::new(paths).get_k2_vs_radius(
        args.core_radius,
        &args.atmosphere_radii,
        &args.densities,
        &args.rigidities,
        &args.viscosities,
    )?;
    print!("{}", render_sweep(&args.atmosphere_radii, &k2, args.json)?);
    Ok(0)
}
