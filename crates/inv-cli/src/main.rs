mod output;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use inv_api::HttpServerConfig;
use inv_core::analysis::{run_dc, run_tran, AnalysisKind};
use inv_core::checker::{check_deck, check_parameters, check_results, Status};
use inv_core::deck::generate_deck;
use inv_core::params::validate;
use inv_core::psf::{validate_precision, write_psf_dc, write_psf_tran};
use inv_core::{output as csv, DeviceParameters};

/// CMOS inverter design lab
#[derive(Parser)]
#[command(name = "invlab", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Switching threshold, noise margins and the VTC
    Dc(RunArgs),
    /// Propagation delays and the transient waveform
    Tran(RunArgs),
    /// Print the SPICE deck for the given parameters
    Deck {
        #[command(flatten)]
        params: ParamArgs,
        /// Deck flavour: dc or tran
        #[arg(short, long, default_value = "dc")]
        analysis: AnalysisKind,
        /// Write the deck to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a deck file, or the generated deck when no file is given
    Check {
        file: Option<PathBuf>,
        #[command(flatten)]
        params: ParamArgs,
        /// Deck flavour to generate when no file is given
        #[arg(short, long, default_value = "dc")]
        analysis: AnalysisKind,
        #[arg(long)]
        json: bool,
    },
    /// Report parameters outside the recommended ranges
    Params {
        #[command(flatten)]
        params: ParamArgs,
        #[arg(long)]
        json: bool,
    },
    /// Serve the JSON API for the browser front end
    Serve {
        #[arg(long, env = "INVLAB_BIND", default_value = inv_api::http::DEFAULT_BIND_ADDR)]
        bind: String,
    },
}

#[derive(Args, Clone)]
struct ParamArgs {
    /// Supply voltage [V]
    #[arg(long, default_value_t = 5.0)]
    vdd: f64,
    /// PMOS width [um]
    #[arg(long, default_value_t = 2.0)]
    wp: f64,
    /// NMOS width [um]
    #[arg(long, default_value_t = 1.0)]
    wn: f64,
    /// Channel length [um]
    #[arg(long, default_value_t = 0.18)]
    length: f64,
}

impl ParamArgs {
    fn to_params(&self) -> DeviceParameters {
        DeviceParameters::new(self.vdd, self.wp, self.wn, self.length)
    }
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    params: ParamArgs,
    /// Write curves to a PSF text file
    #[arg(short = 'o', long)]
    psf: Option<PathBuf>,
    /// Write curves to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Digits after the decimal point in PSF output (1-15)
    #[arg(long, default_value_t = 6)]
    precision: usize,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = match err.downcast_ref::<inv_core::Error>() {
                Some(inv_core::Error::InvalidParameter { .. })
                | Some(inv_core::Error::ParameterTooLarge { .. })
                | Some(inv_core::Error::InvalidPrecision(_)) => 2,
                _ => 1,
            };
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Command::Dc(args) => {
            let params = checked_params(&args)?;
            let report = run_dc(&params);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_dc_report(&report);
                output::print_feedback("results", &check_results(&params));
            }
            if let Some(path) = &args.psf {
                write_file(path, |w| write_psf_dc(&report, w, args.precision))?;
            }
            if let Some(path) = &args.csv {
                write_file(path, |w| csv::write_dc_csv(&report, w))?;
            }
            Ok(0)
        }
        Command::Tran(args) => {
            let params = checked_params(&args)?;
            let report = run_tran(&params);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_tran_report(&report);
                output::print_feedback("results", &check_results(&params));
            }
            if let Some(path) = &args.psf {
                write_file(path, |w| write_psf_tran(&report, w, args.precision))?;
            }
            if let Some(path) = &args.csv {
                write_file(path, |w| csv::write_tran_csv(&report, w))?;
            }
            Ok(0)
        }
        Command::Deck {
            params,
            analysis,
            output,
        } => {
            let params = params.to_params();
            validate(&params)?;
            let generated = generate_deck(analysis, &params);
            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{}\n", generated.deck))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("deck written: {}", path.display());
                }
                None => println!("{}", generated.deck),
            }
            Ok(0)
        }
        Command::Check {
            file,
            params,
            analysis,
            json,
        } => {
            let text = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let params = params.to_params();
                    validate(&params)?;
                    generate_deck(analysis, &params).deck
                }
            };
            let feedback = check_deck(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&feedback)?);
            } else {
                output::print_feedback("deck", &feedback);
            }
            Ok(if feedback.status == Status::Error { 1 } else { 0 })
        }
        Command::Params { params, json } => {
            let params = params.to_params();
            validate(&params)?;
            let feedback = check_parameters(&params);
            if json {
                println!("{}", serde_json::to_string_pretty(&feedback)?);
            } else {
                output::print_feedback("parameters", &feedback);
            }
            Ok(0)
        }
        Command::Serve { bind } => {
            let config = HttpServerConfig { bind_addr: bind };
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime
                .block_on(inv_api::run(config))
                .map_err(anyhow::Error::msg)?;
            Ok(0)
        }
    }
}

fn checked_params(args: &RunArgs) -> anyhow::Result<DeviceParameters> {
    let params = args.params.to_params();
    validate(&params)?;
    validate_precision(args.precision)?;
    Ok(params)
}

fn write_file<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> inv_core::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "curves written");
    println!("written: {}", path.display());
    Ok(())
}
