use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use zf_app::{
    AppError, AppResult, GasInputs, NewtonConfig, PressureBasis, PseudoCriticalMethod,
    ZChartDefinition, ZCurve, ZModel, ZOutput, ZRequest, calc, calc_report, compute_chart,
    load_request,
};

#[derive(Parser)]
#[command(name = "zf-cli")]
#[command(about = "Natural-gas compressibility (Z) factor calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Z for one gas and state
    Z(ZArgs),
    /// Compute Z for a request stored as YAML
    Request {
        /// Path to the request YAML file
        path: PathBuf,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tabulate Z(Pr) curves for a set of reduced temperatures
    Chart {
        /// Z-factor model
        #[arg(long, default_value = "DAK")]
        model: ZModel,
        /// Reduced temperatures (comma separated); defaults to the standard grid
        #[arg(long, value_delimiter = ',')]
        tr: Vec<f64>,
        /// Upper end of the reduced-pressure axis
        #[arg(long, default_value_t = 8.0)]
        pr_max: f64,
        /// Number of reduced-pressure points
        #[arg(long, default_value_t = 81)]
        points: usize,
        /// Output format
        #[arg(long, value_enum, default_value_t = ChartFormat::Csv)]
        format: ChartFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartFormat {
    Csv,
    Json,
}

#[derive(clap::Args)]
struct ZArgs {
    /// Specific gravity
    #[arg(long)]
    sg: Option<f64>,
    /// Gas temperature, °F
    #[arg(long = "temperature", short = 'T')]
    t: Option<f64>,
    /// Gas pressure, psia (psig with --gauge)
    #[arg(long = "pressure", short = 'P')]
    p: Option<f64>,
    /// Pressure is gauge rather than absolute
    #[arg(long)]
    gauge: bool,
    /// Mole fraction of H2S
    #[arg(long)]
    h2s: Option<f64>,
    /// Mole fraction of CO2
    #[arg(long)]
    co2: Option<f64>,
    /// Mole fraction of N2 (piper only)
    #[arg(long)]
    n2: Option<f64>,
    /// Pseudo-critical temperature override, °R
    #[arg(long)]
    tpc: Option<f64>,
    /// Pseudo-critical pressure override, psia
    #[arg(long)]
    ppc: Option<f64>,
    /// Acid-gas temperature correction override, °R (sutton only)
    #[arg(long)]
    e_correction: Option<f64>,
    /// Corrected pseudo-critical temperature override, °R (sutton only)
    #[arg(long)]
    tpc_corrected: Option<f64>,
    /// Corrected pseudo-critical pressure override, psia (sutton only)
    #[arg(long)]
    ppc_corrected: Option<f64>,
    /// J parameter override (piper only)
    #[arg(long)]
    j: Option<f64>,
    /// K parameter override (piper only)
    #[arg(long)]
    k: Option<f64>,
    /// Pseudo-reduced temperature
    #[arg(long)]
    tr: Option<f64>,
    /// Pseudo-reduced pressure
    #[arg(long)]
    pr: Option<f64>,
    /// Pseudo-critical method
    #[arg(long, default_value = "piper")]
    method: PseudoCriticalMethod,
    /// Z-factor model
    #[arg(long, default_value = "DAK")]
    model: ZModel,
    /// Initial guess for implicit models
    #[arg(long)]
    guess: Option<f64>,
    /// Newton iteration cap per initial guess
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Do not seed implicit models with the explicit correlation
    #[arg(long)]
    no_smart_guess: bool,
    /// Prefer overrides over conflicting raw inputs
    #[arg(long)]
    ignore_conflict: bool,
    /// Print every intermediate property as JSON
    #[arg(long)]
    all: bool,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl ZArgs {
    fn to_request(&self) -> ZRequest {
        let gas = GasInputs {
            sg: self.sg,
            t: self.t,
            p: self.p,
            pressure_basis: if self.gauge {
                PressureBasis::Gauge
            } else {
                PressureBasis::Absolute
            },
            h2s: self.h2s,
            co2: self.co2,
            n2: self.n2,
            tpc: self.tpc,
            ppc: self.ppc,
            e_correction: self.e_correction,
            tpc_corrected: self.tpc_corrected,
            ppc_corrected: self.ppc_corrected,
            j: self.j,
            k: self.k,
            tr: self.tr,
            pr: self.pr,
        };
        ZRequest {
            gas,
            method: self.method,
            model: self.model,
            guess: self.guess,
            newton: self.max_iterations.map(|max_iterations| NewtonConfig {
                max_iterations,
                ..NewtonConfig::default()
            }),
            smart_guess: self.no_smart_guess.then_some(false),
            return_all_properties: self.all,
            ignore_conflict: self.ignore_conflict,
            ..ZRequest::default()
        }
    }
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Z(args) => cmd_z(&args.to_request(), args.json),
        Commands::Request { path, json } => {
            let request = load_request(&path)?;
            tracing::debug!(path = %path.display(), model = %request.model, "loaded request");
            cmd_z(&request, json)
        }
        Commands::Chart {
            model,
            tr,
            pr_max,
            points,
            format,
            output,
        } => {
            let mut definition = ZChartDefinition {
                model,
                pr_end: pr_max,
                pr_points: points,
                ..ZChartDefinition::default()
            };
            if !tr.is_empty() {
                definition.tr_values = tr;
            }
            cmd_chart(&definition, format, output.as_deref())
        }
    }
}

fn cmd_z(request: &ZRequest, json: bool) -> AppResult<()> {
    if json {
        let report = calc_report(request)?;
        println!("{}", to_json(&report)?);
        return Ok(());
    }
    match calc(request)? {
        ZOutput::Z(z) => println!("{z}"),
        properties @ ZOutput::Properties(_) => println!("{}", to_json(&properties)?),
    }
    Ok(())
}

fn cmd_chart(definition: &ZChartDefinition, format: ChartFormat, output: Option<&Path>) -> AppResult<()> {
    let curves = compute_chart(definition)?;
    let text = match format {
        ChartFormat::Csv => chart_csv(&curves),
        ChartFormat::Json => to_json(&curves)? + "\n",
    };

    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!("✓ Wrote {} curves to {}", curves.len(), path.display());
    } else {
        print!("{text}");
    }
    Ok(())
}

fn chart_csv(curves: &[ZCurve]) -> String {
    let mut csv = String::from("pr");
    for curve in curves {
        csv.push_str(&format!(",tr={}", curve.tr));
    }
    csv.push('\n');

    let rows = curves.first().map_or(0, |c| c.pr.len());
    for i in 0..rows {
        csv.push_str(&format!("{}", curves[0].pr[i]));
        for curve in curves {
            match curve.z[i] {
                Some(z) => csv.push_str(&format!(",{z}")),
                None => csv.push(','),
            }
        }
        csv.push('\n');
    }
    csv
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Output(e.to_string()))
}
