#[macro_use]
extern crate log;

use anyhow::bail;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use fittrack::{OutputFormat, Package, demo_packages, process_packages};

#[derive(Parser)]
pub struct FitTrackCli {
    #[arg(env = "FITTRACK_FORMAT", long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: FitTrackCommand,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Summarize the built-in swim, run and walk readings
    ///
    Demo,
    ///
    /// Summarize one workout from positional sensor values
    ///
    Record {
        /// Activity tag: SWM, RUN or WLK
        tag: String,
        /// action, duration, weight[, height | pool length, lap count]
        #[arg(allow_negative_numbers = true)]
        args: Vec<f64>,
    },
    ///
    /// Summarize several workouts given as TAG:v1,v2,... packages
    ///
    Batch {
        #[arg(required = true)]
        packages: Vec<Package>,
    },
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = env_file {
        debug!("No .env loaded: {}", error);
    }

    let cli = FitTrackCli::parse();

    let packages = match cli.subcommand {
        FitTrackCommand::Demo => demo_packages(),
        FitTrackCommand::Record { tag, args } => vec![Package::new(tag, args)],
        FitTrackCommand::Batch { packages } => packages,
        FitTrackCommand::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut FitTrackCli::command(),
                "fittrack",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
    };

    let outcome = process_packages(&packages);
    for record in &outcome.records {
        match record {
            Ok(report) => println!("{}", cli.format.render(report)?),
            Err(failure) => error!("{}", failure),
        }
    }

    let failed = outcome.failure_count();
    info!(
        "Processed {} packages, {} failed",
        outcome.records.len(),
        failed
    );

    if failed > 0 {
        bail!("{} of {} packages failed", failed, outcome.records.len());
    }

    Ok(())
}
