mod logging;

use clap::{Parser, Subcommand};
use sichu_base::{
    BirthInfo, ChartConfig, DateValidation, Stem, branch_from_hour, four_pillars_report_with,
    ten_gods_table,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "sichu", version, about = "Four-pillar (四柱推命) chart CLI")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full chart report for a birth date and hour
    Chart {
        /// CE year (1900 or later)
        #[arg(long)]
        year: i32,
        /// Month (1-12)
        #[arg(long)]
        month: u32,
        /// Day of month (1-31)
        #[arg(long)]
        day: u32,
        /// Hour on the 24-hour clock (0-23)
        #[arg(long)]
        hour: u32,
        /// Reject days beyond the length of the month (e.g. Feb 30)
        #[arg(long)]
        strict: bool,
    },
    /// Ten-gods table for every stem relative to a day stem
    TenGods {
        /// Day stem index (0=甲 .. 9=癸)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..10))]
        day_stem: u8,
    },
    /// Hour branch for a clock hour
    HourBranch {
        /// Hour on the 24-hour clock (0-23)
        #[arg(long)]
        hour: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            hour,
            strict,
        } => {
            let validation = if strict {
                DateValidation::Strict
            } else {
                DateValidation::Lenient
            };
            let birth = BirthInfo::new(year, month, day, hour);
            info!(?birth, ?validation, "computing chart");
            match four_pillars_report_with(&birth, &ChartConfig::new(validation)) {
                Ok(report) => println!("{report}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::TenGods { day_stem } => {
            let day = Stem::from_cycle(day_stem as i64);
            println!("Day stem: {} ({})", day, day.name());
            for (stem, god) in ten_gods_table(day) {
                println!(
                    "  {} {:<4} {}{}  {} {}",
                    stem,
                    stem.name(),
                    stem.element().kanji(),
                    stem.polarity().kanji(),
                    god,
                    god.label()
                );
            }
        }

        Commands::HourBranch { hour } => match branch_from_hour(hour) {
            Some(branch) => {
                let (start, end) = branch.traditional_window();
                println!(
                    "{} ({}, {}) - {:02}:00-{:02}:00",
                    branch,
                    branch.name(),
                    branch.zodiac_animal(),
                    start,
                    end
                );
            }
            None => {
                eprintln!("Error: invalid hour: {hour} (expected 0-23)");
                std::process::exit(1);
            }
        },
    }
}
