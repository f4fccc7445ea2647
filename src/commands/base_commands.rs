use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report per-room and total occupancy over a date range
    Occupancy {
        /// Hotel YAML file
        #[arg(short, long)]
        input: String,
        /// Range start date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start_date: Option<String>,
        /// Range end date (YYYY-MM-DD), defaults to the later of start and today
        #[arg(short, long)]
        end_date: Option<String>,
    },
    /// List rooms that are free over a date range
    Available {
        /// Hotel YAML file
        #[arg(short, long)]
        input: String,
        /// Range start date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start_date: Option<String>,
        /// Range end date (YYYY-MM-DD), defaults to the later of start and today
        #[arg(short, long)]
        end_date: Option<String>,
        /// Also include rooms that are booked for only part of the range
        #[arg(short, long)]
        partial: bool,
    },
    /// Compute the fee for a booking
    Fee {
        /// Hotel YAML file
        #[arg(short, long)]
        input: String,
        /// Name of the booking to look up
        #[arg(short, long)]
        booking: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn parse_date_arg(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
