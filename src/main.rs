use std::process::ExitCode;

use clap::Parser;
use openf1::OpenF1Client;
use tracing::{error, info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Lists the Grand Prix meetings OpenF1 has recorded for a season
#[derive(Parser, Debug)]
#[command(name = "openf1")]
#[command(version, about, long_about = None)]
struct Args {
    /// Season to list meetings for
    #[arg(default_value_t = 2023)]
    year: i32,
}

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::WARN);

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let Args { year } = Args::parse();
    dotenv::dotenv().ok();
    init_tracing();

    let client = match OpenF1Client::new() {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build client: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(base_url = %client.config().base_url, year, "fetching meetings");

    match client.get_meetings_for_year(year).await {
        Ok(meetings) => {
            for meeting in meetings {
                println!(
                    "{:>5}  {}  {:<28} {}",
                    meeting.meeting_key,
                    meeting.date_start.format("%Y-%m-%d"),
                    meeting.meeting_name,
                    meeting.location
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_defaults_to_2023() {
        let args = Args::try_parse_from(["openf1"]).unwrap();
        assert_eq!(args.year, 2023);
    }

    #[test]
    fn year_is_positional() {
        let args = Args::try_parse_from(["openf1", "2024"]).unwrap();
        assert_eq!(args.year, 2024);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        assert!(Args::try_parse_from(["openf1", "next"]).is_err());
    }

    #[test]
    fn help_and_version_flags_are_recognised() {
        let help = Args::try_parse_from(["openf1", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        let version = Args::try_parse_from(["openf1", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
