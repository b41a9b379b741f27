mod config;
mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use input::{EventFile, StandingsFile, load_json};
use scoring::dto::{RoundInput, WorkoutDefinition};
use scoring::models::{
    MeasurementUnit, ScoreType, ScoringConfig, SortDirection, TiebreakScheme, WorkoutScheme,
};
use scoring::services::{
    ConfigValidator, ScoreParser, SortKey, apply_tiebreakers, calculate_event_points,
    compute_sort_key, encode_rounds, extract_from_sort_key, get_scoring_algorithm_name,
    parse_secondary, parse_time, rank_standings,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scorer")]
#[command(about = "Workout score parsing, ranking and points", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one raw score entry and print its canonical form and sort key
    Parse {
        raw: String,

        #[arg(long)]
        scheme: WorkoutScheme,

        #[arg(long, value_parser = parse_duration)]
        time_cap: Option<i64>,

        #[arg(long)]
        tiebreak_scheme: Option<TiebreakScheme>,

        #[arg(long)]
        tiebreak: Option<String>,

        /// Reps completed at the time cap
        #[arg(long)]
        secondary: Option<String>,

        #[arg(long)]
        reps_per_round: Option<u32>,

        #[arg(long)]
        rounds_to_score: Option<u32>,

        #[arg(long)]
        unit: Option<MeasurementUnit>,
    },
    /// Parse several rounds and aggregate them into one value
    Rounds {
        #[arg(required = true)]
        rounds: Vec<String>,

        #[arg(long)]
        scheme: WorkoutScheme,

        #[arg(long)]
        method: Option<ScoreType>,

        #[arg(long)]
        unit: Option<MeasurementUnit>,
    },
    /// Rank an event file and award points
    Points {
        file: PathBuf,

        /// Scoring configuration, overriding the one in the event file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Order overall standings with tiebreakers
    Standings { file: PathBuf },
    /// Decode a stored sort key
    DecodeKey {
        key: String,

        #[arg(long, default_value = "asc")]
        direction: SortDirection,
    },
    /// Validate a scoring configuration file
    ValidateConfig { file: PathBuf },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("scorer={},scoring={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let pretty = cli.pretty || config.pretty;

    match cli.command {
        Commands::Parse {
            raw,
            scheme,
            time_cap,
            tiebreak_scheme,
            tiebreak,
            secondary,
            reps_per_round,
            rounds_to_score,
            unit,
        } => {
            let definition = WorkoutDefinition {
                scheme,
                score_type: None,
                time_cap_ms: time_cap,
                tiebreak_scheme,
                rounds_to_score,
                reps_per_round,
                unit,
            };
            handle_parse(
                definition,
                &raw,
                secondary.as_deref(),
                tiebreak.as_deref(),
                pretty,
            )?;
        }
        Commands::Rounds {
            rounds,
            scheme,
            method,
            unit,
        } => {
            let inputs: Vec<RoundInput> = rounds.iter().map(RoundInput::new).collect();
            let method = method.unwrap_or_else(|| ScoreType::default_for(scheme));
            let encoded = encode_rounds(&inputs, scheme, method, unit)?;
            if !encoded.skipped.is_empty() {
                tracing::warn!("Skipped {} unparseable round(s)", encoded.skipped.len());
            }
            emit(&encoded, pretty)?;
        }
        Commands::Points { file, config: path } => {
            let path = path.or(config.scoring_config);
            handle_points(&file, path.as_deref(), pretty)?;
        }
        Commands::Standings { file } => {
            tracing::info!("Loading standings from: {}", file.display());
            let standings: StandingsFile = load_json(&file)?;
            let entries = match &standings.config {
                Some(scoring_config) => rank_standings(&standings.athletes, scoring_config)?,
                None => apply_tiebreakers(&standings.athletes, &standings.tiebreaker)?,
            };
            emit(&entries, pretty)?;
        }
        Commands::DecodeKey { key, direction } => {
            let parts = extract_from_sort_key(&key, direction)?;
            emit(
                &json!({
                    "statusOrder": parts.status_order,
                    "status": parts.status(),
                    "value": parts.value,
                }),
                pretty,
            )?;
        }
        Commands::ValidateConfig { file } => {
            let scoring_config: ScoringConfig = load_json(&file)?;
            let report = ConfigValidator::validate(&scoring_config)?;
            report.log_warnings();
            tracing::info!("✓ Configuration is valid");
            emit(&report, pretty)?;
        }
    }

    Ok(())
}

fn handle_parse(
    definition: WorkoutDefinition,
    raw: &str,
    secondary: Option<&str>,
    tiebreak: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let parser = ScoreParser::new(definition);
    let primary = parser.parse(raw);
    let secondary = secondary.map(parse_secondary);
    let tiebreak = tiebreak.map(|value| parser.parse_tiebreak(value));

    if let Some(warning) = &primary.warning {
        tracing::warn!("{}", warning);
    }

    let score = parser.to_canonical_score(&primary, secondary.as_ref(), tiebreak.as_ref());
    let sort_key: Option<SortKey> = score.as_ref().map(compute_sort_key).transpose()?;

    emit(
        &json!({
            "result": primary,
            "score": score,
            "sortKey": sort_key,
        }),
        pretty,
    )
}

fn handle_points(file: &Path, config_path: Option<&Path>, pretty: bool) -> Result<()> {
    tracing::info!("Loading event from: {}", file.display());
    let event: EventFile = load_json(file)?;

    let scoring_config = match config_path {
        Some(path) => load_json(path)?,
        None => event.config.clone().unwrap_or_default(),
    };
    let report = ConfigValidator::validate(&scoring_config)?;
    report.log_warnings();

    tracing::info!(
        "Scoring {} athlete(s) in {} with {}",
        event.scores.len(),
        event.event_id,
        get_scoring_algorithm_name(&scoring_config)
    );

    let results = calculate_event_points(&event.event_id, &event.scores, event.scheme, &scoring_config)
        .with_context(|| format!("Cannot score event {}", event.event_id))?;

    let mut ranked: Vec<_> = results.into_values().collect();
    ranked.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.athlete_id.cmp(&b.athlete_id)));
    emit(&ranked, pretty)
}

fn parse_duration(value: &str) -> std::result::Result<i64, String> {
    parse_time(value).ok_or_else(|| format!("'{}' is not a time like 12:00", value))
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}
