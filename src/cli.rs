//! Command line interface of the `franchise` binary.

use std::{path::PathBuf, process::ExitCode};

use crate::{
    league::{
        check::check_depth_chart,
        export::{write_league, LeagueFormat},
        generate_league,
        load::read_league,
        LeagueOptions,
    },
    server::{
        config::Config,
        error::Error,
        model::app::AppState,
        router,
        service::{import::ImportService, verify::VerifyService},
        startup,
    },
};

#[derive(clap::Parser, Debug)]
#[clap(name = "franchise", version, about = "Football franchise roster store")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Apply migrations and serve the read API on BIND_ADDR
    Serve,
    /// Generate a league and write it to league files
    Generate(GenerateCommand),
    /// Import league files into the database
    Import(ImportCommand),
    /// Check that every depth chart jersey exists on its team in league files
    Check(CheckCommand),
    /// Print row counts, sample rosters and invalid depth chart rows from the database
    Verify,
    /// Apply migrations only
    Migrate,
}

/// Which file formats `generate` writes.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Both,
}

impl OutputFormat {
    fn league_formats(self) -> &'static [LeagueFormat] {
        match self {
            Self::Csv => &[LeagueFormat::Csv],
            Self::Json => &[LeagueFormat::Json],
            Self::Both => &[LeagueFormat::Csv, LeagueFormat::Json],
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct GenerateCommand {
    /// Output directory, created if missing
    #[clap(long)]
    out: PathBuf,
    /// Generator seed, DEFAULT_SEED when omitted
    #[clap(long)]
    seed: Option<u64>,
    #[clap(long, default_value_t = 32)]
    teams: usize,
    #[clap(long, default_value_t = 0)]
    free_agents: usize,
    #[clap(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ImportCommand {
    /// Directory holding teams, players and depth_chart files
    #[clap(long)]
    from: PathBuf,
    /// File format, detected from the directory when omitted
    #[clap(long, value_enum)]
    format: Option<LeagueFormat>,
    /// Skip rows that already exist instead of updating them
    #[clap(long)]
    no_upsert: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckCommand {
    #[clap(long)]
    path: PathBuf,
    #[clap(long, value_enum)]
    format: Option<LeagueFormat>,
}

/// Runs a parsed command.
///
/// # Returns
/// - `Ok(ExitCode::SUCCESS)` - Command completed
/// - `Ok(ExitCode::FAILURE)` - `check` or `verify` found inconsistencies
/// - `Err(Error)` - Command could not run
pub async fn run(cli: Cli, config: &Config) -> Result<ExitCode, Error> {
    match cli.command {
        Command::Serve => serve(config).await,
        Command::Generate(cmd) => generate(config, cmd),
        Command::Import(cmd) => import(config, cmd).await,
        Command::Check(cmd) => check(cmd),
        Command::Verify => verify(config).await,
        Command::Migrate => {
            startup::connect_to_database(config).await?;
            println!("Migrations applied");

            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(config: &Config) -> Result<ExitCode, Error> {
    let db = startup::connect_to_database(config).await?;

    let app = router::routes().with_state(AppState {
        db,
        version: config.app_version.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(ExitCode::SUCCESS)
}

fn generate(config: &Config, cmd: GenerateCommand) -> Result<ExitCode, Error> {
    let options = LeagueOptions {
        team_count: cmd.teams,
        free_agent_count: cmd.free_agents,
        ..LeagueOptions::default()
    };
    options.validate()?;

    let seed = cmd.seed.unwrap_or(config.default_seed);
    let league = generate_league(seed, &options);

    for format in cmd.format.league_formats() {
        write_league(&cmd.out, &league, *format)?;
    }

    tracing::info!(
        "Generated {} teams, {} players, {} depth chart rows with seed {} into {}",
        league.teams.len(),
        league.players.len(),
        league.depth_chart.len(),
        seed,
        cmd.out.display()
    );

    Ok(ExitCode::SUCCESS)
}

async fn import(config: &Config, cmd: ImportCommand) -> Result<ExitCode, Error> {
    let league = read_league(&cmd.from, cmd.format)?;
    let db = startup::connect_to_database(config).await?;

    let summary = ImportService::new(&db)
        .import_league(&league, !cmd.no_upsert)
        .await?;

    println!("Import complete ({})", summary);

    Ok(ExitCode::SUCCESS)
}

fn check(cmd: CheckCommand) -> Result<ExitCode, Error> {
    let league = read_league(&cmd.path, cmd.format)?;
    let mismatches = check_depth_chart(&league);

    if mismatches.is_empty() {
        println!(
            "OK: {} depth chart rows reference players on their team",
            league.depth_chart.len()
        );

        return Ok(ExitCode::SUCCESS);
    }

    for mismatch in &mismatches {
        println!("{}", mismatch);
    }
    println!("{} mismatches", mismatches.len());

    Ok(ExitCode::FAILURE)
}

async fn verify(config: &Config) -> Result<ExitCode, Error> {
    let db = startup::connect_to_database(config).await?;
    let report = VerifyService::new(&db).verify().await?;

    println!("{}", report);

    if report.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
