//! `rota` CLI — validate, search, and book theatre slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Check one explicit slot
//! rota validate --surgeon S001 --theatre T001 --operation OP001 \
//!     --start 2026-03-02T09:00
//!
//! # Earliest free slot in a window, 30-minute candidate steps
//! rota asap --surgeon S001 --theatre T001 --operation OP001 \
//!     --from 2026-03-02T08:00 --to 2026-03-04T08:00 --step 30
//!
//! # Decide and persist on approval
//! rota book --surgeon S001 --theatre T001 --operation OP001 \
//!     --patient P001 --start 2026-03-02T09:00
//!
//! # List persisted bookings
//! rota bookings
//!
//! # Rank evidence chunks against a query
//! rota evidence --query "which theatre has an arthroscope"
//! ```
//!
//! Decisions print as pretty JSON. A rejection is a decision, not a process
//! failure: the exit code stays 0 and the reasons are in the output. I/O and
//! unknown-identifier problems exit non-zero.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rota_engine::{decide_asap, decide_fixed, timefmt, Decision};
use rota_evidence::EvidenceIndex;
use rota_records::{
    build_chunks, next_booking_id, BookingRecord, FactBase, RecordScreen, Registry, Store,
};

#[derive(Parser)]
#[command(name = "rota", version, about = "Theatre scheduling CLI")]
struct Cli {
    /// Directory holding the record files
    #[arg(long, default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// The (surgeon, theatre, operation) triple every decision needs.
#[derive(Args)]
struct RequestArgs {
    /// Surgeon id (e.g. S001)
    #[arg(long)]
    surgeon: String,
    /// Theatre id (e.g. T001)
    #[arg(long)]
    theatre: String,
    /// Operation id (e.g. OP001); the operation record sets the duration
    #[arg(long)]
    operation: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one explicit start time, reporting every violation
    Validate {
        #[command(flatten)]
        request: RequestArgs,
        /// Proposed start, e.g. 2026-03-02T09:00
        #[arg(long, value_parser = parse_local_arg)]
        start: NaiveDateTime,
    },
    /// Find the earliest free slot in a search window
    Asap {
        #[command(flatten)]
        request: RequestArgs,
        /// Window start
        #[arg(long, value_parser = parse_local_arg)]
        from: NaiveDateTime,
        /// Window end
        #[arg(long, value_parser = parse_local_arg)]
        to: NaiveDateTime,
        /// Candidate spacing in minutes
        #[arg(long, default_value_t = 30)]
        step: u32,
    },
    /// Decide and, on approval, append the booking to bookings.json
    Book {
        #[command(flatten)]
        request: RequestArgs,
        /// Patient id (e.g. P001)
        #[arg(long)]
        patient: String,
        /// Fixed start; omit to search with --from/--to
        #[arg(long, value_parser = parse_local_arg, conflicts_with_all = ["from", "to"])]
        start: Option<NaiveDateTime>,
        /// Window start for an ASAP search
        #[arg(long, value_parser = parse_local_arg, requires = "to")]
        from: Option<NaiveDateTime>,
        /// Window end for an ASAP search
        #[arg(long, value_parser = parse_local_arg, requires = "from")]
        to: Option<NaiveDateTime>,
        /// Candidate spacing in minutes (ASAP search only)
        #[arg(long, default_value_t = 30)]
        step: u32,
    },
    /// List the persisted bookings
    Bookings,
    /// Rank evidence chunks against a free-text query
    Evidence {
        /// Free-text query
        #[arg(long)]
        query: String,
        /// How many hits to show
        #[arg(short = 'k', long = "top", default_value_t = 6)]
        top: usize,
    },
}

/// Either one explicit start or a stepped search window.
enum Mode {
    Fixed(NaiveDateTime),
    Window {
        from: NaiveDateTime,
        to: NaiveDateTime,
        step: u32,
    },
}

fn parse_local_arg(s: &str) -> std::result::Result<NaiveDateTime, String> {
    timefmt::parse_local(s)
        .map_err(|_| format!("expected a local date-time like 2026-03-02T09:00, got '{s}'"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = Store::new(&cli.data_dir);

    match cli.command {
        Commands::Validate { request, start } => {
            let registry = store.load()?;
            let facts = FactBase::load_optional(store.data_dir())?;
            let decision = decide(&registry, &facts, &request, Mode::Fixed(start))?;
            print_decision(&decision)?;
        }
        Commands::Asap {
            request,
            from,
            to,
            step,
        } => {
            let registry = store.load()?;
            let facts = FactBase::load_optional(store.data_dir())?;
            let decision = decide(&registry, &facts, &request, Mode::Window { from, to, step })?;
            print_decision(&decision)?;
        }
        Commands::Book {
            request,
            patient,
            start,
            from,
            to,
            step,
        } => {
            let mode = match (start, from, to) {
                (Some(start), None, None) => Mode::Fixed(start),
                (None, Some(from), Some(to)) => Mode::Window { from, to, step },
                _ => bail!("provide either --start or both --from and --to"),
            };

            let registry = store.load()?;
            let facts = FactBase::load_optional(store.data_dir())?;
            let decision = decide(&registry, &facts, &request, mode)?;

            match decision.slot() {
                Some(slot) => {
                    let patient = registry.patient(&patient)?;
                    let surgeon = registry.surgeon(&request.surgeon)?;
                    let theatre = registry.theatre(&request.theatre)?;
                    let operation = registry.operation(&request.operation)?;

                    let record = BookingRecord {
                        booking_id: next_booking_id(&registry.bookings),
                        patient_id: patient.patient_id.clone(),
                        patient_name: patient.name.clone(),
                        operation_id: operation.operation_id.clone(),
                        operation_name: operation.name.clone(),
                        surgeon_id: surgeon.surgeon_id.clone(),
                        surgeon_name: surgeon.name.clone(),
                        theatre_id: theatre.theatre_id.clone(),
                        theatre_name: theatre.name.clone(),
                        start_time: slot.start,
                        end_time: slot.end,
                    };
                    let saved = store.append_booking(record)?;
                    info!(booking_id = %saved.booking_id, "booking saved");

                    println!("Approved and saved to bookings.json");
                    println!("{}", serde_json::to_string_pretty(&saved)?);
                }
                None => print_decision(&decision)?,
            }
        }
        Commands::Bookings => {
            let registry = store.load()?;
            println!("Total bookings: {}", registry.bookings.len());
            for b in &registry.bookings {
                println!(
                    "{}  {} -> {}  {}  {}  {} in {}",
                    b.booking_id,
                    timefmt::format_local(&b.start_time),
                    timefmt::format_local(&b.end_time),
                    b.operation_name,
                    b.patient_name,
                    b.surgeon_name,
                    b.theatre_name,
                );
            }
        }
        Commands::Evidence { query, top } => {
            let registry = store.load()?;
            let policies = read_policies(&store)?;
            let chunks = build_chunks(&registry, policies.as_deref());
            let index = EvidenceIndex::build(chunks);

            for hit in index.search(&query, top) {
                println!("{:.3}  {}  {}", hit.score, hit.chunk.chunk_id, hit.chunk.text);
            }
        }
    }

    Ok(())
}

/// Resolve the request against the records and run the screened decision.
fn decide(
    registry: &Registry,
    facts: &FactBase,
    request: &RequestArgs,
    mode: Mode,
) -> Result<Decision> {
    let surgeon = registry.surgeon(&request.surgeon)?.resource();
    let theatre = registry.theatre(&request.theatre)?.resource();
    let operation = registry.operation(&request.operation)?;
    let bookings = registry.engine_bookings();
    let screen = RecordScreen::with_facts(registry, facts);

    let decision = match mode {
        Mode::Fixed(start) => decide_fixed(
            &screen,
            &operation.operation_id,
            start,
            operation.duration_minutes,
            &surgeon,
            &theatre,
            &bookings,
        ),
        Mode::Window { from, to, step } => decide_asap(
            &screen,
            &operation.operation_id,
            from,
            to,
            step,
            operation.duration_minutes,
            &surgeon,
            &theatre,
            &bookings,
        ),
    };

    Ok(decision)
}

fn print_decision(decision: &Decision) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(decision).context("failed to render decision")?
    );
    Ok(())
}

/// `policies.txt` in the data directory, if present.
fn read_policies(store: &Store) -> Result<Option<String>> {
    let path = store.data_dir().join("policies.txt");
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Some(text))
}
