//! Subcommand implementations.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, info};

use fleet_derive::{DeriveOptions, NormalizeOptions, derive};
use fleet_ingest::load_table;
use fleet_model::{PartCatalog, RuleBook, Snapshot, Vehicle};
use fleet_query::{
    CityFilter, ConditionFilter, PartFilter, VehicleQuery, aggregate, filter_history,
    filter_vehicles,
};

use crate::cache;
use crate::cli::{ConditionArg, InputArgs, PartsArgs, ReportArgs, ShowArgs};
use crate::render::{print_catalog, print_fleet_table, print_history, print_stats, print_vehicle};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let catalog = load_catalog(args.input.catalog.as_deref())?;
    let rules = RuleBook::builtin();
    let snapshot = load_snapshot(
        &args.input,
        &catalog,
        &rules,
        args.cache_dir.as_deref().filter(|_| !args.no_cache),
    )?;
    if !snapshot.has_data() {
        println!("No data: the roster is empty.");
        return Ok(());
    }

    let query = build_query(args, &catalog)?;
    let matched = filter_vehicles(&snapshot.vehicles, &query);
    let stats = aggregate(matched.iter().copied());

    if args.json {
        print_report_json(&snapshot, &matched, &stats)?;
        return Ok(());
    }
    print_stats(&stats);
    if matched.is_empty() {
        println!("No vehicles match the given filters.");
        return Ok(());
    }
    print_fleet_table(&matched, &catalog, &rules);
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let catalog = load_catalog(args.input.catalog.as_deref())?;
    let rules = RuleBook::builtin();
    let snapshot = load_snapshot(&args.input, &catalog, &rules, None)?;
    let Some(vehicle) = snapshot.find_vehicle(&args.license) else {
        bail!("no vehicle with license {:?} in the roster", args.license);
    };

    let category = match &args.part {
        Some(name) => Some(
            catalog
                .get(name)
                .with_context(|| unknown_part_message(name, &catalog))?,
        ),
        None => None,
    };
    let search = args.search.as_deref().unwrap_or("");
    let records = filter_history(&vehicle.history, search, category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(vehicle).context("serialize vehicle")?);
        return Ok(());
    }
    print_vehicle(vehicle, &catalog);
    println!();
    print_history(&records);
    Ok(())
}

pub fn run_parts(args: &PartsArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let rules = RuleBook::builtin();
    print_catalog(&catalog, &rules);
    Ok(())
}

/// Derive the snapshot, going through the cache when a directory is given.
fn load_snapshot(
    input: &InputArgs,
    catalog: &PartCatalog,
    rules: &RuleBook,
    cache_dir: Option<&Path>,
) -> Result<Snapshot> {
    let current_date = reference_date(input);
    let now = Utc::now();
    if let Some(dir) = cache_dir {
        if let Some(snapshot) = cache::load_fresh(dir, now, current_date) {
            info!(cache_dir = %dir.display(), "reusing cached snapshot");
            return Ok(snapshot);
        }
    }

    let schedule = load_table(&input.schedule)?;
    let history = load_table(&input.history)?;
    let options = DeriveOptions {
        normalize: NormalizeOptions {
            infer_thousands_scale: input.infer_thousands,
        },
    };
    let started = Instant::now();
    let snapshot = derive(&schedule, &history, catalog, rules, current_date, &options);
    info!(
        vehicles = snapshot.meta.total_vehicles,
        records = snapshot.meta.total_records,
        duration_ms = started.elapsed().as_millis(),
        "derivation complete"
    );

    if let Some(dir) = cache_dir {
        if let Err(error) = cache::store(dir, now, &snapshot) {
            debug!(%error, "snapshot cache not written");
        }
    }
    Ok(snapshot)
}

fn reference_date(input: &InputArgs) -> NaiveDate {
    input.as_of.unwrap_or_else(|| Local::now().date_naive())
}

fn load_catalog(path: Option<&Path>) -> Result<PartCatalog> {
    match path {
        Some(path) => PartCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(PartCatalog::builtin()),
    }
}

fn build_query(args: &ReportArgs, catalog: &PartCatalog) -> Result<VehicleQuery> {
    let part = match &args.part {
        Some(name) => {
            if catalog.get(name).is_none() {
                bail!("{}", unknown_part_message(name, catalog));
            }
            Some(PartFilter {
                part: name.clone(),
                condition: condition_filter(args.part_condition),
            })
        }
        None => None,
    };
    Ok(VehicleQuery {
        search: args.search.clone().unwrap_or_default(),
        city: match &args.city {
            Some(city) => CityFilter::Named(city.clone()),
            None => CityFilter::All,
        },
        condition: condition_filter(args.condition),
        part,
    })
}

fn condition_filter(arg: Option<ConditionArg>) -> ConditionFilter {
    match arg {
        Some(ConditionArg::Good) => ConditionFilter::Only(fleet_model::Condition::Good),
        Some(ConditionArg::Warning) => ConditionFilter::Only(fleet_model::Condition::Warning),
        Some(ConditionArg::Critical) => ConditionFilter::Only(fleet_model::Condition::Critical),
        None => ConditionFilter::All,
    }
}

fn unknown_part_message(name: &str, catalog: &PartCatalog) -> String {
    let known: Vec<&str> = catalog.names().collect();
    format!("unknown part {:?}; known parts: {}", name, known.join(", "))
}

fn print_report_json(
    snapshot: &Snapshot,
    matched: &[&Vehicle],
    stats: &fleet_query::FleetStats,
) -> Result<()> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        current_date: NaiveDate,
        stats: &'a fleet_query::FleetStats,
        vehicles: &'a [&'a Vehicle],
    }
    let report = Report {
        current_date: snapshot.current_date,
        stats,
        vehicles: matched,
    };
    println!("{}", serde_json::to_string_pretty(&report).context("serialize report")?);
    Ok(())
}
