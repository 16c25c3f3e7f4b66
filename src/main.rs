//! Cultivar CLI - runs the decision client against an engine over stdio.

// Allow print in the CLI binary for pre-logging startup errors
#![allow(clippy::print_stderr)]

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cultivar::TransportError;
use cultivar::catalog::{CropCatalog, ItemType, UpgradeType};
use cultivar::policy::{FocusRule, PolicyConfig, StrategyPolicy};
use cultivar::protocol::{Loadout, run_match};
use cultivar::transport::JsonLink;

/// Exit status for a failed engine exchange.
const EXIT_TRANSPORT: u8 = 2;

/// Item choice (CLI mirror of the catalog enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ItemArg {
    /// No item.
    None,
    /// Extends move range for a stretch of turns.
    CoffeeThermos,
    /// Delivers a harvest to the Green Grocer remotely.
    DeliveryDrone,
    /// Waters nearby tiles, accelerating growth.
    RainTotem,
    /// Boosts fertility under the user.
    FertilityIdol,
    /// Destroys crops around a target.
    Pesticide,
    /// Blocks the opponent from harvesting nearby.
    Scarecrow,
}

impl From<ItemArg> for ItemType {
    fn from(arg: ItemArg) -> Self {
        match arg {
            ItemArg::None => ItemType::None,
            ItemArg::CoffeeThermos => ItemType::CoffeeThermos,
            ItemArg::DeliveryDrone => ItemType::DeliveryDrone,
            ItemArg::RainTotem => ItemType::RainTotem,
            ItemArg::FertilityIdol => ItemType::FertilityIdol,
            ItemArg::Pesticide => ItemType::Pesticide,
            ItemArg::Scarecrow => ItemType::Scarecrow,
        }
    }
}

/// Upgrade choice (CLI mirror of the catalog enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UpgradeArg {
    /// No upgrade.
    None,
    /// Larger move radius.
    LongerLegs,
    /// Larger harvest radius.
    LongerScythe,
    /// Larger plant radius.
    SeedAPult,
    /// Carry more harvested goods.
    BiggerMuscles,
}

impl From<UpgradeArg> for UpgradeType {
    fn from(arg: UpgradeArg) -> Self {
        match arg {
            UpgradeArg::None => UpgradeType::None,
            UpgradeArg::LongerLegs => UpgradeType::LongerLegs,
            UpgradeArg::LongerScythe => UpgradeType::LongerScythe,
            UpgradeArg::SeedAPult => UpgradeType::SeedAPult,
            UpgradeArg::BiggerMuscles => UpgradeType::BiggerMuscles,
        }
    }
}

/// Policy preset to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Farm all match with a money-tier crop focus.
    Farmer,
    /// Scout the opening, attack when the opponent is close.
    Raider,
}

/// Cultivar - decision client for the farming contest
#[derive(Parser, Debug)]
#[command(name = "cultivar")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Item to equip for the match
    #[arg(long, value_enum, default_value_t = ItemArg::None)]
    item: ItemArg,

    /// Upgrade to equip for the match
    #[arg(long, value_enum, default_value_t = UpgradeArg::None)]
    upgrade: UpgradeArg,

    /// Policy preset
    #[arg(long, value_enum, default_value_t = PresetArg::Farmer)]
    preset: PresetArg,

    /// Money threshold unlocking the premium crop
    #[arg(long)]
    premium_threshold: Option<u32>,

    /// Largest seed batch bought in one decision
    #[arg(long)]
    batch_cap: Option<u32>,

    /// Last turn on which buying seeds still pays off
    #[arg(long)]
    buy_cutoff: Option<u32>,

    /// Inner fertility band height (board constant)
    #[arg(long)]
    inner_band_height: Option<u16>,

    /// Outer fertility band height (board constant)
    #[arg(long)]
    outer_band_height: Option<u16>,

    /// JSON file replacing the built-in crop catalog
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

/// Apply CLI overrides on top of the chosen preset.
fn build_config(args: &Args) -> PolicyConfig {
    let mut config = match args.preset {
        PresetArg::Farmer => PolicyConfig::default(),
        PresetArg::Raider => PolicyConfig::raider(),
    };

    if let Some(value) = args.premium_threshold
        && let FocusRule::MoneyTiers { threshold, .. } = &mut config.focus
    {
        *threshold = value;
    }
    if let Some(value) = args.batch_cap {
        config.batch_cap = value;
    }
    if let Some(value) = args.buy_cutoff {
        config.buy_cutoff_turn = value;
    }
    if let Some(value) = args.inner_band_height {
        config.band.inner_height = value;
    }
    if let Some(value) = args.outer_band_height {
        config.band.outer_height = value;
    }

    config
}

/// Load the crop catalog, from a file when one is given.
fn load_catalog(path: Option<&Path>) -> Result<CropCatalog, String> {
    let Some(path) = path else {
        return Ok(CropCatalog::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    CropCatalog::from_json(&text).map_err(|e| format!("bad catalog {}: {e}", path.display()))
}

/// Route logs to stderr; stdout belongs to the engine.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_json);

    let catalog = match load_catalog(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let policy = StrategyPolicy::new(build_config(&args), catalog);
    let loadout = Loadout {
        item: args.item.into(),
        upgrade: args.upgrade.into(),
    };

    let mut link = JsonLink::stdio();
    match run_match(&mut link, &policy, loadout) {
        TransportError::Closed => info!("engine hung up, match over"),
        e => error!(error = %e, "transport failure"),
    }
    ExitCode::from(EXIT_TRANSPORT)
}
