// Command-line options and headless layout dump

use crate::radar::{
    self, LayoutConfig, NeighborSearch, PlacedBlip, RadarLayout, ValidationPolicy,
};
use crate::store;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Seed used when `--seed` is not given
pub const DEFAULT_SEED: u64 = 42;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "radarscope",
    version,
    about = "Tech Radar viewer: lays out blips on a quadrant/ring chart in the terminal"
)]
pub struct Args {
    /// Blip snapshot (JSON array). Uses the bundled sample if omitted.
    #[arg(short = 'd', long = "data")]
    pub data: Option<PathBuf>,

    /// Seed for the initial placement jitter
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Reject the whole snapshot if any record is invalid
    #[arg(long = "strict")]
    pub strict: bool,

    /// Relaxation ticks per layout pass
    #[arg(long = "iterations", default_value_t = radar::config::DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Chart radius in world units
    #[arg(long = "radius", default_value_t = radar::config::DEFAULT_CHART_RADIUS)]
    pub radius: f64,

    /// Blip marker radius in world units
    #[arg(long = "item-radius", default_value_t = radar::config::DEFAULT_ITEM_RADIUS)]
    pub item_radius: f64,

    /// Neighbour search used by the relaxation
    #[arg(long = "spatial-index", value_enum, default_value = "brute-force")]
    pub spatial_index: SpatialIndex,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Print the computed layout as JSON and exit
    #[arg(long = "dump-layout")]
    pub dump_layout: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialIndex {
    BruteForce,
    Grid,
}

impl Args {
    /// Layout configuration with command-line overrides applied
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            chart_radius: self.radius,
            item_radius: self.item_radius,
            iterations: self.iterations,
            neighbor_search: match self.spatial_index {
                SpatialIndex::BruteForce => NeighborSearch::BruteForce,
                SpatialIndex::Grid => NeighborSearch::Grid,
            },
            ..LayoutConfig::default()
        }
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        if self.strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }
}

// ============================================================================
// Layout dump
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub chart_radius: f64,
    pub item_radius: f64,
    pub seed: u64,
    pub rejected: usize,
    pub blips: Vec<BlipDump>,
}

#[derive(Debug, Serialize)]
pub struct BlipDump {
    pub id: Option<String>,
    pub name: String,
    pub quadrant: String,
    pub ring: String,
    pub sector: usize,
    pub band: usize,
    pub x: f64,
    pub y: f64,
}

impl From<&PlacedBlip> for BlipDump {
    fn from(placed: &PlacedBlip) -> Self {
        Self {
            id: placed.blip.id.clone(),
            name: placed.blip.name.clone(),
            quadrant: placed.blip.quadrant.label().to_string(),
            ring: placed.blip.ring.label().to_string(),
            sector: placed.placement.sector,
            band: placed.placement.band,
            x: placed.placement.x,
            y: placed.placement.y,
        }
    }
}

impl LayoutDump {
    pub fn from_layout(layout: &RadarLayout, config: &LayoutConfig, seed: u64, rejected: usize) -> Self {
        Self {
            chart_radius: config.chart_radius,
            item_radius: config.item_radius,
            seed,
            rejected,
            blips: layout.blips.iter().map(BlipDump::from).collect(),
        }
    }
}

/// Load, validate and lay out the snapshot, then write it as pretty JSON
pub fn write_layout_dump<W: Write>(args: &Args, out: W) -> Result<()> {
    let raws = store::load_or_sample(args.data.as_deref())?;
    let batch = radar::validate_batch(raws, args.validation_policy())?;
    let config = args.layout_config();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let layout = radar::compute_layout(&batch.blips, &config, &mut rng)?;

    let dump = LayoutDump::from_layout(&layout, &config, args.seed, batch.rejected.len());
    serde_json::to_writer_pretty(out, &dump)?;
    Ok(())
}
