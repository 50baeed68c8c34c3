// Radar layout engine
//
// Converts a flat list of classified blips into non-overlapping chart
// coordinates, projects them onto drawable primitives, and tracks the
// interactive view transform on top of them.
//
// Data flows one way per pass:
//   blips -> geometry -> placement -> relax -> RadarLayout -> scene
// The view transform lives beside the layout and never feeds back into it.

pub mod blip;
pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod relax;
pub mod scene;
pub mod spatial_grid;
pub mod view;

pub use blip::{validate_batch, Blip, Quadrant, RawBlip, Ring, ValidatedBatch, ValidationPolicy};
pub use config::{LayoutConfig, NeighborSearch};
pub use error::{RadarError, Result};
pub use placement::Placement;

use rand::Rng;

/// A blip together with its final placement
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlip {
    pub blip: Blip,
    pub placement: Placement,
}

/// Result of one full layout pass
///
/// Computed fresh whenever the blip set or the configuration changes and
/// never cached across passes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarLayout {
    pub blips: Vec<PlacedBlip>,
}

impl RadarLayout {
    pub fn is_empty(&self) -> bool {
        self.blips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blips.len()
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.blips.iter().map(|b| b.placement).collect()
    }

    /// Find a placed blip by store id
    pub fn find_by_id(&self, id: &str) -> Option<&PlacedBlip> {
        self.blips.iter().find(|b| b.blip.id.as_deref() == Some(id))
    }
}

/// Run the whole layout pipeline for one snapshot
///
/// Mapping and initial placement for every blip happen first, so an
/// `InvalidCategory` is reported before any relaxation work and no partial
/// layout is ever returned. An empty snapshot yields an empty layout.
///
/// # Arguments
/// * `blips` - Snapshot to lay out, treated as new on every call
/// * `config` - Layout configuration
/// * `rng` - Seeded random source for the initial jitter
///
/// # Errors
/// `InvalidConfig` for an unusable configuration, `InvalidCategory` when a
/// blip's quadrant or ring has no sector or band.
pub fn compute_layout<R: Rng + ?Sized>(
    blips: &[Blip],
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<RadarLayout> {
    config.validate()?;

    if blips.is_empty() {
        return Ok(RadarLayout::default());
    }

    let initial = blips
        .iter()
        .map(|b| placement::initial_placement(b.quadrant, b.ring, config, rng))
        .collect::<Result<Vec<_>>>()?;

    let relaxed = relax::relax(&initial, config);

    tracing::debug!(
        blips = blips.len(),
        iterations = config.iterations,
        search = ?config.neighbor_search,
        "Computed radar layout"
    );

    Ok(RadarLayout {
        blips: blips
            .iter()
            .cloned()
            .zip(relaxed)
            .map(|(blip, placement)| PlacedBlip { blip, placement })
            .collect(),
    })
}
