// Blip data model
//
// Closed quadrant/ring enumerations and the record type the layout engine
// consumes. Free-form strings from a snapshot are converted here, at the
// boundary, so nothing deeper in the pipeline ever sees an unknown category.

use super::error::{RadarError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Categories
// ============================================================================

/// Angular classification axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    Techniques,
    Tools,
    Platforms,
    LanguagesAndFrameworks,
}

impl Quadrant {
    /// All quadrants in their canonical order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Techniques,
        Quadrant::Tools,
        Quadrant::Platforms,
        Quadrant::LanguagesAndFrameworks,
    ];

    /// Display label, also the wire value in blip snapshots
    pub fn label(&self) -> &'static str {
        match self {
            Self::Techniques => "Techniques",
            Self::Tools => "Tools",
            Self::Platforms => "Platforms",
            Self::LanguagesAndFrameworks => "Languages & Frameworks",
        }
    }
}

impl FromStr for Quadrant {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self> {
        Quadrant::ALL
            .into_iter()
            .find(|q| q.label() == s)
            .ok_or_else(|| RadarError::invalid_category("quadrant", s))
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Quadrant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Radial classification axis, innermost (most mature) first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ring {
    Adopt,
    Trial,
    Assess,
    Hold,
}

impl Ring {
    /// All rings in their canonical order
    pub const ALL: [Ring; 4] = [Ring::Adopt, Ring::Trial, Ring::Assess, Ring::Hold];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Adopt => "Adopt",
            Self::Trial => "Trial",
            Self::Assess => "Assess",
            Self::Hold => "Hold",
        }
    }
}

impl FromStr for Ring {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self> {
        Ring::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| RadarError::invalid_category("ring", s))
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Ring {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A blip record exactly as it arrives from a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBlip {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub quadrant: String,
    pub ring: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
}

/// A validated blip: one classified item on the radar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blip {
    /// Store identity, absent for records that were never persisted
    pub id: Option<String>,
    pub name: String,
    pub quadrant: Quadrant,
    pub ring: Ring,
    pub description: String,
    pub owner: String,
}

impl Blip {
    /// Build a blip in code, mostly for tests and the sample snapshot
    pub fn new(name: impl Into<String>, quadrant: Quadrant, ring: Ring) -> Self {
        Self {
            id: None,
            name: name.into(),
            quadrant,
            ring,
            description: String::new(),
            owner: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl TryFrom<RawBlip> for Blip {
    type Error = RadarError;

    fn try_from(raw: RawBlip) -> Result<Self> {
        if raw.name.trim().is_empty() {
            return Err(RadarError::invalid_category("name", raw.name));
        }
        let quadrant = raw.quadrant.parse()?;
        let ring = raw.ring.parse()?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            quadrant,
            ring,
            description: raw.description,
            owner: raw.owner,
        })
    }
}

// ============================================================================
// Batch validation
// ============================================================================

/// What to do with a record whose quadrant or ring is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Drop the offending record, keep the rest of the batch
    #[default]
    Lenient,
    /// Reject the whole batch on the first offending record
    Strict,
}

/// Result of validating a snapshot
#[derive(Debug, Default)]
pub struct ValidatedBatch {
    pub blips: Vec<Blip>,
    /// Errors for records dropped under the lenient policy, in input order
    pub rejected: Vec<RadarError>,
}

/// Convert raw records into blips according to the policy
///
/// Under `Lenient`, every invalid record is reported in `rejected` and
/// the valid ones are kept in their original order. Under `Strict`, the
/// first invalid record is returned as the error.
pub fn validate_batch(raws: Vec<RawBlip>, policy: ValidationPolicy) -> Result<ValidatedBatch> {
    let mut batch = ValidatedBatch::default();

    for raw in raws {
        match Blip::try_from(raw) {
            Ok(blip) => batch.blips.push(blip),
            Err(e) => match policy {
                ValidationPolicy::Strict => return Err(e),
                ValidationPolicy::Lenient => {
                    tracing::warn!(error = %e, "Rejected blip record");
                    batch.rejected.push(e);
                }
            },
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, quadrant: &str, ring: &str) -> RawBlip {
        RawBlip {
            id: None,
            name: name.to_string(),
            quadrant: quadrant.to_string(),
            ring: ring.to_string(),
            description: String::new(),
            owner: String::new(),
        }
    }

    #[test]
    fn test_quadrant_labels_round_trip() {
        for q in Quadrant::ALL {
            assert_eq!(q.label().parse::<Quadrant>().unwrap(), q);
        }
        assert_eq!(
            "Languages & Frameworks".parse::<Quadrant>().unwrap(),
            Quadrant::LanguagesAndFrameworks
        );
    }

    #[test]
    fn test_unknown_quadrant_is_invalid_category() {
        let err = "Databases".parse::<Quadrant>().unwrap_err();
        assert!(matches!(
            err,
            RadarError::InvalidCategory { field: "quadrant", ref value } if value == "Databases"
        ));
    }

    #[test]
    fn test_ring_labels_are_case_sensitive() {
        assert!("adopt".parse::<Ring>().is_err());
        assert_eq!("Adopt".parse::<Ring>().unwrap(), Ring::Adopt);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Blip::try_from(raw("  ", "Tools", "Adopt")).unwrap_err();
        assert!(matches!(err, RadarError::InvalidCategory { field: "name", .. }));
    }

    #[test]
    fn test_lenient_policy_drops_only_offenders() {
        let raws = vec![
            raw("Rust", "Languages & Frameworks", "Adopt"),
            raw("Mystery", "Gadgets", "Adopt"),
            raw("Kafka", "Platforms", "Someday"),
            raw("Git", "Tools", "Adopt"),
        ];
        let batch = validate_batch(raws, ValidationPolicy::Lenient).unwrap();
        let names: Vec<&str> = batch.blips.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Git"]);
        assert_eq!(batch.rejected.len(), 2);
    }

    #[test]
    fn test_strict_policy_rejects_batch() {
        let raws = vec![
            raw("Rust", "Languages & Frameworks", "Adopt"),
            raw("Kafka", "Platforms", "Someday"),
        ];
        let err = validate_batch(raws, ValidationPolicy::Strict).unwrap_err();
        assert!(matches!(err, RadarError::InvalidCategory { field: "ring", .. }));
    }

    #[test]
    fn test_raw_blip_optional_fields() {
        let json = r#"{"name":"Docker","quadrant":"Platforms","ring":"Trial"}"#;
        let raw: RawBlip = serde_json::from_str(json).unwrap();
        let blip = Blip::try_from(raw).unwrap();
        assert_eq!(blip.id, None);
        assert_eq!(blip.owner, "");
        assert_eq!(blip.ring, Ring::Trial);
    }
}
