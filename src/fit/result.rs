//! Fit Result Types
//!
//! Output structures for the fit calculator: per-zone verdicts, the overall
//! width signal, and a diagnostic bag of intermediates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::category::GarmentCategory;
use crate::garment::EasePreset;

/// Width verdict for a single zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthStatus {
    /// Garment sits tighter than the body measurement allows
    Ajustado,

    /// Within the perfect-fit band
    Perfecto,

    /// Looser than the band allows
    Holgado,
}

impl WidthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthStatus::Ajustado => "ajustado",
            WidthStatus::Perfecto => "perfecto",
            WidthStatus::Holgado => "holgado",
        }
    }
}

/// Length verdict for a single zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthStatus {
    /// Garment falls short of the body measurement
    Corto,

    /// Within the perfect-fit band
    Perfecto,

    /// Longer than the band allows
    Largo,
}

impl LengthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthStatus::Corto => "corto",
            LengthStatus::Perfecto => "perfecto",
            LengthStatus::Largo => "largo",
        }
    }
}

/// Width zones, with their stable wire labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthZone {
    #[serde(rename = "hombros")]
    Shoulders,
    #[serde(rename = "pecho")]
    Chest,
    #[serde(rename = "cintura")]
    Waist,
    #[serde(rename = "cadera")]
    Hip,
}

impl WidthZone {
    /// Wire label, stable across releases
    pub fn label(&self) -> &'static str {
        match self {
            WidthZone::Shoulders => "hombros",
            WidthZone::Chest => "pecho",
            WidthZone::Waist => "cintura",
            WidthZone::Hip => "cadera",
        }
    }
}

/// Length zones, with their stable wire labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthZone {
    #[serde(rename = "largoTorso")]
    Torso,
    #[serde(rename = "largoPierna")]
    Leg,
    #[serde(rename = "pieLargo")]
    Foot,
}

impl LengthZone {
    /// Wire label, stable across releases
    pub fn label(&self) -> &'static str {
        match self {
            LengthZone::Torso => "largoTorso",
            LengthZone::Leg => "largoPierna",
            LengthZone::Foot => "pieLargo",
        }
    }
}

/// Width verdict for one zone with its delta (cm, positive = roomier)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthZoneFit {
    pub zone: WidthZone,
    pub status: WidthStatus,

    /// Effective garment minus body, rounded to 2 decimals
    pub delta: f64,
}

/// Length verdict for one zone with its delta (cm, positive = longer)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthZoneFit {
    pub zone: LengthZone,
    pub status: LengthStatus,

    /// Garment minus body, rounded to 2 decimals
    pub delta: f64,
}

/// Zone collections stay on the stack: no category produces more than four
/// width or two length entries.
pub type WidthZones = SmallVec<[WidthZoneFit; 4]>;
pub type LengthZones = SmallVec<[LengthZoneFit; 2]>;

/// Diagnostic intermediates recorded during fit computation.
/// Strictly observational; callers must never branch on these values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitDebug {
    /// Category label exactly as the host supplied it
    pub raw_category: String,

    /// Ease preset the tables were resolved with
    pub preset: EasePreset,

    /// Stretch multiplier applied to the garment's width measurements
    pub stretch_factor: f64,
}

/// Complete fit verdict for one garment against one shopper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Canonical category the verdict was computed under
    pub category: GarmentCategory,

    /// Overall width signal; each category aggregates its zones differently
    pub overall: WidthStatus,

    /// Width verdicts in evaluation order; empty for shoes
    pub widths: WidthZones,

    /// Length verdicts in evaluation order
    pub lengths: LengthZones,

    /// Diagnostic intermediates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<FitDebug>,
}

impl FitResult {
    /// Width verdict for a zone, if that zone was evaluated
    pub fn width(&self, zone: WidthZone) -> Option<&WidthZoneFit> {
        self.widths.iter().find(|w| w.zone == zone)
    }

    /// Length verdict for a zone, if that zone was evaluated
    pub fn length(&self, zone: LengthZone) -> Option<&LengthZoneFit> {
        self.lengths.iter().find(|l| l.zone == zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_zone_wire_labels() {
        assert_eq!(WidthZone::Shoulders.label(), "hombros");
        assert_eq!(WidthZone::Chest.label(), "pecho");
        assert_eq!(WidthZone::Waist.label(), "cintura");
        assert_eq!(WidthZone::Hip.label(), "cadera");
        assert_eq!(LengthZone::Torso.label(), "largoTorso");
        assert_eq!(LengthZone::Leg.label(), "largoPierna");
        assert_eq!(LengthZone::Foot.label(), "pieLargo");
    }

    #[test]
    fn test_serialized_labels_match_wire_format() {
        let entry = WidthZoneFit {
            zone: WidthZone::Hip,
            status: WidthStatus::Holgado,
            delta: 2.5,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"cadera\""));
        assert!(json.contains("\"holgado\""));

        let entry = LengthZoneFit {
            zone: LengthZone::Torso,
            status: LengthStatus::Corto,
            delta: -3.5,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"largoTorso\""));
        assert!(json.contains("\"corto\""));
    }

    #[test]
    fn test_zone_lookup() {
        let result = FitResult {
            category: GarmentCategory::Pants,
            overall: WidthStatus::Perfecto,
            widths: smallvec![
                WidthZoneFit {
                    zone: WidthZone::Waist,
                    status: WidthStatus::Perfecto,
                    delta: 1.0,
                },
                WidthZoneFit {
                    zone: WidthZone::Hip,
                    status: WidthStatus::Ajustado,
                    delta: -1.0,
                },
            ],
            lengths: smallvec![],
            debug: None,
        };
        assert_eq!(result.width(WidthZone::Hip).map(|w| w.delta), Some(-1.0));
        assert_eq!(result.width(WidthZone::Chest), None);
        assert_eq!(result.length(LengthZone::Leg), None);
    }

    #[test]
    fn test_debug_bag_omitted_from_json_when_absent() {
        let result = FitResult {
            category: GarmentCategory::Shoes,
            overall: WidthStatus::Perfecto,
            widths: smallvec![],
            lengths: smallvec![],
            debug: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("debug"));
    }
}
