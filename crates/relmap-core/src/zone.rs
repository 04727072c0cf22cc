//! Static seismic risk zones.
//!
//! The zone table is compiled in: zones are never fetched, created, or
//! mutated at runtime. Only the major zones are listed so the initial
//! render stays cheap.

use crate::entity::GeoPoint;

/// Qualitative seismic risk level of a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// Zone V — very high risk.
    VeryHigh,
    /// Zone IV — high risk.
    High,
    /// Zone III — moderate risk.
    Moderate,
}

impl RiskLevel {
    /// The style code for this level, as consumed by
    /// [`zone_color`](crate::style::zone_color).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryHigh => "very-high",
            Self::High => "high",
            Self::Moderate => "moderate",
        }
    }
}

/// A static geographic circle annotated with a risk level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskZone {
    /// Zone display name.
    pub name: &'static str,
    /// Circle center.
    pub center: GeoPoint,
    /// Circle radius in meters.
    pub radius_m: f64,
    /// Qualitative risk level.
    pub risk: RiskLevel,
}

/// Default map center covering the monitored region.
pub const INDIA_CENTER: GeoPoint = GeoPoint {
    lat: 20.5937,
    lng: 78.9629,
};

/// The compiled-in zone table: three very-high, three high, and two
/// moderate zones.
pub const RISK_ZONES: [RiskZone; 8] = [
    RiskZone {
        name: "Kashmir Valley",
        center: GeoPoint { lat: 34.0, lng: 74.8 },
        radius_m: 80_000.0,
        risk: RiskLevel::VeryHigh,
    },
    RiskZone {
        name: "Northeast India",
        center: GeoPoint { lat: 26.0, lng: 93.0 },
        radius_m: 120_000.0,
        risk: RiskLevel::VeryHigh,
    },
    RiskZone {
        name: "Kutch Region",
        center: GeoPoint { lat: 23.5, lng: 69.5 },
        radius_m: 60_000.0,
        risk: RiskLevel::VeryHigh,
    },
    RiskZone {
        name: "Delhi NCR",
        center: GeoPoint { lat: 28.7, lng: 77.1 },
        radius_m: 50_000.0,
        risk: RiskLevel::High,
    },
    RiskZone {
        name: "Himachal Pradesh",
        center: GeoPoint { lat: 31.1, lng: 77.1 },
        radius_m: 80_000.0,
        risk: RiskLevel::High,
    },
    RiskZone {
        name: "Northern Bihar",
        center: GeoPoint { lat: 26.5, lng: 85.0 },
        radius_m: 60_000.0,
        risk: RiskLevel::High,
    },
    RiskZone {
        name: "Western Maharashtra",
        center: GeoPoint { lat: 19.0, lng: 73.5 },
        radius_m: 80_000.0,
        risk: RiskLevel::Moderate,
    },
    RiskZone {
        name: "Northern Kerala",
        center: GeoPoint { lat: 11.5, lng: 75.8 },
        radius_m: 50_000.0,
        risk: RiskLevel::Moderate,
    },
];
