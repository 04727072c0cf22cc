//! Record shapes for the four backend tables and the point-entity sum type.
//!
//! Field names and optionality mirror the backend's row-shaped JSON
//! records exactly, so the structs double as wire DTOs. Coordinates are
//! individually nullable in the rows; [`position()`](Disaster::position)
//! collapses them into a [`GeoPoint`] only when both are present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::id::RecordId;

/// Short string lists (tags, amenities) stay inline up to four entries.
pub type Tags = SmallVec<[String; 4]>;

/// A geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, positive north.
    pub lat: f64,
    /// Longitude, positive east.
    pub lng: f64,
}

/// A disaster record from the `disasters` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    /// Row identity.
    pub id: RecordId,
    /// Display title, e.g. "NYC Flood".
    pub title: String,
    /// Human-readable location description.
    pub location_name: String,
    /// Free-form descriptive text. Nullable in the row.
    #[serde(default)]
    pub description: Option<String>,
    /// Categorisation tags. Nullable in the row.
    #[serde(default)]
    pub tags: Option<Tags>,
    /// Identity of the creating user.
    pub owner_id: String,
    /// Status code used for styling: `active`, `monitoring`, `resolved`.
    pub status: String,
    /// Latitude if the record has been geocoded.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude if the record has been geocoded.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Row last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Disaster {
    /// The record's coordinate, if both latitude and longitude are set.
    ///
    /// Records with a partial coordinate are treated as not geocoded
    /// and are never rendered as overlays.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}

/// Insert shape for a new disaster record.
///
/// The backend fills in identity and timestamps.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDisaster {
    /// Display title.
    pub title: String,
    /// Human-readable location description.
    pub location_name: String,
    /// Free-form descriptive text.
    pub description: Option<String>,
    /// Categorisation tags.
    pub tags: Tags,
    /// Identity of the creating user.
    pub owner_id: String,
    /// Initial status code. New records start `active`.
    pub status: String,
}

/// A relief resource record from the `resources` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Row identity.
    pub id: RecordId,
    /// Display name, e.g. "Red Cross Emergency Shelter".
    pub name: String,
    /// Type code used for styling: `shelter`, `food`, `medical`,
    /// `transport`, `supply`.
    #[serde(rename = "type")]
    pub type_code: String,
    /// Human-readable location description.
    pub location_name: String,
    /// Latitude if the record has been geocoded.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude if the record has been geocoded.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Total capacity, where the resource has one.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Current occupancy against [`capacity`](Resource::capacity).
    #[serde(default)]
    pub current_occupancy: Option<u32>,
    /// Availability code: `available`, `limited`, `full`.
    pub status: String,
    /// Contact phone number.
    #[serde(default)]
    pub contact: Option<String>,
    /// Amenities offered at the resource. Nullable in the row.
    #[serde(default)]
    pub amenities: Option<Tags>,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Row last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// The record's coordinate, if both latitude and longitude are set.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}

/// A field report from the `reports` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Row identity.
    pub id: RecordId,
    /// The disaster this report concerns, if linked.
    #[serde(default)]
    pub disaster_id: Option<RecordId>,
    /// Report body text.
    pub content: String,
    /// Attached image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Priority code: `normal`, `high`, `urgent`.
    pub priority: String,
    /// Whether a coordinator has verified the report.
    #[serde(default)]
    pub verified: Option<bool>,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Row last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for a new field report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewReport {
    /// The disaster this report concerns, if any.
    pub disaster_id: Option<RecordId>,
    /// Report body text.
    pub content: String,
    /// Attached image URL.
    pub image_url: Option<String>,
    /// Priority code: `normal`, `high`, `urgent`.
    pub priority: String,
}

/// A social-media signal row from the `social_media_posts` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    /// Row identity.
    pub id: RecordId,
    /// The disaster this post concerns, if linked.
    #[serde(default)]
    pub disaster_id: Option<RecordId>,
    /// Author handle, e.g. `@citizen_reporter`.
    pub user_handle: String,
    /// Originating platform name.
    pub platform: String,
    /// Post body text.
    pub content: String,
    /// Priority code: `normal`, `high`, `urgent`.
    pub priority: String,
    /// Like count at ingest time.
    #[serde(default)]
    pub likes: Option<u32>,
    /// Share count at ingest time.
    #[serde(default)]
    pub shares: Option<u32>,
    /// Comment count at ingest time.
    #[serde(default)]
    pub comments: Option<u32>,
    /// Whether the post has been verified.
    #[serde(default)]
    pub verified: Option<bool>,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sum type over the two fetched record kinds rendered as point overlays.
///
/// Static risk zones are deliberately not part of this type: they are
/// compiled in, never fetched, and render as circles rather than markers.
#[derive(Clone, Debug, PartialEq)]
pub enum PointEntity {
    /// A disaster marker source.
    Disaster(Disaster),
    /// A resource marker source.
    Resource(Resource),
}

impl PointEntity {
    /// Row identity of the underlying record.
    pub fn id(&self) -> &RecordId {
        match self {
            Self::Disaster(d) => &d.id,
            Self::Resource(r) => &r.id,
        }
    }

    /// Display label: the disaster title or resource name.
    pub fn label(&self) -> &str {
        match self {
            Self::Disaster(d) => &d.title,
            Self::Resource(r) => &r.name,
        }
    }

    /// The style code driving marker colour: disaster status or
    /// resource type.
    pub fn style_code(&self) -> &str {
        match self {
            Self::Disaster(d) => &d.status,
            Self::Resource(r) => &r.type_code,
        }
    }

    /// The record's coordinate, if fully geocoded.
    pub fn position(&self) -> Option<GeoPoint> {
        match self {
            Self::Disaster(d) => d.position(),
            Self::Resource(r) => r.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoded(lat: Option<f64>, lng: Option<f64>) -> Disaster {
        Disaster {
            id: RecordId::from("d-1"),
            title: "NYC Flood".to_string(),
            location_name: "Manhattan, NYC".to_string(),
            description: None,
            tags: None,
            owner_id: "user".to_string(),
            status: "active".to_string(),
            latitude: lat,
            longitude: lng,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn position_requires_both_coordinates() {
        assert!(geocoded(Some(40.7), Some(-74.0)).position().is_some());
        assert!(geocoded(Some(40.7), None).position().is_none());
        assert!(geocoded(None, Some(-74.0)).position().is_none());
        assert!(geocoded(None, None).position().is_none());
    }

    #[test]
    fn disaster_row_roundtrip() {
        let row = serde_json::json!({
            "id": "abc-123",
            "title": "NYC Flood",
            "location_name": "Manhattan, NYC",
            "description": null,
            "tags": ["flood", "urgent"],
            "owner_id": "user",
            "status": "active",
            "latitude": 40.7,
            "longitude": -74.0,
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-01T12:00:00Z"
        });
        let d: Disaster = serde_json::from_value(row).unwrap();
        assert_eq!(d.id, RecordId::from("abc-123"));
        assert_eq!(d.tags.as_ref().map(|t| t.len()), Some(2));
        assert_eq!(d.position(), Some(GeoPoint { lat: 40.7, lng: -74.0 }));
    }

    #[test]
    fn resource_row_uses_type_key() {
        let row = serde_json::json!({
            "id": "r-1",
            "name": "Community Food Bank",
            "type": "food",
            "location_name": "East Village, NYC",
            "status": "available",
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-01T12:00:00Z"
        });
        let r: Resource = serde_json::from_value(row).unwrap();
        assert_eq!(r.type_code, "food");
        assert!(r.position().is_none());
    }

    #[test]
    fn point_entity_projects_style_code() {
        let d = geocoded(Some(1.0), Some(2.0));
        let e = PointEntity::Disaster(d);
        assert_eq!(e.style_code(), "active");
        assert_eq!(e.label(), "NYC Flood");
    }
}
