//! Built-in sample resources.
//!
//! Shown when the backend has no resource rows at all, so a fresh
//! deployment still renders a populated map instead of an empty one.

use chrono::Utc;

use relmap_core::entity::Resource;
use relmap_core::RecordId;

fn sample(id: &str, name: &str, type_code: &str, location: &str, lat: f64, lng: f64, capacity: Option<u32>, occupancy: Option<u32>, status: &str) -> Resource {
    Resource {
        id: RecordId::from(id),
        name: name.to_string(),
        type_code: type_code.to_string(),
        location_name: location.to_string(),
        latitude: Some(lat),
        longitude: Some(lng),
        capacity,
        current_occupancy: occupancy,
        status: status.to_string(),
        contact: None,
        amenities: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// The three built-in New York City sample resources.
pub fn sample_resources() -> Vec<Resource> {
    vec![
        sample(
            "sample-shelter",
            "Red Cross Emergency Shelter",
            "shelter",
            "Lower East Side, NYC",
            40.7180,
            -73.9857,
            Some(200),
            Some(45),
            "available",
        ),
        sample(
            "sample-food",
            "Community Food Bank",
            "food",
            "East Village, NYC",
            40.7282,
            -73.9942,
            None,
            None,
            "available",
        ),
        sample(
            "sample-medical",
            "NYC Health Emergency Center",
            "medical",
            "Tribeca, NYC",
            40.7230,
            -74.0020,
            None,
            None,
            "limited",
        ),
    ]
}
