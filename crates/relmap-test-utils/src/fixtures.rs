//! Ready-made backend records for engine and host tests.
//!
//! Fixtures use fixed display fields so popup assertions stay readable;
//! identity and coordinates come from the caller.

use chrono::Utc;

use relmap_core::entity::{Disaster, Report, Resource, SocialPost};
use relmap_core::RecordId;

/// A geocoded `active` disaster at the given coordinate.
pub fn disaster_at(id: &str, lat: f64, lng: f64) -> Disaster {
    Disaster {
        id: RecordId::from(id),
        title: "NYC Flood".to_string(),
        location_name: "Manhattan, NYC".to_string(),
        description: None,
        tags: None,
        owner_id: "user".to_string(),
        status: "active".to_string(),
        latitude: Some(lat),
        longitude: Some(lng),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A disaster with no coordinates at all.
pub fn ungeocoded_disaster(id: &str) -> Disaster {
    let mut d = disaster_at(id, 0.0, 0.0);
    d.latitude = None;
    d.longitude = None;
    d
}

/// A geocoded `available` resource of the given type.
pub fn resource_at(id: &str, lat: f64, lng: f64, type_code: &str) -> Resource {
    Resource {
        id: RecordId::from(id),
        name: "Community Food Bank".to_string(),
        type_code: type_code.to_string(),
        location_name: "East Village, NYC".to_string(),
        latitude: Some(lat),
        longitude: Some(lng),
        capacity: Some(200),
        current_occupancy: Some(45),
        status: "available".to_string(),
        contact: Some("555-0123".to_string()),
        amenities: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// An unlinked field report with the given priority.
pub fn report_with_priority(id: &str, priority: &str) -> Report {
    Report {
        id: RecordId::from(id),
        disaster_id: None,
        content: "Bridge closed on 2nd Ave".to_string(),
        image_url: None,
        priority: priority.to_string(),
        verified: Some(false),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A social-media signal with the given priority.
pub fn social_post(id: &str, priority: &str) -> SocialPost {
    SocialPost {
        id: RecordId::from(id),
        disaster_id: None,
        user_handle: "@citizen_reporter".to_string(),
        platform: "Twitter".to_string(),
        content: "Streets flooding near the river".to_string(),
        priority: priority.to_string(),
        likes: Some(12),
        shares: Some(3),
        comments: Some(1),
        verified: Some(false),
        created_at: Utc::now(),
    }
}
