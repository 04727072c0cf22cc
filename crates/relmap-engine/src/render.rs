//! Batched overlay scheduling and popup composition.
//!
//! Each overlay category — zone circles, disaster markers, resource
//! markers — is staggered as its own independent sequence: the entity at
//! list index `i` is scheduled `i × step` milliseconds after the batch
//! base time. Categories therefore interleave on the timer queue while
//! order within a category follows input order. The synchronous work per
//! fired timer is bounded at "create one overlay", which keeps the UI
//! thread responsive for large entity sets.
//!
//! Entities missing either coordinate are skipped at scheduling time;
//! their list index still counts toward the cadence of later entries.

use relmap_core::entity::{Disaster, Resource};
use relmap_core::style::{disaster_color, zone_color};
use relmap_core::zone::RiskZone;
use relmap_sched::{TimeMs, TimerQueue};
use relmap_surface::spec::{PopupContent, PopupLine};

/// Delay step between successive zone circles.
pub const ZONE_STEP_MS: u64 = 50;
/// Delay step between successive disaster markers.
pub const DISASTER_STEP_MS: u64 = 25;
/// Delay step between successive resource markers.
pub const RESOURCE_STEP_MS: u64 = 25;

/// One deferred overlay creation.
///
/// Jobs carry a copy of the rendering-relevant record so a fired timer
/// needs nothing but the backend to complete.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayJob {
    /// Create a zone circle.
    Zone(RiskZone),
    /// Create a disaster marker.
    Disaster(Disaster),
    /// Create a resource marker.
    Resource(Resource),
}

/// The entity lists a view renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderInput {
    /// Disaster records, newest first.
    pub disasters: Vec<Disaster>,
    /// Resource records, newest first.
    pub resources: Vec<Resource>,
    /// Whether the static risk zones are drawn.
    pub show_zones: bool,
}

/// Outcome counters from one scheduling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScheduleStats {
    /// Jobs placed on the timer queue.
    pub scheduled: u64,
    /// Entities skipped for missing coordinates.
    pub skipped: u64,
}

/// Schedule one full render of `input` onto `timers`, starting at `base`.
///
/// The caller must have cancelled any previous batch first; this
/// function only adds entries.
pub fn schedule_batches(
    timers: &mut TimerQueue<OverlayJob>,
    base: TimeMs,
    input: &RenderInput,
    zones: &[RiskZone],
) -> ScheduleStats {
    let mut stats = ScheduleStats::default();

    if input.show_zones {
        for (i, zone) in zones.iter().enumerate() {
            timers.schedule_at(base + (i as u64) * ZONE_STEP_MS, OverlayJob::Zone(*zone));
            stats.scheduled += 1;
        }
    }

    for (i, disaster) in input.disasters.iter().enumerate() {
        if disaster.position().is_none() {
            stats.skipped += 1;
            continue;
        }
        timers.schedule_at(
            base + (i as u64) * DISASTER_STEP_MS,
            OverlayJob::Disaster(disaster.clone()),
        );
        stats.scheduled += 1;
    }

    for (i, resource) in input.resources.iter().enumerate() {
        if resource.position().is_none() {
            stats.skipped += 1;
            continue;
        }
        timers.schedule_at(
            base + (i as u64) * RESOURCE_STEP_MS,
            OverlayJob::Resource(resource.clone()),
        );
        stats.scheduled += 1;
    }

    stats
}

/// Popup block for a zone circle.
pub fn zone_popup(zone: &RiskZone) -> PopupContent {
    let code = zone.risk.as_str();
    PopupContent {
        title: zone.name.to_string(),
        title_color: Some(zone_color(code).to_string()),
        lines: vec![
            PopupLine::labelled("Risk Level", code.to_uppercase()),
            PopupLine::bare("Earthquake prone zone in India"),
        ],
    }
}

/// Popup block for a disaster marker.
pub fn disaster_popup(disaster: &Disaster) -> PopupContent {
    let mut lines = vec![
        PopupLine::labelled("Status", disaster.status.clone()),
        PopupLine::labelled("Location", disaster.location_name.clone()),
    ];
    if let Some(description) = &disaster.description {
        lines.push(PopupLine::bare(description.clone()));
    }
    PopupContent {
        title: disaster.title.clone(),
        title_color: Some(disaster_color(&disaster.status).to_string()),
        lines,
    }
}

/// Popup block for a resource marker.
///
/// Resource headings are not colour-coded; only the type line carries
/// the category.
pub fn resource_popup(resource: &Resource) -> PopupContent {
    PopupContent {
        title: resource.name.clone(),
        title_color: None,
        lines: vec![
            PopupLine::labelled("Type", resource.type_code.clone()),
            PopupLine::labelled("Status", resource.status.clone()),
            PopupLine::labelled("Location", resource.location_name.clone()),
        ],
    }
}
