//! Presentation helpers for the report and social-signal feeds.

use chrono::{DateTime, Utc};

/// Visual weight of a priority badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeKind {
    /// Red badge for `urgent`.
    Destructive,
    /// Muted badge for `high`.
    Secondary,
    /// Plain outline badge for everything else.
    Outline,
}

/// Badge weight for a priority code.
pub fn priority_badge(priority: &str) -> BadgeKind {
    match priority {
        "urgent" => BadgeKind::Destructive,
        "high" => BadgeKind::Secondary,
        _ => BadgeKind::Outline,
    }
}

/// Whether a feed entry gets the urgent alert icon.
pub fn is_urgent(priority: &str) -> bool {
    priority == "urgent"
}

/// Coarse relative timestamp for feed rows.
///
/// Under a minute reads `Just now`; afterwards the largest elapsed
/// unit wins. Future timestamps (clock skew) also read `Just now`.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", elapsed.num_days())
}
