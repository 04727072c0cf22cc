//! Map legend model.
//!
//! The legend mirrors what is actually on the map: the zone section
//! appears only while zones are shown, and the disaster section only
//! when at least one disaster is rendered.

use relmap_core::style::{disaster_color, zone_color};

/// One legend row: a colour swatch and its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    /// Row label.
    pub label: &'static str,
    /// Swatch colour as a hex string.
    pub color: &'static str,
}

/// A titled group of legend rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendSection {
    /// Section heading.
    pub title: &'static str,
    /// Rows in display order.
    pub entries: Vec<LegendEntry>,
}

/// The legend sections for the current map contents.
pub fn legend_sections(show_zones: bool, have_disasters: bool) -> Vec<LegendSection> {
    let mut sections = Vec::new();
    if show_zones {
        sections.push(LegendSection {
            title: "Earthquake Risk Zones",
            entries: vec![
                LegendEntry { label: "Very High Risk", color: zone_color("very-high") },
                LegendEntry { label: "High Risk", color: zone_color("high") },
                LegendEntry { label: "Moderate Risk", color: zone_color("moderate") },
            ],
        });
    }
    if have_disasters {
        sections.push(LegendSection {
            title: "Disasters",
            entries: vec![
                LegendEntry { label: "Active", color: disaster_color("active") },
                LegendEntry { label: "Monitoring", color: disaster_color("monitoring") },
                LegendEntry { label: "Resolved", color: disaster_color("resolved") },
            ],
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_track_map_contents() {
        assert!(legend_sections(false, false).is_empty());
        assert_eq!(legend_sections(true, false).len(), 1);
        assert_eq!(legend_sections(true, true).len(), 2);

        let sections = legend_sections(true, true);
        assert_eq!(sections[0].title, "Earthquake Risk Zones");
        assert_eq!(sections[1].title, "Disasters");
    }

    #[test]
    fn colours_match_overlay_styling() {
        let sections = legend_sections(true, true);
        assert_eq!(sections[0].entries[0].color, "#dc2626");
        assert_eq!(sections[1].entries[1].color, "#ea580c");
    }
}
