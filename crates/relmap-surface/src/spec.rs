//! Plain-data specifications handed across the SDK boundary.

use relmap_core::entity::GeoPoint;
use relmap_core::style::{CircleStyle, MarkerStyle};
use relmap_core::OverlayId;
use std::fmt;

/// Muted base-map theme applied at surface creation.
///
/// Lightness values follow the SDK's style convention (percent points
/// added to the base colour).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTheme {
    /// Water geometry colour.
    pub water_color: &'static str,
    /// Water lightness adjustment.
    pub water_lightness: i8,
    /// Landscape geometry colour.
    pub landscape_color: &'static str,
    /// Landscape lightness adjustment.
    pub landscape_lightness: i8,
}

impl Default for SurfaceTheme {
    fn default() -> Self {
        Self {
            water_color: "#e9e9e9",
            water_lightness: 17,
            landscape_color: "#f5f5f5",
            landscape_lightness: 20,
        }
    }
}

/// Options for creating a map surface.
///
/// Consumed exactly once per mount; a live surface is never restyled
/// or re-centred from these options afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceOptions {
    /// Initial map center.
    pub center: GeoPoint,
    /// Initial zoom level.
    pub zoom: u8,
    /// Whether the SDK's map-type switcher is shown. Off by default to
    /// keep initial load cheap.
    pub map_type_control: bool,
    /// Whether the SDK's street-level view control is shown.
    pub street_view_control: bool,
    /// Whether the fullscreen control is shown.
    pub fullscreen_control: bool,
    /// Whether the zoom control is shown.
    pub zoom_control: bool,
    /// Base-map theme.
    pub theme: SurfaceTheme,
}

impl SurfaceOptions {
    /// Standard options centred on `center` at `zoom`.
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            map_type_control: false,
            street_view_control: false,
            fullscreen_control: true,
            zoom_control: true,
            theme: SurfaceTheme::default(),
        }
    }
}

/// Specification of a point marker overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    /// Marker position.
    pub position: GeoPoint,
    /// Hover title.
    pub title: String,
    /// Glyph and colour.
    pub style: MarkerStyle,
}

/// Specification of a circle overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleSpec {
    /// Circle center.
    pub center: GeoPoint,
    /// Radius in meters.
    pub radius_m: f64,
    /// Stroke and fill style.
    pub style: CircleStyle,
}

/// One line of popup body text.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupLine {
    /// Bolded line label, e.g. `Status`. `None` renders the value bare.
    pub label: Option<String>,
    /// Line value.
    pub value: String,
}

impl PopupLine {
    /// A labelled `key: value` line.
    pub fn labelled(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.to_string()),
            value: value.into(),
        }
    }

    /// A bare text line.
    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }
}

/// Content block for the shared per-surface popup.
///
/// One popup object exists per surface and is reused: opening it with
/// new content implicitly replaces whatever was shown before.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupContent {
    /// Heading text.
    pub title: String,
    /// Heading colour as a hex string. `None` leaves the heading
    /// unstyled.
    pub title_color: Option<String>,
    /// Body lines, rendered in order.
    pub lines: Vec<PopupLine>,
}

impl PopupContent {
    /// All popup text flattened to one searchable string.
    ///
    /// Used by the shell (and tests) to inspect what a popup shows
    /// without committing to the SDK's markup.
    pub fn text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            if let Some(label) = &line.label {
                out.push_str(label);
                out.push_str(": ");
            }
            out.push_str(&line.value);
        }
        out
    }
}

impl fmt::Display for PopupContent {
    /// Renders the SDK's HTML-ish content block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title_color {
            Some(color) => writeln!(
                f,
                "<div><h3 style=\"color: {color};\">{}</h3>",
                self.title
            )?,
            None => writeln!(f, "<div><h3>{}</h3>", self.title)?,
        }
        for line in &self.lines {
            match &line.label {
                Some(label) => writeln!(f, "<p><strong>{label}:</strong> {}</p>", line.value)?,
                None => writeln!(f, "<p>{}</p>", line.value)?,
            }
        }
        write!(f, "</div>")
    }
}

/// Where the shared popup is anchored when opened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopupAnchor {
    /// Anchored to a live overlay (markers).
    Overlay(OverlayId),
    /// Anchored to a fixed coordinate (zone circles open at the zone
    /// center).
    Position(GeoPoint),
}
