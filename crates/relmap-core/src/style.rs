//! Overlay styling policy.
//!
//! Pure, total functions from a record's style code to display colour
//! and marker geometry. Unknown codes always fall to the neutral gray,
//! so the policy never fails and never performs I/O.

/// Neutral gray returned for any unrecognised style code.
pub const DEFAULT_GRAY: &str = "#6b7280";

/// Colour for a disaster status code.
pub fn disaster_color(status: &str) -> &'static str {
    match status {
        "active" => "#dc2626",
        "monitoring" => "#ea580c",
        "resolved" => "#16a34a",
        _ => DEFAULT_GRAY,
    }
}

/// Colour for a resource type code.
pub fn resource_color(type_code: &str) -> &'static str {
    match type_code {
        "shelter" => "#3b82f6",
        "food" => "#10b981",
        "medical" => "#ef4444",
        "transport" => "#8b5cf6",
        "supply" => "#f59e0b",
        _ => DEFAULT_GRAY,
    }
}

/// Colour for a risk-level code.
pub fn zone_color(risk: &str) -> &'static str {
    match risk {
        "very-high" => "#dc2626",
        "high" => "#ea580c",
        "moderate" => "#eab308",
        _ => DEFAULT_GRAY,
    }
}

/// Marker glyph shapes offered by the mapping backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerGlyph {
    /// Filled circle — used for disasters.
    FilledCircle,
    /// Backward-closed arrow — used for resources.
    BackwardClosedArrow,
}

/// Full display style of a point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Glyph shape.
    pub glyph: MarkerGlyph,
    /// Glyph scale factor.
    pub scale: f64,
    /// Fill colour as a hex string.
    pub fill_color: &'static str,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Stroke colour as a hex string.
    pub stroke_color: &'static str,
    /// Stroke weight in pixels.
    pub stroke_weight: f64,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
}

/// Marker style for a disaster with the given status code.
///
/// Disasters draw above resources so active incidents stay visible.
pub fn disaster_marker_style(status: &str) -> MarkerStyle {
    MarkerStyle {
        glyph: MarkerGlyph::FilledCircle,
        scale: 10.0,
        fill_color: disaster_color(status),
        fill_opacity: 1.0,
        stroke_color: "#ffffff",
        stroke_weight: 2.0,
        z_index: 1000,
    }
}

/// Marker style for a resource with the given type code.
pub fn resource_marker_style(type_code: &str) -> MarkerStyle {
    MarkerStyle {
        glyph: MarkerGlyph::BackwardClosedArrow,
        scale: 6.0,
        fill_color: resource_color(type_code),
        fill_opacity: 0.9,
        stroke_color: "#ffffff",
        stroke_weight: 1.0,
        z_index: 999,
    }
}

/// Full display style of a zone circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    /// Stroke colour as a hex string.
    pub stroke_color: &'static str,
    /// Stroke opacity in `[0, 1]`.
    pub stroke_opacity: f64,
    /// Stroke weight in pixels.
    pub stroke_weight: f64,
    /// Fill colour as a hex string.
    pub fill_color: &'static str,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

/// Circle style for a zone with the given risk-level code.
pub fn zone_circle_style(risk: &str) -> CircleStyle {
    CircleStyle {
        stroke_color: zone_color(risk),
        stroke_opacity: 0.8,
        stroke_weight: 2.0,
        fill_color: zone_color(risk),
        fill_opacity: 0.25,
    }
}
