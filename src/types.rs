//! Core types for the HP-GL importer.
//!
//! Coordinate conversions live in [`Scaler`] so that no raw device/page
//! math leaks into the decoder itself.

use glam::{DVec2, dvec2};

use crate::errors::DecodeError;

/// HP-GL device resolution that maps 1:1 onto page pixels.
///
/// HP-GL coordinates are plotter steps at the device resolution; the
/// importer's page coordinates are 90 dpi pixels, so a stream recorded at
/// 90 dpi needs no scaling at all.
pub const BASE_DPI: f64 = 90.0;

/// Options controlling the HP-GL import.
///
/// Mirrors the host editor's import dialog: device resolution per axis,
/// target page size, and whether to visualize pen-up travel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    /// Device resolution along X, in dots per inch. Must be finite and positive.
    pub resolution_x: f64,
    /// Device resolution along Y, in dots per inch. Must be finite and positive.
    pub resolution_y: f64,
    /// Output document width, in page units.
    pub doc_width: f64,
    /// Output document height, in page units. The Y axis is flipped against
    /// this value (HP-GL puts the origin bottom-left, SVG top-left).
    pub doc_height: f64,
    /// Render pen-up travel as red paths in a reserved "Movements" layer.
    pub show_movements: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        // 90 dpi and an A4 page in millimeters, like the host import dialog.
        Self {
            resolution_x: 90.0,
            resolution_y: 90.0,
            doc_width: 210.0,
            doc_height: 297.0,
            show_movements: false,
        }
    }
}

/// Converts HP-GL device coordinates into page coordinates.
///
/// Device units are divided by `resolution / 90` (dots/inch to pixels) and
/// the Y axis is flipped against the document height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    scale_x: f64,
    scale_y: f64,
    doc_height: f64,
}

impl Scaler {
    /// Build a scaler from import options, rejecting unusable resolutions.
    pub fn try_new(options: &ImportOptions) -> Result<Self, DecodeError> {
        for value in [options.resolution_x, options.resolution_y] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DecodeError::InvalidResolution { value });
            }
        }
        Ok(Self {
            scale_x: options.resolution_x / BASE_DPI,
            scale_y: options.resolution_y / BASE_DPI,
            doc_height: options.doc_height,
        })
    }

    /// Transform a device-unit point into page coordinates.
    pub fn to_page(&self, device: DVec2) -> DVec2 {
        dvec2(
            device.x / self.scale_x,
            self.doc_height - device.y / self.scale_y,
        )
    }

    /// The page-coordinate image of the device origin, which is where a
    /// plotter starts before the first positioning command.
    pub fn origin(&self) -> DVec2 {
        self.to_page(DVec2::ZERO)
    }
}

/// Identity of an output layer.
///
/// HP-GL pens map one-to-one onto layers; pen-up travel goes to a reserved
/// layer that no `SP` command can select.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The reserved layer holding visualized pen-up travel.
    Movements,
    /// A drawing pen, keyed by the raw identifier from `SP`.
    Pen(String),
}

impl Layer {
    /// Human-readable layer label, as shown in the host editor's layer list.
    pub fn label(&self) -> String {
        match self {
            Layer::Movements => "Movements".to_string(),
            Layer::Pen(id) => format!("Drawing Pen {id}"),
        }
    }
}

/// Stroke style attached to an emitted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStyle {
    /// Stroke color as a six-digit hex string, without the leading `#`.
    pub stroke: &'static str,
}

impl PathStyle {
    /// Thin black stroke used for drawn geometry.
    pub const DRAWING: PathStyle = PathStyle { stroke: "000000" };
    /// Red stroke used for pen-up travel in the Movements layer.
    pub const MOVEMENT: PathStyle = PathStyle { stroke: "ff0000" };

    /// Inline CSS for the path's `style` attribute.
    pub fn to_css(&self) -> String {
        format!("stroke:#{}; stroke-width:0.4; fill:none;", self.stroke)
    }
}

/// Format a number matching C's %g format (6 significant figures, trailing
/// zeros trimmed). Used for all coordinates written into path data.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sig_figs = 6_i32;
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
