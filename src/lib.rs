//! Convert HP-GL plotter command streams into SVG layer trees.
//!
//! HP-GL is the command protocol pen plotters speak: a `;`-delimited stream
//! of two-letter mnemonics such as `SP1` (select pen 1), `PU0,0` (pen up,
//! move) and `PD100,100` (pen down, draw). This crate interprets the subset
//! those streams use in practice and produces an SVG document with one
//! layer group per pen, ready to hand to a host vector editor.
//!
//! ```
//! use hpgl2svg::{ImportOptions, import};
//!
//! let options = ImportOptions {
//!     doc_height: 100.0,
//!     ..ImportOptions::default()
//! };
//! let import = import("IN;SP1;PU0,0;PD100,100;PU0,0;", &options)?;
//! assert!(import.warnings.is_empty());
//! # Ok::<(), hpgl2svg::DecodeError>(())
//! ```
//!
//! The interpreter itself is document-agnostic: it emits finished paths
//! through the [`PathSink`] trait, and [`DocumentBuilder`] is the bundled
//! sink that assembles the [`svg::Document`] tree.

pub mod decode;
pub mod document;
pub mod errors;
pub mod log;
pub mod types;

pub use decode::{Decoder, PathSink};
pub use document::DocumentBuilder;
pub use errors::{DecodeError, Warning};
pub use types::{ImportOptions, Layer, PathStyle, Scaler};

/// Result of a successful import: the assembled document tree plus any
/// non-fatal warnings collected along the way.
#[derive(Debug)]
pub struct Import {
    /// One `<g>` layer per referenced pen, in first-reference order.
    pub document: svg::Document,
    /// Non-fatal conditions, one entry per occurrence.
    pub warnings: Vec<Warning>,
}

/// Convert an HP-GL stream into an SVG document tree.
///
/// Fails with [`DecodeError::NoData`] when the stream is too short to be
/// plausible HP-GL, and with other [`DecodeError`] variants on malformed
/// coordinates or unusable options. Unrecognized commands do not fail the
/// conversion; they are skipped and reported in [`Import::warnings`].
pub fn import(source: &str, options: &ImportOptions) -> Result<Import, DecodeError> {
    let mut builder = DocumentBuilder::new(options);
    let warnings = Decoder::new(options)?.decode(source, &mut builder)?;
    Ok(Import {
        document: builder.finish(),
        warnings,
    })
}

/// Convert an HP-GL stream straight to serialized SVG markup.
pub fn import_svg(
    source: &str,
    options: &ImportOptions,
) -> Result<(String, Vec<Warning>), DecodeError> {
    let import = import(source, options)?;
    Ok((import.document.to_string(), import.warnings))
}
