//! The HP-GL command interpreter.
//!
//! A single forward pass over the `;`-delimited command stream, tracking the
//! active pen, the current position, and one in-progress path. Finished
//! paths are handed to a [`PathSink`], which keeps the interpreter free of
//! any particular document representation.
//!
//! Only the subset of HP-GL that pen plotters emit in practice is handled:
//! `IN`, `SP`, `PU`, `PD` and (partially) `AA`. Everything else is recorded
//! as a warning and skipped.

use glam::{DVec2, dvec2};

use crate::errors::{DecodeError, Warning};
use crate::types::{ImportOptions, Layer, PathStyle, Scaler, fmt_num};

/// Receives finished paths from the decoder.
///
/// Implementations own the output representation; the decoder only decides
/// which layer a path belongs to and what it looks like.
pub trait PathSink {
    /// Ensure a group exists for `layer`. Called once per `SP` command;
    /// implementations must treat repeat calls for the same layer as a no-op
    /// so that re-selecting a pen does not duplicate its group.
    fn open_layer(&mut self, layer: &Layer);

    /// Append a finished path (SVG `d` syntax) to `layer`'s group.
    fn add_path(&mut self, layer: &Layer, data: String, style: PathStyle);
}

/// An SVG path string under construction, with enough bookkeeping to tell
/// whether it is worth emitting.
///
/// Paths always begin with an `M` at a known pen position, so a flushed
/// path is anchored by the pen-up move that preceded it. A path that never
/// gained an `L` segment draws nothing and is dropped at flush time; arc
/// segments alone do not qualify, matching the legacy importer.
#[derive(Debug)]
struct PathData {
    data: String,
    lines: usize,
}

impl PathData {
    fn start_at(point: DVec2) -> Self {
        Self {
            data: format!("M {},{}", fmt_num(point.x), fmt_num(point.y)),
            lines: 0,
        }
    }

    fn line_to(&mut self, point: DVec2) {
        self.data
            .push_str(&format!(" L {},{}", fmt_num(point.x), fmt_num(point.y)));
        self.lines += 1;
    }

    /// Append the fixed arc segment the legacy importer emits for `AA`.
    /// Radius and sweep are hard-coded (150,150 with flags 0,0,0); the
    /// command's real parameters only move the pen position. Known
    /// simplification, kept until true HP-GL arc semantics are needed.
    fn arc_segment(&mut self) {
        self.data.push_str(" A 150,150,0,0,0,150,150");
    }

    fn has_line(&self) -> bool {
        self.lines > 0
    }

    /// Take the path data if it draws anything, leaving the accumulator
    /// empty. Callers restart it at the next pen position.
    fn finish(&mut self) -> Option<String> {
        if self.has_line() {
            self.lines = 0;
            Some(std::mem::take(&mut self.data))
        } else {
            None
        }
    }
}

/// Single-use HP-GL decoder. All state is created in [`Decoder::new`] and
/// consumed by [`Decoder::decode`]; nothing persists across invocations.
pub struct Decoder<'a> {
    options: &'a ImportOptions,
    scaler: Scaler,
    warnings: Vec<Warning>,
}

impl<'a> Decoder<'a> {
    /// Validate the options and build a decoder.
    pub fn new(options: &'a ImportOptions) -> Result<Self, DecodeError> {
        let scaler = Scaler::try_new(options)?;
        Ok(Self {
            options,
            scaler,
            warnings: Vec::new(),
        })
    }

    /// Run the interpreter over `source`, feeding finished paths to `sink`.
    ///
    /// Returns the accumulated warnings on success. Fails without partial
    /// effect accounting: a fatal error aborts mid-stream and the sink may
    /// have received paths already, but the caller discards it on error.
    pub fn decode<S: PathSink>(
        mut self,
        source: &str,
        sink: &mut S,
    ) -> Result<Vec<Warning>, DecodeError> {
        let tokens: Vec<&str> = source.split(';').collect();
        // Heuristic "too little data" check from the legacy importer: any
        // plausible HP-GL file has at least an init, a pen select, and one
        // motion command.
        if tokens.len() < 3 {
            return Err(DecodeError::NoData);
        }

        let last_index = tokens.len() - 1;
        let mut active = Layer::Movements;
        let mut position = self.scaler.origin();
        let mut path = PathData::start_at(position);

        for (i, raw) in tokens.iter().enumerate() {
            let command = raw.trim();
            if command.is_empty() {
                continue;
            }
            let (mnemonic, params) = split_command(command);

            match mnemonic {
                // Initialize: resets plotter defaults, nothing to do here.
                "IN" => {}
                "SP" => {
                    active = Layer::Pen(params.to_string());
                    crate::log::debug!(pen = params, "select pen");
                    sink.open_layer(&active);
                }
                "AA" => {
                    path.arc_segment();
                    if let Some(target) = self.coordinates(mnemonic, params)? {
                        position = target;
                    }
                }
                "PU" => {
                    if let Some(data) = path.finish() {
                        crate::log::debug!(layer = %active.label(), "flush path");
                        sink.add_path(&active, data, style_for(&active));
                    }
                    if let Some(target) = self.coordinates(mnemonic, params)? {
                        // Pen-up travel is only drawn when requested, and
                        // never for the stream's final command (the park
                        // move back to origin).
                        if self.options.show_movements && i != last_index {
                            let mut travel = PathData::start_at(position);
                            travel.line_to(target);
                            sink.add_path(&Layer::Movements, travel.data, PathStyle::MOVEMENT);
                        }
                        position = target;
                    }
                    path = PathData::start_at(position);
                }
                "PD" => {
                    if let Some(target) = self.coordinates(mnemonic, params)? {
                        path.line_to(target);
                        position = target;
                    }
                }
                other => {
                    crate::log::debug!(mnemonic = other, "unknown command");
                    self.warnings.push(Warning::UnknownCommand {
                        mnemonic: other.to_string(),
                    });
                }
            }
        }

        // Streams that end pen-down leave an open path behind.
        if let Some(data) = path.finish() {
            sink.add_path(&active, data, style_for(&active));
        }

        Ok(self.warnings)
    }

    /// Parse a command's parameter substring into a page-coordinate point.
    ///
    /// An empty substring yields no coordinates rather than an error. A
    /// third parameter (pen pressure on some plotters) is accepted and
    /// ignored; the output is 2D. Anything non-numeric in the first two
    /// slots, a missing Y, or more than three parameters is a fatal error.
    fn coordinates(&self, command: &str, raw: &str) -> Result<Option<DVec2>, DecodeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let mut parts = raw.split(',').map(str::trim);
        let x = self.parse_value(command, parts.next().unwrap_or_default())?;
        let y = match parts.next() {
            Some(part) => self.parse_value(command, part)?,
            None => {
                return Err(DecodeError::InvalidCoordinate {
                    command: command.to_string(),
                    value: raw.to_string(),
                });
            }
        };
        // One trailing parameter at most; longer lists are not a point.
        if parts.nth(1).is_some() {
            return Err(DecodeError::InvalidCoordinate {
                command: command.to_string(),
                value: raw.to_string(),
            });
        }
        Ok(Some(self.scaler.to_page(dvec2(x, y))))
    }

    fn parse_value(&self, command: &str, part: &str) -> Result<f64, DecodeError> {
        part.parse::<f64>()
            .map_err(|_| DecodeError::InvalidCoordinate {
                command: command.to_string(),
                value: part.to_string(),
            })
    }
}

/// Split a trimmed command token into its two-letter mnemonic and the raw
/// parameter substring. Tokens shorter than two bytes (or with a multibyte
/// character straddling the boundary) can never match a known mnemonic and
/// come back whole.
fn split_command(command: &str) -> (&str, &str) {
    if command.len() >= 2 && command.is_char_boundary(2) {
        command.split_at(2)
    } else {
        (command, "")
    }
}

fn style_for(layer: &Layer) -> PathStyle {
    match layer {
        Layer::Movements => PathStyle::MOVEMENT,
        Layer::Pen(_) => PathStyle::DRAWING,
    }
}
