//! Error and warning types for the importer.
//!
//! Fatal conditions abort the conversion; warnings are collected and
//! returned alongside the document. Both carry the symbolic codes the host
//! editor's legacy importer used, so callers can keep their dispatch tables.

use miette::Diagnostic;
use thiserror::Error;

/// Fatal decoding errors. The conversion produces no partial output when
/// one of these is raised.
#[derive(Error, Diagnostic, Debug)]
pub enum DecodeError {
    /// The stream splits into fewer than 3 `;`-delimited tokens, which is
    /// too little to be a plausible HP-GL file.
    #[error("no HP-GL data found in input")]
    #[diagnostic(
        code(hpgl2svg::decode::no_data),
        help("HP-GL streams are `;`-delimited, e.g. `IN;SP1;PD100,100;`")
    )]
    NoData,

    #[error("invalid coordinate `{value}` in `{command}` command")]
    #[diagnostic(code(hpgl2svg::decode::invalid_coordinate))]
    InvalidCoordinate { command: String, value: String },

    #[error("invalid device resolution: {value} dots/inch")]
    #[diagnostic(
        code(hpgl2svg::options::invalid_resolution),
        help("resolution must be a finite, positive number")
    )]
    InvalidResolution { value: f64 },
}

impl DecodeError {
    /// Legacy symbolic code for this error.
    pub fn symbol(&self) -> &'static str {
        match self {
            DecodeError::NoData => "NO_HPGL_DATA",
            DecodeError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            DecodeError::InvalidResolution { .. } => "INVALID_RESOLUTION",
        }
    }
}

/// Non-fatal conditions recorded during decoding. One entry is appended per
/// occurrence; entries are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A command with an unrecognized two-letter mnemonic was skipped.
    UnknownCommand { mnemonic: String },
}

impl Warning {
    /// Legacy symbolic code for this warning.
    pub fn symbol(&self) -> &'static str {
        match self {
            Warning::UnknownCommand { .. } => "UNKNOWN_COMMANDS",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnknownCommand { mnemonic } => {
                write!(f, "unknown HP-GL command `{mnemonic}` skipped")
            }
        }
    }
}
