// Errors raised while turning a plant log into frames.
//
// Every variant is fatal: the pipeline stops at the first one.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single leaf token could not be read.
#[derive(Debug, Error, PartialEq)]
pub enum LeafError {
    #[error("token is too short to hold a leaf entry")]
    Empty,
    #[error("expected 5 comma separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("leaf index {value:?} is not a non-negative integer")]
    Index { value: String },
    #[error("leaf {name} {value:?} is not a number")]
    Field { name: &'static str, value: String },
    #[error("leaf area {area} must be a finite non-negative number")]
    NegativeArea { area: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open plant log {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading plant log at line {line}")]
    ReadInput {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("malformed leaf {token:?} on line {line}")]
    MalformedLeaf {
        line: usize,
        token: String,
        #[source]
        source: LeafError,
    },
    #[error("output directory {} does not exist", path.display())]
    MissingOutputDir { path: PathBuf },
    #[error("output path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("cannot create output directory {}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write frame {}", path.display())]
    WriteFrame {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot read label font {}", path.display())]
    ReadFont {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a usable TrueType font", path.display())]
    InvalidFont { path: PathBuf },
    #[error("sample rate must be at least 1 and start step below it (rate {rate}, start {start})")]
    InvalidSampling { rate: usize, start: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
