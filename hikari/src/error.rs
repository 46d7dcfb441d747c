use std::path::PathBuf;

use thiserror::Error;

use crate::scene::ShapeId;

/// Errors reported by scene construction, rendering and I/O.
///
/// Degenerate geometry is never an error: a ray that misses or runs parallel to a surface just
/// produces no intersections.
#[derive(Error, Debug)]
pub enum Error {
    #[error("can't combine a {0}x{1} matrix with a {2}x{3} matrix")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("element ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{0}x{1} matrix is not square")]
    NotSquare(usize, usize),

    #[error("matrix is singular")]
    SingularMatrix,

    #[error("pixel ({x}, {y}) is outside a {width}x{height} image")]
    InvalidPixel {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("minimum height {minimum} is above maximum height {maximum}")]
    InvertedBounds { minimum: f64, maximum: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown shape {0:?}")]
    UnknownShape(ShapeId),

    #[error("shape {0:?} is not a {1}")]
    WrongShapeKind(ShapeId, &'static str),

    #[error("shape {0:?} is already attached")]
    AlreadyAttached(ShapeId),

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: ShapeId, child: ShapeId },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("unsupported output format '{}'", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Exr(#[from] exr::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
