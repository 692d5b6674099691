use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialError {
    InvalidGridDims {
        width: usize,
        height: usize,
    },
    InvalidCellSize {
        x: f32,
        y: f32,
    },
    InvalidBounds {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },
    InvalidNodeCapacity {
        capacity: usize,
    },
    CountMismatch {
        node: usize,
        cached: usize,
        actual: usize,
    },
    DuplicateEntry {
        id: u32,
        group: u32,
    },
    BrokenChildBlock {
        node: usize,
        children: usize,
    },
}

pub type SpatialResult<T> = Result<T, SpatialError>;

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialError::InvalidGridDims { width, height } => {
                write!(
                    f,
                    "grid dimensions must be non-zero (width: {}, height: {})",
                    width, height
                )
            }
            SpatialError::InvalidCellSize { x, y } => {
                write!(
                    f,
                    "cell size must be finite and positive (x: {}, y: {})",
                    x, y
                )
            }
            SpatialError::InvalidBounds {
                min_x,
                min_y,
                max_x,
                max_y,
            } => {
                write!(
                    f,
                    "bounds must be finite with min <= max (min_x: {}, min_y: {}, max_x: {}, max_y: {})",
                    min_x, min_y, max_x, max_y
                )
            }
            SpatialError::InvalidNodeCapacity { capacity } => {
                write!(f, "node capacity must be at least 1 (capacity: {})", capacity)
            }
            SpatialError::CountMismatch {
                node,
                cached,
                actual,
            } => {
                write!(
                    f,
                    "node {} caches count {} but holds {} ids",
                    node, cached, actual
                )
            }
            SpatialError::DuplicateEntry { id, group } => {
                write!(f, "entry (id: {}, group: {}) is stored more than once", id, group)
            }
            SpatialError::BrokenChildBlock { node, children } => {
                write!(
                    f,
                    "node {} points at child block {} which is not a valid block of 4",
                    node, children
                )
            }
        }
    }
}

impl std::error::Error for SpatialError {}
