use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A coordinate fell outside `[0, EXTENT)` on at least one axis.
    InvalidCoordinate { x: usize, y: usize, z: usize },
    /// The font has no glyph for this character.
    UnsupportedCharacter(char),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCoordinate { x, y, z } => {
                write!(f, "voxel ({}, {}, {}) is outside the cube", x, y, z)
            }
            Error::UnsupportedCharacter(c) => write!(f, "no glyph for {:?}", c),
        }
    }
}
