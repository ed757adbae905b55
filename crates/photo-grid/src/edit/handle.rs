use crate::types::GridError;
use std::fmt;
use std::str::FromStr;

/// Drag handle on the edge or corner of a photo being resized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::North,
        ResizeHandle::South,
        ResizeHandle::East,
        ResizeHandle::West,
        ResizeHandle::NorthEast,
        ResizeHandle::NorthWest,
        ResizeHandle::SouthEast,
        ResizeHandle::SouthWest,
    ];

    /// Short compass name ("n", "se", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeHandle::North => "n",
            ResizeHandle::South => "s",
            ResizeHandle::East => "e",
            ResizeHandle::West => "w",
            ResizeHandle::NorthEast => "ne",
            ResizeHandle::NorthWest => "nw",
            ResizeHandle::SouthEast => "se",
            ResizeHandle::SouthWest => "sw",
        }
    }

    /// Drags the right edge
    pub fn has_east(self) -> bool {
        matches!(
            self,
            ResizeHandle::East | ResizeHandle::NorthEast | ResizeHandle::SouthEast
        )
    }

    /// Drags the left edge (moves x as well as width)
    pub fn has_west(self) -> bool {
        matches!(
            self,
            ResizeHandle::West | ResizeHandle::NorthWest | ResizeHandle::SouthWest
        )
    }

    /// Drags the bottom edge
    pub fn has_south(self) -> bool {
        matches!(
            self,
            ResizeHandle::South | ResizeHandle::SouthEast | ResizeHandle::SouthWest
        )
    }

    /// Drags the top edge (moves y as well as height)
    pub fn has_north(self) -> bool {
        matches!(
            self,
            ResizeHandle::North | ResizeHandle::NorthEast | ResizeHandle::NorthWest
        )
    }
}

impl FromStr for ResizeHandle {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeHandle::ALL
            .into_iter()
            .find(|handle| handle.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GridError::Config(format!("Unknown resize handle: {}", s)))
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for handle in ResizeHandle::ALL {
            assert_eq!(handle.as_str().parse::<ResizeHandle>().unwrap(), handle);
        }
        assert_eq!("SE".parse::<ResizeHandle>().unwrap(), ResizeHandle::SouthEast);
        assert!("x".parse::<ResizeHandle>().is_err());
    }

    #[test]
    fn test_corner_axes() {
        let nw = ResizeHandle::NorthWest;
        assert!(nw.has_north() && nw.has_west());
        assert!(!nw.has_south() && !nw.has_east());

        let e = ResizeHandle::East;
        assert!(e.has_east());
        assert!(!e.has_north() && !e.has_south() && !e.has_west());
    }
}
