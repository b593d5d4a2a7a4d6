// Distance: shortest-path length with an explicit unreachable marker

use std::fmt;
use std::ops::Add;

/// Length of a shortest word ladder between two words.
///
/// `Unreachable` means the words lie in different connected components.
/// It sorts after every finite distance and is never equal to `Steps(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Number of single-step transformations on a shortest ladder.
    Steps(u32),
    /// No ladder exists.
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Steps(0);

    /// Finite step count, or `None` if unreachable.
    pub fn steps(self) -> Option<u32> {
        match self {
            Distance::Steps(n) => Some(n),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Steps(_))
    }

    /// Step count as `f64`, with `Unreachable` mapped to positive infinity.
    pub fn as_f64(self) -> f64 {
        match self {
            Distance::Steps(n) => f64::from(n),
            Distance::Unreachable => f64::INFINITY,
        }
    }

    /// Step count as `f64`, clamped to `cap`. `Unreachable` becomes `cap`.
    pub fn capped(self, cap: f64) -> f64 {
        self.as_f64().min(cap)
    }
}

impl From<Option<u32>> for Distance {
    fn from(steps: Option<u32>) -> Self {
        steps.map_or(Distance::Unreachable, Distance::Steps)
    }
}

impl From<Distance> for Option<u32> {
    fn from(d: Distance) -> Self {
        d.steps()
    }
}

/// Path concatenation: unreachable absorbs, finite lengths add.
impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match (self, rhs) {
            (Distance::Steps(a), Distance::Steps(b)) => {
                a.checked_add(b).map_or(Distance::Unreachable, Distance::Steps)
            }
            _ => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Steps(n) => write!(f, "{n}"),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_last() {
        assert!(Distance::Steps(u32::MAX) < Distance::Unreachable);
        assert!(Distance::ZERO < Distance::Steps(1));
        assert_ne!(Distance::ZERO, Distance::Unreachable);
    }

    #[test]
    fn addition_absorbs_unreachable() {
        assert_eq!(Distance::Steps(2) + Distance::Steps(3), Distance::Steps(5));
        assert_eq!(Distance::Steps(2) + Distance::Unreachable, Distance::Unreachable);
        assert_eq!(Distance::Steps(u32::MAX) + Distance::Steps(1), Distance::Unreachable);
    }

    #[test]
    fn float_views() {
        assert_eq!(Distance::Steps(4).as_f64(), 4.0);
        assert!(Distance::Unreachable.as_f64().is_infinite());
        assert_eq!(Distance::Unreachable.capped(100.0), 100.0);
        assert_eq!(Distance::Steps(3).capped(100.0), 3.0);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Steps(4).to_string(), "4");
        assert_eq!(Distance::Unreachable.to_string(), "inf");
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Distance::from(None), Distance::Unreachable);
        assert_eq!(Distance::from(Some(1)), Distance::Steps(1));
        assert_eq!(Option::<u32>::from(Distance::Unreachable), None);
    }
}
