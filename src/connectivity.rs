use grid_util::point::Point;
use serde::{Deserialize, Serialize};

const FOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

const EIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Which neighbours a tile has during search. Every step costs 1, diagonal or not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// North, west, east and south.
    Four,
    /// The four axis-aligned neighbours plus the four diagonals.
    #[default]
    Eight,
}

impl Connectivity {
    /// Maps the "four axis only" toggle a host exposes onto a mode.
    pub fn from_four_axis(only_four: bool) -> Connectivity {
        if only_four {
            Connectivity::Four
        } else {
            Connectivity::Eight
        }
    }

    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Four => &FOUR_OFFSETS,
            Connectivity::Eight => &EIGHT_OFFSETS,
        }
    }

    /// Neighbouring coordinates of `point` in offset order, without any bounds check.
    pub fn neighbourhood(self, point: &Point) -> impl Iterator<Item = Point> {
        let (x, y) = (point.x, point.y);
        self.offsets()
            .iter()
            .map(move |(dx, dy)| Point::new(x + dx, y + dy))
    }

    /// Checks whether `b` is exactly one allowed step away from `a`.
    pub fn is_step(self, a: &Point, b: &Point) -> bool {
        let delta = (b.x - a.x, b.y - a.y);
        self.offsets().contains(&delta)
    }
}
