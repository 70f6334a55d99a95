use crate::error::PathError;
use grid_util::point::Point;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Estimates of the remaining cost between two grid coordinates. Which one is admissible
/// depends on the [Connectivity](crate::Connectivity) it is paired with, since every step
/// costs 1:
///
/// | Heuristic | Four | Eight |
/// |---|---|---|
/// | `Zero` | yes | yes |
/// | `Manhattan` | yes | no |
/// | `Euclidean` | yes | no |
/// | `SquaredEuclidean` | no | no |
/// | `SignedManhattan` | no | no |
///
/// The search does not check this; an inadmissible pairing can return a longer path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Always 0, which turns A* into Dijkstra's algorithm.
    #[default]
    Zero,
    /// `|dx| + |dy|`.
    Manhattan,
    /// `dx + dy` with signed differences. Negative whenever the goal lies up or left of
    /// the node. Only kept for compatibility with boards tuned against it.
    SignedManhattan,
    /// `sqrt(dx² + dy²)`.
    Euclidean,
    /// `dx² + dy²`.
    SquaredEuclidean,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Zero,
        Heuristic::Manhattan,
        Heuristic::SignedManhattan,
        Heuristic::Euclidean,
        Heuristic::SquaredEuclidean,
    ];

    /// Estimated cost of going from `a` to `b`.
    pub fn estimate(self, a: &Point, b: &Point) -> f64 {
        let dx = (b.x - a.x) as f64;
        let dy = (b.y - a.y) as f64;
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::Manhattan => dx.abs() + dy.abs(),
            Heuristic::SignedManhattan => dx + dy,
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
            Heuristic::SquaredEuclidean => dx * dx + dy * dy,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Zero => "zero",
            Heuristic::Manhattan => "manhattan",
            Heuristic::SignedManhattan => "signed_manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::SquaredEuclidean => "squared_euclidean",
        }
    }
}

impl FromStr for Heuristic {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "dijkstra" => Ok(Heuristic::Zero),
            "manhattan" => Ok(Heuristic::Manhattan),
            "signed_manhattan" => Ok(Heuristic::SignedManhattan),
            "euclidean" | "euclide" => Ok(Heuristic::Euclidean),
            "squared_euclidean" => Ok(Heuristic::SquaredEuclidean),
            other => Err(PathError::UnknownHeuristic(other.to_owned())),
        }
    }
}
