use crate::error::Error;
use crate::tree::Point;
use std::str::FromStr;

/// A distance metric over points in R^3.
///
/// All three variants are true metrics: `d(p, p) = 0`, `d(p, q) = d(q, p)`,
/// and the triangle inequality holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Square root of the sum of squared per-axis differences.
    Euclidean,
    /// Sum of absolute per-axis differences.
    Manhattan,
    /// Maximum absolute per-axis difference (Chebyshev).
    Max,
}

impl Metric {
    /// Distance between two points under this metric.
    pub fn distance(&self, p: &Point, q: &Point) -> f64 {
        match self {
            Metric::Euclidean => {
                let dx = p[0] - q[0];
                let dy = p[1] - q[1];
                let dz = p[2] - q[2];
                (dx * dx + dy * dy + dz * dz).sqrt()
            }
            Metric::Manhattan => {
                (p[0] - q[0]).abs() + (p[1] - q[1]).abs() + (p[2] - q[2]).abs()
            }
            Metric::Max => {
                let dx = (p[0] - q[0]).abs();
                let dy = (p[1] - q[1]).abs();
                let dz = (p[2] - q[2]).abs();
                dx.max(dy).max(dz)
            }
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Parses `"Euclidean"`, `"Manhattan"` or `"Max"`. There is no default:
    /// any other name is rejected.
    fn from_str(name: &str) -> Result<Metric, Error> {
        match name {
            "Euclidean" => Ok(Metric::Euclidean),
            "Manhattan" => Ok(Metric::Manhattan),
            "Max" => Ok(Metric::Max),
            other => Err(Error::InvalidMetric(other.to_string())),
        }
    }
}
