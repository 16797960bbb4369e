use crate::error::{Error, Result};

use geo::{Coord, EuclideanLength, LineString};

/// The reference polyline an elevation profile is sampled along.
///
/// Validated on construction: at least two vertices, all coordinates
/// finite and a nonzero total length. Immutable afterwards, so the
/// cached length stays correct for the whole analysis run.
#[derive(Clone, Debug)]
pub struct ProfileLine {
    line: LineString<f64>,
    length: f64,
}

impl ProfileLine {
    pub fn new(vertices: Vec<Coord<f64>>) -> Result<ProfileLine> {
        if vertices.len() < 2 {
            return Err(Error::InvalidGeometry(
                "a profile line needs at least two vertices",
            ));
        }
        if vertices
            .iter()
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(Error::InvalidGeometry(
                "profile line vertices must be finite",
            ));
        }

        let line = LineString::new(vertices);
        let length = line.euclidean_length();
        if length <= 0. {
            return Err(Error::InvalidGeometry(
                "all profile line vertices coincide",
            ));
        }

        Ok(ProfileLine { line, length })
    }

    /// Total arc length of the polyline.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn as_linestring(&self) -> &LineString<f64> {
        &self.line
    }
}

impl TryFrom<LineString<f64>> for ProfileLine {
    type Error = Error;

    fn try_from(line: LineString<f64>) -> Result<ProfileLine> {
        ProfileLine::new(line.0)
    }
}
