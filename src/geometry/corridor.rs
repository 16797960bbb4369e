use super::ProfileLine;
use crate::error::{Error, Result};

use geo::{EuclideanDistance, LineLocatePoint, Point};

/// The buffered zone around a profile line.
///
/// Answers the two spatial queries of the extraction pass: whether a
/// planar point falls inside the buffer, and how far along the line the
/// point projects. `project` is only meaningful for points that pass
/// `contains`; callers gate on containment first.
#[derive(Clone, Debug)]
pub struct ProfileCorridor<'a> {
    line: &'a ProfileLine,
    buffer_distance: f64,
}

impl<'a> ProfileCorridor<'a> {
    pub fn new(line: &'a ProfileLine, buffer_distance: f64) -> Result<ProfileCorridor<'a>> {
        if !buffer_distance.is_finite() || buffer_distance <= 0. {
            return Err(Error::InvalidBufferDistance(buffer_distance));
        }
        Ok(ProfileCorridor {
            line,
            buffer_distance,
        })
    }

    pub fn line(&self) -> &ProfileLine {
        self.line
    }

    pub fn buffer_distance(&self) -> f64 {
        self.buffer_distance
    }

    /// True iff the distance from `position` to the profile line is
    /// within the buffer distance.
    pub fn contains(&self, position: Point<f64>) -> bool {
        position.euclidean_distance(self.line.as_linestring()) <= self.buffer_distance
    }

    /// Arc length from the line's start to the point on the line closest
    /// to `position`, clamped to `[0, line.length()]`. Only meaningful
    /// for positions that pass `contains`.
    pub fn project(&self, position: Point<f64>) -> Option<f64> {
        self.line
            .as_linestring()
            .line_locate_point(&position)
            .map(|fraction| fraction * self.line.length())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::Coord;

    fn straight_line() -> ProfileLine {
        ProfileLine::new(vec![Coord { x: 0., y: 0. }, Coord { x: 100., y: 0. }]).unwrap()
    }

    #[test]
    fn contains_respects_the_buffer() {
        let line = straight_line();
        let corridor = ProfileCorridor::new(&line, 5.).unwrap();

        assert!(corridor.contains(Point::new(10., 2.)));
        assert!(corridor.contains(Point::new(90., -3.)));
        assert!(!corridor.contains(Point::new(10., 20.)));
    }

    #[test]
    fn project_measures_along_the_line() {
        let line = straight_line();
        let corridor = ProfileCorridor::new(&line, 5.).unwrap();

        assert_eq!(corridor.project(Point::new(10., 2.)), Some(10.));
        assert_eq!(corridor.project(Point::new(50., 1.)), Some(50.));
        assert_eq!(corridor.project(Point::new(90., -3.)), Some(90.));
    }

    #[test]
    fn project_clamps_to_the_endpoints() {
        let line = straight_line();
        let corridor = ProfileCorridor::new(&line, 5.).unwrap();

        assert_eq!(corridor.project(Point::new(-20., 1.)), Some(0.));
        assert_eq!(corridor.project(Point::new(130., -2.)), Some(100.));
    }

    #[test]
    fn project_follows_corners() {
        let line = ProfileLine::new(vec![
            Coord { x: 0., y: 0. },
            Coord { x: 10., y: 0. },
            Coord { x: 10., y: 10. },
        ])
        .unwrap();
        let corridor = ProfileCorridor::new(&line, 2.).unwrap();

        // closest point on the second segment at (10, 5)
        assert!(corridor.contains(Point::new(11., 5.)));
        assert_eq!(corridor.project(Point::new(11., 5.)), Some(15.));
        // beyond the far corner
        assert_eq!(corridor.project(Point::new(20., 20.)), Some(20.));
    }

    #[test]
    fn projection_stays_within_line_bounds() {
        let line = ProfileLine::new(vec![
            Coord { x: 0., y: 0. },
            Coord { x: 30., y: 40. },
            Coord { x: 60., y: 0. },
        ])
        .unwrap();
        let corridor = ProfileCorridor::new(&line, 10.).unwrap();

        for &(x, y) in &[(0., 9.), (30., 48.), (45., 19.), (60., -9.), (-7., 0.)] {
            let p = Point::new(x, y);
            if corridor.contains(p) {
                let d = corridor.project(p).unwrap();
                assert!(d >= 0. && d <= line.length(), "distance {d} out of range");
            }
        }
    }

    #[test]
    fn buffer_must_be_positive() {
        let line = straight_line();
        assert!(matches!(
            ProfileCorridor::new(&line, 0.),
            Err(Error::InvalidBufferDistance(_))
        ));
        assert!(matches!(
            ProfileCorridor::new(&line, -3.),
            Err(Error::InvalidBufferDistance(_))
        ));
    }
}
