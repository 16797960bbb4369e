use crate::error::{Error, Result};
use crate::geometry::{ProfileCorridor, ProfilePoint};
use crate::source::RawPoint;

use geo::Point;
use log::warn;

/// Outcome of one extraction pass.
///
/// The point order is whatever the source produced; the analysis stage
/// sorts by `distance` before computing statistics.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub points: Vec<ProfilePoint>,
    /// Malformed records dropped along the way.
    pub skipped: usize,
}

/// Filter a raw point source through the corridor, tagging every
/// accepted point with its distance along the profile line.
///
/// Malformed records (`Err` items, non-finite coordinates) are skipped
/// and counted, never fatal. A source that yields no records at all is
/// an error; a source whose records all fall outside the corridor is
/// not, it produces an empty extraction.
pub fn extract_profile_points<I>(corridor: &ProfileCorridor, source: I) -> Result<Extraction>
where
    I: IntoIterator<Item = Result<RawPoint>>,
{
    extract_with_progress(corridor, source, |_| {})
}

/// Same as [`extract_profile_points`], reporting advisory progress as
/// the fraction of the profile length covered by the furthest accepted
/// point so far. The callback sees a non-decreasing value in `[0, 1]`.
pub fn extract_with_progress<I, F>(
    corridor: &ProfileCorridor,
    source: I,
    mut report_progress: F,
) -> Result<Extraction>
where
    I: IntoIterator<Item = Result<RawPoint>>,
    F: FnMut(f64),
{
    let length = corridor.line().length();

    let mut points = Vec::new();
    let mut skipped = 0usize;
    let mut record_count = 0usize;
    let mut furthest = 0.;

    for record in source {
        record_count += 1;

        let raw = match record {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping unreadable point record: {e}");
                skipped += 1;
                continue;
            }
        };
        if !raw.x.is_finite() || !raw.y.is_finite() || !raw.z.is_finite() {
            warn!("skipping point record with non-finite coordinates");
            skipped += 1;
            continue;
        }

        let position = Point::new(raw.x, raw.y);
        if !corridor.contains(position) {
            continue;
        }
        let Some(distance) = corridor.project(position) else {
            continue;
        };

        points.push(ProfilePoint {
            position: position.into(),
            elevation: raw.z,
            distance,
            intensity: raw.intensity,
            classification: raw.classification,
            source_coordinates: [raw.x, raw.y, raw.z],
        });

        if distance > furthest {
            furthest = distance;
            report_progress((furthest / length).clamp(0., 1.));
        }
    }

    if record_count == 0 {
        return Err(Error::EmptyInput);
    }

    Ok(Extraction { points, skipped })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::ProfileLine;
    use geo::Coord;

    fn corridor_fixture(line: &ProfileLine) -> ProfileCorridor {
        ProfileCorridor::new(line, 5.).unwrap()
    }

    fn straight_line() -> ProfileLine {
        ProfileLine::new(vec![Coord { x: 0., y: 0. }, Coord { x: 100., y: 0. }]).unwrap()
    }

    fn scenario_points() -> Vec<Result<RawPoint>> {
        vec![
            Ok(RawPoint {
                intensity: Some(50.),
                ..RawPoint::new(10., 2., 5.)
            }),
            Ok(RawPoint {
                intensity: Some(60.),
                ..RawPoint::new(50., 1., 8.)
            }),
            Ok(RawPoint::new(90., -3., 6.)),
        ]
    }

    #[test]
    fn accepts_points_inside_the_buffer() {
        let line = straight_line();
        let corridor = corridor_fixture(&line);

        let extraction = extract_profile_points(&corridor, scenario_points()).unwrap();

        assert_eq!(extraction.points.len(), 3);
        assert_eq!(extraction.skipped, 0);
        let distances: Vec<f64> = extraction.points.iter().map(|p| p.distance).collect();
        assert_eq!(distances, vec![10., 50., 90.]);
    }

    #[test]
    fn drops_points_outside_the_buffer() {
        let line = straight_line();
        let corridor = corridor_fixture(&line);

        // perpendicular distance 20 against a buffer of 5
        let extraction =
            extract_profile_points(&corridor, vec![Ok(RawPoint::new(10., 20., 5.))]).unwrap();

        assert!(extraction.points.is_empty());
        assert_eq!(extraction.skipped, 0);
    }

    #[test]
    fn optional_fields_pass_through_unchanged() {
        let line = straight_line();
        let corridor = corridor_fixture(&line);

        let extraction = extract_profile_points(&corridor, scenario_points()).unwrap();

        assert_eq!(extraction.points[0].intensity, Some(50.));
        assert_eq!(extraction.points[2].intensity, None);
        assert_eq!(extraction.points[0].classification, None);
        assert_eq!(extraction.points[1].source_coordinates, [50., 1., 8.]);
    }

    #[test]
    fn empty_source_is_an_error() {
        let line = straight_line();
        let corridor = corridor_fixture(&line);

        let result = extract_profile_points(&corridor, std::iter::empty());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn malformed_records_are_counted_not_fatal() {
        let line = straight_line();
        let corridor = corridor_fixture(&line);

        let source = vec![
            Ok(RawPoint::new(10., 0., 5.)),
            Err(Error::MalformedRecord("non-numeric 'x' value 'a'".into())),
            Ok(RawPoint::new(f64::NAN, 0., 5.)),
            Ok(RawPoint::new(50., 0., 8.)),
        ];

        let extraction = extract_profile_points(&corridor, source).unwrap();
        assert_eq!(extraction.points.len(), 2);
        assert_eq!(extraction.skipped, 2);
    }

    #[test]
    fn extraction_is_idempotent() {
        let line = straight_line();
        let corridor = corridor_fixture(&line);

        let first = extract_profile_points(&corridor, scenario_points()).unwrap();
        let second = extract_profile_points(&corridor, scenario_points()).unwrap();

        assert_eq!(first.points.len(), second.points.len());
        for (a, b) in first.points.iter().zip(&second.points) {
            assert_eq!(a.distance, b.distance);
            assert_eq!(a.elevation, b.elevation);
        }
    }

    #[test]
    fn progress_is_monotone_and_bounded() {
        let line = straight_line();
        let corridor = corridor_fixture(&line);

        let mut reported = Vec::new();
        extract_with_progress(&corridor, scenario_points(), |fraction| {
            reported.push(fraction)
        })
        .unwrap();

        assert!(!reported.is_empty());
        assert!(reported.windows(2).all(|w| w[0] <= w[1]));
        assert!(reported.iter().all(|f| (0. ..=1.).contains(f)));
        assert_eq!(*reported.last().unwrap(), 0.9);
    }
}
