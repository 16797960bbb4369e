use crate::error::Result;
use crate::extract::{extract_with_progress, Extraction};
use crate::geometry::{ProfileCorridor, ProfileLine};
use crate::source::RawPoint;
use crate::statistics::{RoughnessStats, TerrainStats, ValueStats};

use log::info;
use serde::Serialize;

/// Parameters for one analysis run, owned by the caller.
///
/// Each invocation of [`analyze`] reads the session and owns its own
/// intermediate state, so independent runs never share anything mutable.
#[derive(Clone, Debug)]
pub struct AnalysisSession {
    pub line: ProfileLine,
    pub buffer_distance: f64,
}

impl AnalysisSession {
    pub fn new(line: ProfileLine, buffer_distance: f64) -> AnalysisSession {
        AnalysisSession {
            line,
            buffer_distance,
        }
    }
}

/// Aggregate outcome of one analysis run. Value-only and superseded
/// wholesale by the next run.
///
/// The optional groups are policy, not errors: intensity statistics need
/// at least one point carrying intensity, terrain statistics at least
/// three points, roughness statistics at least five.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResult {
    pub point_count: usize,
    /// Extent of the profile actually covered by accepted points:
    /// largest minus smallest distance along the line.
    pub profile_length: f64,
    /// Malformed source records dropped during extraction.
    pub skipped_records: usize,
    pub elevation_stats: Option<ValueStats>,
    pub intensity_stats: Option<ValueStats>,
    pub terrain_stats: Option<TerrainStats>,
    pub roughness_stats: Option<RoughnessStats>,
}

impl AnalysisResult {
    /// The explicit "no data" state: extraction ran, nothing fell inside
    /// the buffer.
    fn empty(skipped_records: usize) -> AnalysisResult {
        AnalysisResult {
            point_count: 0,
            profile_length: 0.,
            skipped_records,
            elevation_stats: None,
            intensity_stats: None,
            terrain_stats: None,
            roughness_stats: None,
        }
    }
}

/// Run the whole pipeline: filter and project the raw points, sort them
/// along the profile, derive the statistic groups.
///
/// Blocking and free of I/O; callers wanting a responsive UI run it off
/// the interactive thread and discard superseded results.
pub fn analyze<I>(session: &AnalysisSession, source: I) -> Result<AnalysisResult>
where
    I: IntoIterator<Item = Result<RawPoint>>,
{
    analyze_with_progress(session, source, |_| {})
}

/// Same as [`analyze`] with an advisory extraction-progress callback,
/// see [`extract_with_progress`].
pub fn analyze_with_progress<I, F>(
    session: &AnalysisSession,
    source: I,
    report_progress: F,
) -> Result<AnalysisResult>
where
    I: IntoIterator<Item = Result<RawPoint>>,
    F: FnMut(f64),
{
    let corridor = ProfileCorridor::new(&session.line, session.buffer_distance)?;
    let Extraction {
        mut points,
        skipped,
    } = extract_with_progress(&corridor, source, report_progress)?;

    if points.is_empty() {
        info!("no points inside the profile buffer");
        return Ok(AnalysisResult::empty(skipped));
    }

    // the single ordering pass every statistic below relies on
    points.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let elevations: Vec<f64> = points.iter().map(|p| p.elevation).collect();
    let intensities: Vec<f64> = points.iter().filter_map(|p| p.intensity).collect();
    let covered = points[points.len() - 1].distance - points[0].distance;

    Ok(AnalysisResult {
        point_count: points.len(),
        profile_length: covered,
        skipped_records: skipped,
        elevation_stats: ValueStats::from_values(&elevations),
        intensity_stats: ValueStats::from_values(&intensities),
        terrain_stats: TerrainStats::from_profile(&points),
        roughness_stats: RoughnessStats::from_profile(&points),
    })
}
