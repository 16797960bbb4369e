use crate::geometry::ProfilePoint;
use crate::{MIN_ROUGHNESS_POINTS, MIN_TERRAIN_POINTS};

use serde::Serialize;

/// Descriptive statistics for one scalar attribute of the profile.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ValueStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    pub range: f64,
}

impl ValueStats {
    pub fn from_values(values: &[f64]) -> Option<ValueStats> {
        if values.is_empty() {
            return None;
        }

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut sum = 0.;
        for &v in values {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
            sum += v;
        }

        let n = values.len() as f64;
        let mean = sum / n;
        let std = (values.iter().fold(0., |acc, v| acc + (v - mean).powi(2)) / n).sqrt();

        Some(ValueStats {
            min,
            max,
            mean,
            std,
            range: max - min,
        })
    }
}

/// Slope angles between consecutive profile points.
#[derive(Clone, Debug, Serialize)]
pub struct TerrainStats {
    /// Slope angle in degrees per usable consecutive pair, in
    /// along-profile order.
    pub slopes: Vec<f64>,
    pub mean_slope: f64,
    pub max_slope: f64,
    pub min_slope: f64,
    pub slope_std: f64,
}

impl TerrainStats {
    /// Expects `points` sorted by `distance` ascending; the caller sorts
    /// once before any statistics run.
    ///
    /// Pairs whose projections coincide (equal distances) carry no slope
    /// information and are skipped rather than counted as flat. `None`
    /// below three points.
    pub fn from_profile(points: &[ProfilePoint]) -> Option<TerrainStats> {
        if points.len() < MIN_TERRAIN_POINTS {
            return None;
        }

        let mut slopes = Vec::with_capacity(points.len() - 1);
        for pair in points.windows(2) {
            let run = pair[1].distance - pair[0].distance;
            if run == 0. {
                continue;
            }
            let gradient = (pair[1].elevation - pair[0].elevation) / run;
            slopes.push(gradient.atan().to_degrees());
        }

        let summary = ValueStats::from_values(&slopes);
        Some(TerrainStats {
            mean_slope: summary.map_or(0., |s| s.mean),
            max_slope: summary.map_or(0., |s| s.max),
            min_slope: summary.map_or(0., |s| s.min),
            slope_std: summary.map_or(0., |s| s.std),
            slopes,
        })
    }
}

/// Deviation of the elevation sequence from its linear trend.
#[derive(Clone, Debug, Serialize)]
pub struct RoughnessStats {
    /// Population standard deviation of the trend residuals.
    pub roughness_index: f64,
    pub trend_slope: f64,
    pub trend_intercept: f64,
    pub max_deviation: f64,
    /// Residuals parallel to the distance-sorted point sequence, for
    /// downstream plotting.
    pub deviations: Vec<f64>,
}

impl RoughnessStats {
    /// Expects `points` sorted by `distance` ascending, like
    /// [`TerrainStats::from_profile`]. `None` below five points.
    pub fn from_profile(points: &[ProfilePoint]) -> Option<RoughnessStats> {
        if points.len() < MIN_ROUGHNESS_POINTS {
            return None;
        }

        let distances: Vec<f64> = points.iter().map(|p| p.distance).collect();
        let elevations: Vec<f64> = points.iter().map(|p| p.elevation).collect();

        let (trend_slope, trend_intercept) = linear_trend(&distances, &elevations);

        let deviations: Vec<f64> = distances
            .iter()
            .zip(&elevations)
            .map(|(d, z)| z - (trend_slope * d + trend_intercept))
            .collect();

        let residual_stats = ValueStats::from_values(&deviations).expect("at least five residuals");
        let max_deviation = deviations.iter().fold(0., |acc: f64, d| acc.max(d.abs()));

        Some(RoughnessStats {
            roughness_index: residual_stats.std,
            trend_slope,
            trend_intercept,
            max_deviation,
            deviations,
        })
    }
}

/// Least-squares line `y = slope * x + intercept`.
///
/// When all x values coincide the trend degrades to the horizontal line
/// through the mean, keeping the residuals finite.
fn linear_trend(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.;
    let mut variance = 0.;
    for (x, y) in xs.iter().zip(ys) {
        covariance += (x - mean_x) * (y - mean_y);
        variance += (x - mean_x).powi(2);
    }

    if variance == 0. {
        return (0., mean_y);
    }

    let slope = covariance / variance;
    (slope, mean_y - slope * mean_x)
}
