//! Extraction and analysis of elevation profiles from lidar point
//! clouds: buffer a reference polyline, project the points that fall
//! inside the buffer onto a distance-along-profile axis and derive
//! elevation, slope and roughness statistics from the ordered result.

pub mod analysis;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod source;
pub mod statistics;

mod consts;

pub use analysis::{analyze, analyze_with_progress, AnalysisResult, AnalysisSession};
pub use consts::*;
pub use error::{Error, Result};
pub use extract::{extract_profile_points, extract_with_progress, Extraction};
pub use geometry::{ProfileCorridor, ProfileLine, ProfilePoint};
pub use source::{CsvPointSource, LasPointSource, RawPoint};
pub use statistics::{RoughnessStats, TerrainStats, ValueStats};
