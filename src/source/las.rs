use super::RawPoint;
use crate::error::Result;

use las::Reader;
use std::path::Path;

/// Raw points from a las/laz file.
pub struct LasPointSource {
    reader: Reader,
}

impl LasPointSource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<LasPointSource> {
        let reader = Reader::from_path(path)?;
        Ok(LasPointSource { reader })
    }

    /// Number of points the file header promises, for sizing hints only.
    pub fn header_point_count(&self) -> u64 {
        self.reader.header().number_of_points()
    }

    /// Lazy pass over the file; unreadable records surface as `Err` and
    /// are skipped (and counted) by the extraction pass.
    pub fn points(&mut self) -> impl Iterator<Item = Result<RawPoint>> + '_ {
        self.reader
            .points()
            .map(|record| record.map(RawPoint::from).map_err(Into::into))
    }
}
