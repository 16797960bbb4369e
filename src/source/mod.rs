pub mod csv;
pub mod las;

pub use self::csv::CsvPointSource;
pub use self::las::LasPointSource;

/// One record from a raw point source, before spatial filtering.
///
/// Optional fields stay absent when the source has no such attribute;
/// absence is never encoded as a magic value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub intensity: Option<f64>,
    pub classification: Option<u8>,
}

impl RawPoint {
    pub fn new(x: f64, y: f64, z: f64) -> RawPoint {
        RawPoint {
            x,
            y,
            z,
            intensity: None,
            classification: None,
        }
    }
}

impl From<::las::Point> for RawPoint {
    fn from(p: ::las::Point) -> RawPoint {
        // the las format always records intensity and classification
        RawPoint {
            x: p.x,
            y: p.y,
            z: p.z,
            intensity: Some(p.intensity as f64),
            classification: Some(u8::from(p.classification)),
        }
    }
}
