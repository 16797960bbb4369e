use geo::Coord;

/// One point accepted into the profile.
#[derive(Copy, Clone, Debug)]
pub struct ProfilePoint {
    /// Planar position in the source coordinate system.
    pub position: Coord<f64>,
    pub elevation: f64,
    /// Arc length from the profile line's start to this point's
    /// projection, fixed at extraction time.
    pub distance: f64,
    pub intensity: Option<f64>,
    pub classification: Option<u8>,
    /// The (x, y, z) triple as read from the source, kept for export.
    pub source_coordinates: [f64; 3],
}
