// default maximum distance in meters from the profile line for a point
// to be included
pub const DEFAULT_BUFFER_DISTANCE: f64 = 5.0;

// slope analysis needs at least two usable segments
pub const MIN_TERRAIN_POINTS: usize = 3;
// a trend line through fewer points says nothing about roughness
pub const MIN_ROUGHNESS_POINTS: usize = 5;
