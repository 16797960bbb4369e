use std::path::PathBuf;

use clap::Parser;
use geo::Coord;
use profile_analyzer::DEFAULT_BUFFER_DISTANCE;

/// Analyze a lidar point cloud along an elevation profile line
#[derive(Parser, Clone)]
pub struct Args {
    /// Path to the input point source, accepts .las/.laz files or
    /// delimited text files with an x,y,z header
    #[arg(short, long)]
    pub in_file: PathBuf,

    /// Profile line vertices as "x1,y1 x2,y2 ..." in the coordinate
    /// system of the point source
    #[arg(short, long, allow_hyphen_values = true)]
    pub line: String,

    /// Maximum distance in meters from the profile line for a point to
    /// be included
    #[arg(short, long, default_value_t = DEFAULT_BUFFER_DISTANCE)]
    pub buffer: f64,

    /// Write the analysis result as JSON to the given path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_cli() -> Args {
        let args = Args::parse();

        assert!(
            args.buffer > 0.,
            "buffer distance must be a positive number"
        );
        assert!(
            !args.line.trim().is_empty(),
            "a profile line is required, pass --line \"x1,y1 x2,y2 ...\""
        );

        args
    }

    pub fn vertices(&self) -> Vec<Coord<f64>> {
        self.line
            .split_whitespace()
            .map(|pair| {
                let (x, y) = pair
                    .split_once(',')
                    .unwrap_or_else(|| panic!("expected a 'x,y' vertex, got '{pair}'"));
                Coord {
                    x: x.parse()
                        .unwrap_or_else(|_| panic!("non-numeric x coordinate '{x}'")),
                    y: y.parse()
                        .unwrap_or_else(|_| panic!("non-numeric y coordinate '{y}'")),
                }
            })
            .collect()
    }
}
