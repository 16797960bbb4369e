mod parser;

use parser::Args;

use profile_analyzer::{
    analyze_with_progress, AnalysisResult, AnalysisSession, CsvPointSource, LasPointSource,
    ProfileLine,
};

use std::fs::File;

fn main() {
    env_logger::init();

    let args = Args::parse_cli();

    let line = ProfileLine::new(args.vertices()).expect("Invalid profile line");
    let session = AnalysisSession::new(line, args.buffer);

    println!(
        "Profile line: {:.2} m, buffer {:.2} m",
        session.line.length(),
        session.buffer_distance
    );

    let mut last_percent = 0;
    let progress = |fraction: f64| {
        let percent = (fraction * 100.) as u32;
        if percent >= last_percent + 10 {
            last_percent = percent - percent % 10;
            println!("  ...extraction reached {last_percent}% of the profile");
        }
    };

    let extension = args
        .in_file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let result = match extension.as_str() {
        "las" | "laz" => {
            let mut source =
                LasPointSource::from_path(&args.in_file).expect("Could not open las/laz file");
            println!("Reading {} points...", source.header_point_count());
            analyze_with_progress(&session, source.points(), progress)
        }
        "csv" | "txt" | "xyz" => {
            let mut source =
                CsvPointSource::from_path(&args.in_file).expect("Could not open point text file");
            println!("Reading points...");
            analyze_with_progress(&session, source.points(), progress)
        }
        other => panic!("Unsupported point source format '{other}'"),
    }
    .expect("Analysis failed");

    print_report(&result);

    if let Some(path) = args.output {
        let file = File::create(&path).expect("Could not create the output file");
        serde_json::to_writer_pretty(file, &result).expect("Could not write the analysis result");
        println!("Wrote analysis result to {}", path.display());
    }
}

fn print_report(result: &AnalysisResult) {
    println!();
    println!("=== PROFILE ANALYSIS ===");

    if result.point_count == 0 {
        println!("No points inside the profile buffer");
        if result.skipped_records > 0 {
            println!("Skipped records:  {}", result.skipped_records);
        }
        return;
    }

    println!("Points:           {}", result.point_count);
    if result.skipped_records > 0 {
        println!("Skipped records:  {}", result.skipped_records);
    }
    println!("Covered extent:   {:.2} m", result.profile_length);

    if let Some(elevation) = &result.elevation_stats {
        println!();
        println!("--- Elevation ---");
        println!("Minimum:    {:.2} m", elevation.min);
        println!("Maximum:    {:.2} m", elevation.max);
        println!("Mean:       {:.2} m", elevation.mean);
        println!("Std dev:    {:.2} m", elevation.std);
        println!("Range:      {:.2} m", elevation.range);
    }

    if let Some(intensity) = &result.intensity_stats {
        println!();
        println!("--- Intensity ---");
        println!("Minimum:    {:.0}", intensity.min);
        println!("Maximum:    {:.0}", intensity.max);
        println!("Mean:       {:.1}", intensity.mean);
        println!("Std dev:    {:.1}", intensity.std);
    }

    if let Some(terrain) = &result.terrain_stats {
        println!();
        println!("--- Terrain slopes ---");
        println!("Mean slope: {:.2}°", terrain.mean_slope);
        println!("Max slope:  {:.2}°", terrain.max_slope);
        println!("Min slope:  {:.2}°", terrain.min_slope);
        println!("Slope std:  {:.2}°", terrain.slope_std);
    }

    if let Some(roughness) = &result.roughness_stats {
        println!();
        println!("--- Roughness ---");
        println!("Roughness index: {:.3} m", roughness.roughness_index);
        println!("Trend slope:     {:.6}", roughness.trend_slope);
        println!("Max deviation:   {:.3} m", roughness.max_deviation);
    }
}
