// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Shelfscan CLI

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use shelfscan::geometry::SectionFilter;
use shelfscan::layout::{self, LayoutSection};
use shelfscan::{import_obj_file, ShelfAnalysis, ShelfAnalyzer, ShelfLayout};

#[derive(Parser)]
#[command(name = "shelfscan")]
#[command(about = "Shelfscan - shelf mesh segmentation engine", long_about = None)]
struct Cli {
    /// Input OBJ file
    #[arg(value_name = "FILE")]
    input: String,

    /// Shelf layout JSON to pair detected surfaces with
    #[arg(short, long, value_name = "FILE")]
    layout: Option<String>,

    /// Number of highest sections to discard as the shelf's top cap
    #[arg(long, default_value = "3")]
    trim_top: usize,

    /// Number of lowest sections to discard as the shelf's floor
    #[arg(long, default_value = "3")]
    trim_bottom: usize,

    /// Emit the analysis as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    analysis: &'a ShelfAnalysis,
    layout: Option<&'a ShelfLayout>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mesh = import_obj_file(&cli.input)?;
    if cli.verbose {
        println!(
            "Parsed {}: {} vertices, {} faces",
            cli.input,
            mesh.vertex_count(),
            mesh.face_count()
        );
    }

    let analyzer = ShelfAnalyzer::with_filter(SectionFilter {
        trim_highest: cli.trim_top,
        trim_lowest: cli.trim_bottom,
    });
    let analysis = analyzer.analyze(&mesh)?;

    let shelf_layout = match &cli.layout {
        Some(path) => Some(layout::import_layout_file(path)?),
        None => None,
    };

    if cli.json {
        let report = JsonReport {
            analysis: &analysis,
            layout: shelf_layout.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&cli.input, &analysis, shelf_layout.as_ref());
    Ok(())
}

fn print_report(input: &str, analysis: &ShelfAnalysis, shelf_layout: Option<&ShelfLayout>) {
    println!("{} {}", "Shelf:".bold(), input);
    println!(
        "  {} vertices, {} triangles",
        analysis.shelf.vertex_count(),
        analysis.shelf.triangle_count()
    );
    println!(
        "{} {}",
        "Surfaces detected:".bold(),
        analysis.surface_count().to_string().green()
    );

    let paired: Vec<Option<&LayoutSection>> = match shelf_layout {
        Some(l) => {
            let pairs = layout::pair_sections(&analysis.surfaces, l);
            let mut slots: Vec<Option<&LayoutSection>> = vec![None; analysis.surface_count()];
            for (i, &(_, section)) in pairs.iter().enumerate() {
                slots[i] = Some(section);
            }
            slots
        }
        None => vec![None; analysis.surface_count()],
    };

    for (i, surface) in analysis.surfaces.iter().enumerate() {
        let bounds = surface.mesh.bounding_box();
        let size = bounds.size();
        print!(
            "  [{}] height {:.3}  {} faces  {:.2} x {:.2} m",
            i,
            surface.height,
            surface.faces.len(),
            size.x,
            size.z
        );
        match paired[i] {
            Some(section) => println!(
                "  -> layout section {} ({} items)",
                section.id,
                section.items.len()
            ),
            None => println!(),
        }
    }

    if let Some(l) = shelf_layout {
        if l.sections.len() != analysis.surface_count() {
            println!(
                "{} layout has {} sections, {} surfaces detected",
                "warning:".yellow().bold(),
                l.sections.len(),
                analysis.surface_count()
            );
        }
    }
}
