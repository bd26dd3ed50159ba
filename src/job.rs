//! The fixed batch of charts produced from a completed MD analysis
//! run: minimum distance, contact count, and the protein and ligand
//! RMSD traces, each smoothed with the same 50-sample window.
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::plot;
use crate::smooth;
use crate::text;

/// Directory under the working directory holding both the analysis
/// output files read and the chart images written.
pub const ANALYSIS_DIR: &str = "analysis";

pub const DEFAULT_AVERAGE_WINDOW: usize = 50;

/// One chart to produce from one analysis file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotJob {
    pub input_file: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub output_file: &'static str,
    pub average_window: usize,
}

/// The full workload. Jobs are discovered nowhere else.
pub fn standard_jobs() -> [PlotJob; 4] {
    [
        PlotJob {
            input_file: "mindist_all_segments.xvg",
            title: "mindist lig-pro",
            x_label: "Time (ns)",
            y_label: "mindist (nm)",
            output_file: "image3.png",
            average_window: DEFAULT_AVERAGE_WINDOW,
        },
        PlotJob {
            input_file: "numberofcontacts_all_segments.xvg",
            title: "Number of contacts lig-pro",
            x_label: "Time (ns)",
            y_label: "Number",
            output_file: "image4.png",
            average_window: DEFAULT_AVERAGE_WINDOW,
        },
        PlotJob {
            input_file: "rmsd_all_segments.xvg",
            title: "Protein RMSD",
            x_label: "Time (ns)",
            y_label: "RMSD (nm)",
            output_file: "image1.png",
            average_window: DEFAULT_AVERAGE_WINDOW,
        },
        PlotJob {
            input_file: "rmsd_lig_all_segments.xvg",
            title: "Ligand RMSD",
            x_label: "Time (ns)",
            y_label: "RMSD (nm)",
            output_file: "image2.png",
            average_window: DEFAULT_AVERAGE_WINDOW,
        },
    ]
}

/// Load, smooth, and render one job relative to `base_dir`. The
/// output directory must already exist.
pub fn run_job(job: &PlotJob, base_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let analysis_dir = base_dir.join(ANALYSIS_DIR);
    let input_path = analysis_dir.join(job.input_file);
    info!("loading {}", input_path.display());
    let series = text::series_from_file(&input_path)?;
    let smoothed = smooth::moving_average_series(&series, job.average_window)?;
    if smoothed.is_empty() {
        warn!(
            "{}: window of {} samples exceeds the {} data points, no trend line",
            job.input_file,
            job.average_window,
            series.len()
        );
    }
    let output_path = analysis_dir.join(job.output_file);
    plot::draw_chart_file(
        &series,
        &smoothed,
        job.title,
        job.x_label,
        job.y_label,
        &output_path,
    )?;
    info!("wrote {}", output_path.display());
    Ok(())
}

/// Run the standard jobs in order, creating the output directory
/// first. The first failing job aborts the batch.
pub fn run_all(base_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(base_dir.join(ANALYSIS_DIR))?;
    for job in standard_jobs() {
        run_job(&job, base_dir)?;
    }
    Ok(())
}
