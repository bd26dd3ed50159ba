//! `mdtrend` reads the two-column time-series files that molecular
//! dynamics analysis tools write (time vs. RMSD, minimum distance,
//! contact count), smooths them with a sliding-window mean, and renders
//! an annotated chart per input file.
//!
//! The [`text`] module parses the `@`/`#`-commented text format into a
//! [`TimeSeries`], [`smooth`] computes the moving average with
//! valid-convolution semantics, and [`plot`] draws both curves with the
//! overall mean marked on the chart. The [`job`] module holds the fixed
//! batch the `mdtrend` binary runs over an `analysis/` directory.
//!
//! # Usage
//! ```
//! use mdtrend::{moving_average_series, TimeSeries};
//!
//! let series: TimeSeries = (0..6).map(|i| (i as f64, (i + 1) as f64)).collect();
//! let smoothed = moving_average_series(&series, 3).unwrap();
//! assert_eq!(smoothed.value_array, vec![2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(smoothed.time_array, vec![2.0, 3.0, 4.0, 5.0]);
//! ```
pub mod arrayops;
pub mod job;
pub mod plot;
pub mod smooth;
pub mod text;

pub use crate::arrayops::TimeSeries;
pub use crate::job::{run_all, run_job, PlotJob};
pub use crate::smooth::{moving_average, moving_average_series, MovingAverageError};
pub use crate::text::{series_from_file, TextError};
