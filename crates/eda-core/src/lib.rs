//! Heuristic inference and chart-selection engine.
//!
//! One analysis pass runs these stages in order over a single table:
//!
//! 1. [`classify`] assigns every column a [`ColumnKind`](eda_model::ColumnKind)
//!    and picks at most one temporal column, rewriting it to timestamps
//! 2. [`summarize`] computes describe-style numeric statistics, top category
//!    counts and missing counts
//! 3. [`select_charts`] emits chart descriptors in report order
//! 4. [`analyze_entities`] finds customer, product and amount columns by name
//! 5. [`recommend`] lists follow-up steps for the detected structure
//!
//! [`analyze`] wires the stages together. [`chart_data`] materializes the
//! series a renderer needs for one descriptor.

pub mod charts;
pub mod classify;
pub mod entities;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod preview;
pub mod recommend;
pub mod series;
pub mod stats;
pub mod temporal;

pub use charts::select_charts;
pub use classify::{classify, kind_for_dtype};
pub use entities::{
    AMOUNT_KEYWORDS, OBJECT_KEYWORDS, SUBJECT_KEYWORDS, analyze_entities, detect_roles,
    find_column,
};
pub use error::{CoreError, Result, TemporalParseError};
pub use pipeline::{Analysis, analyze};
pub use preview::preview;
pub use recommend::recommend;
pub use series::{
    BoxGroup, ChartData, HistogramBin, MonthlyTotal, PieSlice, ScatterPoint, chart_data,
    histogram_bins, monthly_totals,
};
pub use stats::summarize;
pub use temporal::{detect_temporal, is_temporal_name};
