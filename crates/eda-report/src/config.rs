//! Output locations and switches for one report.

use std::path::{Path, PathBuf};

/// Where and what to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Root directory; each dataset gets its own subfolder.
    pub output_dir: PathBuf,
    /// Write chart artifacts. When false, charts are still selected and named.
    pub render_charts: bool,
    /// Write `report.json`.
    pub write_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("eda-output"),
            render_charts: true,
            write_json: true,
        }
    }
}

impl ReportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Subfolder for one input, named after the file stem.
    pub fn dataset_dir(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "dataset".to_string());
        self.output_dir.join(stem)
    }
}
