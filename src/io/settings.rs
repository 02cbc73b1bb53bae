//! JSON settings documents and their sanitization into a generator config
//!
//! Settings come from users, so out-of-range values are replaced by defaults
//! (with a warning) instead of failing. Structural problems such as unknown
//! fields still fail with a configuration error.

use crate::algorithm::builder::GeneratorConfig;
use crate::algorithm::cells::IgnoreColor;
use crate::algorithm::range::SampledRange;
use crate::algorithm::surrounding::SurroundingConfig;
use crate::io::configuration::{
    DEFAULT_COLOR, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED, MAX_CELLS, MAX_RANGE_VALUE,
    MAX_SEED,
};
use crate::io::error::{DotterError, Result, config_error};
use crate::spatial::Rgba;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ignore-color rule as written in settings files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IgnoreColorSettings {
    /// Hex color to drop
    pub color: String,
    /// Alpha at or below which cells are dropped
    #[serde(default)]
    pub opacity_threshold: i64,
    /// Largest per-channel difference still matching
    #[serde(default)]
    pub max_deviation: i64,
}

/// `{ estimated, min, max }` range as written in settings files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeSettings {
    /// Mean the draws centre on
    pub estimated: f64,
    /// Smallest value
    pub min: i64,
    /// Largest value
    pub max: i64,
}

/// Surrounding growth as written in settings files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SurroundingSettings {
    /// Base hex color of grown cells
    pub color: String,
    /// Largest absolute offset per channel
    #[serde(default)]
    pub color_variation: i64,
    /// Largest absolute offset on alpha
    #[serde(default)]
    pub alpha_variation: i64,
    /// Rows added above and below
    pub height: RangeSettings,
    /// Cells grown per direction
    pub depth: RangeSettings,
    /// Width of grown cells
    pub span: RangeSettings,
}

/// Top-level settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Seed shared by every sampler
    #[serde(default)]
    pub seed: i64,
    /// Number of grid rows
    #[serde(default = "default_rows")]
    pub rows_count: i64,
    /// Number of grid columns
    #[serde(default = "default_columns")]
    pub columns_count: i64,
    /// Optional ignore-color rule
    #[serde(default)]
    pub ignore_color: Option<IgnoreColorSettings>,
    /// Optional span merging range
    #[serde(default)]
    pub cell_span: Option<RangeSettings>,
    /// Optional palette of hex colors
    #[serde(default)]
    pub main_palette: Option<Vec<String>>,
    /// Optional surrounding growth
    #[serde(default)]
    pub surrounding_cells: Option<SurroundingSettings>,
}

const fn default_rows() -> i64 {
    DEFAULT_ROWS as i64
}

const fn default_columns() -> i64 {
    DEFAULT_COLUMNS as i64
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: i64::from(DEFAULT_SEED),
            rows_count: default_rows(),
            columns_count: default_columns(),
            ignore_color: None,
            cell_span: None,
            main_palette: None,
            surrounding_cells: None,
        }
    }
}

impl Settings {
    /// Parse a settings document
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed JSON, unknown fields or wrong types
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|source| config_error("settings", &"<document>", &source))
    }

    /// Read and parse a settings file
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be read, otherwise see [`Self::from_json`]
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DotterError::FileSystem {
            path: path.to_path_buf(),
            operation: "read settings",
            source,
        })?;
        Self::from_json(&text)
    }

    /// Replace invalid values by defaults and build the generator config
    pub fn into_config(self) -> GeneratorConfig {
        let seed = match u32::try_from(self.seed) {
            Ok(seed) if seed < MAX_SEED => seed,
            _ => {
                warn!(
                    "seed {} outside 0..{MAX_SEED}, using {DEFAULT_SEED}",
                    self.seed
                );
                DEFAULT_SEED
            }
        };

        let (rows, columns) = match (
            usize::try_from(self.rows_count),
            usize::try_from(self.columns_count),
        ) {
            (Ok(rows), Ok(columns))
                if rows > 0 && columns > 0 && rows.saturating_mul(columns) <= MAX_CELLS =>
            {
                (rows, columns)
            }
            _ => {
                warn!(
                    "grid {}x{} invalid or above {MAX_CELLS} cells, using {DEFAULT_ROWS}x{DEFAULT_COLUMNS}",
                    self.rows_count, self.columns_count
                );
                (DEFAULT_ROWS, DEFAULT_COLUMNS)
            }
        };

        let ignore_color = self.ignore_color.map(|ignore| IgnoreColor {
            color: sanitize_color("ignoreColor.color", &ignore.color),
            max_deviation: sanitize_channel("ignoreColor.maxDeviation", ignore.max_deviation),
            opacity_threshold: sanitize_channel(
                "ignoreColor.opacityThreshold",
                ignore.opacity_threshold,
            ),
        });

        let cell_span = self
            .cell_span
            .map(|range| sanitize_range("cellSpan", range, 1));

        let main_palette = self.main_palette.and_then(|palette| {
            let colors: Vec<Rgba> = palette
                .iter()
                .filter_map(|hex| match Rgba::from_hex(hex) {
                    Ok(color) => Some(color),
                    Err(error) => {
                        warn!("dropping palette entry: {error}");
                        None
                    }
                })
                .collect();
            if colors.is_empty() {
                warn!("main palette has no valid colors, palette disabled");
                None
            } else {
                Some(colors)
            }
        });

        let surrounding_cells = self.surrounding_cells.map(|surrounding| SurroundingConfig {
            color: sanitize_color("surroundingCells.color", &surrounding.color),
            color_variation: sanitize_channel(
                "surroundingCells.colorVariation",
                surrounding.color_variation,
            ),
            alpha_variation: sanitize_channel(
                "surroundingCells.alphaVariation",
                surrounding.alpha_variation,
            ),
            height: sanitize_range("surroundingCells.height", surrounding.height, 0),
            depth: sanitize_range("surroundingCells.depth", surrounding.depth, 0),
            span: sanitize_range("surroundingCells.span", surrounding.span, 1),
        });

        GeneratorConfig {
            seed,
            rows,
            columns,
            ignore_color,
            cell_span,
            main_palette,
            surrounding_cells,
        }
    }
}

fn sanitize_color(field: &str, hex: &str) -> Rgba {
    Rgba::from_hex(hex).unwrap_or_else(|error| {
        warn!("{field}: {error}, using {DEFAULT_COLOR}");
        Rgba::from_hex(DEFAULT_COLOR).unwrap_or(Rgba::TRANSPARENT)
    })
}

fn sanitize_channel(field: &str, value: i64) -> u8 {
    u8::try_from(value).unwrap_or_else(|_out_of_range| {
        let clamped = value.clamp(0, 255) as u8;
        warn!("{field}: {value} outside 0..=255, using {clamped}");
        clamped
    })
}

fn sanitize_range(field: &str, range: RangeSettings, lower_bound: u32) -> SampledRange {
    let bound = |value: i64| -> u32 {
        let bounded = value.clamp(i64::from(lower_bound), i64::from(MAX_RANGE_VALUE));
        if bounded != value {
            warn!("{field}: {value} outside {lower_bound}..={MAX_RANGE_VALUE}, using {bounded}");
        }
        bounded as u32
    };
    let (mut min, mut max) = (bound(range.min), bound(range.max));
    if min > max {
        warn!("{field}: min {min} exceeds max {max}, swapping");
        std::mem::swap(&mut min, &mut max);
    }

    let estimated = if range.estimated.is_finite() {
        range.estimated.clamp(f64::from(min), f64::from(max))
    } else {
        warn!("{field}: estimated is not a number, using the midpoint");
        f64::midpoint(f64::from(min), f64::from(max))
    };
    if (estimated - range.estimated).abs() > f64::EPSILON && range.estimated.is_finite() {
        warn!(
            "{field}: estimated {} clamped to {estimated}",
            range.estimated
        );
    }

    SampledRange::new(min, max, estimated)
}
