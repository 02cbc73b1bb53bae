//! Sampler constants and runtime configuration defaults

/// Fraction removed from the weight of the value just drawn
pub const SELF_DECAY_FACTOR: f64 = 0.1;

/// Fraction added to the weights of the values not drawn
pub const NEIGHBOUR_BOOST_FACTOR: f64 = 0.1;

/// Exponent applied to the normalised distance from the drawn index,
/// flattening the falloff of the neighbour boost
pub const DISTANCE_DIMINISHING_EXPONENT: f64 = 0.1;

/// Divisor of the default estimated factor exponent, `n^(n / x)`
pub const ESTIMATED_FACTOR_DIVISOR: f64 = 3.3;

/// Any weight above this triggers a downscale of all weights
pub const WEIGHT_DOWNSCALE_TRIGGER: f64 = 1000.0;
/// Divisor applied to every weight on downscale
pub const WEIGHT_DOWNSCALE_DIVISOR: f64 = 10_000.0;

// Input limits enforced by configuration sanitization
/// Seeds must be strictly lower than this
pub const MAX_SEED: u32 = 100_000;
/// Upper bound for `rows * columns`
pub const MAX_CELLS: usize = 100_000;
/// Largest value a span, height or depth range may reach
pub const MAX_RANGE_VALUE: u32 = 1_000;

// Default values for configurable parameters
/// Seed used when none or an invalid one is supplied
pub const DEFAULT_SEED: u32 = 0;
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 40;
/// Default number of grid columns
pub const DEFAULT_COLUMNS: usize = 40;
/// Fallback for malformed surrounding or ignore colors
pub const DEFAULT_COLOR: &str = "#000000ff";
/// Default pixel size of one grid unit in preview renders
pub const DEFAULT_PREVIEW_SCALE: u32 = 8;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_dots";
/// Extensions accepted when scanning a directory
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
