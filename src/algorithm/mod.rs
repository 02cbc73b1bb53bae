/// Pipeline orchestration
pub mod builder;
/// Image to unit-cell sampling with ignore-color and palette rules
pub mod cells;
/// Estimated integer ranges feeding range samplers
pub mod range;
/// Merging of contiguous unit cells
pub mod span;
/// Growth of cells around existing content
pub mod surrounding;
