//! JSON persistence of grids as rows of `[x, y, span, "#rrggbbaa"]`

use crate::io::error::{DotterError, Result};
use crate::spatial::{EncodedCell, Grid};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serialize a grid to a compact JSON string
///
/// # Errors
///
/// Returns a serialization error if encoding fails
pub fn grid_to_json(grid: &Grid) -> Result<String> {
    Ok(serde_json::to_string(&grid.encode())?)
}

/// Parse a grid from its JSON form
///
/// # Errors
///
/// Returns a serialization error for malformed documents or colors
pub fn grid_from_json(text: &str) -> Result<Grid> {
    let rows: Vec<Vec<EncodedCell>> = serde_json::from_str(text)?;
    Ok(Grid::decode(rows))
}

/// Write a grid to `path`, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written
pub fn write_grid_json(grid: &Grid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| DotterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| DotterError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &grid.encode()).map_err(|source| {
        DotterError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|source| DotterError::FileSystem {
        path: path.to_path_buf(),
        operation: "write file",
        source,
    })?;

    Ok(())
}

/// Read a grid previously written by [`write_grid_json`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not hold a grid
pub fn read_grid_json(path: &Path) -> Result<Grid> {
    let file = File::open(path).map_err(|source| DotterError::FileSystem {
        path: path.to_path_buf(),
        operation: "open file",
        source,
    })?;
    let rows: Vec<Vec<EncodedCell>> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            DotterError::Serialization {
                path: path.to_path_buf(),
                source,
            }
        })?;
    Ok(Grid::decode(rows))
}
