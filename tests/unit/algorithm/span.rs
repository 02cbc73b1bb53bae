//! Tests for merging unit cells into spanned cells

#[cfg(test)]
mod tests {
    use dotter::algorithm::range::SampledRange;
    use dotter::algorithm::span::{SpanMerger, contiguous_run};
    use dotter::spatial::{Cell, Grid, Rgba};

    fn row(xs: &[i32], color: Rgba) -> Vec<Cell> {
        xs.iter().map(|&x| Cell::unit(x, 0, color)).collect()
    }

    // Tests runs stop at the first gap
    #[test]
    fn test_contiguous_run() {
        let cells = row(&[0, 1, 2, 4, 5], Rgba::TRANSPARENT);
        assert_eq!(contiguous_run(&cells, 0), 3);
        assert_eq!(contiguous_run(&cells, 1), 2);
        assert_eq!(contiguous_run(&cells, 3), 2);
        assert_eq!(contiguous_run(&cells, 5), 0);
    }

    // Tests a drawn span wider than the run is clamped to it
    // Verified by using the drawn span without clamping
    #[test]
    fn test_span_clamped_to_available_run() {
        let grid = Grid::from_rows(vec![row(&[0, 1, 2], Rgba::new(10, 20, 30, 255))]);
        let mut merger = SpanMerger::new(0, &SampledRange::fixed(5)).expect("valid range");
        let merged = merger.merge(&grid).expect("merge");

        assert_eq!(
            merged.rows(),
            &[vec![Cell::new(0, 0, 3, Rgba::new(10, 20, 30, 255))]]
        );
        assert_eq!(merger.sampler().history(), &[5]);
    }

    // Tests merged cells never bridge a gap
    #[test]
    fn test_merge_respects_gaps() {
        let grid = Grid::from_rows(vec![row(&[0, 1, 3, 4, 5], Rgba::TRANSPARENT)]);
        let mut merger = SpanMerger::new(0, &SampledRange::fixed(2)).expect("valid range");
        let merged = merger.merge(&grid).expect("merge");

        let spans: Vec<(i32, u32)> = merged.cells().map(|cell| (cell.x, cell.span)).collect();
        assert_eq!(spans, vec![(0, 2), (3, 2), (5, 1)]);
        assert!(merged.validate().is_ok());
    }

    // Tests the merged color is the mean of the consumed cells
    #[test]
    fn test_merged_color_is_mean() {
        let grid = Grid::from_rows(vec![vec![
            Cell::unit(0, 0, Rgba::new(0, 0, 0, 255)),
            Cell::unit(1, 0, Rgba::new(100, 50, 3, 255)),
        ]]);
        let mut merger = SpanMerger::new(0, &SampledRange::fixed(2)).expect("valid range");
        let merged = merger.merge(&grid).expect("merge");
        assert_eq!(merged.rows()[0][0].color, Rgba::new(50, 25, 2, 255));
    }

    // Tests every unit cell is covered exactly once for a random span range
    #[test]
    fn test_merge_covers_every_column() {
        let grid = Grid::from_rows(
            (0..4)
                .map(|y| (0..9).map(|x| Cell::unit(x, y, Rgba::TRANSPARENT)).collect())
                .collect(),
        );
        let mut merger =
            SpanMerger::new(31, &SampledRange::new(1, 4, 2.5)).expect("valid range");
        let merged = merger.merge(&grid).expect("merge");

        assert_eq!(merged.row_count(), 4);
        for row in merged.rows() {
            let covered: u32 = row.iter().map(|cell| cell.span).sum();
            assert_eq!(covered, 9);
        }
        assert!(merged.validate().is_ok());
    }

    // Tests span ranges starting at zero are rejected
    #[test]
    fn test_new_rejects_zero_span() {
        assert!(SpanMerger::new(0, &SampledRange::new(0, 2, 1.0)).is_err());
    }
}
