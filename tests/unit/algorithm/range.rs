//! Tests for sampled integer ranges

#[cfg(test)]
mod tests {
    use dotter::algorithm::range::SampledRange;
    use dotter::io::error::DotterError;

    // Tests inclusive value enumeration
    #[test]
    fn test_values_inclusive() {
        assert_eq!(SampledRange::new(2, 5, 3.0).values(), vec![2, 3, 4, 5]);
        assert_eq!(SampledRange::fixed(7).values(), vec![7]);
    }

    // Tests reversed ranges and ranges below the lower bound are rejected
    // Verified by removing the lower bound check
    #[test]
    fn test_sampler_validation() {
        let reversed = SampledRange::new(5, 2, 3.0);
        assert!(matches!(
            reversed.sampler("cell_span", 0, 1),
            Err(DotterError::Config { parameter: "cell_span", .. })
        ));

        let zero = SampledRange::new(0, 3, 1.0);
        assert!(zero.sampler("cell_span", 0, 1).is_err());
        assert!(zero.sampler("surrounding_cells.depth", 0, 0).is_ok());
    }

    // Tests the sampler draws only from the range
    #[test]
    fn test_sampler_draws_within_range() {
        let mut sampler = SampledRange::new(3, 6, 4.5)
            .sampler("cell_span", 12, 1)
            .expect("valid range");
        for _ in 0..100 {
            let value = sampler.generate_next_value().expect("draw");
            assert!((3..=6).contains(&value));
        }
    }
}
