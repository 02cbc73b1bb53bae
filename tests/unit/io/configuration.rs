//! Tests for sampler constants and generation defaults

#[cfg(test)]
mod tests {
    use dotter::io::configuration::{
        DEFAULT_COLOR, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED, IMAGE_EXTENSIONS,
        MAX_INDIVIDUAL_PROGRESS_BARS, MAX_SEED, OUTPUT_SUFFIX, SELF_DECAY_FACTOR,
        WEIGHT_DOWNSCALE_DIVISOR, WEIGHT_DOWNSCALE_TRIGGER,
    };
    use dotter::spatial::Rgba;

    // Tests the default seed lies in the accepted seed range
    // Verified by setting the default seed to MAX_SEED
    #[test]
    fn test_default_seed_in_range() {
        assert_eq!(DEFAULT_SEED, 0);
        assert!(DEFAULT_SEED < MAX_SEED);
    }

    // Tests default grid size
    #[test]
    fn test_default_grid() {
        assert_eq!((DEFAULT_ROWS, DEFAULT_COLUMNS), (40, 40));
    }

    // Tests the default color parses as opaque black
    #[test]
    fn test_default_color_parses() {
        assert_eq!(Rgba::from_hex(DEFAULT_COLOR).ok(), Some(Rgba::new(0, 0, 0, 255)));
    }

    // Tests downscaling brings the trigger value well below itself
    // Verified by swapping trigger and divisor
    #[test]
    fn test_downscale_reduces_weights() {
        assert!(WEIGHT_DOWNSCALE_TRIGGER / WEIGHT_DOWNSCALE_DIVISOR < 1.0);
        assert!(SELF_DECAY_FACTOR > 0.0 && SELF_DECAY_FACTOR < 1.0);
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests extensions are lowercase and include png
    #[test]
    fn test_image_extensions() {
        assert!(IMAGE_EXTENSIONS.contains(&"png"));
        assert!(
            IMAGE_EXTENSIONS
                .iter()
                .all(|ext| ext.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    // Tests progress bar limit
    // Verified by increasing bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
