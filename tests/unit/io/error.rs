//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use dotter::DotterError;
    use dotter::io::error::{config_error, invariant_error, path_error};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = DotterError::FileSystem {
            path: "/tmp/test.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.json"));
    }

    // Tests Config error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_config_error_message() {
        let message = config_error("cell_span", &"5..=2", &"min must not exceed max").to_string();
        assert_eq!(
            message,
            "Invalid configuration 'cell_span' = '5..=2': min must not exceed max"
        );
    }

    // Tests ValueNotFound and InternalInvariant formatting
    #[test]
    fn test_sampler_error_messages() {
        let missing = DotterError::ValueNotFound {
            value: "9".to_string(),
        };
        assert!(missing.to_string().contains("Value 9"));
        assert!(missing.source().is_none());

        let broken = invariant_error("cell insertion", &"overlap");
        assert_eq!(
            broken.to_string(),
            "Internal invariant violated in cell insertion: overlap"
        );
    }

    // Tests serde errors convert with an in-memory path
    #[test]
    fn test_from_serde_error() {
        let serde_error =
            serde_json::from_str::<Vec<u8>>("not json").expect_err("invalid document");
        let error = DotterError::from(serde_error);
        assert!(matches!(
            &error,
            DotterError::Serialization { path, .. } if path == &PathBuf::from("<memory>")
        ));
        assert!(error.source().is_some());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = DotterError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests path errors carry the rejected path and reason
    #[test]
    fn test_path_error() {
        let error = path_error("notes.txt", "Target file must be an image");
        let message = error.to_string();
        assert!(message.contains("notes.txt"));
        assert!(message.contains("Target file must be an image"));
    }

    // Tests invalid colors name the rejected value
    #[test]
    fn test_invalid_color_message() {
        let error = DotterError::InvalidColor {
            value: "#xyz".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid hex color '#xyz'");
    }
}
