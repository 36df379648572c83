//! Error display and classification tests.

use idunn::{IdunnError, Prediction, Result};

#[test]
fn test_display_messages() {
    assert_eq!(IdunnError::NoFileSelected.to_string(), "no file selected");
    assert_eq!(
        IdunnError::Upload("photos/apple.jpg: not found".to_string()).to_string(),
        "failed to read upload: photos/apple.jpg: not found"
    );
    assert_eq!(
        IdunnError::Http("connection refused".to_string()).to_string(),
        "HTTP error: connection refused"
    );
    assert_eq!(
        IdunnError::Api {
            status: 422,
            message: "field required: file".to_string(),
        }
        .to_string(),
        "API error (422): field required: file"
    );
    assert_eq!(
        IdunnError::Configuration("bad config".to_string()).to_string(),
        "configuration error: bad config"
    );
}

#[test]
fn test_validation_classification() {
    assert!(IdunnError::NoFileSelected.is_validation());
    assert!(!IdunnError::Upload("boom".to_string()).is_validation());
    assert!(!IdunnError::Http("boom".to_string()).is_validation());
    assert!(
        !IdunnError::Api {
            status: 500,
            message: "boom".to_string(),
        }
        .is_validation()
    );
    assert!(!IdunnError::Configuration("boom".to_string()).is_validation());
}

#[test]
fn test_json_error_from_serde() {
    let parse_err = serde_json::from_str::<Prediction>("not json").unwrap_err();
    let err: IdunnError = parse_err.into();
    assert!(matches!(err, IdunnError::Json(_)));
    assert!(err.to_string().starts_with("JSON error:"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(IdunnError::NoFileSelected)
    }
    assert!(returns_error().is_err());
}
