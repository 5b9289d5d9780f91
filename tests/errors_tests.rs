use std::error::Error;

use smartdoc::errors::SummarizeError;

#[test]
fn summarize_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::EmptyInput;
    assert_error(&error);
}

#[test]
fn summarize_error_display() {
    assert_eq!(
        format!("{}", SummarizeError::EmptyInput),
        "No content to summarize"
    );

    let error = SummarizeError::ModelError("model rejected input".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to run model inference: model rejected input"
    );

    let error = SummarizeError::HttpError("connection reset".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: connection reset"
    );

    let error = SummarizeError::ExtractError("bad encoding".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to extract document text: bad encoding"
    );
}

#[test]
fn only_network_and_availability_failures_are_transient() {
    assert!(SummarizeError::HttpError("timed out".to_string()).is_transient());
    assert!(SummarizeError::ModelUnavailable("503".to_string()).is_transient());

    assert!(!SummarizeError::EmptyInput.is_transient());
    assert!(!SummarizeError::ModelError("bad request".to_string()).is_transient());
    assert!(!SummarizeError::ExtractError("bad file".to_string()).is_transient());
}

#[test]
fn summarize_error_from_conversions() {
    let err = anyhow::anyhow!("inference blew up");
    let sum_err: SummarizeError = err.into();
    match sum_err {
        SummarizeError::ModelError(msg) => assert!(msg.contains("inference blew up")),
        _ => panic!("Unexpected error type"),
    }

    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let sum_err: SummarizeError = io_err.into();
    match sum_err {
        SummarizeError::ExtractError(msg) => assert!(msg.contains("missing file")),
        _ => panic!("Unexpected error type"),
    }

    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> trait is implemented by checking that the
    // conversion compiles.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizeError {
        SummarizeError::from(err)
    }
}
