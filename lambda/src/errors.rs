use aws_sdk_comprehend::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Failures raised by a sentiment classifier backend.
///
/// `Service` renders its message verbatim so the text reaching the caller is
/// exactly what the backend reported.
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    #[error("{0}")]
    Service(String),

    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),
}

// Service errors become `"{code}: {message}"`; everything else is the
// `Display` chain. The raw HTTP response never reaches the message.
impl<E, R> From<SdkError<E, R>> for ClassifierError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        let message = match error.as_service_error() {
            Some(service) => match (service.code(), service.message()) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                (None, Some(message)) => message.to_string(),
                _ => service.to_string(),
            },
            None => display_chain(&error),
        };
        ClassifierError::Service(message)
    }
}

fn display_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Outcome of a request that did not produce a classification.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("No text provided")]
    NoText,

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

impl HandlerError {
    /// HTTP status code reported for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::NoText => 400,
            HandlerError::Classifier(_) => 500,
        }
    }
}
