use anyhow::Error;

/// Why a remote fetch failed, for diagnostics and the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,          // HTTP 404
    ServerError,       // HTTP 500+
    NetworkError,      // DNS, routing, etc.
    MalformedManifest, // Body is not a JSON array of strings
    Io,                // Local file access
    Other,
}

impl ErrorType {
    pub fn describe(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "connection refused",
            ErrorType::Timeout => "timed out",
            ErrorType::NotFound => "not found",
            ErrorType::ServerError => "server error",
            ErrorType::NetworkError => "network error",
            ErrorType::MalformedManifest => "malformed manifest",
            ErrorType::Io => "i/o error",
            ErrorType::Other => "error",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    let error_msg = error.to_string().to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return match status.as_u16() {
                    404 => ErrorType::NotFound,
                    500..=599 => ErrorType::ServerError,
                    _ => ErrorType::Other,
                };
            }
            if reqwest_err.is_decode() {
                return ErrorType::MalformedManifest;
            }
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_connect() {
                return ErrorType::ConnectionRefused;
            }
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::MalformedManifest;
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ErrorType::Io;
        }
    }

    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the debug log and status bar: the raw root cause
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    error.root_cause().to_string()
}
