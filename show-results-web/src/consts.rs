//! Compile-time constants for configuration

/// Message displayed in place of the result when a query failed.
pub const REQUEST_ERROR: &str = "Sorry - there was an error with your request.";
