/// Message-only error type.
pub mod custom_error;
