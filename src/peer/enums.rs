pub mod client_error;
