pub mod registry_error;
