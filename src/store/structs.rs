pub mod file_store;
pub mod stored_file;
