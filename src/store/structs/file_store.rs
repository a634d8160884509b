use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    pub(crate) root: PathBuf,
}
