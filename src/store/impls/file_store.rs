use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use crate::store::enums::store_error::StoreError;
use crate::store::structs::file_store::FileStore;
use crate::store::structs::stored_file::StoredFile;

impl FileStore {
    /// Opens the store at `root`, creating the directory when missing.
    pub async fn open(root: impl Into<PathBuf>) -> Result<FileStore, StoreError>
    {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(FileStore { root })
    }

    pub fn root(&self) -> &Path
    {
        &self.root
    }

    /// Only a single plain path component is accepted as a name.
    pub fn path_of(&self, name: &str) -> Result<PathBuf, StoreError>
    {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part == name => Ok(self.root.join(name)),
            _ => Err(StoreError::InvalidName(name.to_string()))
        }
    }

    pub async fn contains(&self, name: &str) -> bool
    {
        match self.path_of(name) {
            Ok(path) => tokio::fs::metadata(path).await.map(|meta| meta.is_file()).unwrap_or(false),
            Err(_) => false
        }
    }

    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError>
    {
        let path = self.path_of(name)?;
        tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::Missing(name.to_string()),
            _ => StoreError::Io(e)
        })
    }

    /// Overwrites any file already stored under `name`.
    pub async fn write(&self, name: &str, data: &[u8]) -> Result<(), StoreError>
    {
        let path = self.path_of(name)?;
        tokio::fs::write(path, data).await?;
        Ok(())
    }

    /// Copies `local_path` into the store as `name`, returning the copied size.
    pub async fn import(&self, local_path: &Path, name: &str) -> Result<u64, StoreError>
    {
        let destination = self.path_of(name)?;
        match tokio::fs::metadata(local_path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(StoreError::Missing(local_path.display().to_string()))
        }
        Ok(tokio::fs::copy(local_path, destination).await?)
    }

    /// Regular files in the store, sorted by name.
    pub async fn list(&self) -> Result<Vec<StoredFile>, StoreError>
    {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let meta = entry.metadata().await?;
            if meta.is_file() {
                files.push(StoredFile {
                    name: entry.file_name().to_string_lossy().to_string(),
                    size: meta.len(),
                });
            }
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}
