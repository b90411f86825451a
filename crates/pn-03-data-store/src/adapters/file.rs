//! Directory-backed warehouse.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use shared_types::KeyHash;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::domain::WarehouseError;
use crate::ports::Warehouse;

/// Stores each object as `<dir>/<hex hash>`.
///
/// Each write goes to its own temp file and is linked into place without
/// clobbering, so a reader sees either the whole object or nothing and
/// concurrent writers of one key never share a file.
pub struct FileWarehouse {
    dir: PathBuf,
}

impl FileWarehouse {
    /// Open (creating if needed) a warehouse rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, WarehouseError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!("[pn-03] Warehouse at {}", dir.display());
        Ok(Self { dir })
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn object_path(&self, key: &KeyHash) -> PathBuf {
        self.dir.join(hex::encode(key))
    }
}

impl Warehouse for FileWarehouse {
    fn get(&self, key: &KeyHash) -> Result<Option<Vec<u8>>, WarehouseError> {
        match fs::read(self.object_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &KeyHash, data: &[u8]) -> Result<(), WarehouseError> {
        let path = self.object_path(key);
        if path.exists() {
            return Ok(());
        }

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(data)?;
        temp.as_file().sync_all()?;

        match temp.persist_noclobber(&path) {
            Ok(_) => {}
            // Same key means same content: another writer got there first.
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                debug!("[pn-03] {} already stored", path.display());
                return Ok(());
            }
            Err(e) => return Err(e.error.into()),
        }

        debug!("[pn-03] Wrote {} ({} bytes)", path.display(), data.len());
        Ok(())
    }
}
