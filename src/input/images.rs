use std::fs;
use std::path::{Path, PathBuf};

use crate::input::InputError;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Discovery of users and their images.
pub trait ImageSource {
    /// Users in discovery order.
    fn list_users(&self) -> Result<Vec<String>, InputError>;

    fn list_images(&self, user: &str) -> Result<Vec<PathBuf>, InputError>;
}

/// Users are the sub-directories of `root`; images are the files directly
/// inside each of them with a known image extension.
#[derive(Debug, Clone)]
pub struct LocalImageSource {
    root: PathBuf,
}

impl LocalImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, InputError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(InputError::MissingInput(format!(
                "data directory {} does not exist",
                root.display()
            )));
        }
        Ok(Self { root })
    }
}

impl ImageSource for LocalImageSource {
    fn list_users(&self) -> Result<Vec<String>, InputError> {
        let entries = fs::read_dir(&self.root).map_err(|e| InputError::io(&self.root, e))?;
        let mut users = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| InputError::io(&self.root, e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            users.push(entry.file_name().to_string_lossy().into_owned());
        }
        users.sort();
        Ok(users)
    }

    fn list_images(&self, user: &str) -> Result<Vec<PathBuf>, InputError> {
        let dir = self.root.join(user);
        let entries = fs::read_dir(&dir).map_err(|e| InputError::io(&dir, e))?;
        let mut images = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| InputError::io(&dir, e))?;
            let path = entry.path();
            if path.is_file() && is_image_path(&path) {
                images.push(path);
            }
        }
        images.sort();
        Ok(images)
    }
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|&known| known == lower)
        })
        .unwrap_or(false)
}
