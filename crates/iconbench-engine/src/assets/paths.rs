use std::path::{Path, PathBuf};

/// Locations of the harness's font and icon files.
///
/// `font` and `icon` are joined onto `root`. An empty root resolves against
/// the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub root: PathBuf,
    pub font: PathBuf,
    pub icon: PathBuf,
    /// Font pixel size.
    pub font_size: f32,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    pub fn font(mut self, file: impl Into<PathBuf>, size: f32) -> Self {
        self.font = file.into();
        self.font_size = size;
        self
    }

    pub fn icon(mut self, file: impl Into<PathBuf>) -> Self {
        self.icon = file.into();
        self
    }

    pub fn font_path(&self) -> PathBuf {
        resolve(&self.root, &self.font)
    }

    pub fn icon_path(&self) -> PathBuf {
        resolve(&self.root, &self.icon)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            font: PathBuf::from("Arimo-Bold.ttf"),
            icon: PathBuf::from("something.png"),
            font_size: 30.0,
        }
    }
}

fn resolve(root: &Path, file: &Path) -> PathBuf {
    if root.as_os_str().is_empty() {
        file.to_path_buf()
    } else {
        root.join(file)
    }
}
