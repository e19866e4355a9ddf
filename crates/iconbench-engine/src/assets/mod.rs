//! Asset file resolution and image decoding.

mod decode;
mod paths;

pub use decode::{load_image, AssetError};
pub use paths::AssetPaths;
