//! Asset scanning, minification, and identifier handling.

mod file;
mod ident;
mod minify;
mod scan;

// Types
pub use file::{AssetFile, MinifiedAsset};

// Scanning (I/O)
pub use scan::scan_assets;

// Pure transforms
pub use ident::sanitize;
pub use minify::MinifierStrategy;
