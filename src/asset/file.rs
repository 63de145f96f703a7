//! Asset value types.

/// A single regular file discovered in the input directory.
///
/// Lives only for the duration of one generation run.
#[derive(Debug, Clone)]
pub struct AssetFile {
    /// File name including extension (`index.html`).
    pub name: String,
    /// Lowercased extension without the dot; empty when the name has none.
    pub extension: String,
    /// Raw file content.
    pub content: String,
}

/// An asset after minification and identifier sanitization.
#[derive(Debug, Clone)]
pub struct MinifiedAsset {
    /// C identifier the constant is declared under (`index_html`).
    pub identifier: String,
    /// Content ready to embed between the raw string markers.
    pub content: String,
    /// Extension the content was processed as.
    pub source_extension: String,
}
