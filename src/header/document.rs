//! In-memory model of the generated header.

use rustc_hash::FxHashMap;

use crate::asset::{AssetFile, MinifiedAsset, MinifierStrategy, sanitize};
use crate::error::GenerateError;

use super::emit::RAW_DELIMITER;

/// Ordered collection of minified assets ready for emission.
///
/// Identifiers are unique by construction; [`GeneratedDocument::build`]
/// rejects collisions instead of overwriting an earlier entry.
#[derive(Debug, Default)]
pub struct GeneratedDocument {
    pub assets: Vec<MinifiedAsset>,
}

impl GeneratedDocument {
    /// Build a document from scanned files, preserving their order.
    ///
    /// For each file: select the strategy for its extension, apply it,
    /// sanitize the name into an identifier, append. Fail-fast: the first
    /// minify, identifier, or collision error aborts with no partial
    /// document, so nothing is ever emitted for a broken input set.
    ///
    /// Does not touch the filesystem.
    pub fn build(files: &[AssetFile], minify: bool) -> Result<Self, GenerateError> {
        // Closing delimiter of the emitted raw string. Content containing
        // it would terminate the literal early and corrupt the header.
        let closing = format!("){RAW_DELIMITER}");

        let mut assets = Vec::with_capacity(files.len());
        let mut seen: FxHashMap<String, String> = FxHashMap::default();

        for file in files {
            let strategy = MinifierStrategy::for_extension(&file.extension);
            let content = strategy
                .apply(&file.content, minify)
                .map_err(|reason| GenerateError::Minify {
                    path: file.name.clone().into(),
                    reason,
                })?;

            if content.contains(&closing) {
                return Err(GenerateError::Minify {
                    path: file.name.clone().into(),
                    reason: format!("content contains the raw string delimiter `{closing}`"),
                });
            }

            let identifier = sanitize(&file.name)?;
            if let Some(first) = seen.insert(identifier.clone(), file.name.clone()) {
                return Err(GenerateError::IdentifierCollision {
                    identifier,
                    first,
                    second: file.name.clone(),
                });
            }

            assets.push(MinifiedAsset {
                identifier,
                content,
                source_extension: file.extension.clone(),
            });
        }

        Ok(Self { assets })
    }
}
