//! Header text emission.

use super::GeneratedDocument;

/// Include guard symbol.
pub const GUARD: &str = "WEBPAGES_H";
/// Platform header providing the base declarations (`PROGMEM`, `char`).
pub const PLATFORM_INCLUDE: &str = "Arduino.h";
/// Storage qualifier placing each constant in program memory instead of RAM.
pub const STORAGE_QUALIFIER: &str = "PROGMEM";
/// Sentinel delimiting each embedded raw string. The document builder
/// rejects content containing the closing form, so the delimiter can never
/// collide with an asset.
pub const RAW_DELIMITER: &str = "rawliteral";

/// Serialize a document to header text.
///
/// Output is a pure function of the document. The banner carries the tool
/// version but no timestamp, so regenerating from unchanged inputs yields
/// byte-identical text.
pub fn emit(doc: &GeneratedDocument) -> String {
    let mut out = String::new();

    out.push_str(&banner());
    out.push_str(&format!("#ifndef {GUARD}\n"));
    out.push_str(&format!("#define {GUARD}\n"));
    out.push_str(&format!("#include <{PLATFORM_INCLUDE}>\n"));

    for asset in &doc.assets {
        out.push_str(&format!(
            "const char {}[] {STORAGE_QUALIFIER} = R\"{RAW_DELIMITER}(\n{}\n){RAW_DELIMITER}\";\n",
            asset.identifier, asset.content
        ));
    }

    out.push_str("#endif\n");
    out
}

/// Fixed descriptive comment at the top of the generated file.
fn banner() -> String {
    format!(
        r#"/**
 * @file webpages.h
 * @brief This file was automatically generated from the static web assets.
 *        Do not edit by hand; rerun {} {} instead.
 *
 * @copyright Copyright (c) 2022
 *
 */

"#,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}
