//! Content minification strategies.
//!
//! Uses oxc for JavaScript, lightningcss for CSS, and minify-html for
//! markup. Unrecognized extensions pass through untouched.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// Minification strategy, selected once per file from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinifierStrategy {
    Html,
    Css,
    Js,
    /// Unrecognized extension: embed content byte-for-byte.
    Passthrough,
}

impl MinifierStrategy {
    /// Map a file extension (without the dot, any case) to its strategy.
    pub fn for_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "html" => Self::Html,
            "css" => Self::Css,
            "js" => Self::Js,
            _ => Self::Passthrough,
        }
    }

    /// Apply this strategy to `content`.
    ///
    /// `minify = false` skips the size-reducing passes. The CSS `%` -> `%%`
    /// escaping still runs then: the emitted constant may be handed to a
    /// printf-style formatter by the consuming firmware, so unescaped `%`
    /// is wrong regardless of minification.
    ///
    /// On failure returns a human-readable reason; the caller attaches the
    /// file name. Valid input never produces corrupt output: parse errors
    /// are reported, and non-empty input minifying to nothing is rejected.
    pub fn apply(self, content: &str, minify: bool) -> Result<String, String> {
        let out = match self {
            Self::Html if minify => minify_html(content)?,
            Self::Js if minify => minify_js(content)?,
            Self::Css => {
                let css = if minify {
                    minify_css(content)?
                } else {
                    content.to_string()
                };
                css.replace('%', "%%")
            }
            Self::Html | Self::Js | Self::Passthrough => content.to_string(),
        };

        if out.is_empty() && !content.is_empty() {
            return Err("minified to empty output".to_string());
        }
        Ok(out)
    }
}

/// Minify JavaScript source code.
///
/// Whitespace and comments only: identifiers keep their names and no dead
/// code is removed.
fn minify_js(source: &str) -> Result<String, String> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(error) = ret.errors.first() {
        return Err(format!("JS parse failed: {error}"));
    }
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .build(&ret.program)
        .code;
    Ok(code)
}

/// Minify CSS source code.
fn minify_css(source: &str) -> Result<String, String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| format!("CSS parse failed: {e}"))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| format!("CSS print failed: {e}"))?;
    Ok(result.code)
}

/// Minify HTML markup.
fn minify_html(source: &str) -> Result<String, String> {
    let minified = minify_html::minify(source.as_bytes(), &minify_html::Cfg::new());
    String::from_utf8(minified).map_err(|_| "HTML minifier produced non-UTF-8 output".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_for_extension() {
        assert_eq!(MinifierStrategy::for_extension("html"), MinifierStrategy::Html);
        assert_eq!(MinifierStrategy::for_extension("css"), MinifierStrategy::Css);
        assert_eq!(MinifierStrategy::for_extension("js"), MinifierStrategy::Js);
        assert_eq!(MinifierStrategy::for_extension("HTML"), MinifierStrategy::Html);
        assert_eq!(MinifierStrategy::for_extension("png"), MinifierStrategy::Passthrough);
        assert_eq!(MinifierStrategy::for_extension(""), MinifierStrategy::Passthrough);
    }

    #[test]
    fn test_js_strips_whitespace_and_comments() {
        let source = "// greet the device owner\nlet   greeting  =  'hello' ;\nconsole.log( greeting );\n";
        let out = MinifierStrategy::Js.apply(source, true).unwrap();
        assert!(out.len() < source.len());
        assert!(!out.contains("greet the device owner"));
        // No renaming: the binding keeps its name.
        assert!(out.contains("greeting"));
    }

    #[test]
    fn test_js_parse_error() {
        let err = MinifierStrategy::Js.apply("let = ;", true).unwrap_err();
        assert!(err.contains("JS parse failed"));
    }

    #[test]
    fn test_js_comment_only_rejected() {
        // Minifying away everything is refused rather than emitting an
        // empty constant for a non-empty file.
        let err = MinifierStrategy::Js.apply("// nothing else\n", true).unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn test_css_minifies_and_escapes_percent() {
        let out = MinifierStrategy::Css
            .apply("div {\n  width: 50%;\n}\n", true)
            .unwrap();
        assert_eq!(out, "div{width:50%%}");
    }

    #[test]
    fn test_css_escapes_percent_without_minify() {
        let source = "a { color: red; } /* 100% */";
        let out = MinifierStrategy::Css.apply(source, false).unwrap();
        assert_eq!(out, "a { color: red; } /* 100%% */");
    }

    #[test]
    fn test_css_every_percent_doubled() {
        let out = MinifierStrategy::Css
            .apply("a { width: 10%; height: 20%; }", true)
            .unwrap();
        assert_eq!(out.matches("%%").count(), 2);
        // No stray single `%` outside the doubled pairs.
        assert_eq!(out.matches('%').count(), 4);
    }

    #[test]
    fn test_css_parse_error() {
        let err = MinifierStrategy::Css.apply("a {{{", true).unwrap_err();
        assert!(err.contains("CSS parse failed"));
    }

    #[test]
    fn test_html_collapses_whitespace() {
        let out = MinifierStrategy::Html
            .apply("<div>   Hello  </div>", true)
            .unwrap();
        assert!(out.contains("Hello"));
        assert!(!out.contains("   "));
    }

    #[test]
    fn test_html_strips_comments() {
        let out = MinifierStrategy::Html
            .apply("<p>keep</p><!-- drop me -->", true)
            .unwrap();
        assert!(out.contains("keep"));
        assert!(!out.contains("drop me"));
    }

    #[test]
    fn test_passthrough_identity() {
        let content = "arbitrary\n\tbytes  %  <unbalanced";
        let out = MinifierStrategy::Passthrough.apply(content, true).unwrap();
        assert_eq!(out, content);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        for strategy in [
            MinifierStrategy::Html,
            MinifierStrategy::Css,
            MinifierStrategy::Js,
            MinifierStrategy::Passthrough,
        ] {
            assert_eq!(strategy.apply("", true).unwrap(), "");
        }
    }

    #[test]
    fn test_minify_is_deterministic() {
        let js = "let a = 1;\nlet b = a + 2;\n";
        let first = MinifierStrategy::Js.apply(js, true).unwrap();
        let second = MinifierStrategy::Js.apply(js, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_minify_disabled_passes_html_and_js_through() {
        let html = "<div>   spaced   </div>";
        assert_eq!(MinifierStrategy::Html.apply(html, false).unwrap(), html);
        let js = "let   x  =  1;";
        assert_eq!(MinifierStrategy::Js.apply(js, false).unwrap(), js);
    }
}
