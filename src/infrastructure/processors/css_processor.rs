use crate::core::interfaces::Minifier;
use crate::core::models::AssetKind;
use crate::utils::{ErrorContext, MinicatError, Result};
use lightningcss::{
    printer::PrinterOptions,
    stylesheet::{ParserOptions as CssParserOptions, StyleSheet},
};

/// `text/css` minifier backed by Lightning CSS
#[derive(Debug, Default, Clone)]
pub struct LightningCssMinifier;

impl LightningCssMinifier {
    pub fn new() -> Self {
        Self
    }
}

impl Minifier for LightningCssMinifier {
    fn kind(&self) -> AssetKind {
        AssetKind::Css
    }

    fn minify(&self, source: &str) -> Result<String> {
        let stylesheet = StyleSheet::parse(source, CssParserOptions::default()).map_err(|e| {
            let mut context = ErrorContext::new();
            if let Some(loc) = e.loc.as_ref() {
                // lightningcss lines start at 0, columns at 1
                context = context.with_location(loc.line as usize + 1, loc.column as usize);
                if let Some(line) = source.lines().nth(loc.line as usize) {
                    context = context.with_snippet(line.to_string());
                }
            }
            MinicatError::minify_with_context(AssetKind::Css, e.to_string(), context)
        })?;

        let result = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| MinicatError::minify(AssetKind::Css, e.to_string()))?;

        Ok(result.code)
    }
}
