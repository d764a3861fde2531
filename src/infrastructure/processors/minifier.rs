use crate::core::interfaces::Minifier;
use crate::core::models::AssetKind;
use crate::infrastructure::processors::LightningCssMinifier;
use crate::utils::{MinicatError, Result};
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_mangler::MangleOptions;
use oxc_minifier::{CompressOptions, Minifier as OxcMinifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;
use std::sync::Arc;

/// `text/javascript` minifier backed by oxc
#[derive(Debug, Default, Clone)]
pub struct OxcJsMinifier;

impl OxcJsMinifier {
    pub fn new() -> Self {
        Self
    }

    fn options(&self) -> MinifierOptions {
        MinifierOptions {
            mangle: Some(MangleOptions::default()),
            compress: Some(CompressOptions::default()),
            ..MinifierOptions::default()
        }
    }
}

impl Minifier for OxcJsMinifier {
    fn kind(&self) -> AssetKind {
        AssetKind::Js
    }

    fn minify(&self, source: &str) -> Result<String> {
        let allocator = Allocator::default();
        // Source files are classic scripts, not ES modules
        let source_type = SourceType::cjs();

        let parse_result = Parser::new(&allocator, source, source_type).parse();

        if !parse_result.errors.is_empty() {
            let errors: Vec<String> = parse_result
                .errors
                .iter()
                .map(|e| format!("Parse error: {}", e))
                .collect();
            return Err(MinicatError::minify(AssetKind::Js, errors.join("\n")));
        }

        let mut program = parse_result.program;
        let ret = OxcMinifier::new(self.options()).minify(&allocator, &mut program);

        let code = Codegen::new()
            .with_options(CodegenOptions::minify())
            .with_scoping(ret.scoping)
            .build(&program)
            .code;

        Ok(code)
    }
}

/// Default minifier for an asset kind
pub fn minifier_for(kind: AssetKind) -> Arc<dyn Minifier> {
    match kind {
        AssetKind::Css => Arc::new(LightningCssMinifier::new()),
        AssetKind::Js => Arc::new(OxcJsMinifier::new()),
    }
}
