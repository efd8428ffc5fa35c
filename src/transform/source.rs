//! Parse, rewrite and print a whole source file.

use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap, Spanned};
use swc_core::ecma::ast::Module;
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::codegen::{Config, Emitter};
use swc_core::ecma::parser::error::Error as ParseError;
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax};
use tracing::debug;

use super::transform_module;
use crate::config::TransformConfig;
use crate::error::{Error, Result};

/// Rewrites every style object in a JSX-enabled ES module.
///
/// The printed output does not preserve comments or formatting.
pub fn transform_source(source: &str, file_name: &str, config: &TransformConfig) -> Result<String> {
    let cm: Lrc<SourceMap> = Default::default();
    let mut module = parse(&cm, source, file_name)?;

    let stats = transform_module(&mut module, config);
    debug!(file_name, replaced = stats.replaced, imports_added = stats.imports_added, "transformed source");

    print(&cm, &module)
}

fn parse(cm: &Lrc<SourceMap>, source: &str, file_name: &str) -> Result<Module> {
    let fm = cm.new_source_file(
        Lrc::new(FileName::Custom(file_name.to_string())),
        source.to_string(),
    );
    let lexer = Lexer::new(
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        Default::default(),
        StringInput::from(&*fm),
        None,
    );
    let mut parser = Parser::new_from(lexer);

    let module = parser
        .parse_module()
        .map_err(|err| parse_error(cm, file_name, err))?;

    // Recoverable errors still mean the input was not valid.
    if let Some(err) = parser.take_errors().into_iter().next() {
        return Err(parse_error(cm, file_name, err));
    }

    Ok(module)
}

fn parse_error(cm: &SourceMap, file_name: &str, err: ParseError) -> Error {
    let loc = cm.lookup_char_pos(err.span().lo);
    Error::Parse {
        file_name: file_name.to_string(),
        line: loc.line,
        column: loc.col.0 + 1,
        message: err.kind().msg().to_string(),
    }
}

fn print(cm: &Lrc<SourceMap>, module: &Module) -> Result<String> {
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: Config::default(),
            comments: None,
            cm: cm.clone(),
            wr: writer,
        };
        emitter.emit_module(module)?;
    }
    Ok(String::from_utf8(buf)?)
}
