//! The SWC pass that finds style objects and replaces them with templates.
//!
//! Matched nodes:
//! - `<div css={{ … }} />` → `` <div css={`…`} /> ``
//! - `styled(Component)({ … })` → `` styled(Component)`…` ``
//! - `styled.div({ … })` → `` styled.div`…` ``
//! - `css({ … })` → `` css`…` ``
//!
//! Object-returning arrows among the arguments become
//! `` props => css`…` ``, with `css` imported from the configured source.

mod detect;
mod imports;
mod lower;
mod source;

pub use detect::{Detected, StyleKind, detect_attribute, detect_call};
pub use imports::ModuleImports;
pub use lower::{SwcEntry, SwcNode, lower_expr};
pub use source::transform_source;

use swc_core::ecma::ast::{Expr, JSXAttr, JSXAttrValue, JSXExpr, Module, Program, Script};
use swc_core::ecma::visit::{VisitMut, VisitMutWith, noop_visit_mut_type};
use tracing::{debug, warn};

use crate::builder::SwcBuilder;
use crate::config::TransformConfig;
use crate::template::{HelperImports, Serializer};

/// Counters reported after a pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    /// Style objects replaced by templates.
    pub replaced: usize,
    /// Import specifiers added for the helper.
    pub imports_added: usize,
}

/// Visitor rewriting style objects into template literals.
///
/// A replaced node is examined again before the visitor descends into it, so
/// style calls that end up inside interpolations or arrow bodies are
/// rewritten too.
pub struct StyleObjectTransform {
    config: TransformConfig,
    imports: ModuleImports,
    stats: TransformStats,
}

impl StyleObjectTransform {
    pub fn new(config: TransformConfig) -> Self {
        let imports = ModuleImports::detached(&config.import_source);
        Self {
            config,
            imports,
            stats: TransformStats::default(),
        }
    }

    pub fn stats(&self) -> TransformStats {
        self.stats
    }

    fn rewrite(&mut self, detected: Detected) -> Box<Expr> {
        let Detected {
            kind,
            arguments,
            tag,
            span,
        } = detected;
        let builder = SwcBuilder::new(span);

        if kind == StyleKind::Attribute {
            self.imports.ensure_import(&self.config.helper_name, &[]);
        }

        let template =
            Serializer::new(&builder, &mut self.imports, &self.config).build_template(arguments, tag);

        self.stats.replaced += 1;
        debug!(
            ?kind,
            ?span,
            tagged = template.is_tagged(),
            expressions = template.expressions.len(),
            "rewrote style object"
        );

        template.into_expr(&builder)
    }

    fn rewrite_expr(&mut self, expr: &Expr) -> Option<Box<Expr>> {
        let Expr::Call(call) = expr else {
            return None;
        };
        let detected = detect_call(call, &self.config)?;
        Some(self.rewrite(detected))
    }
}

impl VisitMut for StyleObjectTransform {
    noop_visit_mut_type!();

    fn visit_mut_module(&mut self, module: &mut Module) {
        self.imports = ModuleImports::scan(module, &self.config.import_source);

        module.visit_mut_children_with(self);

        let imports = std::mem::replace(
            &mut self.imports,
            ModuleImports::detached(&self.config.import_source),
        );
        self.stats.imports_added += imports.apply(module, &SwcBuilder::default());
    }

    fn visit_mut_script(&mut self, script: &mut Script) {
        self.imports = ModuleImports::detached(&self.config.import_source);

        script.visit_mut_children_with(self);

        for (name, _) in self.imports.pending() {
            warn!(
                name = %name,
                source = %self.config.import_source,
                "cannot import template helper into a script"
            );
        }
    }

    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        while let Some(replacement) = self.rewrite_expr(expr) {
            *expr = *replacement;
        }

        expr.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_attr(&mut self, attr: &mut JSXAttr) {
        if let Some(detected) = detect_attribute(attr, &self.config) {
            let replacement = self.rewrite(detected);
            if let Some(JSXAttrValue::JSXExprContainer(container)) = &mut attr.value {
                container.expr = JSXExpr::Expr(replacement);
            }
        }

        attr.visit_mut_children_with(self);
    }
}

/// Rewrites every style object in `module`.
pub fn transform_module(module: &mut Module, config: &TransformConfig) -> TransformStats {
    let mut transform = StyleObjectTransform::new(config.clone());
    module.visit_mut_with(&mut transform);
    transform.stats()
}

/// Rewrites every style object in `program`. Scripts are rewritten but get
/// no helper import.
pub fn transform_program(program: &mut Program, config: &TransformConfig) -> TransformStats {
    let mut transform = StyleObjectTransform::new(config.clone());
    program.visit_mut_with(&mut transform);
    transform.stats()
}
