use tracing::trace;

use super::{Template, TemplateBuffer, assemble};
use crate::builder::NodeBuilder;
use crate::config::TransformConfig;
use crate::css::{dashify, is_unitless};
use crate::style::{ArrowNode, KeyNode, Literal, PropertyEntry, StyleNode};

/// Style node specialised to a builder's expression and arrow types.
pub type Node<B> = StyleNode<<B as NodeBuilder>::Expr, <B as NodeBuilder>::Arrow>;
/// Property entry specialised to a builder's expression and arrow types.
pub type Entry<B> = PropertyEntry<<B as NodeBuilder>::Expr, <B as NodeBuilder>::Arrow>;

/// Makes a helper export available in the module being rewritten.
pub trait HelperImports {
    /// Ensures `exported_name` is imported and returns the local name bound
    /// to it. The local is never one of `shadowed`, the names bound where the
    /// reference will appear. Repeated requests for the same name and scope
    /// must be no-ops.
    fn ensure_import(&mut self, exported_name: &str, shadowed: &[String]) -> String;
}

/// Turns style trees into templates.
///
/// Each call to [`Serializer::build_template`] owns a fresh
/// [`TemplateBuffer`]; nested templates built for arrow bodies get their
/// own buffer and never touch the outer one.
pub struct Serializer<'a, B: NodeBuilder, I: HelperImports + ?Sized> {
    builder: &'a B,
    imports: &'a mut I,
    config: &'a TransformConfig,
    /// Parameters of the arrows being rewritten, outermost first.
    scope: Vec<String>,
}

impl<'a, B, I> Serializer<'a, B, I>
where
    B: NodeBuilder,
    I: HelperImports + ?Sized,
{
    pub fn new(builder: &'a B, imports: &'a mut I, config: &'a TransformConfig) -> Self {
        Self {
            builder,
            imports,
            config,
            scope: Vec::new(),
        }
    }

    /// Serializes the arguments of a style call, left to right.
    ///
    /// Objects become CSS text, object-returning arrows are rewritten to
    /// return a template tagged with the helper, and everything else is
    /// interpolated. Arguments after the first are separated by `;`.
    pub fn build_template(&mut self, arguments: Vec<Node<B>>, tag: Option<B::Expr>) -> Template<B::Expr> {
        let mut buffer = TemplateBuffer::new();

        for (index, argument) in arguments.into_iter().enumerate() {
            if index != 0 {
                buffer.push(';');
            }

            match argument {
                StyleNode::Object(properties) => {
                    trace!(index, properties = properties.len(), "serializing object argument");
                    self.serialize_properties(&mut buffer, properties, 1);
                    buffer.push('\n');
                }
                StyleNode::Arrow(arrow) => {
                    trace!(index, "rewriting arrow argument");
                    buffer.push('\n');
                    let expr = self.rewrite_arrow(arrow);
                    buffer.flush(expr, "");
                }
                other => {
                    trace!(index, "interpolating argument");
                    buffer.push('\n');
                    let expr = self.into_expression(other);
                    buffer.flush(expr, "");
                }
            }
        }

        let (fragments, expressions) = buffer.finish();
        assemble(fragments, expressions, tag)
    }

    /// Writes `properties` as declarations and rule blocks at `level`.
    pub fn serialize_properties(
        &mut self,
        buffer: &mut TemplateBuffer<B::Expr>,
        properties: Vec<Entry<B>>,
        level: usize,
    ) {
        let indent = self.config.indentation.repeat(level);

        for (index, PropertyEntry { key, value }) in properties.into_iter().enumerate() {
            match value {
                StyleNode::Object(nested) => {
                    if index != 0 {
                        buffer.push('\n');
                    }
                    self.write_block(buffer, key, nested, &indent, level);
                }
                StyleNode::Literal(literal) => {
                    let name = self.write_declaration_key(buffer, key, &indent);
                    self.write_literal(buffer, name.as_deref(), &literal);
                }
                StyleNode::Expression(expr) => {
                    self.write_declaration_key(buffer, key, &indent);
                    buffer.flush(expr, ";");
                }
                StyleNode::Arrow(arrow) => {
                    self.write_declaration_key(buffer, key, &indent);
                    let expr = self.rewrite_arrow(arrow);
                    buffer.flush(expr, ";");
                }
            }
        }
    }

    fn write_block(
        &mut self,
        buffer: &mut TemplateBuffer<B::Expr>,
        key: KeyNode<B::Expr>,
        nested: Vec<Entry<B>>,
        indent: &str,
        level: usize,
    ) {
        match key {
            KeyNode::Computed(expr) => {
                buffer.push('\n');
                buffer.push_str(indent);
                buffer.flush(expr, " {");
            }
            KeyNode::Static(selector) => {
                buffer.push_str(&format!("\n{indent}{selector} {{"));
            }
        }

        self.serialize_properties(buffer, nested, level + 1);
        buffer.push_str(&format!("\n{indent}}}"));
    }

    /// Writes `name: ` and returns the static name, if any, for the unit
    /// lookup.
    fn write_declaration_key(
        &self,
        buffer: &mut TemplateBuffer<B::Expr>,
        key: KeyNode<B::Expr>,
        indent: &str,
    ) -> Option<String> {
        match key {
            KeyNode::Computed(expr) => {
                buffer.push('\n');
                buffer.push_str(indent);
                buffer.flush(expr, ": ");
                None
            }
            KeyNode::Static(name) => {
                buffer.push_str(&format!("\n{indent}{}: ", dashify(&name)));
                Some(name)
            }
        }
    }

    fn write_literal(&self, buffer: &mut TemplateBuffer<B::Expr>, name: Option<&str>, literal: &Literal) {
        buffer.push_str(&literal.to_string());

        if let Literal::Num(_) = literal {
            // Computed keys have no name to look up and never get a unit.
            if name.is_some_and(|name| !name.is_empty() && !is_unitless(name)) {
                buffer.push_str(&self.config.unit);
            }
        }

        buffer.push(';');
    }

    /// Replaces an object-returning arrow's body with a template tagged by
    /// the imported helper.
    fn rewrite_arrow(&mut self, arrow: ArrowNode<B::Expr, B::Arrow>) -> B::Expr {
        let ArrowNode { shell, body } = arrow;

        let depth = self.scope.len();
        self.scope.extend(self.builder.arrow_bindings(&shell));

        let body = match *body {
            StyleNode::Object(properties) => {
                let local = self.imports.ensure_import(&self.config.helper_name, &self.scope);
                let tag = self.builder.make_identifier(&local);
                self.build_template(vec![StyleNode::Object(properties)], Some(tag))
                    .into_expr(self.builder)
            }
            other => self.into_expression(other),
        };

        self.scope.truncate(depth);
        self.builder.make_arrow(shell, body)
    }

    fn into_expression(&mut self, node: Node<B>) -> B::Expr {
        match node {
            StyleNode::Expression(expr) => expr,
            StyleNode::Literal(literal) => self.builder.make_literal(&literal),
            StyleNode::Arrow(arrow) => self.rewrite_arrow(arrow),
            StyleNode::Object(properties) => self
                .build_template(vec![StyleNode::Object(properties)], None)
                .into_expr(self.builder),
        }
    }
}
