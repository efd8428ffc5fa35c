use swc_core::atoms::Atom;
use swc_core::common::{DUMMY_SP, Span, SyntaxContext};
use swc_core::ecma::ast::{
    ArrowExpr, BlockStmtOrExpr, Expr, Ident, ImportDecl, ImportNamedSpecifier, ImportPhase,
    ImportSpecifier, Lit, ModuleExportName, Number, ObjectPatProp, Pat, Str, TaggedTpl, Tpl,
    TplElement,
};

use crate::style::Literal;
use crate::template::escape_raw;

/// Node construction capabilities the serializer needs from a syntax-tree
/// library.
///
/// The serializer and assembler only ever talk to this trait, so the same
/// algorithm can target any tree representation.
pub trait NodeBuilder {
    /// An expression node (interpolations, tags, finished templates).
    type Expr;
    /// One literal-text piece of a template.
    type Fragment;
    /// An arrow function waiting for a new body.
    type Arrow;
    /// An import declaration.
    type Import;

    fn make_identifier(&self, name: &str) -> Self::Expr;

    fn make_literal(&self, literal: &Literal) -> Self::Expr;

    /// Builds a template text piece. `tail` marks the last fragment.
    fn make_text_fragment(&self, text: &str, tail: bool) -> Self::Fragment;

    fn make_template(
        &self,
        fragments: Vec<Self::Fragment>,
        expressions: Vec<Self::Expr>,
    ) -> Self::Expr;

    fn make_tagged_template(
        &self,
        tag: Self::Expr,
        fragments: Vec<Self::Fragment>,
        expressions: Vec<Self::Expr>,
    ) -> Self::Expr;

    /// Rebuilds `shell` with an expression body.
    fn make_arrow(&self, shell: Self::Arrow, body: Self::Expr) -> Self::Expr;

    /// Names the parameters of `shell` bind inside its body.
    fn arrow_bindings(&self, shell: &Self::Arrow) -> Vec<String>;

    /// `import { exported as local } from "source"`
    fn make_import(&self, source: &str, exported: &str, local: &str) -> Self::Import;
}

/// [`NodeBuilder`] producing SWC ECMAScript nodes.
///
/// Templates and tagged templates carry `span`, the position anchor of the
/// node they replace. Everything else is synthesized with a dummy span.
#[derive(Debug, Clone, Copy)]
pub struct SwcBuilder {
    span: Span,
}

impl SwcBuilder {
    pub fn new(span: Span) -> Self {
        Self { span }
    }

    fn ident(name: &str) -> Ident {
        Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
    }

    fn tpl(&self, quasis: Vec<TplElement>, exprs: Vec<Box<Expr>>) -> Tpl {
        Tpl {
            span: self.span,
            exprs,
            quasis,
        }
    }

    /// `exported as local`, with the alias omitted when both names agree.
    pub fn make_import_specifier(&self, exported: &str, local: &str) -> ImportSpecifier {
        let imported = (exported != local).then(|| ModuleExportName::Ident(Self::ident(exported)));

        ImportSpecifier::Named(ImportNamedSpecifier {
            span: DUMMY_SP,
            local: Self::ident(local),
            imported,
            is_type_only: false,
        })
    }
}

impl Default for SwcBuilder {
    fn default() -> Self {
        Self::new(DUMMY_SP)
    }
}

impl NodeBuilder for SwcBuilder {
    type Expr = Box<Expr>;
    type Fragment = TplElement;
    type Arrow = ArrowExpr;
    type Import = ImportDecl;

    fn make_identifier(&self, name: &str) -> Box<Expr> {
        Box::new(Expr::Ident(Self::ident(name)))
    }

    fn make_literal(&self, literal: &Literal) -> Box<Expr> {
        let lit = match literal {
            Literal::Str(value) => Lit::Str(Str {
                span: DUMMY_SP,
                value: Atom::from(value.as_str()).into(),
                raw: None,
            }),
            Literal::Num(value) => Lit::Num(Number {
                span: DUMMY_SP,
                value: *value,
                raw: None,
            }),
        };
        Box::new(Expr::Lit(lit))
    }

    fn make_text_fragment(&self, text: &str, tail: bool) -> TplElement {
        TplElement {
            span: DUMMY_SP,
            tail,
            cooked: Some(Atom::from(text).into()),
            raw: Atom::from(escape_raw(text)),
        }
    }

    fn make_template(&self, fragments: Vec<TplElement>, expressions: Vec<Box<Expr>>) -> Box<Expr> {
        Box::new(Expr::Tpl(self.tpl(fragments, expressions)))
    }

    fn make_tagged_template(
        &self,
        tag: Box<Expr>,
        fragments: Vec<TplElement>,
        expressions: Vec<Box<Expr>>,
    ) -> Box<Expr> {
        Box::new(Expr::TaggedTpl(TaggedTpl {
            span: self.span,
            ctxt: SyntaxContext::empty(),
            tag,
            type_params: None,
            tpl: Box::new(self.tpl(fragments, expressions)),
        }))
    }

    fn make_arrow(&self, shell: ArrowExpr, body: Box<Expr>) -> Box<Expr> {
        Box::new(Expr::Arrow(ArrowExpr {
            body: Box::new(BlockStmtOrExpr::Expr(body)),
            ..shell
        }))
    }

    fn arrow_bindings(&self, shell: &ArrowExpr) -> Vec<String> {
        let mut names = Vec::new();
        for param in &shell.params {
            pat_bindings(param, &mut names);
        }
        names
    }

    fn make_import(&self, source: &str, exported: &str, local: &str) -> ImportDecl {
        ImportDecl {
            span: DUMMY_SP,
            specifiers: vec![self.make_import_specifier(exported, local)],
            src: Box::new(Str {
                span: DUMMY_SP,
                value: Atom::from(source).into(),
                raw: None,
            }),
            type_only: false,
            with: None,
            phase: ImportPhase::Evaluation,
        }
    }
}

/// Collects every identifier a binding pattern introduces.
pub(crate) fn pat_bindings(pat: &Pat, names: &mut Vec<String>) {
    match pat {
        Pat::Ident(binding) => names.push(binding.id.sym.to_string()),
        Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                pat_bindings(elem, names);
            }
        }
        Pat::Rest(rest) => pat_bindings(&rest.arg, names),
        Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    ObjectPatProp::KeyValue(kv) => pat_bindings(&kv.value, names),
                    ObjectPatProp::Assign(assign) => names.push(assign.key.id.sym.to_string()),
                    ObjectPatProp::Rest(rest) => pat_bindings(&rest.arg, names),
                }
            }
        }
        Pat::Assign(assign) => pat_bindings(&assign.left, names),
        Pat::Expr(_) | Pat::Invalid(_) => {}
    }
}
