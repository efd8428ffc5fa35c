//! Lowering SWC expressions into style trees.
//!
//! Lowering borrows the source tree and clones whatever ends up interpolated,
//! so a candidate that turns out not to be lowerable is left untouched.

use swc_core::common::DUMMY_SP;
use swc_core::ecma::ast::{
    ArrowExpr, BlockStmtOrExpr, Expr, Invalid, Lit, ObjectLit, Prop, PropName, PropOrSpread, Str,
};

use crate::style::{ArrowNode, KeyNode, Literal, PropertyEntry, StyleNode};

pub type SwcNode = StyleNode<Box<Expr>, ArrowExpr>;
pub type SwcEntry = PropertyEntry<Box<Expr>, ArrowExpr>;

/// Text of a string literal.
pub(crate) fn str_value(s: &Str) -> String {
    s.value.to_string()
}

/// Looks through any number of wrapping parentheses.
pub(crate) fn unwrap_parens(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}

/// Object literal returned by an expression-bodied arrow.
fn object_body(arrow: &ArrowExpr) -> Option<&ObjectLit> {
    match &*arrow.body {
        BlockStmtOrExpr::Expr(body) => match unwrap_parens(body) {
            Expr::Object(object) => Some(object),
            _ => None,
        },
        BlockStmtOrExpr::BlockStmt(_) => None,
    }
}

/// `arrow` with its body swapped for a placeholder, to be rebuilt later.
fn arrow_shell(arrow: &ArrowExpr) -> ArrowExpr {
    ArrowExpr {
        body: Box::new(BlockStmtOrExpr::Expr(Box::new(Expr::Invalid(Invalid {
            span: DUMMY_SP,
        })))),
        ..arrow.clone()
    }
}

/// Lowers a style value.
///
/// Returns `None` when an object (at any depth) holds something that has no
/// CSS text form: spreads, methods, accessors.
pub fn lower_expr(expr: &Expr) -> Option<SwcNode> {
    let node = match unwrap_parens(expr) {
        Expr::Object(object) => StyleNode::Object(lower_object(object)?),
        Expr::Lit(Lit::Str(s)) => StyleNode::Literal(Literal::Str(str_value(s))),
        Expr::Lit(Lit::Num(num)) => StyleNode::Literal(Literal::Num(num.value)),
        Expr::Arrow(arrow) => match object_body(arrow).and_then(lower_object) {
            Some(properties) => {
                StyleNode::Arrow(ArrowNode::new(arrow_shell(arrow), StyleNode::Object(properties)))
            }
            // Functions the serializer cannot look into are interpolated whole.
            None => StyleNode::Expression(Box::new(expr.clone())),
        },
        _ => StyleNode::Expression(Box::new(expr.clone())),
    };
    Some(node)
}

fn lower_object(object: &ObjectLit) -> Option<Vec<SwcEntry>> {
    object
        .props
        .iter()
        .map(|prop| match prop {
            PropOrSpread::Prop(prop) => lower_prop(prop),
            PropOrSpread::Spread(_) => None,
        })
        .collect()
}

fn lower_prop(prop: &Prop) -> Option<SwcEntry> {
    match prop {
        Prop::KeyValue(kv) => Some(PropertyEntry::new(lower_key(&kv.key), lower_expr(&kv.value)?)),
        Prop::Shorthand(ident) => Some(PropertyEntry::named(
            ident.sym.to_string(),
            StyleNode::Expression(Box::new(Expr::Ident(ident.clone()))),
        )),
        _ => None,
    }
}

fn lower_key(key: &PropName) -> KeyNode<Box<Expr>> {
    match key {
        PropName::Ident(ident) => KeyNode::Static(ident.sym.to_string()),
        PropName::Str(s) => KeyNode::Static(str_value(s)),
        PropName::Num(num) => KeyNode::Static(Literal::Num(num.value).to_string()),
        PropName::BigInt(big) => KeyNode::Static(big.value.to_string()),
        PropName::Computed(computed) => KeyNode::Computed(computed.expr.clone()),
    }
}
