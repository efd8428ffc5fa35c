//! Recognising the call and attribute shapes that carry style objects.

use swc_core::common::{Span, Spanned};
use swc_core::ecma::ast::{
    CallExpr, Callee, Expr, ExprOrSpread, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr,
};
use tracing::debug;

use super::lower::{SwcNode, lower_expr, unwrap_parens};
use crate::config::TransformConfig;

/// Where a style object was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// `<div css={{ … }} />`
    Attribute,
    /// `styled(Component)({ … })`
    StyledFactory,
    /// `styled.div({ … })`
    StyledMember,
    /// `css({ … })`
    TaggingCall,
}

/// A candidate ready for serialization.
#[derive(Debug)]
pub struct Detected {
    pub kind: StyleKind,
    pub arguments: Vec<SwcNode>,
    /// Callee rebuilt without its arguments; `None` for a bare template.
    pub tag: Option<Box<Expr>>,
    /// Position anchor of the node being replaced.
    pub span: Span,
}

fn is_ident(expr: &Expr, name: &str) -> bool {
    matches!(expr, Expr::Ident(ident) if &*ident.sym == name)
}

fn callee_is_ident(callee: &Callee, name: &str) -> bool {
    matches!(callee, Callee::Expr(expr) if is_ident(expr, name))
}

pub fn detect_call(call: &CallExpr, config: &TransformConfig) -> Option<Detected> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };

    let (kind, tag) = match &**callee {
        Expr::Call(inner) if callee_is_ident(&inner.callee, &config.styled_name) && inner.args.len() == 1 => {
            (StyleKind::StyledFactory, Box::new(Expr::Call(inner.clone())))
        }
        Expr::Member(member) if is_ident(&member.obj, &config.styled_name) => {
            (StyleKind::StyledMember, Box::new(Expr::Member(member.clone())))
        }
        expr if is_ident(expr, &config.css_name) => (StyleKind::TaggingCall, callee.clone()),
        _ => return None,
    };

    let arguments = lower_arguments(&call.args, call.span)?;

    Some(Detected {
        kind,
        arguments,
        tag: Some(tag),
        span: call.span,
    })
}

/// Lowers call arguments, requiring at least one of them to carry styles.
fn lower_arguments(args: &[ExprOrSpread], span: Span) -> Option<Vec<SwcNode>> {
    if args.iter().any(|arg| arg.spread.is_some()) {
        debug!(?span, "skipping style call with spread arguments");
        return None;
    }

    let Some(nodes) = args.iter().map(|arg| lower_expr(&arg.expr)).collect::<Option<Vec<_>>>() else {
        debug!(?span, "skipping style call with non-lowerable object");
        return None;
    };

    nodes.iter().any(SwcNode::is_style_bearing).then_some(nodes)
}

pub fn detect_attribute(attr: &JSXAttr, config: &TransformConfig) -> Option<Detected> {
    let JSXAttrName::Ident(name) = &attr.name else {
        return None;
    };
    if &*name.sym != config.attribute_name.as_str() {
        return None;
    }

    let Some(JSXAttrValue::JSXExprContainer(container)) = &attr.value else {
        return None;
    };
    let JSXExpr::Expr(expr) = &container.expr else {
        return None;
    };
    if !matches!(unwrap_parens(expr), Expr::Object(_)) {
        return None;
    }

    let Some(node) = lower_expr(expr) else {
        debug!(span = ?attr.span, "skipping non-lowerable style attribute");
        return None;
    };

    Some(Detected {
        kind: StyleKind::Attribute,
        arguments: vec![node],
        tag: None,
        span: expr.span(),
    })
}
