//! Tree representation of a style object, independent of any syntax-tree
//! library.
//!
//! The host lowers its object-literal nodes into a [`StyleNode`] tree; the
//! serializer consumes that tree exactly once. `E` is the host's opaque
//! expression type and `A` its arrow-function shell (an arrow whose body the
//! serializer will replace).

use std::fmt;

/// A literal that can be written straight into CSS text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Num(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(value) => f.write_str(value),
            Literal::Num(value) => write_number(f, *value),
        }
    }
}

/// Writes a number the way JavaScript stringifies it.
///
/// Magnitudes from `1e21` up and below `1e-6` use exponent form with a signed
/// exponent (`1e+21`, `1.5e-7`); everything else is plain decimal.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        // `-0` stringifies as `0`
        return f.write_str("0");
    }
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&formatted),
        };
    }

    write!(f, "{value}")
}

/// A style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleNode<E, A> {
    Literal(Literal),
    /// Nested rule block, properties in source order.
    Object(Vec<PropertyEntry<E, A>>),
    /// Anything the serializer interpolates verbatim.
    Expression(E),
    /// Function-valued branch: `props => ({ … })`.
    Arrow(ArrowNode<E, A>),
}

impl<E, A> StyleNode<E, A> {
    /// Returns `true` for nodes the serializer turns into CSS text rather than
    /// interpolating.
    pub fn is_style_bearing(&self) -> bool {
        match self {
            StyleNode::Object(_) => true,
            StyleNode::Arrow(arrow) => matches!(*arrow.body, StyleNode::Object(_)),
            StyleNode::Literal(_) | StyleNode::Expression(_) => false,
        }
    }
}

/// A `key: value` pair of an object node.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry<E, A> {
    pub key: KeyNode<E>,
    pub value: StyleNode<E, A>,
}

impl<E, A> PropertyEntry<E, A> {
    pub fn new(key: KeyNode<E>, value: StyleNode<E, A>) -> Self {
        Self { key, value }
    }

    /// Entry with a static key.
    pub fn named(name: impl Into<String>, value: StyleNode<E, A>) -> Self {
        Self::new(KeyNode::Static(name.into()), value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyNode<E> {
    /// Identifier, string or numeric key, as written.
    Static(String),
    /// `[expr]`
    Computed(E),
}

/// An arrow function whose body is serialized into a nested template.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowNode<E, A> {
    /// The arrow itself, kept so parameters and flags survive the rewrite.
    pub shell: A,
    pub body: Box<StyleNode<E, A>>,
}

impl<E, A> ArrowNode<E, A> {
    pub fn new(shell: A, body: StyleNode<E, A>) -> Self {
        Self {
            shell,
            body: Box::new(body),
        }
    }
}
