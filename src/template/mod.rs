//! Building template literals out of style trees.
//!
//! - [`TemplateBuffer`] accumulates text and interpolations for one
//!   top-level invocation.
//! - [`Serializer`] walks a style tree and writes into the buffer.
//! - [`assemble`] wraps the result into a [`Template`], which a
//!   [`NodeBuilder`] turns into a bare or tagged template node.

mod escape;
mod serialize;

pub(crate) use escape::escape_raw;
pub use serialize::{Entry, HelperImports, Node, Serializer};

use crate::builder::NodeBuilder;

/// Text fragments interleaved with interpolated expressions.
///
/// `text_fragments.len() == expressions.len() + 1` always holds: fragment
/// `i` precedes expression `i`, and the last fragment closes the template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template<E> {
    pub text_fragments: Vec<String>,
    pub expressions: Vec<E>,
    pub tag: Option<E>,
}

/// Wraps serializer output into a [`Template`].
pub fn assemble<E>(text_fragments: Vec<String>, expressions: Vec<E>, tag: Option<E>) -> Template<E> {
    debug_assert_eq!(
        text_fragments.len(),
        expressions.len() + 1,
        "template needs one more text fragment than expressions"
    );

    Template {
        text_fragments,
        expressions,
        tag,
    }
}

impl<E> Template<E> {
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }

    /// Builds the template node: tagged if a tag is present, bare otherwise.
    pub fn into_expr<B>(self, builder: &B) -> E
    where
        B: NodeBuilder<Expr = E> + ?Sized,
    {
        let last = self.text_fragments.len().saturating_sub(1);
        let fragments = self
            .text_fragments
            .iter()
            .enumerate()
            .map(|(index, text)| builder.make_text_fragment(text, index == last))
            .collect();

        match self.tag {
            Some(tag) => builder.make_tagged_template(tag, fragments, self.expressions),
            None => builder.make_template(fragments, self.expressions),
        }
    }
}

/// Mutable accumulator scoped to a single top-level template build.
///
/// Text is appended to the open fragment until an expression is flushed,
/// which closes the fragment, records the expression and opens a new
/// fragment seeded with a continuation.
#[derive(Debug)]
pub struct TemplateBuffer<E> {
    text: String,
    fragments: Vec<String>,
    expressions: Vec<E>,
}

impl<E> TemplateBuffer<E> {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            fragments: Vec::new(),
            expressions: Vec::new(),
        }
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Closes the open fragment, pairs it with `expr` and opens a new one
    /// starting with `continuation`.
    pub fn flush(&mut self, expr: E, continuation: &str) {
        let closed = std::mem::replace(&mut self.text, continuation.to_string());
        self.fragments.push(closed);
        self.expressions.push(expr);
    }

    /// Closes the last fragment and returns `(fragments, expressions)`.
    pub fn finish(mut self) -> (Vec<String>, Vec<E>) {
        self.fragments.push(self.text);
        (self.fragments, self.expressions)
    }
}

impl<E> Default for TemplateBuffer<E> {
    fn default() -> Self {
        Self::new()
    }
}
