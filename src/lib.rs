//! Rewrites object-style CSS-in-JS into template literals.
//!
//! Style objects passed to `css(…)`, `styled.tag(…)`, `styled(Component)(…)`
//! or held by a JSX `css={{ … }}` attribute are replaced by the equivalent
//! CSS text:
//!
//! ```text
//! styled.div({ zIndex: 2, marginTop: 4, '&:hover': { color: 'red' } })
//! ```
//!
//! becomes
//!
//! ```text
//! styled.div`
//!   z-index: 2;
//!   margin-top: 4px;
//!
//!   &:hover {
//!     color: red;
//!   }
//! `
//! ```
//!
//! Non-literal values become `${…}` interpolations, and functions returning
//! style objects become functions returning `css` tagged templates, with
//! `css` imported from the configured module.
//!
//! The entry points are [`transform_module`] / [`transform_program`] for an
//! already parsed SWC tree and [`transform_source`] for source text.

pub mod builder;
pub mod config;
pub mod css;
pub mod error;
pub mod style;
pub mod template;
pub mod transform;

pub use builder::{NodeBuilder, SwcBuilder};
pub use config::TransformConfig;
pub use css::{dashify, is_unitless};
pub use error::{Error, Result};
pub use style::{ArrowNode, KeyNode, Literal, PropertyEntry, StyleNode};
pub use template::{HelperImports, Serializer, Template, TemplateBuffer, assemble};
pub use transform::{
    ModuleImports, StyleObjectTransform, TransformStats, transform_module, transform_program,
    transform_source,
};
