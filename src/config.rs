//! Options controlling which call shapes are rewritten and how the CSS text
//! is laid out.

use serde::Deserialize;

use crate::error::Result;

/// Configuration for the style-object rewrite.
///
/// Deserializes from the camelCase JSON object a build tool passes as plugin
/// options. Missing fields fall back to [`TransformConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformConfig {
    /// JSX attribute carrying an inline style object (`<div css={{ … }} />`).
    pub attribute_name: String,
    /// Styled-component factory (`styled(Button)({ … })`, `styled.div({ … })`).
    pub styled_name: String,
    /// Tagging function called with style objects (`css({ … })`).
    pub css_name: String,
    /// Module the helper is imported from.
    pub import_source: String,
    /// Export used to tag templates produced for function-valued branches.
    pub helper_name: String,
    /// One level of indentation inside the generated CSS text.
    pub indentation: String,
    /// Unit appended to bare numbers on unit-bearing properties.
    pub unit: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            attribute_name: "css".to_string(),
            styled_name: "styled".to_string(),
            css_name: "css".to_string(),
            import_source: "react-emotion".to_string(),
            helper_name: "css".to_string(),
            indentation: "  ".to_string(),
            unit: "px".to_string(),
        }
    }
}

impl TransformConfig {
    /// Parses plugin options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_import_source(mut self, source: impl Into<String>) -> Self {
        self.import_source = source.into();
        self
    }

    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }
}
