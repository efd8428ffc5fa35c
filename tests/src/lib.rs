//! End-to-end tests for the style-object rewrite.
//!
//! Each test feeds JSX source through the full parse, rewrite and print
//! pipeline and checks the printed templates.

#[cfg(test)]
mod tests {
    use object_to_css_literal::{
        Error, TransformConfig, TransformStats, transform_module, transform_source,
    };
    use swc_core::common::sync::Lrc;
    use swc_core::common::{FileName, SourceMap};
    use swc_core::ecma::ast::Module;
    use swc_core::ecma::parser::lexer::Lexer;
    use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax};

    // =============================================================================
    // Helper Functions
    // =============================================================================

    fn rewrite(code: &str) -> String {
        rewrite_with(code, &TransformConfig::default())
    }

    fn rewrite_with(code: &str, config: &TransformConfig) -> String {
        transform_source(code, "input.jsx", config).expect("transform failed")
    }

    fn parse_module(code: &str) -> Module {
        let cm: Lrc<SourceMap> = Default::default();
        let fm = cm.new_source_file(Lrc::new(FileName::Custom("input.jsx".into())), code.to_string());
        let lexer = Lexer::new(
            Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            Default::default(),
            StringInput::from(&*fm),
            None,
        );
        Parser::new_from(lexer)
            .parse_module()
            .expect("failed to parse module")
    }

    fn assert_contains(out: &str, expected: &str) {
        assert!(
            out.contains(expected),
            "expected output to contain:\n{expected}\n--- got ---\n{out}"
        );
    }

    // =============================================================================
    // Declarations
    // =============================================================================

    #[test]
    fn test_dashify_and_units() {
        let out = rewrite("const a = css({ color: 'red', fontSize: 12, zIndex: 3, lineHeight: 1.5 });");
        assert_contains(
            &out,
            "css`\n  color: red;\n  font-size: 12px;\n  z-index: 3;\n  line-height: 1.5;\n`",
        );
    }

    #[test]
    fn test_zero_gets_unit() {
        let out = rewrite("const a = css({ margin: 0, opacity: 0 });");
        assert_contains(&out, "css`\n  margin: 0px;\n  opacity: 0;\n`");
    }

    #[test]
    fn test_string_numbers_are_verbatim() {
        let out = rewrite("const a = css({ width: '50%', flexGrow: '1' });");
        assert_contains(&out, "css`\n  width: 50%;\n  flex-grow: 1;\n`");
    }

    #[test]
    fn test_interpolated_values() {
        let out = rewrite("const a = css({ color: theme.primary, width: size });");
        assert_contains(&out, "css`\n  color: ${theme.primary};\n  width: ${size};\n`");
    }

    #[test]
    fn test_shorthand_property() {
        let out = rewrite("const a = css({ color });");
        assert_contains(&out, "css`\n  color: ${color};\n`");
    }

    #[test]
    fn test_custom_unit_and_indentation() {
        let config = TransformConfig {
            unit: "rem".to_string(),
            ..TransformConfig::default()
        }
        .with_indentation("\t");
        let out = rewrite_with("const a = css({ padding: 2 });", &config);
        assert_contains(&out, "css`\n\tpadding: 2rem;\n`");
    }

    // =============================================================================
    // Blocks and computed keys
    // =============================================================================

    #[test]
    fn test_nested_blocks() {
        let out = rewrite(
            "const a = css({ color: 'red', '&:hover': { color: 'blue', '& span': { margin: 0 } } });",
        );
        assert_contains(
            &out,
            "css`\n  color: red;\n\n  &:hover {\n    color: blue;\n\n    & span {\n      margin: 0px;\n    }\n  }\n`",
        );
    }

    #[test]
    fn test_leading_block_has_no_blank_line() {
        let out = rewrite("const a = css({ '& a': { color: 'red' } });");
        assert_contains(&out, "css`\n  & a {\n    color: red;\n  }\n`");
    }

    #[test]
    fn test_computed_keys() {
        let out = rewrite("const a = css({ [theme.key]: 4, [sel]: { color: 'red' } });");
        assert_contains(
            &out,
            "css`\n  ${theme.key}: 4;\n\n  ${sel} {\n    color: red;\n  }\n`",
        );
    }

    // =============================================================================
    // Call shapes
    // =============================================================================

    #[test]
    fn test_styled_factory() {
        let out = rewrite("const B = styled(Button)({ padding: 8 });");
        assert_contains(&out, "styled(Button)`\n  padding: 8px;\n`");
    }

    #[test]
    fn test_styled_member() {
        let out = rewrite("const D = styled.div({ display: 'flex' });");
        assert_contains(&out, "styled.div`\n  display: flex;\n`");
    }

    #[test]
    fn test_argument_order_is_kept() {
        let out = rewrite("const a = css({ color: 'red' }, base, { width: 1 });");
        assert_contains(&out, "css`\n  color: red;\n;\n${base};\n  width: 1px;\n`");
    }

    #[test]
    fn test_jsx_attribute() {
        let out = rewrite("const el = <div css={{ color: 'red', marginTop: 2 }} />;");
        assert_contains(&out, "css={`\n  color: red;\n  margin-top: 2px;\n`}");
        assert_contains(&out, "import { css } from \"react-emotion\"");
    }

    #[test]
    fn test_custom_names() {
        let config = TransformConfig::from_json(
            r#"{ "attributeName": "sx", "cssName": "style", "styledName": "s" }"#,
        )
        .expect("valid config");
        let out = rewrite_with(
            "const a = style({ top: 1 });\nconst B = s.span({ left: 2 });\nconst el = <i sx={{ right: 3 }} />;",
            &config,
        );
        assert_contains(&out, "style`\n  top: 1px;\n`");
        assert_contains(&out, "s.span`\n  left: 2px;\n`");
        assert_contains(&out, "sx={`\n  right: 3px;\n`}");
    }

    // =============================================================================
    // Function-valued branches and helper import
    // =============================================================================

    #[test]
    fn test_arrow_argument_is_tagged() {
        let out = rewrite(
            "import styled from \"react-emotion\";\n\
             const C = styled.div({ color: 'red' }, props => ({ width: props.w }));",
        );
        assert_contains(&out, "styled.div`\n  color: red;\n;\n${");
        assert_contains(&out, "css`\n  width: ${props.w};\n`");
        assert_contains(&out, "import styled, { css } from \"react-emotion\"");
    }

    #[test]
    fn test_arrow_value_is_tagged() {
        let out = rewrite("const a = css({ color: p => ({ fill: p.c }) });");
        assert_contains(&out, "css`\n  fill: ${p.c};\n`");
        assert_contains(&out, "import { css } from \"react-emotion\"");
    }

    #[test]
    fn test_helper_is_imported_once() {
        let out = rewrite(
            "const A = styled.a(p => ({ color: p.c }));\nconst B = styled.b(q => ({ color: q.c }));",
        );
        assert_eq!(out.matches("import").count(), 1, "{out}");
    }

    #[test]
    fn test_existing_alias_is_reused() {
        let out = rewrite(
            "import { css as emo } from \"react-emotion\";\n\
             const A = styled.a(p => ({ color: p.c }));",
        );
        assert_contains(&out, "emo`\n  color: ${p.c};\n`");
        assert_eq!(out.matches("import").count(), 1, "{out}");
    }

    #[test]
    fn test_custom_import_source() {
        let config = TransformConfig::default().with_import_source("@emotion/css");
        let out = rewrite_with("const A = styled.a(p => ({ color: p.c }));", &config);
        assert_contains(&out, "import { css } from \"@emotion/css\"");
    }

    #[test]
    fn test_helper_aliased_when_imported_elsewhere() {
        let out = rewrite(
            "import { css } from 'emotion';\n\
             const el = <div css={{ color: 'red' }} />;",
        );
        assert_contains(&out, "import { css as _css } from \"react-emotion\"");
        assert_eq!(out.matches("{ css }").count(), 1, "{out}");
        assert_contains(&out, "css={`\n  color: red;\n`}");
    }

    #[test]
    fn test_helper_aliased_when_declared_locally() {
        let out = rewrite(
            "const css = makeCss();\n\
             const a = css(p => ({ top: 1 }));",
        );
        assert_contains(&out, "import { css as _css } from \"react-emotion\"");
        assert_contains(&out, "_css`\n  top: 1px;\n`");
        assert!(!out.contains("import { css }"), "{out}");
        assert_eq!(out.matches("const css").count(), 1, "{out}");
    }

    #[test]
    fn test_helper_aliased_when_parameter_shadows() {
        let out = rewrite("const A = styled.div(css => ({ color: css.c }));");
        assert_contains(&out, "_css`\n  color: ${css.c};\n`");
        assert_contains(&out, "import { css as _css } from \"react-emotion\"");
    }

    #[test]
    fn test_large_numbers_use_exponent_form() {
        let out = rewrite("const a = css({ width: 1e21, height: 1e-7 });");
        assert_contains(&out, "css`\n  width: 1e+21px;\n  height: 1e-7px;\n`");
    }

    #[test]
    fn test_opaque_arrow_is_interpolated() {
        let out = rewrite("const a = css({ color: 'red' }, p => p.extra);");
        assert!(!out.contains("import"), "{out}");
        assert_contains(&out, "css`\n  color: red;\n;\n${");
    }

    // =============================================================================
    // Re-queued nodes
    // =============================================================================

    #[test]
    fn test_nested_style_call() {
        let out = rewrite("const a = css({ color: 'red' }, css({ width: 1 }));");
        assert_contains(&out, "${css`\n  width: 1px;\n`}");
        assert!(!out.contains("css({"), "{out}");
    }

    #[test]
    fn test_style_call_in_value() {
        let out = rewrite("const a = css({ '& a': css({ top: 0 }) });");
        assert_contains(&out, "& a: ${css`\n  top: 0px;\n`};");
    }

    #[test]
    fn test_style_call_inside_jsx_attribute() {
        let out = rewrite("const el = <div css={{ color: c ? css({ top: 1 }) : 'red' }} />;");
        assert_contains(&out, "css`\n  top: 1px;\n`");
        assert!(!out.contains("css({"), "{out}");
    }

    // =============================================================================
    // Untouched input
    // =============================================================================

    #[test]
    fn test_untouched_shapes() {
        let mut module = parse_module(
            "const a = css(base);\n\
             const b = css(...parts);\n\
             const c = css({ ...base, color: 'red' });\n\
             const d = other({ color: 'red' });\n\
             const e = styled.div`color: red;`;\n\
             const el = <div css={styles} style={{ color: 'red' }} />;",
        );
        let stats = transform_module(&mut module, &TransformConfig::default());
        assert_eq!(stats, TransformStats::default());
    }

    #[test]
    fn test_stats_are_counted() {
        let mut module = parse_module(
            "const a = css({ color: 'red' });\n\
             const A = styled.div(p => ({ width: p.w }));\n\
             const el = <div css={{ top: 0 }} />;",
        );
        let stats = transform_module(&mut module, &TransformConfig::default());
        assert_eq!(
            stats,
            TransformStats {
                replaced: 3,
                imports_added: 1,
            }
        );
    }

    // =============================================================================
    // Errors
    // =============================================================================

    #[test]
    fn test_parse_error() {
        let err = transform_source("const a = css({ color: ", "bad.jsx", &TransformConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { ref file_name, .. } if file_name == "bad.jsx"));
        assert!(err.to_string().starts_with("failed to parse bad.jsx"));
    }

    #[test]
    fn test_invalid_config() {
        let err = TransformConfig::from_json(r#"{ "unit": 3 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
