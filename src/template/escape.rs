/// Escapes text for the raw side of a JS template literal.
///
/// Backticks, backslashes and `${` would otherwise end the template, start
/// an escape sequence or open an interpolation. A lone `$` is left alone.
pub(crate) fn escape_raw(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '`' => out.push_str("\\`"),
            '\\' => out.push_str("\\\\"),
            '$' => {
                if matches!(chars.peek(), Some('{')) {
                    chars.next();
                    out.push_str("\\${");
                } else {
                    out.push('$');
                }
            }
            _ => out.push(c),
        }
    }
    out
}
