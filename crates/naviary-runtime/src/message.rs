//! Message rendering.
//!
//! Every printed value becomes exactly one line. The primary line goes to
//! stdout; the mirror line, when enabled, goes to stderr.

const MIRROR_LABEL: &str = "[DEBUG] printed value: ";

/// A value handed to the shim by compiled code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Raw text bytes, written verbatim.
    Text(&'a [u8]),
}

impl Value<'_> {
    /// Append the textual form of this value to `buf`.
    pub fn render_into(&self, buf: &mut Vec<u8>) {
        match *self {
            Value::Int(n) => buf.extend_from_slice(n.to_string().as_bytes()),
            Value::Float(x) => buf.extend_from_slice(format_float(x).as_bytes()),
            Value::Bool(b) => buf.extend_from_slice(if b { b"true" } else { b"false" }),
            Value::Text(bytes) => buf.extend_from_slice(bytes),
        }
    }
}

/// Render `"🚀 <tag> says: <value>\n"`.
pub fn primary_line(tag: &str, value: &Value<'_>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(tag.len() + 32);
    buf.extend_from_slice("🚀 ".as_bytes());
    buf.extend_from_slice(tag.as_bytes());
    buf.extend_from_slice(b" says: ");
    value.render_into(&mut buf);
    buf.push(b'\n');
    buf
}

/// Render `"[DEBUG] printed value: <value>\n"`.
pub fn mirror_line(value: &Value<'_>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MIRROR_LABEL.len() + 24);
    buf.extend_from_slice(MIRROR_LABEL.as_bytes());
    value.render_into(&mut buf);
    buf.push(b'\n');
    buf
}

// Same output as C's `%f`.
fn format_float(x: f64) -> String {
    match (x.is_nan(), x.is_infinite(), x.is_sign_negative()) {
        (true, _, false) => "nan".to_string(),
        (true, _, true) => "-nan".to_string(),
        (_, true, false) => "inf".to_string(),
        (_, true, true) => "-inf".to_string(),
        _ => format!("{:.6}", x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary(value: Value<'_>) -> String {
        String::from_utf8(primary_line("Naviary", &value)).unwrap()
    }

    #[test]
    fn test_primary_int() {
        insta::assert_snapshot!(primary(Value::Int(42)).trim_end(), @"🚀 Naviary says: 42");
        insta::assert_snapshot!(primary(Value::Int(-7)).trim_end(), @"🚀 Naviary says: -7");
        insta::assert_snapshot!(primary(Value::Int(0)).trim_end(), @"🚀 Naviary says: 0");
    }

    #[test]
    fn test_primary_bool() {
        insta::assert_snapshot!(primary(Value::Bool(true)).trim_end(), @"🚀 Naviary says: true");
        insta::assert_snapshot!(primary(Value::Bool(false)).trim_end(), @"🚀 Naviary says: false");
    }

    #[test]
    fn test_primary_text() {
        insta::assert_snapshot!(primary(Value::Text(b"hello")).trim_end(), @"🚀 Naviary says: hello");
    }

    #[test]
    fn test_line_is_newline_terminated() {
        let line = primary_line("Naviary", &Value::Int(1));
        assert_eq!(line.last(), Some(&b'\n'));
        assert_eq!(line.iter().filter(|&&b| b == b'\n').count(), 1);
    }

    #[test]
    fn test_int_extremes() {
        assert!(primary(Value::Int(i64::MIN)).ends_with(" says: -9223372036854775808\n"));
        assert!(primary(Value::Int(i64::MAX)).ends_with(" says: 9223372036854775807\n"));
        assert!(primary(Value::Int(i32::MIN.into())).ends_with(" says: -2147483648\n"));
    }

    #[test]
    fn test_text_verbatim() {
        let raw: &[u8] = b"tab\there \\n %d \xff\xfe";
        let line = primary_line("Naviary", &Value::Text(raw));
        assert!(line.starts_with("🚀 Naviary says: ".as_bytes()));
        assert_eq!(&line["🚀 Naviary says: ".len()..line.len() - 1], raw);
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(primary(Value::Text(b"")), "🚀 Naviary says: \n");
    }

    #[test]
    fn test_float_matches_printf() {
        assert!(primary(Value::Float(3.5)).ends_with(" says: 3.500000\n"));
        assert!(primary(Value::Float(-0.25)).ends_with(" says: -0.250000\n"));
        assert!(primary(Value::Float(f64::INFINITY)).ends_with(" says: inf\n"));
        assert!(primary(Value::Float(f64::NEG_INFINITY)).ends_with(" says: -inf\n"));
        assert!(primary(Value::Float(f64::NAN)).ends_with(" says: nan\n"));
    }

    #[test]
    fn test_mirror_line() {
        let line = String::from_utf8(mirror_line(&Value::Int(42))).unwrap();
        insta::assert_snapshot!(line.trim_end(), @"[DEBUG] printed value: 42");

        let line = String::from_utf8(mirror_line(&Value::Bool(false))).unwrap();
        assert_eq!(line, "[DEBUG] printed value: false\n");
    }

    #[test]
    fn test_custom_tag() {
        let line = String::from_utf8(primary_line("Kestrel", &Value::Int(3))).unwrap();
        assert_eq!(line, "🚀 Kestrel says: 3\n");
    }
}
