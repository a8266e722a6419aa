use serde::Serialize;

pub(crate) use crate::export::html_escape;

/// JSON for embedding inside an inline `<script>`.
///
/// `</` is written as `<\/` so a value containing `</script>` cannot close
/// the enclosing block.
pub(crate) fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

/// HTML attribute value, quotes included.
pub(super) fn attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_json_cannot_close_script() {
        let json = script_json("a</script>b");
        assert_eq!(json, r#""a<\/script>b""#);
    }

    #[test]
    fn attr_escape_quotes() {
        assert_eq!(attr_escape(r#"1" onclick="x"#), "1&quot; onclick=&quot;x");
    }
}
