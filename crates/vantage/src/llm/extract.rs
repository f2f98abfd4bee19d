//! Candidate JSON extraction from free-form model output.

/// Extract the first balanced `{...}` span from a model response.
///
/// Markdown code fences are stripped first, since models frequently wrap
/// JSON in them. The scan is quote- and escape-aware, so braces inside
/// string values do not terminate the span. Returns `None` when no opening
/// brace exists or the braces never balance.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let text = strip_code_fences(text);

    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Strip the first markdown code fence, if any, returning its body.
fn strip_code_fences(text: &str) -> &str {
    if let Some(rest) = text.split("```json").nth(1) {
        rest.split("```").next().map(str::trim).unwrap_or(text)
    } else if text.contains("```") {
        text.split("```").nth(1).map(str::trim).unwrap_or(text)
    } else {
        text.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_object_with_surrounding_prose() {
        let text = r#"Here is the plan you asked for: {"a": 1} hope it helps!"#;
        assert_eq!(extract_json_object(text), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_nested_objects_are_greedy() {
        let text = r#"{"outer": {"inner": 2}} {"second": 3}"#;
        assert_eq!(extract_json_object(text), Some(r#"{"outer": {"inner": 2}}"#));
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"{"note": "curly } brace", "n": 1}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let text = r#"{"note": "a \" quote {", "n": 1}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_markdown_fence() {
        let text = "Sure!\n```json\n{\"a\": 1}\n```\n";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_bare_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_no_object() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(extract_json_object(r#"{"a": 1"#), None);
    }
}
