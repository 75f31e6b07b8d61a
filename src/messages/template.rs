//! Failure message templates.
//!
//! Messages are plain strings with positional placeholders: `{0}`, `{1}`,
//! … are replaced by the failing rule's parameters. Text without
//! placeholders passes through untouched, so static messages cost
//! nothing extra.

/// Message used when neither an override nor a registered rule supplies
/// one. Reached only when resolving a message for a name the registry
/// does not know.
pub const FALLBACK_MESSAGE: &str = "No validator matched";

/// Replace positional placeholders with rule parameters.
pub fn interpolate(template: &str, params: &[String]) -> String {
    let mut text = template.to_string();
    for (i, param) in params.iter().enumerate() {
        let placeholder = format!("{{{}}}", i);
        if text.contains(&placeholder) {
            text = text.replace(&placeholder, param);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_placeholder() {
        assert_eq!(
            interpolate("More than {0} characters are not allowed", &params(&["10"])),
            "More than 10 characters are not allowed"
        );
    }

    #[test]
    fn test_multiple_placeholders() {
        assert_eq!(
            interpolate("between {0} and {1}", &params(&["1", "9"])),
            "between 1 and 9"
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(interpolate("{0} and {0}", &params(&["x"])), "x and x");
    }

    #[test]
    fn test_no_placeholders_untouched() {
        assert_eq!(
            interpolate("Field is required", &params(&["ignored"])),
            "Field is required"
        );
    }

    #[test]
    fn test_missing_params_leave_placeholder() {
        assert_eq!(interpolate("needs {0}", &[]), "needs {0}");
    }
}
