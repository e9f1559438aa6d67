pub const ANALYSIS_USER: &str = include_str!("../data/prompts/analysis_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_analysis_user_has_transcript_placeholder() {
        assert!(ANALYSIS_USER.contains("{{transcript}}"));
        assert!(ANALYSIS_USER.contains("<transcript>"));
        assert!(ANALYSIS_USER.contains("</transcript>"));
    }
}
