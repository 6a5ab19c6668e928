use std::sync::LazyLock;

use regex::Regex;

use crate::cv::EditError;
use crate::models::config::{ColorKey, ColorScheme};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid")
});

pub fn validate_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Sets one color of the scheme. Only `#RRGGBB` values are accepted.
pub fn update_color(colors: &mut ColorScheme, key: ColorKey, value: &str) -> Result<(), EditError> {
    if !validate_hex_color(value) {
        return Err(EditError::InvalidColor(value.to_string()));
    }
    let slot = match key {
        ColorKey::Primary => &mut colors.primary,
        ColorKey::Text => &mut colors.text,
        ColorKey::SecondaryText => &mut colors.secondary_text,
    };
    *slot = value.to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::Template;
    use crate::template::presets::template_preset;

    #[test]
    fn test_valid_hex_colors() {
        assert!(validate_hex_color("#3498db"));
        assert!(validate_hex_color("#ABCDEF"));
    }

    #[test]
    fn test_invalid_hex_colors() {
        assert!(!validate_hex_color("3498db"));
        assert!(!validate_hex_color("#fff"));
        assert!(!validate_hex_color("#12345g"));
        assert!(!validate_hex_color("#3498db "));
    }

    #[test]
    fn test_update_color_rejects_bad_value() {
        let mut colors = template_preset(Template::Modern);
        let before = colors.clone();

        let result = update_color(&mut colors, ColorKey::Text, "blue");

        assert!(matches!(result, Err(EditError::InvalidColor(_))));
        assert_eq!(colors, before);
    }

    #[test]
    fn test_update_secondary_text() {
        let mut colors = template_preset(Template::Modern);
        update_color(&mut colors, ColorKey::SecondaryText, "#111111").unwrap();
        assert_eq!(colors.secondary_text, "#111111");
    }
}
