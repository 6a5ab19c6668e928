use crate::models::config::{ColorScheme, Template};

/// Color preset shipped with each template.
pub fn template_preset(template: Template) -> ColorScheme {
    let (primary, text, secondary_text) = match template {
        Template::Modern => ("#3498db", "#2c3e50", "#7f8c8d"),
        Template::Classic => ("#2c3e50", "#1a1a1a", "#666666"),
        Template::Creative => ("#e74c3c", "#2c3e50", "#95a5a6"),
    };
    ColorScheme {
        primary: primary.to_string(),
        text: text.to_string(),
        secondary_text: secondary_text.to_string(),
    }
}

/// Switches the config to `template`, replacing any custom colors with its preset.
pub fn apply_template(config: &mut crate::models::config::ResumeConfig, template: Template) {
    config.template = template;
    config.colors = template_preset(template);
}
