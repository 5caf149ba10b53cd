//! Theme CSS emission.
//!
//! Turns the resolved theme context into the `:root` custom-property
//! block the site stylesheet is written against. Color values propagate
//! verbatim; the two derived tokens append fixed alpha suffixes to the
//! 6-digit hex values the themes use.

use cmsview_core::ThemeContext;

/// Path of the published site stylesheet imported into the preview.
pub const SITE_STYLESHEET: &str = "/css/main.css";

/// Builds the dynamic theme stylesheet for one render pass.
pub fn theme_css(theme: &ThemeContext) -> String {
    format!(
        r#":root {{
  --bg: {bg};
  --text: {text};
  --primary: {primary};
  --accent: {accent};
  --font-family: '{font}', sans-serif;
  --bg-secondary: {bg}f0;
  --border: {primary}20;
  --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}}

body {{
  font-family: var(--font-family);
  background-color: var(--bg);
  color: var(--text);
  line-height: 1.6;
  margin: 0;
  padding: 0;
}}

.preview-container {{
  min-height: 100vh;
  background-color: var(--bg);
}}

@import url('{stylesheet}');
"#,
        bg = theme.bg,
        text = theme.text,
        primary = theme.primary,
        accent = theme.accent,
        font = theme.font,
        stylesheet = SITE_STYLESHEET,
    )
}
