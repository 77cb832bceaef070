//! Stylesheet and script assets served alongside the hub page.

/// Static assets for the hub page.
pub struct HubAssets;

impl HubAssets {
    /// The hub stylesheet.
    pub fn css() -> String {
        HUB_CSS.to_string()
    }

    /// The selection script wiring the picker to the viewer.
    pub fn js() -> String {
        HUB_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const HUB_CSS: &str = r#"/* specdeck hub chrome */

:root {
  --hub-bg: #1b1b1f;
  --hub-fg: #f5f5f7;
  --hub-muted: #a3a3ad;
  --hub-border: #34343c;
  --hub-accent: #49cc90;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, sans-serif;
}

.hub-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 0.75rem;
  padding: 0.75rem 1.5rem;
  background: var(--hub-bg);
  color: var(--hub-fg);
  border-bottom: 3px solid var(--hub-accent);
}

.hub-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.hub-picker {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.hub-picker-label {
  font-size: 0.875rem;
  color: var(--hub-muted);
}

.hub-picker select {
  font-size: 0.875rem;
  padding: 0.375rem 0.75rem;
  color: var(--hub-fg);
  background: var(--hub-bg);
  border: 1px solid var(--hub-border);
  border-radius: 0.375rem;
  cursor: pointer;
}

.hub-picker select:focus-visible {
  outline: 2px solid var(--hub-accent);
  outline-offset: 1px;
}

.hub-viewer {
  max-width: 1460px;
  margin: 0 auto;
}
"#;

const HUB_JS: &str = r#"// specdeck hub - selection wiring
(function() {
  'use strict';

  const select = document.getElementById('source-select');

  // Mount the external viewer on the given document URL, replacing any
  // previous instance. Load failures are the viewer's to display.
  function mount(url) {
    window.ui = SwaggerUIBundle({
      url: url,
      dom_id: '#viewer'
    });
  }

  select.addEventListener('change', function() {
    mount(select.value);
  });

  mount(select.value);
})();
"#;
