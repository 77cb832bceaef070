//! Template engine for rendering the hub page.

use minijinja::{context, Environment, Value};

use specdeck_catalog::Catalog;

/// Context for rendering the hub page.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Hub title, shown in the header and the page title
    pub title: String,

    /// Base URL the page's own assets are served under
    pub base_url: String,

    /// Where the viewer assets (swagger-ui.css, swagger-ui-bundle.js) live
    pub viewer_asset_base: String,

    /// Display name of the source to pre-select, if any
    pub selected: Option<String>,

    /// Script injected by the dev server for live reload
    pub reload_script: Option<String>,
}

/// One selector entry as the template sees it.
#[derive(Debug, Clone, serde::Serialize)]
struct OptionRow<'a> {
    name: &'a str,
    url: &'a str,
    selected: bool,
}

/// Template engine for the hub page.
pub struct HubPage {
    env: Environment<'static>,
}

impl HubPage {
    /// Create a new page engine with the default template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_filter("urlattr", url_attr);

        env.add_template_owned("hub.html".to_string(), HUB_TEMPLATE.to_string())
            .expect("Failed to add hub template");

        Self { env }
    }

    /// Render the hub page for a catalog.
    ///
    /// The selection in `ctx` is resolved against the catalog: absent or
    /// unknown names pre-select the primary source, so exactly one option
    /// is marked selected.
    pub fn render(&self, catalog: &Catalog, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let selected = catalog.select(ctx.selected.as_deref());

        let sources: Vec<OptionRow<'_>> = catalog
            .iter()
            .map(|source| OptionRow {
                name: &source.name,
                url: &source.url,
                selected: source.url == selected.url,
            })
            .collect();

        let tmpl = self.env.get_template("hub.html")?;

        tmpl.render(context! {
            title => &ctx.title,
            base_url => &ctx.base_url,
            viewer_asset_base => &ctx.viewer_asset_base,
            sources => sources,
            reload_script => &ctx.reload_script,
        })
    }
}

impl Default for HubPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a url for an attribute value.
///
/// Attribute-breaking characters become entities, `/` stays literal, and
/// the result is marked safe so auto-escaping does not rewrite it again.
fn url_attr(url: String) -> Value {
    let mut escaped = String::with_capacity(url.len());

    for c in url.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    Value::from_safe_string(escaped)
}

const HUB_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="{{ viewer_asset_base|urlattr }}/swagger-ui.css">
  <link rel="stylesheet" href="{{ base_url|urlattr }}assets/hub.css">
</head>
<body>
  <header class="hub-header">
    <span class="hub-title">{{ title }}</span>
    <label class="hub-picker">
      <span class="hub-picker-label">Select an API documentation</span>
      <select id="source-select" autocomplete="off">
      {% for source in sources %}
        <option value="{{ source.url|urlattr }}"{% if source.selected %} selected{% endif %}>{{ source.name }}</option>
      {% endfor %}
      </select>
    </label>
  </header>
  <main id="viewer" class="hub-viewer"></main>
  <script src="{{ viewer_asset_base|urlattr }}/swagger-ui-bundle.js"></script>
  <script src="{{ base_url|urlattr }}assets/hub.js"></script>
{% if reload_script %}  <script src="{{ reload_script|urlattr }}"></script>
{% endif %}</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use specdeck_catalog::DocSource;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            DocSource::new("Main Service", "https://example.com/main"),
            DocSource::new("Storage Service", "https://example.com/storage"),
            DocSource::new("Voucher Service", "https://example.com/voucher"),
        ])
        .unwrap()
    }

    fn ctx() -> PageContext {
        PageContext {
            title: "API Documentation".to_string(),
            base_url: "/".to_string(),
            viewer_asset_base: "https://cdn.example.com/swagger".to_string(),
            selected: None,
            reload_script: None,
        }
    }

    #[test]
    fn renders_options_in_catalog_order() {
        let html = HubPage::new().render(&catalog(), &ctx()).unwrap();

        let main = html.find("Main Service").unwrap();
        let storage = html.find("Storage Service").unwrap();
        let voucher = html.find("Voucher Service").unwrap();

        assert!(main < storage);
        assert!(storage < voucher);
    }

    #[test]
    fn preselects_the_primary_source() {
        let html = HubPage::new().render(&catalog(), &ctx()).unwrap();

        assert!(html.contains(r#"<option value="https://example.com/main" selected>Main Service</option>"#));
        assert_eq!(html.matches(" selected>").count(), 1);
    }

    #[test]
    fn preselects_a_named_source() {
        let mut ctx = ctx();
        ctx.selected = Some("Voucher Service".to_string());

        let html = HubPage::new().render(&catalog(), &ctx).unwrap();

        assert!(html.contains(r#"<option value="https://example.com/voucher" selected>Voucher Service</option>"#));
        assert_eq!(html.matches(" selected>").count(), 1);
    }

    #[test]
    fn unknown_selection_falls_back_to_primary() {
        let mut ctx = ctx();
        ctx.selected = Some("Nope".to_string());

        let html = HubPage::new().render(&catalog(), &ctx).unwrap();

        assert!(html.contains(r#"<option value="https://example.com/main" selected>"#));
    }

    #[test]
    fn includes_viewer_mount_and_scripts() {
        let html = HubPage::new().render(&catalog(), &ctx()).unwrap();

        assert!(html.contains(r#"<main id="viewer""#));
        assert!(html.contains(r#"<script src="https://cdn.example.com/swagger/swagger-ui-bundle.js"></script>"#));
        assert!(html.contains(r#"<script src="/assets/hub.js"></script>"#));
        assert!(!html.contains("__reload"));
    }

    #[test]
    fn includes_reload_script_when_configured() {
        let mut ctx = ctx();
        ctx.reload_script = Some("/__reload.js".to_string());

        let html = HubPage::new().render(&catalog(), &ctx).unwrap();

        assert!(html.contains(r#"<script src="/__reload.js"></script>"#));
    }

    #[test]
    fn escapes_source_names() {
        let catalog = Catalog::new(vec![DocSource::new(
            "Fee & Tax <Service>",
            "https://example.com/fees?v=1&x=2",
        )])
        .unwrap();

        let html = HubPage::new().render(&catalog, &ctx()).unwrap();

        assert!(html.contains("Fee &amp; Tax &lt;Service&gt;"));
        assert!(!html.contains("<Service>"));
        assert!(html.contains(r#"value="https://example.com/fees?v=1&amp;x=2""#));
    }

    #[test]
    fn url_attr_escapes_attribute_breakers() {
        let escaped = url_attr(r#"https://example.com/a?b=1&c="2""#.to_string());

        assert_eq!(
            escaped.as_str().unwrap(),
            "https://example.com/a?b=1&amp;c=&quot;2&quot;"
        );
    }
}
