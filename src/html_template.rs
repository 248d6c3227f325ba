use anyhow::{Context, Result};
use axum::response::Html;
use rust_embed::RustEmbed;

use crate::encoding::LegendEntry;
use crate::presenter::MapComposition;

#[derive(RustEmbed)]
#[folder = "frontend/"]
pub struct Asset;

const MAP_DATA_PLACEHOLDER: &str = "<!-- MAP_DATA_PLACEHOLDER -->";
const STYLE_LINK: &str = r#"<link rel="stylesheet" href="/style.css" />"#;
const SCRIPT_TAG: &str = r#"<script src="/script.js"></script>"#;

fn asset_text(name: &str) -> Result<String> {
    let file = Asset::get(name).with_context(|| format!("Embedded asset {} is missing", name))?;
    String::from_utf8(file.data.into_owned())
        .with_context(|| format!("Embedded asset {} is not UTF-8", name))
}

/// Page served by the local server; the script loads `/api/map` itself.
pub fn get_map_html() -> Result<Html<String>> {
    let html = asset_text("index.html")?.replace(MAP_DATA_PLACEHOLDER, "");
    Ok(Html(html))
}

/// Single self-contained page with styles, script and map data inlined.
pub fn render_standalone_page(map: &MapComposition) -> Result<String> {
    let data = serde_json::to_string(map).context("Failed to serialize map composition")?;
    // Keep the payload from closing the surrounding <script> element
    let data = data.replace("</", "<\\/");

    let style = asset_text("style.css")?;
    let script = asset_text("script.js")?;

    let html = asset_text("index.html")?
        .replace(STYLE_LINK, &format!("<style>\n{}\n</style>", style))
        .replace(
            MAP_DATA_PLACEHOLDER,
            &format!("<script>window.QUAKEMAP_DATA = {};</script>", data),
        )
        .replace(SCRIPT_TAG, &format!("<script>\n{}\n</script>", script));

    Ok(html)
}

/// Contents of the legend control: a title, then one swatch and range per row.
pub fn render_legend_html(title: &str, entries: &[LegendEntry]) -> String {
    let mut html = format!("<strong>{}</strong><br>", title);
    for entry in entries {
        html.push_str(&format!(
            r#"<i style="background:{}; width: 20px; height: 20px; display: inline-block; margin-right: 5px;"></i>{}<br>"#,
            entry.color.hex(),
            entry.label.replace('–', "&ndash;")
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{legend_entries, DepthColor};
    use crate::feed::FeedMetadata;
    use crate::marker::{LatLng, VisualMarker};
    use crate::presenter::{compose, EarthquakeOverlay};

    #[test]
    fn test_legend_html_rows() {
        let html = render_legend_html("Earthquake Depth (km)", &legend_entries());

        assert!(html.starts_with("<strong>Earthquake Depth (km)</strong><br>"));
        assert_eq!(html.matches("<i style=").count(), 6);
        assert!(html.contains("background:#00FFFF;"));
        assert!(html.contains("</i>0&ndash;10 km<br>"));
        assert!(html.contains("</i>90+ km<br>"));
        assert!(html.find("0&ndash;10 km").unwrap() < html.find("90+ km").unwrap());
    }

    #[test]
    fn test_served_page_has_no_inline_data() {
        let Html(html) = get_map_html().unwrap();
        assert!(html.contains(r#"id="map""#));
        assert!(html.contains(SCRIPT_TAG));
        assert!(!html.contains(MAP_DATA_PLACEHOLDER));
        assert!(!html.contains("QUAKEMAP_DATA ="));
    }

    #[test]
    fn test_standalone_page_inlines_everything() {
        let marker = VisualMarker {
            id: "x".to_string(),
            position: LatLng { lat: 1.0, lng: 2.0 },
            radius: 10.0,
            fill_color: DepthColor::Yellow,
            popup_text: "Location: </script><br>Magnitude: 2<br>Depth: 60 km".to_string(),
            time: None,
        };
        let map = compose(EarthquakeOverlay::new(vec![marker]), FeedMetadata::default());

        let html = render_standalone_page(&map).unwrap();

        assert!(html.contains("window.QUAKEMAP_DATA = {"));
        assert!(!html.contains(SCRIPT_TAG));
        assert!(!html.contains(STYLE_LINK));
        assert!(html.contains("Location: <\\/script>"));
        assert!(html.contains("#FFFF00"));
    }
}
