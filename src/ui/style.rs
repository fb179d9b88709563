use crate::config::AppConfig;
use crate::constants::MISMATCH_COLOR;
use gtk4::gdk;

/// Builds the application stylesheet from the user's appearance settings.
pub fn build_css(config: &AppConfig) -> String {
    let colors = &config.colors;
    format!(
        "window {{ font-size: {font}pt; }}
.summary-bar {{ font-size: {font}pt; }}
.hand-panel > label {{ font-weight: bold; }}
.suit-symbol {{ font-size: {symbol}pt; }}
.card-tile {{
    min-width: 1.6em;
    padding: 2px 4px;
    margin: 1px;
    border: 1px solid #000000;
    border-radius: 0;
    font-weight: bold;
    color: #000000;
    background: {unplayed};
    box-shadow: none;
}}
.card-tile.played {{ background: {played}; }}
entry.count-mismatch {{ background: {mismatch}; }}
",
        font = config.font_size,
        symbol = config.font_size + 2,
        unplayed = colors.unplayed,
        played = colors.played,
        mismatch = MISMATCH_COLOR,
    )
}

/// Installs the stylesheet on the default display.
pub fn load_css(config: &AppConfig) {
    let provider = gtk4::CssProvider::new();
    provider.load_from_string(&build_css(config));

    match gdk::Display::default() {
        Some(display) => {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
        None => {
            tracing::warn!("No display available, styling will not be applied");
        }
    }
}

/// Parses a `#rrggbb` colour into cairo components, falling back to grey.
pub fn rgb(color: &str) -> (f64, f64, f64) {
    match gdk::RGBA::parse(color) {
        Ok(rgba) => (rgba.red() as f64, rgba.green() as f64, rgba.blue() as f64),
        Err(e) => {
            tracing::warn!("Could not parse colour {:?}: {}", color, e);
            (0.5, 0.5, 0.5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_css_uses_config() {
        let mut config = AppConfig::default();
        config.font_size = 15;
        config.colors.played = "#00aa00".to_string();

        let css = build_css(&config);
        assert!(css.contains("font-size: 15pt"));
        assert!(css.contains(".card-tile.played { background: #00aa00; }"));
        assert!(css.contains("background: #ffffff;"));
        assert!(css.contains(MISMATCH_COLOR));
    }
}
