pub mod availability;
pub mod controls;
pub mod copy;
pub mod css;
pub mod drag;
pub mod error;
pub mod events;
pub mod export;
pub mod state;
pub mod units;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::Path;

use controls::ControlValues;
use error::Result;

/// Parse raw control values from JSON. Missing fields take the page defaults.
pub fn parse_controls(json: &str) -> Result<ControlValues> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON file of raw control values.
pub fn load_controls(path: &Path) -> Result<ControlValues> {
    let json = std::fs::read_to_string(path)?;
    parse_controls(&json)
}

/// Control values straight to the generated CSS rule.
pub fn render_css(controls: &ControlValues) -> String {
    css::build_css(&controls.to_config())
}

/// Control values to a self-contained preview page.
pub fn render_html(controls: &ControlValues) -> String {
    export::standalone_html(&controls.to_config())
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn end_to_end_positioned_grid() {
        let controls = parse_controls(
            r#"{
                "display": "grid",
                "gapValue": "1.5",
                "gapUnit": "rem",
                "position": "absolute",
                "topValue": "10",
                "leftValue": "abc",
                "customCss": "color: red\n/* comment */\nmargin:5px;\ninvalid-line"
            }"#,
        )
        .expect("config should parse");

        let css = render_css(&controls);
        assert_eq!(
            css,
            "#previewBox {\n  display: grid;\n  gap: 1.5rem;\n  position: absolute;\n  top: 10px;\n  /* custom */\n  color: red;\n  margin:5px;\n}"
        );
    }

    #[test]
    fn empty_config_is_defaults() {
        let controls = parse_controls("{}").expect("empty object is valid");
        assert_eq!(controls, ControlValues::default());
    }

    #[test]
    fn malformed_config_is_error() {
        let err = parse_controls("{\"display\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_controls(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err.kind, error::ErrorKind::Io(_)));
    }

    #[test]
    fn html_embeds_css() {
        let html = render_html(&ControlValues::default());
        assert!(html.contains("display: flex;"));
    }
}
