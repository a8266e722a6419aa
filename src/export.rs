//! Standalone outputs: a self-contained preview document for a config.

use crate::css::build_css;
use crate::state::LayoutConfig;

/// Shared look of the stage and the preview box. The generated rule comes
/// after this so it wins on every property it sets.
pub const STAGE_CSS: &str = r#"#stage {
  position: relative; overflow: auto; min-height: 320px;
  border: 1px dashed #3A3A3A; background: #111;
  background-image: linear-gradient(#1A1A1A 1px, transparent 1px),
    linear-gradient(90deg, #1A1A1A 1px, transparent 1px);
  background-size: 20px 20px;
}
#previewBox {
  min-width: 160px; min-height: 100px; padding: 8px;
  border: 1px solid #D4AF37; background: rgba(212,175,55,0.08);
  touch-action: none; user-select: none;
}
#previewBox > .child {
  padding: 10px 14px; background: #1F1F1F; border: 1px solid #333;
  color: #A0A0A0;
}"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Preview box markup with three children so flex settings are visible.
pub fn preview_box_html() -> &'static str {
    r#"<div id="previewBox"><div class="child">1</div><div class="child">2</div><div class="child">3</div></div>"#
}

/// A self-contained HTML page showing the preview box styled by `config`,
/// with the generated CSS printed below it.
pub fn standalone_html(config: &LayoutConfig) -> String {
    let css = build_css(config);
    let escaped = html_escape(&css);
    let preview = preview_box_html();
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>layout-lab preview</title>
<style>
  * {{ box-sizing: border-box; }}
  body {{ margin: 24px; background: #0A0A0A; color: #A0A0A0;
    font-family: 'JetBrains Mono', monospace; font-size: 12px; }}
  pre {{ margin-top: 16px; padding: 12px; background: #141414; border-left: 3px solid #D4AF37; }}
{STAGE_CSS}
</style>
<style id="generated">
{css}
</style>
</head>
<body>
<div id="stage">
  {preview}
</div>
<pre>{escaped}</pre>
</body>
</html>
"##
    )
}
