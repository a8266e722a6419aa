use crate::controls::ControlId;
use crate::events::{EventKind, Snapshot};
use super::css::build_css;
use super::inline_js::build_inline_js;
use super::panels::{build_controls_panel, build_output_panel};
use super::toolbar::build_toolbar;

pub(super) fn build_page(snap: &Snapshot, routes: &[(ControlId, EventKind)]) -> String {
    let css = build_css();
    let toolbar = build_toolbar(snap);
    let controls_panel = build_controls_panel(snap);
    let output_panel = build_output_panel(snap);
    let inline_js = build_inline_js(routes);
    // raw text inside <style>; only a literal `</style>` could end it early
    let live_css = snap.css.replace("</style", "<\\/style");

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>layout-lab</title>
<style>
  {css}
</style>
<style id="liveStyle">
{live_css}
</style>
</head>
<body>
{toolbar}
<div class="split">
  <div class="panel controls-panel">
    {controls_panel}
  </div>
  <div class="panel">
    {output_panel}
  </div>
</div>
{inline_js}
</body>
</html>"##
    )
}
