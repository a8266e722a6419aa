/// Chrome of the tool page. The stage and preview box styles are shared
/// with the standalone export.
pub(super) fn build_css() -> String {
    format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
html, body {{ width: 100%; height: 100%; background: #0A0A0A; color: #A0A0A0;
  font-family: 'JetBrains Mono', monospace; font-size: 12px; }}

/* ── Toolbar ─────────────────────────────────────── */
.toolbar {{
  height: 36px; display: flex; align-items: center; padding: 0 14px;
  border-bottom: 1px solid #2A2A2A; font-size: 11px; gap: 10px;
  background: #0A0A0A; user-select: none;
}}
.toolbar .label {{ color: #666; }}
.toolbar .badge {{
  color: #A0A0A0; background: #1F1F1F; padding: 2px 8px;
  border-radius: 3px; font-size: 10px;
}}
.toolbar .actions {{ margin-left: auto; display: flex; gap: 6px; }}
.toolbar .actions button, .toolbar .actions a {{
  background: #1F1F1F; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 3px 10px; border-radius: 3px; font-size: 10px; cursor: pointer;
  font-family: inherit; text-decoration: none; display: inline-flex;
  align-items: center;
}}
.toolbar .actions button:hover, .toolbar .actions a:hover {{
  color: #FFF; border-color: #444;
}}
.toolbar .actions button.copied {{
  color: #22C55E; border-color: #22C55E; transition: none;
}}

/* ── Split view ──────────────────────────────────── */
.split {{
  display: grid; grid-template-columns: 320px 1fr;
  height: calc(100vh - 36px);
}}
.panel {{ position: relative; overflow: auto; padding: 14px; }}
.controls-panel {{ border-right: 1px solid #2A2A2A; }}
.panel-label {{
  font-size: 10px; color: #444; text-transform: uppercase;
  letter-spacing: 1px; margin-bottom: 8px;
}}

/* ── Controls ────────────────────────────────────── */
.group {{ margin-bottom: 16px; transition: opacity 0.15s; }}
.group.dimmed {{ opacity: 0.6; }}
.row {{
  display: grid; grid-template-columns: 110px 1fr auto; gap: 6px;
  align-items: center; margin-bottom: 6px;
}}
.row label {{ color: #666; font-size: 11px; }}
select, input, textarea {{
  background: #141414; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 3px 6px; border-radius: 3px; font-family: inherit; font-size: 11px;
}}
select:disabled, input:disabled {{ color: #444; border-color: #1A1A1A; }}
input[type=number] {{ width: 100%; }}
textarea {{ width: 100%; min-height: 110px; resize: vertical; }}

/* ── Stage & output ──────────────────────────────── */
{stage}
#previewBox.draggable {{ cursor: move; }}
.output {{
  margin-top: 14px; padding: 12px 14px; background: #141414;
  border: 1px solid #2A2A2A; border-radius: 4px; white-space: pre;
  font-size: 11px; line-height: 1.6; user-select: text;
}}"#,
        stage = crate::export::STAGE_CSS,
    )
}
