use crate::copy::IDLE_LABEL;
use crate::events::Snapshot;
use super::util::html_escape;

pub(super) fn build_toolbar(snap: &Snapshot) -> String {
    let mut badges = vec![r#"<span class="label">layout-lab</span>"#.to_string()];
    badges.push(format!(
        r#"<span class="badge" id="modeBadge">{} / {}</span>"#,
        html_escape(&snap.config.display),
        html_escape(&snap.config.position)
    ));

    format!(
        r#"<div class="toolbar">
  {badges}
  <div class="actions">
    <button id="copyBtn" title="Copy generated CSS">{IDLE_LABEL}</button>
    <a href="/export/css" download="layout.css">Export CSS</a>
    <a href="/export/html" target="_blank">Standalone</a>
  </div>
</div>"#,
        badges = badges.join("\n  "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Session;

    #[test]
    fn badge_shows_display_and_position() {
        let html = build_toolbar(&Session::default().snapshot());
        assert!(html.contains(r#"<span class="badge" id="modeBadge">flex / static</span>"#));
        assert!(html.contains(">Copiar CSS</button>"));
    }

    #[test]
    fn badge_escapes_loaded_values() {
        let mut session = Session::default();
        session
            .dispatch_raw("display", "change", "<img src=x onerror=alert(1)>")
            .unwrap();
        let html = build_toolbar(&session.snapshot());
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt; / static"));
    }
}
