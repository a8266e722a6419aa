use crate::controls::{ControlId, ControlKind, UNIT_OPTIONS};
use crate::events::Snapshot;
use crate::state::Side;
use super::util::{attr_escape, html_escape};

pub(super) fn build_controls_panel(snap: &Snapshot) -> String {
    let select_row = |label: &str, id: ControlId| {
        format!(
            r#"<div class="row"><label for="{id}">{label}</label>{}</div>"#,
            build_control(snap, id)
        )
    };
    let length_row = |label: &str, value: ControlId, unit: ControlId| {
        format!(
            r#"<div class="row"><label for="{value}">{label}</label>{}{}</div>"#,
            build_control(snap, value),
            build_control(snap, unit)
        )
    };

    let offsets: String = Side::ALL
        .iter()
        .map(|&side| {
            let (value, unit) = ControlId::offset_pair(side);
            length_row(side.property(), value, unit)
        })
        .collect::<Vec<_>>()
        .join("\n  ");
    let dimmed = if snap.availability.offsets_dimmed { " dimmed" } else { "" };

    format!(
        r#"<div class="panel-label">display</div>
<div class="group" id="displayGroup">
  {display}
</div>
<div class="panel-label">flexbox</div>
<div class="group" id="flexGroup">
  {direction}
  {justify}
  {align}
  {wrap}
  {gap}
</div>
<div class="panel-label">position</div>
<div class="group" id="positionGroup">
  {position}
</div>
<div class="group{dimmed}" id="offsetsGroup">
  {offsets}
</div>
<div class="panel-label">custom declarations</div>
<div class="group" id="customGroup">
  <textarea id="{custom_id}" data-control spellcheck="false" placeholder="color: tomato;&#10;margin: 8px">{custom}</textarea>
</div>"#,
        display = select_row("display", ControlId::Display),
        direction = select_row("flex-direction", ControlId::FlexDirection),
        justify = select_row("justify-content", ControlId::JustifyContent),
        align = select_row("align-items", ControlId::AlignItems),
        wrap = select_row("flex-wrap", ControlId::FlexWrap),
        gap = length_row("gap", ControlId::GapValue, ControlId::GapUnit),
        position = select_row("position", ControlId::Position),
        custom_id = ControlId::CustomCss,
        custom = html_escape(&snap.controls.custom_css),
    )
}

fn build_control(snap: &Snapshot, id: ControlId) -> String {
    let current = snap.controls.get(id);
    let disabled = if snap.disabled.contains(&id) { " disabled" } else { "" };
    match id.kind() {
        ControlKind::Select(options) => build_select(id, options, current, disabled),
        ControlKind::Unit => build_select(id, UNIT_OPTIONS, current, disabled),
        ControlKind::Number => format!(
            r#"<input type="number" step="any" id="{id}" data-control value="{}"{disabled}>"#,
            attr_escape(current)
        ),
        ControlKind::TextArea => String::new(),
    }
}

fn build_select(id: ControlId, options: &[&str], current: &str, disabled: &str) -> String {
    let mut html = format!(r#"<select id="{id}" data-control{disabled}>"#);
    for opt in options {
        let selected = if *opt == current { " selected" } else { "" };
        html.push_str(&format!(r#"<option value="{opt}"{selected}>{opt}</option>"#));
    }
    // a value loaded from a config file may not be one of the choices
    if !options.contains(&current) {
        html.push_str(&format!(
            r#"<option value="{}" selected>{}</option>"#,
            attr_escape(current),
            html_escape(current)
        ));
    }
    html.push_str("</select>");
    html
}

pub(super) fn build_output_panel(snap: &Snapshot) -> String {
    let draggable = if snap.draggable { r#" class="draggable""# } else { "" };
    let preview = crate::export::preview_box_html().replacen(
        r#"<div id="previewBox">"#,
        &format!(r#"<div id="previewBox"{draggable}>"#),
        1,
    );
    format!(
        r#"<div class="panel-label">preview</div>
<div id="stage">
  {preview}
</div>
<div class="panel-label" style="margin-top:14px">generated css</div>
<pre class="output" id="cssOutput">{css}</pre>"#,
        css = html_escape(&snap.css),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Session;

    #[test]
    fn selects_mark_current_value() {
        let snap = Session::default().snapshot();
        let html = build_controls_panel(&snap);
        assert!(html.contains(r#"<option value="flex" selected>flex</option>"#));
        assert!(html.contains(r#"<option value="static" selected>static</option>"#));
    }

    #[test]
    fn static_offsets_render_disabled_and_dimmed() {
        let snap = Session::default().snapshot();
        let html = build_controls_panel(&snap);
        assert!(html.contains(r#"class="group dimmed" id="offsetsGroup""#));
        assert!(html.contains(r#"id="topValue" data-control value="" disabled>"#));
        assert!(!html.contains(r#"<select id="display" data-control disabled>"#));
    }

    #[test]
    fn unknown_select_value_kept_and_escaped() {
        let mut controls = crate::controls::ControlValues::default();
        controls.display = r#"x"><script>"#.into();
        let html = build_controls_panel(&Session::new(controls).snapshot());
        assert!(html.contains(
            r#"<option value="x&quot;&gt;&lt;script&gt;" selected>x"&gt;&lt;script&gt;</option></select>"#
        ));
        assert!(!html.contains("<script>"));
        assert!(!html.contains(r#"<option value="flex" selected>"#));
    }

    #[test]
    fn known_select_value_adds_no_extra_option() {
        let html = build_controls_panel(&Session::default().snapshot());
        assert_eq!(html.matches(" selected>").count(), 11);
    }

    #[test]
    fn output_panel_escapes_css() {
        let mut session = Session::default();
        session.dispatch_raw("customCss", "input", "content: '<i>'").unwrap();
        let html = build_output_panel(&session.snapshot());
        assert!(html.contains("content: '&lt;i&gt;';"));
        assert!(html.contains(r#"<div id="previewBox">"#));
    }
}
