use crate::controls::ControlId;
use crate::copy::{CopyOutcome, FEEDBACK_MS, IDLE_LABEL};
use crate::events::EventKind;
use super::util::script_json;

/// Page wiring: one listener per registered `(control, event)` route, the
/// drag gesture on the preview box, and the copy button.
///
/// Every event goes through a single FIFO queue with one request in flight,
/// so the session sees events in the order they happened and none are
/// dropped. During a drag the box is also moved locally so it follows the
/// pointer without waiting for the round trip.
pub(super) fn build_inline_js(routes: &[(ControlId, EventKind)]) -> String {
    let routes_json = script_json(routes);
    let idle = script_json(IDLE_LABEL);
    let copied = script_json(CopyOutcome::Copied.label());
    let selected = script_json(CopyOutcome::Selected.label());

    format!(
        r#"<script>
(function() {{
  var ROUTES = {routes_json};
  var liveStyle = document.getElementById('liveStyle');
  var output = document.getElementById('cssOutput');
  var box = document.getElementById('previewBox');
  var stage = document.getElementById('stage');
  var offsetsGroup = document.getElementById('offsetsGroup');
  var modeBadge = document.getElementById('modeBadge');
  var copyBtn = document.getElementById('copyBtn');

  // Ordered event queue
  var queue = [];
  var busy = false;
  var seq = 0;
  var appliedSeq = 0;

  function send(url, body, onDone) {{
    queue.push({{ seq: ++seq, url: url, body: body, onDone: onDone }});
    pump();
  }}

  function pump() {{
    if (busy || !queue.length) return;
    busy = true;
    var item = queue.shift();
    fetch(item.url, {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: JSON.stringify(item.body)
    }}).then(function(r) {{
      if (!r.ok) return r.text().then(function(t) {{ throw new Error(t); }});
      return r.json();
    }}).then(function(snap) {{
      if (item.seq > appliedSeq) {{
        appliedSeq = item.seq;
        if (item.onDone) item.onDone(snap);
        apply(snap);
      }}
    }}).catch(report).then(function() {{
      busy = false;
      pump();
    }});
  }}

  var draggable = box.classList.contains('draggable');

  function apply(snap) {{
    liveStyle.textContent = snap.css;
    output.textContent = snap.css;
    Object.keys(snap.controls).forEach(function(id) {{
      var el = document.getElementById(id);
      if (el && el.value !== snap.controls[id] && (dragging || el !== document.activeElement)) {{
        el.value = snap.controls[id];
      }}
    }});
    document.querySelectorAll('[data-control]').forEach(function(el) {{
      el.disabled = snap.disabled.indexOf(el.id) !== -1;
    }});
    offsetsGroup.classList.toggle('dimmed', snap.availability.offsetsDimmed);
    draggable = snap.draggable;
    box.classList.toggle('draggable', draggable);
    modeBadge.textContent = snap.config.display + ' / ' + snap.config.position;
    // the generated rule has caught up with the local drag position
    if (!queue.length) {{
      box.style.left = '';
      box.style.top = '';
    }}
  }}

  function report(err) {{ console.error('layout-lab:', err); }}

  ROUTES.forEach(function(route) {{
    var el = document.getElementById(route[0]);
    if (!el) return;
    el.addEventListener(route[1], function() {{
      send('/event', {{ control: route[0], kind: route[1], value: el.value }});
    }});
  }});

  // Drag
  var dragging = false;
  var dragPointer = null;
  var startX = 0, startY = 0, startLeft = 0, startTop = 0;

  function sample(phase, e) {{
    return {{ phase: phase, pointerId: e.pointerId, x: e.clientX, y: e.clientY }};
  }}

  box.addEventListener('pointerdown', function(e) {{
    if (!draggable) return;
    // a new press always re-arms, even if the last release never arrived
    dragging = true;
    dragPointer = e.pointerId;
    try {{ box.setPointerCapture(e.pointerId); }} catch (_) {{}}

    var b = box.getBoundingClientRect();
    var s = stage.getBoundingClientRect();
    startX = e.clientX;
    startY = e.clientY;
    startLeft = b.left - s.left + stage.scrollLeft;
    startTop = b.top - s.top + stage.scrollTop;

    var body = sample('down', e);
    body.geometry = {{
      boxLeft: b.left, boxTop: b.top,
      stageLeft: s.left, stageTop: s.top,
      scrollLeft: stage.scrollLeft, scrollTop: stage.scrollTop
    }};
    send('/pointer', body, function(resp) {{
      if (!resp.handled && dragPointer === body.pointerId) dragging = false;
    }});
    e.preventDefault();
  }});

  window.addEventListener('pointermove', function(e) {{
    if (!dragging || e.pointerId !== dragPointer) return;
    box.style.left = Math.round(startLeft + (e.clientX - startX)) + 'px';
    box.style.top = Math.round(startTop + (e.clientY - startY)) + 'px';
    send('/pointer', sample('move', e));
  }});

  function endDrag(phase) {{
    return function(e) {{
      if (!dragging || e.pointerId !== dragPointer) return;
      dragging = false;
      dragPointer = null;
      try {{ box.releasePointerCapture(e.pointerId); }} catch (_) {{}}
      send('/pointer', sample(phase, e));
    }};
  }}
  window.addEventListener('pointerup', endDrag('up'));
  window.addEventListener('pointercancel', endDrag('cancel'));

  // Copy
  var LABEL_IDLE = {idle};
  var LABEL_COPIED = {copied};
  var LABEL_SELECTED = {selected};
  var resetTimer = null;

  function feedback(label) {{
    copyBtn.textContent = label;
    copyBtn.classList.add('copied');
    clearTimeout(resetTimer);
    resetTimer = setTimeout(function() {{
      copyBtn.textContent = LABEL_IDLE;
      copyBtn.classList.remove('copied');
    }}, {FEEDBACK_MS});
  }}

  // Select the panel and run the copy command on it. The selection is
  // cleared after a successful copy and kept for a manual one otherwise.
  function copyFromSelection() {{
    var sel = window.getSelection();
    var ok = false;
    try {{
      var range = document.createRange();
      range.selectNodeContents(output);
      sel.removeAllRanges();
      sel.addRange(range);
      ok = document.execCommand('copy');
    }} catch (_) {{
      ok = false;
    }}
    if (ok) sel.removeAllRanges();
    return ok;
  }}

  copyBtn.addEventListener('click', function() {{
    var text = output.textContent;
    var write = navigator.clipboard && navigator.clipboard.writeText
      ? navigator.clipboard.writeText(text)
      : Promise.reject(new Error('clipboard unavailable'));
    write.then(function() {{
      feedback(LABEL_COPIED);
    }}, function() {{
      feedback(copyFromSelection() ? LABEL_COPIED : LABEL_SELECTED);
    }});
  }});
}})();
</script>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Dispatcher;

    fn js() -> String {
        build_inline_js(&Dispatcher::standard().routes())
    }

    #[test]
    fn routes_and_labels_are_embedded() {
        let js = js();
        assert!(js.contains(r#"["display","change"]"#));
        assert!(js.contains(r#"["customCss","input"]"#));
        assert!(js.contains(r#"var LABEL_IDLE = "Copiar CSS";"#));
        assert!(js.contains(r#"var LABEL_COPIED = "¡Copiado!";"#));
        assert!(js.contains(r#"var LABEL_SELECTED = "Seleccionado";"#));
        assert!(js.contains("}, 1200);"));
    }

    #[test]
    fn every_request_goes_through_one_queue() {
        let js = js();
        assert_eq!(js.matches("fetch(").count(), 1);
        assert!(js.contains("queue.push("));
        assert!(js.contains("if (busy || !queue.length) return;"));
        assert!(js.contains("item.seq > appliedSeq"));
        // moves are queued, never coalesced
        assert!(!js.contains("pendingMove"));
        assert!(js.contains("send('/pointer', sample('move', e));"));
    }

    #[test]
    fn pointer_is_captured_before_the_request() {
        let js = js();
        let down = js.find("box.addEventListener('pointerdown'").unwrap();
        let capture = js[down..].find("setPointerCapture").unwrap();
        let request = js[down..].find("send('/pointer', body").unwrap();
        assert!(capture < request);
    }

    #[test]
    fn move_and_release_listen_on_window() {
        let js = js();
        for event in ["pointermove", "pointerup", "pointercancel"] {
            assert!(js.contains(&format!("window.addEventListener('{event}'")), "{event}");
            assert!(!js.contains(&format!("box.addEventListener('{event}'")), "{event}");
        }
    }

    #[test]
    fn geometry_uses_bounding_rects_only() {
        let js = js();
        assert!(js.contains("stageLeft: s.left, stageTop: s.top,"));
        assert!(!js.contains("clientLeft"));
        assert!(js.contains("x: e.clientX, y: e.clientY"));
    }

    #[test]
    fn copy_falls_back_to_copy_command() {
        let js = js();
        assert!(js.contains("document.execCommand('copy')"));
        assert!(js.contains("copyFromSelection() ? LABEL_COPIED : LABEL_SELECTED"));
        assert!(js.contains("if (ok) sel.removeAllRanges();"));
    }
}
