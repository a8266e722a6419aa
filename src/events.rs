//! Event dispatch: every registered `(control, event)` pair runs the same
//! update → availability → synthesis → render pipeline.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::availability::ControlAvailability;
use crate::controls::{update_from_controls, ControlId, ControlKind, ControlValues};
use crate::css::build_css;
use crate::drag::{DragController, PointerSample, StageGeometry};
use crate::error::{LabError, Result};
use crate::state::{LayoutConfig, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Fires on every keystroke of a text or number field.
    Input,
    /// Fires when a select or field commits its value.
    Change,
}

impl FromStr for EventKind {
    type Err = LabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "input" => Ok(EventKind::Input),
            "change" => Ok(EventKind::Change),
            other => Err(LabError::unknown_event_kind(other)),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Input => "input",
            EventKind::Change => "change",
        })
    }
}

/// A control reporting its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEvent {
    pub control: ControlId,
    pub kind: EventKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl FromStr for PointerPhase {
    type Err = LabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "down" => Ok(PointerPhase::Down),
            "move" => Ok(PointerPhase::Move),
            "up" => Ok(PointerPhase::Up),
            "cancel" => Ok(PointerPhase::Cancel),
            other => Err(LabError::unknown_pointer_phase(other)),
        }
    }
}

/// Registry of the `(control, event)` pairs the page listens to.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: HashSet<(ControlId, EventKind)>,
}

impl Dispatcher {
    pub fn empty() -> Self {
        Self {
            routes: HashSet::new(),
        }
    }

    /// The page's wiring: selects and unit pickers on `change`, typed fields
    /// on both `input` and `change`.
    pub fn standard() -> Self {
        let mut dispatcher = Self::empty();
        for id in ControlId::ALL {
            match id.kind() {
                ControlKind::Select(_) | ControlKind::Unit => {
                    dispatcher.register(id, EventKind::Change);
                }
                ControlKind::Number | ControlKind::TextArea => {
                    dispatcher.register(id, EventKind::Input);
                    dispatcher.register(id, EventKind::Change);
                }
            }
        }
        dispatcher
    }

    pub fn register(&mut self, control: ControlId, kind: EventKind) {
        self.routes.insert((control, kind));
    }

    pub fn handles(&self, control: ControlId, kind: EventKind) -> bool {
        self.routes.contains(&(control, kind))
    }

    /// Registered pairs in page order, for hosts wiring up listeners.
    pub fn routes(&self) -> Vec<(ControlId, EventKind)> {
        let mut routes = Vec::new();
        for id in ControlId::ALL {
            for kind in [EventKind::Input, EventKind::Change] {
                if self.handles(id, kind) {
                    routes.push((id, kind));
                }
            }
        }
        routes
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

/// Output surfaces after the last render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendered {
    /// Text of the live `<style>` element.
    pub style_text: String,
    /// Text of the read-only output panel.
    pub panel_text: String,
    pub availability: ControlAvailability,
}

/// Everything a host needs to refresh the page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub controls: ControlValues,
    pub config: LayoutConfig,
    pub css: String,
    pub availability: ControlAvailability,
    pub disabled: Vec<ControlId>,
    pub dragging: bool,
    pub draggable: bool,
}

/// One page session: owns the state and re-renders after every change.
#[derive(Debug)]
pub struct Session {
    controls: ControlValues,
    config: LayoutConfig,
    drag: DragController,
    dispatcher: Dispatcher,
    rendered: Rendered,
}

impl Session {
    pub fn new(controls: ControlValues) -> Self {
        let config = controls.to_config();
        let rendered = render(&config);
        Self {
            controls,
            config,
            drag: DragController::new(),
            dispatcher: Dispatcher::standard(),
            rendered,
        }
    }

    pub fn controls(&self) -> &ControlValues {
        &self.controls
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Apply one control event. Returns `false` when the pair is not
    /// registered, in which case nothing changes.
    pub fn dispatch(&mut self, event: ControlEvent) -> bool {
        if !self.dispatcher.handles(event.control, event.kind) {
            log::trace!("ignored {} on {}", event.kind, event.control);
            return false;
        }
        log::trace!("{} on {}: {:?}", event.kind, event.control, event.value);
        self.controls.set(event.control, event.value);
        self.refresh();
        true
    }

    /// Parse string ids from a host and dispatch.
    pub fn dispatch_raw(&mut self, control: &str, kind: &str, value: &str) -> Result<bool> {
        let event = ControlEvent {
            control: control.parse()?,
            kind: kind.parse()?,
            value: value.to_string(),
        };
        Ok(self.dispatch(event))
    }

    /// Replace every control at once (e.g. a reloaded config file).
    pub fn load_controls(&mut self, controls: ControlValues) {
        self.controls = controls;
        self.refresh();
    }

    /// Returns whether the host should capture the pointer.
    pub fn pointer_down(&mut self, pointer: PointerSample, geometry: StageGeometry) -> bool {
        self.drag.pointer_down(&self.config, pointer, geometry)
    }

    /// Returns whether the offsets changed.
    pub fn pointer_move(&mut self, pointer: PointerSample) -> bool {
        let Some(pos) = self.drag.pointer_move(pointer) else {
            return false;
        };
        // write through the controls so the page inputs show the new values
        for (side, px) in [(Side::Left, pos.left), (Side::Top, pos.top)] {
            let (value, unit) = ControlId::offset_pair(side);
            self.controls.set(value, px.to_string());
            self.controls.set(unit, "px");
        }
        self.refresh();
        true
    }

    /// Returns whether the host should release pointer capture.
    pub fn pointer_up(&mut self, pointer: PointerSample) -> bool {
        self.drag.pointer_up(pointer)
    }

    /// Route a pointer event by phase. Returns whether anything happened.
    pub fn pointer(
        &mut self,
        phase: PointerPhase,
        pointer: PointerSample,
        geometry: StageGeometry,
    ) -> bool {
        match phase {
            PointerPhase::Down => self.pointer_down(pointer, geometry),
            PointerPhase::Move => self.pointer_move(pointer),
            PointerPhase::Up | PointerPhase::Cancel => self.pointer_up(pointer),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            controls: self.controls.clone(),
            config: self.config.clone(),
            css: self.rendered.panel_text.clone(),
            availability: self.rendered.availability,
            disabled: self.rendered.availability.disabled(),
            dragging: self.drag.is_dragging(),
            draggable: self.config.is_draggable(),
        }
    }

    fn refresh(&mut self) {
        update_from_controls(&self.controls, &mut self.config);
        self.rendered = render(&self.config);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ControlValues::default())
    }
}

fn render(config: &LayoutConfig) -> Rendered {
    let availability = ControlAvailability::compute(config);
    let css = build_css(config);
    Rendered {
        style_text: css.clone(),
        panel_text: css,
        availability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(control: ControlId, value: &str) -> ControlEvent {
        ControlEvent {
            control,
            kind: EventKind::Change,
            value: value.into(),
        }
    }

    #[test]
    fn standard_wiring() {
        let dispatcher = Dispatcher::standard();
        assert!(dispatcher.handles(ControlId::Display, EventKind::Change));
        assert!(!dispatcher.handles(ControlId::Display, EventKind::Input));
        assert!(dispatcher.handles(ControlId::TopValue, EventKind::Input));
        assert!(dispatcher.handles(ControlId::CustomCss, EventKind::Input));
        assert!(!dispatcher.handles(ControlId::TopUnit, EventKind::Input));
        // 6 selects + 5 units on change, 5 numbers + text area on both
        assert_eq!(dispatcher.routes().len(), 11 + 6 * 2);
    }

    #[test]
    fn dispatch_runs_pipeline() {
        let mut session = Session::default();
        assert!(session.dispatch(change(ControlId::Display, "block")));
        assert_eq!(session.config().display, "block");
        assert!(!session.rendered().style_text.contains("flex-direction"));
        assert!(!session.rendered().availability.flex_enabled);
        assert_eq!(session.rendered().style_text, session.rendered().panel_text);
    }

    #[test]
    fn unregistered_pair_is_ignored() {
        let mut session = Session::default();
        let before = session.rendered().clone();
        let handled = session.dispatch(ControlEvent {
            control: ControlId::Display,
            kind: EventKind::Input,
            value: "grid".into(),
        });
        assert!(!handled);
        assert_eq!(session.controls().display, "flex");
        assert_eq!(session.rendered(), &before);
    }

    #[test]
    fn raw_dispatch_rejects_unknown_ids() {
        let mut session = Session::default();
        assert!(session.dispatch_raw("zIndex", "change", "2").is_err());
        assert!(session.dispatch_raw("display", "blur", "grid").is_err());
        assert!(session.dispatch_raw("gapValue", "input", "6").unwrap());
        assert_eq!(session.config().flex.gap, "6px");
    }

    #[test]
    fn drag_writes_controls_and_css() {
        let mut session = Session::default();
        session.dispatch(change(ControlId::Position, "absolute"));
        let geometry = StageGeometry {
            box_left: 50.0,
            box_top: 50.0,
            ..Default::default()
        };
        let start = PointerSample { pointer_id: 1, x: 10.0, y: 10.0 };
        assert!(session.pointer(PointerPhase::Down, start, geometry));
        let moved = PointerSample { pointer_id: 1, x: 30.0, y: 5.0 };
        assert!(session.pointer(PointerPhase::Move, moved, geometry));

        assert_eq!(session.controls().left_value, "70");
        assert_eq!(session.controls().top_unit, "px");
        assert_eq!(session.config().offsets.left, "70px");
        assert_eq!(session.config().offsets.top, "45px");
        assert!(session.rendered().panel_text.contains("left: 70px;"));
        assert!(session.rendered().panel_text.contains("top: 45px;"));

        assert!(session.pointer(PointerPhase::Cancel, moved, geometry));
        assert!(!session.is_dragging());
    }

    #[test]
    fn load_controls_rerenders() {
        let mut session = Session::default();
        let mut controls = ControlValues::default();
        controls.position = "relative".into();
        session.load_controls(controls);
        assert!(session.snapshot().availability.offsets_enabled);
        assert!(session.snapshot().disabled.is_empty());
    }

    #[test]
    fn phase_names_parse() {
        assert_eq!("move".parse::<PointerPhase>().unwrap(), PointerPhase::Move);
        assert!("hover".parse::<PointerPhase>().is_err());
    }
}
