use serde::Serialize;

use crate::controls::ControlId;
use crate::state::LayoutConfig;

/// Which controls are interactive for the current state.
///
/// Derived from `display` and `position` only; computing it never touches
/// the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlAvailability {
    /// Direction, justify, align and wrap selects.
    pub flex_enabled: bool,
    /// All four offset value/unit pairs.
    pub offsets_enabled: bool,
    /// Offsets container is drawn faded when offsets have no effect.
    pub offsets_dimmed: bool,
}

impl ControlAvailability {
    pub fn compute(state: &LayoutConfig) -> Self {
        let offsets_enabled = !state.is_static();
        Self {
            flex_enabled: state.is_flex(),
            offsets_enabled,
            offsets_dimmed: !offsets_enabled,
        }
    }

    pub fn is_enabled(&self, id: ControlId) -> bool {
        if ControlId::FLEX_ONLY.contains(&id) {
            self.flex_enabled
        } else if id.is_offset() {
            self.offsets_enabled
        } else {
            true
        }
    }

    /// Ids of every control currently disabled, in page order.
    pub fn disabled(&self) -> Vec<ControlId> {
        ControlId::ALL
            .into_iter()
            .filter(|&id| !self.is_enabled(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn availability(display: &str, position: &str) -> ControlAvailability {
        let mut state = LayoutConfig::default();
        state.display = display.into();
        state.position = position.into();
        ControlAvailability::compute(&state)
    }

    #[test]
    fn flex_controls_follow_display() {
        assert!(availability("flex", "static").is_enabled(ControlId::FlexWrap));
        assert!(availability("inline-flex", "static").flex_enabled);
        let grid = availability("grid", "static");
        for id in ControlId::FLEX_ONLY {
            assert!(!grid.is_enabled(id));
        }
    }

    #[test]
    fn gap_stays_enabled_without_flex() {
        let block = availability("block", "static");
        assert!(block.is_enabled(ControlId::GapValue));
        assert!(block.is_enabled(ControlId::GapUnit));
    }

    #[test]
    fn static_disables_and_dims_offsets() {
        let avail = availability("flex", "static");
        assert!(avail.offsets_dimmed);
        assert_eq!(avail.disabled().len(), 8);
        assert!(avail.disabled().iter().all(|id| id.is_offset()));
    }

    #[test]
    fn positioned_enables_offsets() {
        for position in ["relative", "absolute", "fixed", "sticky"] {
            let avail = availability("block", position);
            assert!(avail.offsets_enabled, "{position}");
            assert!(!avail.offsets_dimmed);
            assert!(avail.is_enabled(ControlId::LeftValue));
        }
    }

    #[test]
    fn always_enabled_controls() {
        let avail = availability("none", "static");
        assert!(avail.is_enabled(ControlId::Display));
        assert!(avail.is_enabled(ControlId::Position));
        assert!(avail.is_enabled(ControlId::CustomCss));
    }
}
