use serde::{Deserialize, Serialize};

/// The configuration record the CSS is derived from.
///
/// Values are kept as the strings the page holds: lengths are either empty
/// (unset) or a number with its unit, e.g. `"12px"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub display: String,
    pub flex: FlexSettings,
    pub position: String,
    pub offsets: Offsets,
    pub custom_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexSettings {
    pub direction: String,
    pub justify: String,
    pub align_items: String,
    pub wrap: String,
    pub gap: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offsets {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

/// One of the four offset directions, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn property(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl Offsets {
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn set(&mut self, side: Side, value: String) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }
}

impl LayoutConfig {
    /// Flex sub-properties only apply to `flex` and `inline-flex`.
    pub fn is_flex(&self) -> bool {
        self.display.contains("flex")
    }

    /// Only out-of-flow boxes can be dragged around the stage.
    pub fn is_draggable(&self) -> bool {
        matches!(self.position.as_str(), "absolute" | "fixed")
    }

    pub fn is_static(&self) -> bool {
        self.position == "static"
    }
}

impl Default for LayoutConfig {
    /// The state a fresh page starts with: the control defaults.
    fn default() -> Self {
        crate::controls::ControlValues::default().to_config()
    }
}
