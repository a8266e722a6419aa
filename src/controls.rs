//! The page's form controls and the state store fed from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabError;
use crate::state::{FlexSettings, LayoutConfig, Offsets, Side};
use crate::units::with_unit;

pub const DISPLAY_OPTIONS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "none",
];
pub const DIRECTION_OPTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
pub const JUSTIFY_OPTIONS: &[&str] = &[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "space-evenly",
];
pub const ALIGN_OPTIONS: &[&str] = &["stretch", "flex-start", "flex-end", "center", "baseline"];
pub const WRAP_OPTIONS: &[&str] = &["nowrap", "wrap", "wrap-reverse"];
pub const POSITION_OPTIONS: &[&str] = &["static", "relative", "absolute", "fixed", "sticky"];
pub const UNIT_OPTIONS: &[&str] = &["px", "%", "rem", "em", "vw", "vh"];

/// Every tracked form control, by its element id on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlId {
    Display,
    FlexDirection,
    JustifyContent,
    AlignItems,
    FlexWrap,
    GapValue,
    GapUnit,
    Position,
    TopValue,
    TopUnit,
    RightValue,
    RightUnit,
    BottomValue,
    BottomUnit,
    LeftValue,
    LeftUnit,
    CustomCss,
}

/// What sort of widget a control is; decides which events it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Select(&'static [&'static str]),
    Number,
    Unit,
    TextArea,
}

impl ControlId {
    pub const ALL: [ControlId; 17] = [
        ControlId::Display,
        ControlId::FlexDirection,
        ControlId::JustifyContent,
        ControlId::AlignItems,
        ControlId::FlexWrap,
        ControlId::GapValue,
        ControlId::GapUnit,
        ControlId::Position,
        ControlId::TopValue,
        ControlId::TopUnit,
        ControlId::RightValue,
        ControlId::RightUnit,
        ControlId::BottomValue,
        ControlId::BottomUnit,
        ControlId::LeftValue,
        ControlId::LeftUnit,
        ControlId::CustomCss,
    ];

    /// The four flex sub-property selects (gap is not one of them).
    pub const FLEX_ONLY: [ControlId; 4] = [
        ControlId::FlexDirection,
        ControlId::JustifyContent,
        ControlId::AlignItems,
        ControlId::FlexWrap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::Display => "display",
            ControlId::FlexDirection => "flexDirection",
            ControlId::JustifyContent => "justifyContent",
            ControlId::AlignItems => "alignItems",
            ControlId::FlexWrap => "flexWrap",
            ControlId::GapValue => "gapValue",
            ControlId::GapUnit => "gapUnit",
            ControlId::Position => "position",
            ControlId::TopValue => "topValue",
            ControlId::TopUnit => "topUnit",
            ControlId::RightValue => "rightValue",
            ControlId::RightUnit => "rightUnit",
            ControlId::BottomValue => "bottomValue",
            ControlId::BottomUnit => "bottomUnit",
            ControlId::LeftValue => "leftValue",
            ControlId::LeftUnit => "leftUnit",
            ControlId::CustomCss => "customCss",
        }
    }

    pub fn kind(self) -> ControlKind {
        match self {
            ControlId::Display => ControlKind::Select(DISPLAY_OPTIONS),
            ControlId::FlexDirection => ControlKind::Select(DIRECTION_OPTIONS),
            ControlId::JustifyContent => ControlKind::Select(JUSTIFY_OPTIONS),
            ControlId::AlignItems => ControlKind::Select(ALIGN_OPTIONS),
            ControlId::FlexWrap => ControlKind::Select(WRAP_OPTIONS),
            ControlId::Position => ControlKind::Select(POSITION_OPTIONS),
            ControlId::GapValue
            | ControlId::TopValue
            | ControlId::RightValue
            | ControlId::BottomValue
            | ControlId::LeftValue => ControlKind::Number,
            ControlId::GapUnit
            | ControlId::TopUnit
            | ControlId::RightUnit
            | ControlId::BottomUnit
            | ControlId::LeftUnit => ControlKind::Unit,
            ControlId::CustomCss => ControlKind::TextArea,
        }
    }

    /// The value and unit controls belonging to an offset side.
    pub fn offset_pair(side: Side) -> (ControlId, ControlId) {
        match side {
            Side::Top => (ControlId::TopValue, ControlId::TopUnit),
            Side::Right => (ControlId::RightValue, ControlId::RightUnit),
            Side::Bottom => (ControlId::BottomValue, ControlId::BottomUnit),
            Side::Left => (ControlId::LeftValue, ControlId::LeftUnit),
        }
    }

    pub fn is_offset(self) -> bool {
        Side::ALL.iter().any(|&side| {
            let (value, unit) = ControlId::offset_pair(side);
            self == value || self == unit
        })
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlId {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| LabError::unknown_control(s))
    }
}

/// Current raw value of every control, exactly as the page holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlValues {
    pub display: String,
    pub flex_direction: String,
    pub justify_content: String,
    pub align_items: String,
    pub flex_wrap: String,
    pub gap_value: String,
    pub gap_unit: String,
    pub position: String,
    pub top_value: String,
    pub top_unit: String,
    pub right_value: String,
    pub right_unit: String,
    pub bottom_value: String,
    pub bottom_unit: String,
    pub left_value: String,
    pub left_unit: String,
    pub custom_css: String,
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            display: "flex".into(),
            flex_direction: "row".into(),
            justify_content: "flex-start".into(),
            align_items: "stretch".into(),
            flex_wrap: "nowrap".into(),
            gap_value: String::new(),
            gap_unit: "px".into(),
            position: "static".into(),
            top_value: String::new(),
            top_unit: "px".into(),
            right_value: String::new(),
            right_unit: "px".into(),
            bottom_value: String::new(),
            bottom_unit: "px".into(),
            left_value: String::new(),
            left_unit: "px".into(),
            custom_css: String::new(),
        }
    }
}

impl ControlValues {
    pub fn get(&self, id: ControlId) -> &str {
        match id {
            ControlId::Display => &self.display,
            ControlId::FlexDirection => &self.flex_direction,
            ControlId::JustifyContent => &self.justify_content,
            ControlId::AlignItems => &self.align_items,
            ControlId::FlexWrap => &self.flex_wrap,
            ControlId::GapValue => &self.gap_value,
            ControlId::GapUnit => &self.gap_unit,
            ControlId::Position => &self.position,
            ControlId::TopValue => &self.top_value,
            ControlId::TopUnit => &self.top_unit,
            ControlId::RightValue => &self.right_value,
            ControlId::RightUnit => &self.right_unit,
            ControlId::BottomValue => &self.bottom_value,
            ControlId::BottomUnit => &self.bottom_unit,
            ControlId::LeftValue => &self.left_value,
            ControlId::LeftUnit => &self.left_unit,
            ControlId::CustomCss => &self.custom_css,
        }
    }

    pub fn set(&mut self, id: ControlId, value: impl Into<String>) {
        let value = value.into();
        match id {
            ControlId::Display => self.display = value,
            ControlId::FlexDirection => self.flex_direction = value,
            ControlId::JustifyContent => self.justify_content = value,
            ControlId::AlignItems => self.align_items = value,
            ControlId::FlexWrap => self.flex_wrap = value,
            ControlId::GapValue => self.gap_value = value,
            ControlId::GapUnit => self.gap_unit = value,
            ControlId::Position => self.position = value,
            ControlId::TopValue => self.top_value = value,
            ControlId::TopUnit => self.top_unit = value,
            ControlId::RightValue => self.right_value = value,
            ControlId::RightUnit => self.right_unit = value,
            ControlId::BottomValue => self.bottom_value = value,
            ControlId::BottomUnit => self.bottom_unit = value,
            ControlId::LeftValue => self.left_value = value,
            ControlId::LeftUnit => self.left_unit = value,
            ControlId::CustomCss => self.custom_css = value,
        }
    }

    /// The length an offset side resolves to (`""` when unset).
    pub fn offset(&self, side: Side) -> String {
        let (value, unit) = ControlId::offset_pair(side);
        with_unit(self.get(value), self.get(unit))
    }

    pub fn gap(&self) -> String {
        with_unit(&self.gap_value, &self.gap_unit)
    }

    /// Build a fresh configuration record from the current control values.
    pub fn to_config(&self) -> LayoutConfig {
        let mut offsets = Offsets::default();
        for side in Side::ALL {
            offsets.set(side, self.offset(side));
        }
        LayoutConfig {
            display: self.display.clone(),
            flex: FlexSettings {
                direction: self.flex_direction.clone(),
                justify: self.justify_content.clone(),
                align_items: self.align_items.clone(),
                wrap: self.flex_wrap.clone(),
                gap: self.gap(),
            },
            position: self.position.clone(),
            offsets,
            custom_text: self.custom_css.clone(),
        }
    }

    /// Numeric controls holding text that collapsed to unset.
    ///
    /// A value with no unit counts too. Empty fields are simply unset and
    /// are not reported.
    pub fn collapsed_fields(&self) -> Vec<ControlId> {
        let mut pairs = vec![(ControlId::GapValue, ControlId::GapUnit)];
        pairs.extend(Side::ALL.map(ControlId::offset_pair));
        pairs
            .into_iter()
            .filter(|&(value, unit)| {
                !self.get(value).trim().is_empty()
                    && with_unit(self.get(value), self.get(unit)).is_empty()
            })
            .map(|(value, _)| value)
            .collect()
    }
}

/// Overwrite every field of `state` from the controls.
///
/// Malformed numbers never fail: they leave the matching property unset.
pub fn update_from_controls(controls: &ControlValues, state: &mut LayoutConfig) {
    *state = controls.to_config();
}
