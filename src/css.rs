//! State → CSS rule block.

use crate::state::{LayoutConfig, Side};

/// Selector of the box the generated rule styles.
pub const PREVIEW_SELECTOR: &str = "#previewBox";

const INDENT: &str = "  ";

/// Generate the `#previewBox { ... }` rule for `state`.
///
/// Pure and deterministic: the same state always yields the same bytes.
pub fn build_css(state: &LayoutConfig) -> String {
    let mut decls: Vec<String> = Vec::new();

    decls.push(format!("display: {};", state.display));

    if state.is_flex() {
        decls.push(format!("flex-direction: {};", state.flex.direction));
        decls.push(format!("justify-content: {};", state.flex.justify));
        decls.push(format!("align-items: {};", state.flex.align_items));
        decls.push(format!("flex-wrap: {};", state.flex.wrap));
    }
    // gap works for grid too
    if !state.flex.gap.is_empty() {
        decls.push(format!("gap: {};", state.flex.gap));
    }

    decls.push(format!("position: {};", state.position));

    for side in Side::ALL {
        let value = state.offsets.get(side);
        if !value.is_empty() {
            decls.push(format!("{}: {value};", side.property()));
        }
    }

    let custom = normalize_custom(&state.custom_text);

    let mut lines: Vec<String> = decls.iter().map(|d| format!("{INDENT}{d}")).collect();
    if !custom.is_empty() {
        lines.push(format!("{INDENT}/* custom */"));
        lines.push(format!("{INDENT}{custom}"));
    }

    let mut css = format!("{PREVIEW_SELECTOR} {{\n");
    css.push_str(&lines.join("\n"));
    css.push_str("\n}");
    css
}

/// Turn free-form text into declarations fit for the inside of a rule.
///
/// Keeps only `property: value` lines, drops comments and anything with
/// braces, adds missing semicolons. Lines are joined with newline + indent
/// so the result can be placed directly after one indent.
pub fn normalize_custom(text: &str) -> String {
    let separator = format!("\n{INDENT}");
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("/*") && !line.starts_with("//"))
        .filter(|line| !line.contains('{') && !line.contains('}'))
        .filter(|line| line.contains(':'))
        .map(|line| {
            if line.ends_with(';') {
                line.to_string()
            } else {
                format!("{line};")
            }
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlValues;

    fn state_with(f: impl FnOnce(&mut ControlValues)) -> LayoutConfig {
        let mut controls = ControlValues::default();
        f(&mut controls);
        controls.to_config()
    }

    #[test]
    fn default_state_output() {
        let css = build_css(&LayoutConfig::default());
        assert_eq!(
            css,
            "#previewBox {\n  display: flex;\n  flex-direction: row;\n  justify-content: flex-start;\n  align-items: stretch;\n  flex-wrap: nowrap;\n  position: static;\n}"
        );
    }

    #[test]
    fn synthesis_is_idempotent() {
        let state = state_with(|c| {
            c.gap_value = "4".into();
            c.custom_css = "color: red".into();
        });
        assert_eq!(build_css(&state), build_css(&state));
    }

    #[test]
    fn flex_declarations_only_for_flex() {
        let flex = build_css(&state_with(|c| c.display = "flex".into()));
        for prop in ["flex-direction", "justify-content", "align-items", "flex-wrap"] {
            assert!(flex.contains(prop), "missing {prop}");
        }

        let block = build_css(&state_with(|c| c.display = "block".into()));
        for prop in ["flex-direction", "justify-content", "align-items", "flex-wrap"] {
            assert!(!block.contains(prop), "unexpected {prop}");
        }
    }

    #[test]
    fn inline_flex_counts_as_flex() {
        let css = build_css(&state_with(|c| c.display = "inline-flex".into()));
        assert!(css.contains("flex-wrap: nowrap;"));
    }

    #[test]
    fn gap_emitted_for_grid() {
        let css = build_css(&state_with(|c| {
            c.display = "grid".into();
            c.gap_value = "12".into();
        }));
        assert!(css.contains("gap: 12px;"));
        assert!(!css.contains("flex-direction"));
    }

    #[test]
    fn gap_follows_flex_block() {
        let css = build_css(&state_with(|c| c.gap_value = "1".into()));
        let wrap = css.find("flex-wrap").unwrap();
        let gap = css.find("gap: 1px;").unwrap();
        assert!(wrap < gap);
    }

    #[test]
    fn only_set_offsets_emitted() {
        let css = build_css(&state_with(|c| c.top_value = "10".into()));
        assert!(css.contains("  top: 10px;\n"));
        assert!(!css.contains("right:"));
        assert!(!css.contains("bottom:"));
        assert!(!css.contains("left:"));
    }

    #[test]
    fn offsets_in_fixed_order() {
        let css = build_css(&state_with(|c| {
            c.position = "absolute".into();
            c.left_value = "1".into();
            c.bottom_value = "2".into();
            c.right_value = "3".into();
            c.top_value = "4".into();
        }));
        let order: Vec<usize> = ["top:", "right:", "bottom:", "left:"]
            .iter()
            .map(|p| css.find(p).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(css.find("position:").unwrap() < order[0]);
    }

    #[test]
    fn invalid_numbers_never_leak() {
        let css = build_css(&state_with(|c| {
            c.gap_value = "abc".into();
            c.top_value = "NaN".into();
        }));
        assert!(!css.contains("NaN"));
        assert!(!css.contains("gap"));
        assert!(!css.contains("top"));
    }

    #[test]
    fn custom_text_normalization() {
        let normalized = normalize_custom("color: red\n/* comment */\nmargin:5px;\ninvalid-line");
        assert_eq!(normalized, "color: red;\n  margin:5px;");
    }

    #[test]
    fn custom_text_drops_nested_rules() {
        let normalized = normalize_custom(".x { color: blue; }\n  // note: ignored\n\n  opacity: .5  ");
        assert_eq!(normalized, "opacity: .5;");
    }

    #[test]
    fn custom_block_appended_last() {
        let css = build_css(&state_with(|c| c.custom_css = "color: red\nmargin:5px;".into()));
        assert!(css.ends_with("  position: static;\n  /* custom */\n  color: red;\n  margin:5px;\n}"));
    }

    #[test]
    fn rule_has_no_trailing_newline() {
        let css = build_css(&LayoutConfig::default());
        assert!(css.starts_with("#previewBox {\n  display: flex;"));
        assert!(css.ends_with("\n}"));
    }

    #[test]
    fn empty_custom_block_omitted() {
        let css = build_css(&state_with(|c| c.custom_css = "/* nothing */\n\n".into()));
        assert!(!css.contains("/* custom */"));
    }
}
