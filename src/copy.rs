use serde::{Deserialize, Serialize};

/// Label of the copy button when nothing is in flight.
pub const IDLE_LABEL: &str = "Copiar CSS";
/// How long a feedback label stays before reverting.
pub const FEEDBACK_MS: u32 = 1200;

/// How a copy-to-clipboard attempt ended.
///
/// The host tries the async clipboard first. When that is refused it selects
/// the output panel and runs the legacy copy command on the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CopyOutcome {
    /// Clipboard write succeeded.
    Copied,
    /// Clipboard refused, the copy command on the selected panel worked.
    CopiedFromSelection,
    /// Both refused; the panel text stays selected for a manual copy.
    Selected,
}

impl CopyOutcome {
    /// Resolve the outcome from the two attempts, clipboard first.
    pub fn resolve(clipboard_ok: bool, command_ok: bool) -> Self {
        match (clipboard_ok, command_ok) {
            (true, _) => CopyOutcome::Copied,
            (false, true) => CopyOutcome::CopiedFromSelection,
            (false, false) => CopyOutcome::Selected,
        }
    }

    /// Whether the text reached the clipboard.
    pub fn copied(self) -> bool {
        !matches!(self, CopyOutcome::Selected)
    }

    pub fn label(self) -> &'static str {
        if self.copied() {
            "¡Copiado!"
        } else {
            "Seleccionado"
        }
    }
}
