//! Copy-code button labels, styling and feedback timing.

/// How long copy feedback stays on the button, in milliseconds.
pub const FEEDBACK_MS: i32 = 2000;

pub const BUTTON_CLASS: &str = "copy-code-button";
pub const ARIA_LABEL: &str = "Copy code to clipboard";

/// Inline styling for the injected button.
pub const BUTTON_STYLE: &str = "position: absolute; \
    top: 0.75rem; \
    right: 1rem; \
    padding: 0.375rem 0.75rem; \
    background-color: rgba(255, 255, 255, 0.1); \
    color: #cbd5e1; \
    border: 1px solid rgba(255, 255, 255, 0.2); \
    border-radius: 0.375rem; \
    font-size: 0.875rem; \
    cursor: pointer; \
    transition: all 0.2s ease;";

pub const HOVER_BACKGROUND: &str = "rgba(255, 255, 255, 0.2)";

/// State shown on a copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Idle,
    Copied,
    Failed,
}

/// Background and border colors for a feedback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub background: &'static str,
    pub border: &'static str,
}

impl CopyFeedback {
    pub fn label(&self) -> &'static str {
        match self {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied => "Copied!",
            CopyFeedback::Failed => "Failed",
        }
    }

    /// Colors to apply, if this state restyles the button. A failure only
    /// changes the label.
    pub fn colors(&self) -> Option<ButtonColors> {
        match self {
            CopyFeedback::Idle => Some(ButtonColors {
                background: "rgba(255, 255, 255, 0.1)",
                border: "rgba(255, 255, 255, 0.2)",
            }),
            CopyFeedback::Copied => Some(ButtonColors {
                background: "rgba(34, 197, 94, 0.3)",
                border: "rgba(34, 197, 94, 0.5)",
            }),
            CopyFeedback::Failed => None,
        }
    }

    /// Feedback for the outcome of a clipboard write.
    pub fn for_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => CopyFeedback::Copied,
            Err(_) => CopyFeedback::Failed,
        }
    }
}

/// A label change applied `delay_ms` after the clipboard write settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackStep {
    pub delay_ms: i32,
    pub label: &'static str,
    pub colors: Option<ButtonColors>,
}

/// Steps to run once the clipboard write resolves: show the outcome right
/// away, then revert to the idle label. Colors are only restored when the
/// outcome changed them.
pub fn feedback_steps<T, E>(result: &Result<T, E>) -> [FeedbackStep; 2] {
    let shown = CopyFeedback::for_result(result);
    let idle = CopyFeedback::Idle;

    [
        FeedbackStep {
            delay_ms: 0,
            label: shown.label(),
            colors: shown.colors(),
        },
        FeedbackStep {
            delay_ms: FEEDBACK_MS,
            label: idle.label(),
            colors: shown.colors().and(idle.colors()),
        },
    ]
}
