//! Intent classification and clarification gating.
//!
//! Both are deliberately dumb: case-insensitive keyword containment,
//! checked in fixed priority order. The model never sees a message until
//! these gates have routed it.

/// What the user wants from this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The user is asking what we meant, or asking us to re-ask.
    Clarify,
    /// A fresh analysis or dashboard request. Default.
    Analyze,
    /// A change to the existing dashboard.
    Revise,
    /// Show the current dashboard again.
    Render,
}

const CLARIFY_KEYWORDS: &[&str] = &[
    "clarify",
    "what do you mean",
    "don't understand",
    "dont understand",
    "confused",
    "rephrase",
];

const REVISE_KEYWORDS: &[&str] = &[
    "revise", "change", "instead", "update", "modify", "replace", "swap",
];

const RENDER_KEYWORDS: &[&str] = &[
    "render",
    "show the dashboard",
    "show dashboard",
    "show me the dashboard",
    "current dashboard",
    "display the dashboard",
];

/// Markers of a request too vague to plan against.
const VAGUE_MARKERS: &[&str] = &[
    "first",
    "important",
    "best",
    "interesting",
    "what to look at",
    "help me understand",
    "overview",
    "explore",
    "where to start",
    "not sure",
];

/// Markers that the user wants a fresh dashboard, not a revision.
const NEW_DASHBOARD_MARKERS: &[&str] = &[
    "new dashboard",
    "start over",
    "start again",
    "from scratch",
    "rebuild",
];

/// Classify a message into an intent.
///
/// Priority order is fixed: clarify beats revise beats render; anything
/// else is analyze. No side effects.
pub fn classify_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();

    if contains_any(&lower, CLARIFY_KEYWORDS) {
        Intent::Clarify
    } else if contains_any(&lower, REVISE_KEYWORDS) {
        Intent::Revise
    } else if contains_any(&lower, RENDER_KEYWORDS) {
        Intent::Render
    } else {
        Intent::Analyze
    }
}

/// Decide, without the model, whether a message is too vague to act on.
pub fn needs_clarification(message: &str) -> bool {
    contains_any(&message.to_lowercase(), VAGUE_MARKERS)
}

/// Decide whether the user is asking for a fresh dashboard rather than a
/// revision of the current one.
pub fn wants_new_dashboard(message: &str) -> bool {
    contains_any(&message.to_lowercase(), NEW_DASHBOARD_MARKERS)
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}
