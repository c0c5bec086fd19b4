//! Actions and the session history.
//!
//! An `Action` is an opaque identifier chosen by the game. It is only
//! meaningful relative to the state that listed it in `legal_actions()`:
//! two different states may use the same number for unrelated moves. The
//! human-readable form comes from `GameState::action_to_string`.

use serde::{Deserialize, Serialize};

/// Opaque action identifier, scoped to one state's legal-action set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(pub u32);

impl Action {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Append-only list of action labels, one per applied transition.
///
/// Forced-opening labels and main-loop actions share the same list, so its
/// length always equals the number of transitions the driver performed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    labels: Vec<String>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

impl From<Vec<String>> for History {
    fn from(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::new(17).to_string(), "#17");
        assert_eq!(Action::new(17).id(), 17);
    }

    #[test]
    fn test_history_append_only() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push("a7a6");
        history.push(String::from("b2b3"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.labels(), &["a7a6".to_string(), "b2b3".to_string()]);
        assert_eq!(history.to_string(), "a7a6 b2b3");
    }

    #[test]
    fn test_empty_history_displays_empty() {
        assert_eq!(History::new().to_string(), "");
    }
}
