//! The discrete decision an agent takes each frame.

use std::fmt;

/// One of the three decisions a classifier can produce.
///
/// The declaration order is also the class order of a categorical
/// classifier's output vector: index 0 = `Neutral`, 1 = `Jump`, 2 = `Duck`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// Do nothing (release everything).
    #[default]
    Neutral,
    /// Hold the jump input.
    Jump,
    /// Hold the duck input.
    Duck,
}

impl Action {
    /// All actions in class-index order.
    pub const ALL: [Action; 3] = [Action::Neutral, Action::Jump, Action::Duck];

    /// Map a categorical class index back to an action.
    #[inline]
    pub fn from_class(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn class_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Neutral => "neutral",
            Action::Jump    => "jump",
            Action::Duck    => "duck",
        };
        f.write_str(s)
    }
}
