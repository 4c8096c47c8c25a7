use crate::core::keyframes::panel::Panel;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyframeListError {
    PositionOutOfRange { position: usize, len: usize },
}

impl fmt::Display for KeyframeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange { position, len } => {
                write!(
                    f,
                    "position {} is out of range for a list of {} panels",
                    position, len
                )
            }
        }
    }
}

impl Error for KeyframeListError {}

/// Ordered keyframe storage addressed by 1-based position, the way the
/// menu exposes it. Insertion order is the animation's temporal order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct KeyframeList {
    panels: Vec<Panel>,
}

impl KeyframeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Inserts at a 1-based position: 1 prepends, any position past the
    /// end appends, other positions splice in front of the panel
    /// currently holding that position. Position 0 is rejected.
    pub fn insert(&mut self, panel: Panel, position: usize) -> Result<(), KeyframeListError> {
        if position == 0 {
            return Err(KeyframeListError::PositionOutOfRange {
                position,
                len: self.panels.len(),
            });
        }

        let index = (position - 1).min(self.panels.len());
        self.panels.insert(index, panel);
        Ok(())
    }

    /// Removes and returns the panel at a 1-based position in `[1, len]`.
    pub fn remove(&mut self, position: usize) -> Result<Panel, KeyframeListError> {
        if position == 0 || position > self.panels.len() {
            return Err(KeyframeListError::PositionOutOfRange {
                position,
                len: self.panels.len(),
            });
        }

        Ok(self.panels.remove(position - 1))
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Panel> {
        position.checked_sub(1).and_then(|index| self.panels.get(index))
    }

    /// Ordered, restartable view of the panels; never mutates the list.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}
