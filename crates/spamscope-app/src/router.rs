//! Section routing with back/forward history
//!
//! Exactly one section is active at any time. Activating a section pushes
//! the previous one onto the back stack and clears the forward stack, the
//! same discipline as a browser history.

use spamscope_core::types::Section;

/// Active section plus navigation history.
#[derive(Debug, Clone)]
pub struct SectionRouter {
    active: Section,
    back: Vec<Section>,
    forward: Vec<Section>,
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new(Section::Home)
    }
}

impl SectionRouter {
    pub fn new(initial: Section) -> Self {
        Self {
            active: initial,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// The currently visible section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Switch to `section`, recording the current one in history.
    ///
    /// Re-activating the already active section is a no-op so repeated
    /// key presses do not pollute the back stack.
    pub fn activate(&mut self, section: Section) {
        if section == self.active {
            return;
        }
        self.back.push(self.active);
        self.forward.clear();
        self.active = section;
    }

    /// Parse and activate a deep-link fragment. Unknown fragments leave the
    /// router untouched and report `false`.
    pub fn activate_fragment(&mut self, fragment: &str) -> bool {
        match Section::from_fragment(fragment) {
            Some(section) => {
                self.activate(section);
                true
            }
            None => false,
        }
    }

    /// Return to the most recently left section. No-op on empty history.
    pub fn go_back(&mut self) -> bool {
        match self.back.pop() {
            Some(section) => {
                self.forward.push(self.active);
                self.active = section;
                true
            }
            None => false,
        }
    }

    /// Undo the most recent back navigation. No-op when nothing was undone.
    pub fn go_forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(section) => {
                self.back.push(self.active);
                self.active = section;
                true
            }
            None => false,
        }
    }
}
