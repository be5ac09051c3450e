#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpPopupState {
    pub visible: bool,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
#[path = "help_state_tests.rs"]
mod help_state_tests;
