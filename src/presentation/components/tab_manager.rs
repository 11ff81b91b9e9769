#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Tab {
    Search,
    Settings,
    Log,
}

pub struct TabManager {
    current_tab: Tab,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            current_tab: Tab::Search,
        }
    }

    pub fn switch_to(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn current(&self) -> Tab {
        self.current_tab
    }

    pub fn is_current(&self, tab: Tab) -> bool {
        self.current_tab == tab
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
