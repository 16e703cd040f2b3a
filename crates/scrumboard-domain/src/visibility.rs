use serde::Serialize;

/// Panels and menus whose visibility the board tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    AddList,
    UserMenu,
    UserProfile,
    Sidebar,
    Filters,
}

/// Open/closed flags for the board's panels.
///
/// Flags are independent except for one rule: closing the user profile
/// panel also closes the user menu. The menu and the profile panel may be
/// open together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub add_list: bool,
    pub user_menu: bool,
    pub user_profile: bool,
    pub sidebar: bool,
    pub filters: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            add_list: false,
            user_menu: false,
            user_profile: false,
            sidebar: true,
            filters: false,
        }
    }
}

impl PanelVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_add_list(&mut self) {
        self.add_list = true;
    }

    pub fn close_add_list(&mut self) {
        self.add_list = false;
    }

    pub fn open_user_menu(&mut self) {
        self.user_menu = true;
    }

    pub fn close_user_menu(&mut self) {
        self.user_menu = false;
    }

    pub fn open_user_profile(&mut self) {
        self.user_profile = true;
    }

    pub fn close_user_profile(&mut self) {
        self.user_profile = false;
        self.user_menu = false;
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar = false;
    }

    pub fn open_filters(&mut self) {
        self.filters = true;
    }

    pub fn close_filters(&mut self) {
        self.filters = false;
    }

    pub fn open(&mut self, panel: Panel) {
        match panel {
            Panel::AddList => self.open_add_list(),
            Panel::UserMenu => self.open_user_menu(),
            Panel::UserProfile => self.open_user_profile(),
            Panel::Sidebar => self.open_sidebar(),
            Panel::Filters => self.open_filters(),
        }
    }

    pub fn close(&mut self, panel: Panel) {
        match panel {
            Panel::AddList => self.close_add_list(),
            Panel::UserMenu => self.close_user_menu(),
            Panel::UserProfile => self.close_user_profile(),
            Panel::Sidebar => self.close_sidebar(),
            Panel::Filters => self.close_filters(),
        }
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::AddList => self.add_list,
            Panel::UserMenu => self.user_menu,
            Panel::UserProfile => self.user_profile,
            Panel::Sidebar => self.sidebar,
            Panel::Filters => self.filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Panel; 5] = [
        Panel::AddList,
        Panel::UserMenu,
        Panel::UserProfile,
        Panel::Sidebar,
        Panel::Filters,
    ];

    #[test]
    fn test_initial_state() {
        let panels = PanelVisibility::new();
        assert!(panels.is_open(Panel::Sidebar));
        for panel in ALL.iter().filter(|p| **p != Panel::Sidebar) {
            assert!(!panels.is_open(*panel), "{:?} should start closed", panel);
        }
    }

    #[test]
    fn test_open_close_each_panel() {
        for panel in ALL {
            let mut panels = PanelVisibility::new();
            panels.open(panel);
            assert!(panels.is_open(panel));
            panels.close(panel);
            assert!(!panels.is_open(panel));
        }
    }

    #[test]
    fn test_closing_profile_closes_menu() {
        let mut panels = PanelVisibility::new();
        panels.open_user_menu();
        panels.open_user_profile();

        panels.close_user_profile();

        assert!(!panels.user_profile);
        assert!(!panels.user_menu);
    }

    #[test]
    fn test_menu_and_profile_may_be_open_together() {
        let mut panels = PanelVisibility::new();
        panels.open_user_profile();
        panels.open_user_menu();
        assert!(panels.user_profile && panels.user_menu);

        panels.close_user_menu();
        assert!(panels.user_profile);
    }

    #[test]
    fn test_other_panels_are_independent() {
        let mut panels = PanelVisibility::new();
        panels.open_add_list();
        panels.open_filters();
        panels.close_sidebar();
        panels.close_user_profile();

        assert!(panels.add_list);
        assert!(panels.filters);
        assert!(!panels.sidebar);
    }
}
