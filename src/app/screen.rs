// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
    Menu,
    Contact,
}

impl Screen {
    /// All screens in navbar order.
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::About, Screen::Menu, Screen::Contact];

    /// Localization key of the screen title.
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::About => "nav-about",
            Screen::Menu => "nav-menu",
            Screen::Contact => "nav-contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_has_a_distinct_title_key() {
        let mut keys: Vec<&str> = Screen::ALL.iter().map(|s| s.title_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Screen::ALL.len());
    }
}
