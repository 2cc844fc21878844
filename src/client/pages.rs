use super::layout::AffordanceLayout;
use std::fmt;
use std::str::FromStr;

/// Full-page views. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Main,
    Dashboard,
    Forgot,
    Listening,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Login,
        Page::Register,
        Page::Main,
        Page::Dashboard,
        Page::Forgot,
        Page::Listening,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::Main => "main",
            Page::Dashboard => "dashboard",
            Page::Forgot => "forgot",
            Page::Listening => "listening",
        }
    }

    /// Where the app opens: `main` with a persisted identity, `login` otherwise.
    pub fn initial(has_identity: bool) -> Self {
        if has_identity {
            Page::Main
        } else {
            Page::Login
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("unknown page '{}'", s))
    }
}

/// Follow-up work a page entry requires from the owner of session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// Refresh the displayed identity and re-apply feature locks.
    RefreshDashboard,
    /// Feature controls were (re)bound.
    FeaturesBound,
    Plain,
}

#[derive(Debug, Clone)]
pub struct PageController {
    current: Page,
    layout: AffordanceLayout,
    bind_count: u32,
}

impl PageController {
    pub fn new(layout: AffordanceLayout) -> Self {
        Self {
            current: Page::Login,
            layout,
            bind_count: 0,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn visible_pages(&self) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|page| self.is_visible(*page))
            .collect()
    }

    /// Hides every page and reveals `target`.
    pub fn show_page(&mut self, target: Page) -> PageEntry {
        self.current = target;
        match target {
            Page::Dashboard => PageEntry::RefreshDashboard,
            Page::Main => {
                self.bind_features();
                PageEntry::FeaturesBound
            }
            _ => PageEntry::Plain,
        }
    }

    /// Rebinding is harmless; it only records that controls are live.
    pub fn bind_features(&mut self) {
        self.bind_count = self.bind_count.saturating_add(1);
    }

    pub fn features_bound(&self) -> bool {
        self.bind_count > 0
    }

    pub fn layout(&self) -> &AffordanceLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut AffordanceLayout {
        &mut self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_page_visible() {
        let mut controller = PageController::new(AffordanceLayout::standard());
        assert_eq!(controller.visible_pages(), vec![Page::Login]);

        for page in Page::ALL {
            controller.show_page(page);
            assert_eq!(controller.visible_pages(), vec![page]);
        }
    }

    #[test]
    fn test_entry_effects() {
        let mut controller = PageController::new(AffordanceLayout::standard());
        assert!(!controller.features_bound());

        assert_eq!(controller.show_page(Page::Dashboard), PageEntry::RefreshDashboard);
        assert_eq!(controller.show_page(Page::Main), PageEntry::FeaturesBound);
        assert_eq!(controller.show_page(Page::Main), PageEntry::FeaturesBound);
        assert!(controller.features_bound());
        assert_eq!(controller.show_page(Page::Forgot), PageEntry::Plain);
    }

    #[test]
    fn test_initial_page() {
        assert_eq!(Page::initial(true), Page::Main);
        assert_eq!(Page::initial(false), Page::Login);
    }

    #[test]
    fn test_page_names_round_trip() {
        assert_eq!("listening".parse::<Page>(), Ok(Page::Listening));
        assert!("settings".parse::<Page>().is_err());
    }
}
