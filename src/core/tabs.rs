// Demo Tabs
// The fixed tab set shown by every screen

use tui_components::TabItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Search,
    Notifications,
    Settings,
}

impl TabItem for Tab {
    const ALL: &'static [Self] = &[Tab::Home, Tab::Search, Tab::Notifications, Tab::Settings];

    fn id(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Search => "search",
            Tab::Notifications => "notifications",
            Tab::Settings => "settings",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Notifications => "Notifications",
            Tab::Settings => "Settings",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Search => "⌕",
            Tab::Notifications => "⍾",
            Tab::Settings => "⚙",
        }
    }
}
