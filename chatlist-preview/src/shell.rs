//! Tab shell around the chat list: top bar, pages and bottom navigation.

/// Action icons shown in the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Camera,
    Search,
    More,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Camera => "camera",
            Action::Search => "search",
            Action::More => "more",
        }
    }
}

/// Pages of the app, in bottom bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Chats,
    Updates,
    Communities,
    Calls,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Chats, Tab::Updates, Tab::Communities, Tab::Calls];

    /// Title shown in the top bar
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Chats => "Whatsapp 2",
            Tab::Updates => "Updates",
            Tab::Communities => "Communities",
            Tab::Calls => "Calls",
        }
    }

    /// Label shown in the bottom bar
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Chats => "Chats",
            Tab::Updates => "Updates",
            Tab::Communities => "Communities",
            Tab::Calls => "Calls",
        }
    }

    pub fn actions(&self) -> &'static [Action] {
        match self {
            Tab::Updates => &[Action::Camera, Action::Search, Action::More],
            Tab::Chats | Tab::Communities | Tab::Calls => &[Action::Camera, Action::More],
        }
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Selected tab, wrapping around at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    current: Tab,
}

impl Default for Shell {
    fn default() -> Self {
        Self { current: Tab::Chats }
    }
}

impl Shell {
    pub fn current(&self) -> Tab {
        self.current
    }

    pub fn select(&mut self, tab: Tab) {
        self.current = tab;
    }

    pub fn next(&mut self) -> Tab {
        let index = (self.current.index() + 1) % Tab::ALL.len();
        self.current = Tab::ALL[index];
        self.current
    }

    pub fn previous(&mut self) -> Tab {
        let index = (self.current.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.current = Tab::ALL[index];
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_chats() {
        assert_eq!(Shell::default().current(), Tab::Chats);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut shell = Shell::default();
        assert_eq!(shell.previous(), Tab::Calls);
        assert_eq!(shell.next(), Tab::Chats);
        assert_eq!(shell.next(), Tab::Updates);
        shell.select(Tab::Calls);
        assert_eq!(shell.next(), Tab::Chats);
    }

    #[test]
    fn test_only_updates_has_search() {
        for tab in Tab::ALL {
            let has_search = tab.actions().contains(&Action::Search);
            assert_eq!(has_search, tab == Tab::Updates);
            assert_eq!(tab.actions().first(), Some(&Action::Camera));
        }
    }
}
