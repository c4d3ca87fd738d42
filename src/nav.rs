/// Height of the fixed header that section tops are scrolled below.
pub const HEADER_OFFSET: f64 = 80.0;

/// Scroll distance after which the header gets its heavier shadow.
pub const SCROLL_SHADOW_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

impl Section {
    /// In page order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Window scroll position that puts a section's top just under the header.
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_SHADOW_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(1200.0), 1120.0);
        assert!((scroll_target(612.4) - 532.4).abs() < 1e-9);
        assert_eq!(scroll_target(HEADER_OFFSET), 0.0);
    }

    #[test]
    fn test_href_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_href(&section.href()), Some(section));
        }
    }

    #[test]
    fn test_unknown_href() {
        assert_eq!(Section::from_href("#blog"), None);
        assert_eq!(Section::from_href("about"), None);
        assert_eq!(Section::from_href("#"), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = Section::ALL.map(Section::id).to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_SHADOW_THRESHOLD));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(800.0));
    }
}
