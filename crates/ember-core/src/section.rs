//! Page sections in document order.

use std::fmt;

/// One section of the single-page portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Get the display title for this section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Position of this section in [`Section::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get the following section, staying on the last one.
    pub fn next(&self) -> Self {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Section::Contact)
    }

    /// Get the preceding section, staying on the first one.
    pub fn prev(&self) -> Self {
        self.index()
            .checked_sub(1)
            .map(|i| Self::ALL[i])
            .unwrap_or(Section::Hero)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_saturate() {
        assert_eq!(Section::Hero.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::Hero.prev(), Section::Hero);
        assert_eq!(Section::Projects.prev(), Section::Experience);
    }

    #[test]
    fn test_nav_excludes_hero() {
        assert!(!Section::NAV.contains(&Section::Hero));
        assert_eq!(Section::NAV.len() + 1, Section::ALL.len());
    }
}
