//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use folio_core::ContentKind;

/// The two nested link controls on a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    LiveDemo,
    Code,
}

impl ProjectLink {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectLink::LiveDemo => "Live Demo",
            ProjectLink::Code => "Code",
        }
    }
}

/// Home page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Projects,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    /// Number key that jumps to this section (`1`..=`6`)
    pub fn key(&self) -> char {
        let index = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        char::from(b'1' + index as u8)
    }

    pub fn from_key(key: char) -> Option<Section> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    /// Case-insensitive match on the label, for content-defined link lists
    pub fn from_label(label: &str) -> Option<Section> {
        Self::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Show the detail view for `id` of the given kind
    Navigate { kind: ContentKind, id: String },
    /// Back to the home page
    NavigateHome,
    /// Scroll the home page to a section, leaving any detail view first
    JumpToSection(Section),

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Next selectable element (home cards, or related links on an article)
    FocusNext,
    /// Previous selectable element
    FocusPrev,
    /// Next nested control of the focused card
    FocusNextControl,
    /// Previous nested control of the focused card
    FocusPrevControl,
    /// Activate the focused element
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    /// Flip between light and dark
    ToggleTheme,
    /// The preference file could not be written
    ThemeSaveFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // External Link Messages
    // ─────────────────────────────────────────────────────────
    /// Open a project's demo or code link
    OpenProjectLink { id: String, link: ProjectLink },
    /// Open the résumé
    OpenResume,
    /// The opener could not be launched
    LinkOpenFailed { target: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    OpenContactForm,
    /// Leave the form; field values are kept
    CloseContactForm,
    ContactInput(char),
    ContactBackspace,
    ContactEnter,
    ContactNextField,
    ContactPrevField,
    SubmitContact,
    /// The dispatcher delivered the message
    ContactSent,
    /// The dispatcher failed
    ContactSendFailed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_follow_page_order() {
        let keys: String = Section::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, "123456");
        assert_eq!(Section::from_key('4'), Some(Section::Projects));
        assert_eq!(Section::from_key('7'), None);
        assert_eq!(Section::from_key('0'), None);
    }

    #[test]
    fn test_section_from_label() {
        assert_eq!(Section::from_label("Blog"), Some(Section::Blog));
        assert_eq!(Section::from_label(" contact "), Some(Section::Contact));
        assert_eq!(Section::from_label("Pricing"), None);
    }
}
