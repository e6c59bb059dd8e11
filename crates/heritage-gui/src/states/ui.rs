use std::fmt;

use heritage_core::catalog::SiteFilter;
use heritage_core::chat::ChatSession;

/// Which top-level page is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Catalog,
    Detail { site_id: String },
    /// The tour itself lives in `HeritageApp::tour`.
    Tour,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Overview,
    Architecture,
    Spiritual,
    VisitInfo,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Architecture,
        DetailTab::Spiritual,
        DetailTab::VisitInfo,
    ];
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::Architecture => write!(f, "Architecture"),
            Self::Spiritual => write!(f, "Spiritual"),
            Self::VisitInfo => write!(f, "Visit Info"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub screen: Screen,

    /// Catalog filters as edited in the search bar.
    pub search: String,
    pub district: Option<String>,
    pub tradition: Option<String>,

    pub detail_tab: DetailTab,
    /// Index into the detail page's gallery.
    pub gallery_index: usize,

    /// Conversation of the open detail page.
    pub chat: Option<ChatSession>,
    pub chat_input: String,

    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn site_filter(&self) -> SiteFilter {
        SiteFilter {
            search: Some(self.search.clone()),
            district: self.district.clone(),
            tradition: self.tradition.clone(),
        }
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.district = None;
        self.tradition = None;
    }
}
