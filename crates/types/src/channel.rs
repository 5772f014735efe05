use serde::{Deserialize, Serialize};
use std::fmt;

/// Credibility class of an evidence source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Published by the entity itself or a regulator — credible for the rubric.
    Primary,
    /// Third-party reporting or discussion — speculative for the rubric.
    Secondary,
}

/// The closed set of evidence channels the selector can draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    OfficialSite,
    CareersPage,
    PressRelease,
    NewsMedia,
    RegulatoryFiling,
    IndustryForum,
}

impl Channel {
    /// All channels in canonical order. Selection tie-breaks follow this order.
    pub const ALL: [Channel; 6] = [
        Channel::OfficialSite,
        Channel::CareersPage,
        Channel::PressRelease,
        Channel::NewsMedia,
        Channel::RegulatoryFiling,
        Channel::IndustryForum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::OfficialSite => "official_site",
            Channel::CareersPage => "careers_page",
            Channel::PressRelease => "press_release",
            Channel::NewsMedia => "news_media",
            Channel::RegulatoryFiling => "regulatory_filing",
            Channel::IndustryForum => "industry_forum",
        }
    }

    /// Credibility class used by the validator's source criterion.
    pub fn source_kind(&self) -> SourceKind {
        match self {
            Channel::OfficialSite
            | Channel::CareersPage
            | Channel::PressRelease
            | Channel::RegulatoryFiling => SourceKind::Primary,
            Channel::NewsMedia | Channel::IndustryForum => SourceKind::Secondary,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
