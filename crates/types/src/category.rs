use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of signal categories a hypothesis can belong to.
///
/// Each category names a kind of forward-looking claim about an entity.
/// The set is fixed; per-category value multipliers are calibrated offline
/// and carried in [`crate::ExplorationConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalCategory {
    /// Headcount growth, open roles, new teams.
    Hiring,
    /// Purchasing intent, RFPs, vendor selection.
    Procurement,
    /// New offices, facilities, market entry.
    Expansion,
    /// Upcoming product or service launches.
    ProductLaunch,
    /// Fundraising rounds, grants, capital events.
    Funding,
    /// Executive changes and key appointments.
    Leadership,
    /// Alliances, joint ventures, integrations.
    Partnership,
    /// Adoption of specific technologies or platforms.
    Technology,
}

impl SignalCategory {
    /// All categories in canonical order.
    pub const ALL: [SignalCategory; 8] = [
        SignalCategory::Hiring,
        SignalCategory::Procurement,
        SignalCategory::Expansion,
        SignalCategory::ProductLaunch,
        SignalCategory::Funding,
        SignalCategory::Leadership,
        SignalCategory::Partnership,
        SignalCategory::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalCategory::Hiring => "hiring",
            SignalCategory::Procurement => "procurement",
            SignalCategory::Expansion => "expansion",
            SignalCategory::ProductLaunch => "product_launch",
            SignalCategory::Funding => "funding",
            SignalCategory::Leadership => "leadership",
            SignalCategory::Partnership => "partnership",
            SignalCategory::Technology => "technology",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
