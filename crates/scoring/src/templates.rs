use prospect_types::{Channel, SignalCategory};

/// Query templates for one channel: a primary query plus ordered fallbacks.
///
/// Placeholders: `{entity}` — the entity's display name, `{topic}` — a
/// category-specific topic phrase.
#[derive(Clone, Copy, Debug)]
pub struct QueryTemplateSet {
    pub channel: Channel,
    pub primary: &'static str,
    pub fallbacks: &'static [&'static str],
}

impl QueryTemplateSet {
    /// Render all templates, primary first, with placeholders substituted.
    pub fn render(&self, entity_name: &str, category: SignalCategory) -> Vec<String> {
        let topic = topic_phrase(category);
        std::iter::once(self.primary)
            .chain(self.fallbacks.iter().copied())
            .map(|t| t.replace("{entity}", entity_name).replace("{topic}", topic))
            .collect()
    }
}

/// Category-specific topic phrase inserted into query templates.
fn topic_phrase(category: SignalCategory) -> &'static str {
    match category {
        SignalCategory::Hiring => "hiring expansion roles",
        SignalCategory::Procurement => "RFP tender procurement",
        SignalCategory::Expansion => "new office facility opening",
        SignalCategory::ProductLaunch => "product launch announcement",
        SignalCategory::Funding => "funding round investment",
        SignalCategory::Leadership => "appoints executive officer",
        SignalCategory::Partnership => "partnership agreement",
        SignalCategory::Technology => "adopts platform migration",
    }
}

/// Template table per channel.
pub fn queries_for(channel: Channel) -> QueryTemplateSet {
    match channel {
        Channel::OfficialSite => QueryTemplateSet {
            channel,
            primary: "\"{entity}\" {topic} site:official announcement",
            fallbacks: &[
                "\"{entity}\" {topic} newsroom",
                "\"{entity}\" official statement {topic}",
            ],
        },
        Channel::CareersPage => QueryTemplateSet {
            channel,
            primary: "\"{entity}\" careers {topic}",
            fallbacks: &[
                "\"{entity}\" jobs openings {topic}",
                "\"{entity}\" \"we are hiring\"",
            ],
        },
        Channel::PressRelease => QueryTemplateSet {
            channel,
            primary: "\"{entity}\" press release {topic}",
            fallbacks: &[
                "\"{entity}\" announces {topic}",
                "\"{entity}\" newswire {topic}",
            ],
        },
        Channel::NewsMedia => QueryTemplateSet {
            channel,
            primary: "\"{entity}\" news {topic}",
            fallbacks: &["\"{entity}\" reported {topic}"],
        },
        Channel::RegulatoryFiling => QueryTemplateSet {
            channel,
            primary: "\"{entity}\" filing {topic}",
            fallbacks: &["\"{entity}\" disclosure {topic}"],
        },
        Channel::IndustryForum => QueryTemplateSet {
            channel,
            primary: "\"{entity}\" forum discussion {topic}",
            fallbacks: &["\"{entity}\" community {topic}"],
        },
    }
}
