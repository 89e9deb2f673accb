use crate::outcome::ScorecardSection;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

const SECTION_COLORS: [&str; 8] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
];
const UNTITLED_COLOR: &str = "#9CA3AF";
const UNTITLED_NAME: &str = "Untitled";

/// Human-readable section label attached to a positioned scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLabel {
    pub section_id: Option<String>,
    pub name: String,
    pub color: String,
}

/// Maps section ids to labels and colors, in section-list order.
pub(super) struct SectionPalette<'a> {
    by_id: AHashMap<&'a str, (&'a str, &'static str)>,
}

impl<'a> SectionPalette<'a> {
    pub fn new(sections: &'a [ScorecardSection]) -> Self {
        let mut by_id = AHashMap::with_capacity(sections.len());
        for (i, section) in sections.iter().enumerate() {
            by_id
                .entry(section.id.as_str())
                .or_insert((section.name.as_str(), SECTION_COLORS[i % SECTION_COLORS.len()]));
        }
        Self { by_id }
    }

    pub fn label(&self, section_id: Option<&str>) -> SectionLabel {
        match section_id.and_then(|id| self.by_id.get(id).map(|entry| (id, entry))) {
            Some((id, (name, color))) => SectionLabel {
                section_id: Some(id.to_string()),
                name: name.to_string(),
                color: color.to_string(),
            },
            None => {
                if let Some(id) = section_id {
                    tracing::warn!(section_id = id, "scorecard refers to an unknown section");
                }
                SectionLabel {
                    section_id: None,
                    name: UNTITLED_NAME.to_string(),
                    color: UNTITLED_COLOR.to_string(),
                }
            }
        }
    }
}
