//! Graphic type classification from free-text descriptions
//!
//! Routing decisions hang off the classified type, so classification is a
//! pure function: same description, same answer.

use crate::types::GraphicType;

/// Keyword buckets in priority order: video > infographic > chart > diagram.
///
/// The first bucket with at least one substring hit wins; descriptions
/// matching nothing are conceptual. Tie-breaking is priority only, never
/// match count.
const KEYWORD_RULES: &[(GraphicType, &[&str])] = &[
    (
        GraphicType::Video,
        &[
            "video",
            "animation",
            "animated",
            "motion graphics",
            "moving",
            "clip",
            "footage",
            "movie",
        ],
    ),
    (
        GraphicType::Infographic,
        &[
            "infographic",
            "stats",
            "statistics visualization",
            "data visualization with text",
            "text-heavy",
            "diagram with text",
            "comparison chart with labels",
            "data summary",
            "key metrics",
            "stat card",
            "data card",
            "metrics dashboard",
        ],
    ),
    (
        GraphicType::Chart,
        &[
            "bar chart",
            "line chart",
            "pie chart",
            "area chart",
            "histogram",
            "scatter plot",
            "scatter chart",
            "column chart",
            "stacked chart",
            "donut chart",
            "bar graph",
            "line graph",
            "pie graph",
            "data visualization chart",
            "chart showing data",
            "graph of",
            "chart of",
        ],
    ),
    (
        GraphicType::Diagram,
        &[
            "venn diagram",
            "flowchart",
            "flow chart",
            "flow diagram",
            "process diagram",
            "org chart",
            "organization chart",
            "architecture diagram",
            "network diagram",
            "system diagram",
            "sequence diagram",
            "state diagram",
            "er diagram",
            "uml diagram",
            "block diagram",
        ],
    ),
];

/// Classify a graphic description.
///
/// Never returns [`GraphicType::None`]; that value is reserved for
/// "no description at all" and is handled upstream.
pub fn classify(description: &str) -> GraphicType {
    let lowered = description.to_lowercase();
    for (graphic_type, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return *graphic_type;
        }
    }
    // "image of", "picture of", "warehouse interior", ... all land here
    GraphicType::Concept
}

/// Tracks how the graphic type was chosen for a form in progress.
///
/// A manual pick sticks across description edits; an explicit auto-detect
/// request recomputes from the description at that moment and returns the
/// selector to auto mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSelector {
    current: GraphicType,
    manual: bool,
}

impl TypeSelector {
    /// Start in auto mode with nothing classified yet
    pub const fn new() -> Self {
        Self {
            current: GraphicType::Concept,
            manual: false,
        }
    }

    /// The currently selected type
    pub const fn current(&self) -> GraphicType {
        self.current
    }

    /// Whether the current type was picked by the user
    pub const fn is_manual(&self) -> bool {
        self.manual
    }

    /// Record a manual pick; it persists until [`Self::auto_detect`]
    pub const fn set_manual(&mut self, graphic_type: GraphicType) {
        self.current = graphic_type;
        self.manual = true;
    }

    /// React to a description edit: recompute only in auto mode
    pub fn describe(&mut self, description: &str) {
        if !self.manual {
            self.current = classify(description);
        }
    }

    /// Explicit auto-detect: recompute from the current description text
    /// and drop any manual override
    pub fn auto_detect(&mut self, description: &str) {
        self.manual = false;
        self.current = classify(description);
    }
}

impl Default for TypeSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommended generation engine per category.
///
/// These are informational labels shown next to the classification, not part
/// of the routing contract; deployments can rebrand them.
#[derive(Debug, Clone)]
pub struct EngineCatalog {
    /// Engine for video generation
    pub video: String,
    /// Engine for text-heavy infographics
    pub infographic: String,
    /// Engine for charts and diagrams
    pub chart: String,
    /// Engine for conceptual images
    pub concept: String,
}

impl EngineCatalog {
    /// The label recommended for a classified type
    pub fn recommendation(&self, graphic_type: GraphicType) -> &str {
        match graphic_type {
            GraphicType::Video => &self.video,
            GraphicType::Infographic => &self.infographic,
            GraphicType::Chart | GraphicType::Diagram => &self.chart,
            GraphicType::Concept | GraphicType::None => &self.concept,
        }
    }
}

impl Default for EngineCatalog {
    fn default() -> Self {
        Self {
            video: "Veo 3.1".into(),
            infographic: "Imagen 3".into(),
            chart: "Matplotlib".into(),
            concept: "DALL-E 3".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_keywords_win() {
        assert_eq!(classify("animated logistics flow"), GraphicType::Video);
        assert_eq!(classify("short clip of a warehouse"), GraphicType::Video);
    }

    #[test]
    fn test_video_beats_lower_priority_keywords() {
        // "bar chart" and "flowchart" both present; video still wins
        assert_eq!(
            classify("animated bar chart next to a flowchart"),
            GraphicType::Video
        );
    }

    #[test]
    fn test_infographic_beats_chart() {
        assert_eq!(
            classify("infographic with a bar chart inset"),
            GraphicType::Infographic
        );
    }

    #[test]
    fn test_chart_requires_explicit_chart_keyword() {
        assert_eq!(classify("line chart of freight costs"), GraphicType::Chart);
        // Generic data words are not chart keywords
        assert_eq!(classify("our quarterly data"), GraphicType::Concept);
    }

    #[test]
    fn test_diagram_keywords() {
        assert_eq!(
            classify("flowchart of the returns process"),
            GraphicType::Diagram
        );
    }

    #[test]
    fn test_default_is_concept() {
        assert_eq!(classify(""), GraphicType::Concept);
        assert_eq!(
            classify("a modern warehouse interior at dawn"),
            GraphicType::Concept
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("ANIMATED Logistics FLOW"), GraphicType::Video);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let description = "animated supply chain map";
        assert_eq!(classify(description), classify(description));
    }

    #[test]
    fn test_manual_override_sticks_across_edits() {
        let mut selector = TypeSelector::new();
        selector.describe("bar chart of revenue");
        assert_eq!(selector.current(), GraphicType::Chart);

        selector.set_manual(GraphicType::Concept);
        selector.describe("animated video of trucks");
        assert_eq!(selector.current(), GraphicType::Concept);
        assert!(selector.is_manual());
    }

    #[test]
    fn test_auto_detect_recomputes_from_current_text() {
        let mut selector = TypeSelector::new();
        selector.set_manual(GraphicType::Chart);
        selector.auto_detect("animated video of trucks");
        assert_eq!(selector.current(), GraphicType::Video);
        assert!(!selector.is_manual());

        // Back in auto mode, edits recompute again
        selector.describe("flowchart of intake");
        assert_eq!(selector.current(), GraphicType::Diagram);
    }

    #[test]
    fn test_engine_catalog_defaults() {
        let catalog = EngineCatalog::default();
        assert_eq!(catalog.recommendation(GraphicType::Video), "Veo 3.1");
        assert_eq!(catalog.recommendation(GraphicType::Chart), "Matplotlib");
        assert_eq!(catalog.recommendation(GraphicType::Diagram), "Matplotlib");
        assert_eq!(catalog.recommendation(GraphicType::Concept), "DALL-E 3");
    }
}
