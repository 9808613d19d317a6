//! Timeline planning: how many parts a script has and where each one sits.

use fixora_core::{SCENE_SECONDS, VideoConfig, VideoModel};
use serde::Serialize;

/// Half-open range of seconds `[start, end)` covered by one timeline part.
///
/// # Examples
///
/// ```
/// use fixora_prompt::TimeRange;
///
/// let range = TimeRange::new(64, 72);
/// assert_eq!(range.to_string(), "[01:04-01:12]");
/// assert_eq!(range.span(), "64-72");
/// assert_eq!(range.len(), 8);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_getters::Getters,
)]
pub struct TimeRange {
    /// First second of the part
    start: u32,
    /// Second at which the next part begins
    end: u32,
}

impl TimeRange {
    /// Creates a range from `start` to `end` seconds.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Duration of the range in seconds.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// True for a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bare `start-end` seconds, as listed in multiscene instructions.
    pub fn span(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}-{}]", clock(self.start), clock(self.end))
    }
}

fn clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One planned timeline part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_getters::Getters)]
pub struct PlannedPart {
    /// Part title the model should use
    label: String,
    /// Seconds covered by the part
    range: TimeRange,
}

/// Ordered parts and total duration for one configuration.
///
/// # Examples
///
/// ```
/// use fixora_core::{VideoConfig, VideoModel};
/// use fixora_prompt::TimelinePlan;
///
/// let plan = TimelinePlan::for_config(&VideoConfig::default().with_model(VideoModel::ShortA));
/// assert_eq!(plan.labels(), vec!["Hook", "Context", "Climax", "Resolution"]);
/// assert_eq!(*plan.total_seconds(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_getters::Getters)]
pub struct TimelinePlan {
    /// Model the plan was made for
    model: VideoModel,
    /// Total clip duration in seconds
    total_seconds: u32,
    /// Parts in playback order
    parts: Vec<PlannedPart>,
}

/// Part titles and boundaries (in seconds) for the fixed-length models.
const SHORT_A_PARTS: [(&str, u32, u32); 4] = [
    ("Hook", 0, 4),
    ("Context", 4, 8),
    ("Climax", 8, 12),
    ("Resolution", 12, 15),
];
const SHORT_B_PARTS: [(&str, u32, u32); 3] = [
    ("Hook", 0, 3),
    ("Climax", 3, 6),
    ("Resolution", 6, 8),
];

impl TimelinePlan {
    /// Plans the timeline for `config`.
    ///
    /// The scene count is only read for [`VideoModel::Multiscene`], which gets
    /// `scene_count` back-to-back 8 second scenes.
    pub fn for_config(config: &VideoConfig) -> Self {
        let model = *config.model();
        let parts = match model {
            VideoModel::ShortA => fixed_parts(&SHORT_A_PARTS),
            VideoModel::ShortB => fixed_parts(&SHORT_B_PARTS),
            VideoModel::Multiscene => (0..*config.scene_count())
                .map(|i| PlannedPart {
                    label: format!("Scene {}", i + 1),
                    range: TimeRange::new(
                        i.saturating_mul(SCENE_SECONDS),
                        (i + 1).saturating_mul(SCENE_SECONDS),
                    ),
                })
                .collect(),
        };

        Self {
            model,
            total_seconds: config.total_seconds(),
            parts,
        }
    }

    /// Number of planned parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Part titles in order.
    pub fn labels(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.label.as_str()).collect()
    }

    /// Time ranges in order.
    pub fn ranges(&self) -> Vec<TimeRange> {
        self.parts.iter().map(|part| part.range).collect()
    }

    /// Formatted timestamps, e.g. `[00:00-00:04], [00:04-00:08]`.
    pub fn timestamps(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.range.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Bare second spans, e.g. `0-8, 8-16, 16-24`.
    pub fn spans(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.range.span())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn fixed_parts(table: &[(&str, u32, u32)]) -> Vec<PlannedPart> {
    table
        .iter()
        .map(|(label, start, end)| PlannedPart {
            label: (*label).to_string(),
            range: TimeRange::new(*start, *end),
        })
        .collect()
}
