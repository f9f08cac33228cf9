//! # Stage Table
//!
//! The four giraffe growth stages and everything shown about them.
//!
//! ## Stage Definitions
//!
//! | Stage | Foot Length (cm) | Child Age |
//! |-------|------------------|-----------|
//! | Newborn | 8.9 - 12.1 | 0 - 1 year |
//! | Juvenile | 12.1 - 16.5 | 1 - 4 years |
//! | Subadult | 15.6 - 19.2 | 4 - 5 years |
//! | Adult | 17.1 - 24.8 | 5 - 12 years |
//!
//! The intervals overlap. Which stage owns an overlapping value is decided by
//! the priority order in [`crate::classify`], not by this table.
//!
//! The table is `static` data: it exists before `main` runs and nothing can
//! mutate it.

use crate::error::GiraffeError;
use serde::Serialize;
use std::str::FromStr;

// =============================================================================
// GLOBAL BOUNDS
// =============================================================================

/// Smallest accepted foot length (cm). Lower end of the Newborn interval.
pub const FOOT_LENGTH_MIN: f64 = 8.9;

/// Largest accepted foot length (cm). Upper end of the Adult interval.
pub const FOOT_LENGTH_MAX: f64 = 24.8;

// =============================================================================
// STAGE ID
// =============================================================================

/// Growth stage tag, ordered youngest to oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    Newborn,
    Juvenile,
    Subadult,
    Adult,
}

impl StageId {
    /// All stages in age order.
    pub const ALL: [StageId; 4] = [
        StageId::Newborn,
        StageId::Juvenile,
        StageId::Subadult,
        StageId::Adult,
    ];

    /// Lowercase key used on the command line and in JSON.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            StageId::Newborn => "newborn",
            StageId::Juvenile => "juvenile",
            StageId::Subadult => "subadult",
            StageId::Adult => "adult",
        }
    }

    /// The record for this stage.
    #[must_use]
    pub fn record(self) -> &'static StageRecord {
        &STAGES[self as usize]
    }

    /// Get the next (older) stage, if any.
    #[must_use]
    pub fn next(&self) -> Option<StageId> {
        match self {
            StageId::Newborn => Some(StageId::Juvenile),
            StageId::Juvenile => Some(StageId::Subadult),
            StageId::Subadult => Some(StageId::Adult),
            StageId::Adult => None,
        }
    }

    /// Get the previous (younger) stage, if any.
    #[must_use]
    pub fn previous(&self) -> Option<StageId> {
        match self {
            StageId::Newborn => None,
            StageId::Juvenile => Some(StageId::Newborn),
            StageId::Subadult => Some(StageId::Juvenile),
            StageId::Adult => Some(StageId::Subadult),
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StageId {
    type Err = GiraffeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StageId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GiraffeError::UnknownStage(s.to_string()))
    }
}

// =============================================================================
// RECORD COMPONENTS
// =============================================================================

/// Closed foot-length interval `[low, high]` in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootInterval {
    pub low: f64,
    pub high: f64,
}

impl FootInterval {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive at both ends.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl std::fmt::Display for FootInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} cm", self.low, self.high)
    }
}

/// A measurement shown in both unit systems. Display text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub metric: &'static str,
    pub imperial: &'static str,
}

// =============================================================================
// STAGE RECORD
// =============================================================================

/// Everything known about one growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageRecord {
    pub id: StageId,
    pub display_name: &'static str,
    pub child_age_range: &'static str,
    pub giraffe_age_range: &'static str,
    pub foot_length: FootInterval,
    pub height: Measurement,
    pub weight: Measurement,
    pub image_url: &'static str,
    pub fun_facts: &'static [&'static str],
}

/// The full table in age order.
#[must_use]
pub fn stage_table() -> &'static [StageRecord; 4] {
    &STAGES
}

// Indexed by `StageId as usize`; keep in the same order as the enum.
static STAGES: [StageRecord; 4] = [
    StageRecord {
        id: StageId::Newborn,
        display_name: "Newborn/Calf",
        child_age_range: "0 - 1 year",
        giraffe_age_range: "Birth - 1 year",
        foot_length: FootInterval::new(8.9, 12.1),
        height: Measurement {
            metric: "1.8 - 2 meters",
            imperial: "6 feet",
        },
        weight: Measurement {
            metric: "45 - 100 kg",
            imperial: "100 - 220 pounds",
        },
        image_url: "https://r2.flowith.net/files/o/1748052966607-Newborn_Giraffe_Cartoon_Image_Design_index_0@1024x1024.png",
        fun_facts: &[
            "A baby giraffe is already taller than most adult humans when it's born!",
            "Even though they fall to the ground at birth, they can stand up and walk in less time than it takes to watch a cartoon!",
            "Baby giraffes hang out in special \"kindergarten\" groups called creches while their moms find food!",
        ],
    },
    StageRecord {
        id: StageId::Juvenile,
        display_name: "Juvenile",
        child_age_range: "1 - 4 years",
        giraffe_age_range: "1 - 4 years",
        foot_length: FootInterval::new(12.1, 16.5),
        height: Measurement {
            metric: "3 - 4 meters",
            imperial: "10 - 13 feet",
        },
        weight: Measurement {
            metric: "200 - 600 kg",
            imperial: "440 - 1320 pounds",
        },
        image_url: "https://r2.flowith.net/files/o/1748052960881-Juvenile_Giraffe_3D_Cartoon_Image_for_Kids_index_2@1024x1024.png",
        fun_facts: &[
            "Juvenile giraffes are like teenagers, growing super fast and learning how to be proper giraffes!",
            "Young males practice play-fighting by gently bumping necks – it's like practicing for future challenges!",
            "At this stage, giraffes are learning all the best spots to find the tastiest leaves!",
        ],
    },
    StageRecord {
        id: StageId::Subadult,
        display_name: "Subadult",
        child_age_range: "4 - 5 years",
        giraffe_age_range: "4 - 5 years",
        foot_length: FootInterval::new(15.6, 19.2),
        height: Measurement {
            metric: "4 - 5 meters",
            imperial: "13 - 16.5 feet",
        },
        weight: Measurement {
            metric: "600 - 900 kg",
            imperial: "1320 - 2000 pounds",
        },
        image_url: "https://r2.flowith.net/files/o/1748052958617-Subadult_Giraffe_Cartoon_Image_index_3@1024x1024.png",
        fun_facts: &[
            "Girl giraffes are ready to have their own babies when they reach this age!",
            "Subadults are almost as tall as adults, but they still have some growing (especially getting heavier and stronger!) to do",
            "Their horns called 'ossicones' are getting stronger and more fused to their skulls!",
        ],
    },
    StageRecord {
        id: StageId::Adult,
        display_name: "Adult",
        child_age_range: "5 - 12 years",
        giraffe_age_range: "5+ years",
        foot_length: FootInterval::new(17.1, 24.8),
        height: Measurement {
            metric: "4.3 - 6 meters",
            imperial: "14 - 20 feet",
        },
        weight: Measurement {
            metric: "680 - 1360 kg",
            imperial: "1500 - 3000 pounds",
        },
        image_url: "https://r2.flowith.net/files/o/1748052994540-mature_adult_giraffe_3D_cartoon_playful_image_index_4@1024x1024.png",
        fun_facts: &[
            "Giraffes are the tallest land animals on Earth! Their height helps them see predators far away and eat leaves no other animals can reach!",
            "Their tongues are long and dark (up to 1.5 feet!) so they can grab tasty leaves, even thorny ones, high up in trees!",
            "Even though they are so tall, giraffes can run as fast as many cars, reaching speeds up to 35-37 miles per hour!",
        ],
    },
];

// =============================================================================
// TESTS
// =============================================================================
