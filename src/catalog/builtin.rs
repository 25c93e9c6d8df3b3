//! Built-in level, rank and milestone tables

use crate::milestones::{Milestone, Requirement};
use crate::progression::{RankEntry, ThresholdEntry};

/// Early levels are fast, later levels require grind
pub static LEVELS: &[ThresholdEntry] = &[
    ThresholdEntry::new(1, 0),
    ThresholdEntry::new(2, 150),
    ThresholdEntry::new(3, 400),
    ThresholdEntry::new(4, 800),
    ThresholdEntry::new(5, 1300),
    ThresholdEntry::new(6, 2000),
    ThresholdEntry::new(7, 2900),
    ThresholdEntry::new(8, 4000),
    ThresholdEntry::new(9, 5500),
    ThresholdEntry::new(10, 7500),
    ThresholdEntry::new(11, 10000),
    ThresholdEntry::new(15, 22000),
    ThresholdEntry::new(20, 40000),
    ThresholdEntry::new(30, 90000),
    ThresholdEntry::new(40, 160000),
    ThresholdEntry::new(50, 250000),
];

/// (min level, title, icon, color)
static RANKS: &[(u32, &str, &str, &str)] = &[
    (1, "Rookie Typist", "fa-seedling", "text-slate-500"),
    (5, "Apprentice", "fa-scroll", "text-green-500"),
    (10, "Keyboard Warrior", "fa-shield-halved", "text-blue-500"),
    (20, "Speed Demon", "fa-bolt", "text-yellow-500"),
    (30, "Cyber Ninja", "fa-user-ninja", "text-purple-500"),
    (40, "Grandmaster", "fa-crown", "text-red-500"),
    (50, "Typing God", "fa-dragon", "text-indigo-600"),
];

/// (id, name, description, icon, requirement)
static MILESTONES: &[(&str, &str, &str, &str, Requirement)] = &[
    // Rank landmarks
    ("rank-rookie", "Rookie Typist", "Begin your journey (Level 1)", "fa-seedling text-green-400", Requirement::ByLevel(1)),
    ("rank-apprentice", "Apprentice", "Reach Level 5", "fa-scroll text-amber-600", Requirement::ByLevel(5)),
    ("rank-warrior", "Keyboard Warrior", "Reach Level 10", "fa-shield-halved text-blue-500", Requirement::ByLevel(10)),
    ("rank-demon", "Speed Demon", "Reach Level 20", "fa-bolt text-yellow-500", Requirement::ByLevel(20)),
    ("rank-ninja", "Cyber Ninja", "Reach Level 30", "fa-user-ninja text-purple-600", Requirement::ByLevel(30)),
    ("rank-grandmaster", "Grandmaster", "Reach Level 40", "fa-crown text-red-500", Requirement::ByLevel(40)),
    ("rank-god", "Typing God", "Reach Level 50", "fa-dragon text-indigo-600", Requirement::ByLevel(50)),
    // Speed
    ("speed-40", "Cruising Speed", "Reach 40 WPM", "fa-gauge-simple text-blue-400", Requirement::ByBestWpm(40)),
    ("speed-60", "Rapid Typer", "Reach 60 WPM", "fa-gauge-high text-indigo-500", Requirement::ByBestWpm(60)),
    ("speed-80", "Lightning Fingers", "Reach 80 WPM", "fa-bolt text-yellow-400", Requirement::ByBestWpm(80)),
    ("speed-100", "Grandmaster Speed", "Reach 100 WPM", "fa-fire text-red-500", Requirement::ByBestWpm(100)),
    // Consistency
    ("bronze", "Novice Typist", "Complete 1 test", "fa-medal text-amber-700", Requirement::ByTestCount(1)),
    ("silver", "Dedicated Typist", "Complete 25 tests", "fa-medal text-slate-400", Requirement::ByTestCount(25)),
    ("gold", "Master Typist", "Complete 50 tests", "fa-medal text-yellow-500", Requirement::ByTestCount(50)),
    ("platinum", "Keyboard Legend", "Complete 100 tests", "fa-crown text-purple-500", Requirement::ByTestCount(100)),
];

pub fn ranks() -> Vec<RankEntry> {
    RANKS
        .iter()
        .map(|&(min_level, title, icon, color)| RankEntry::new(min_level, title, icon, color))
        .collect()
}

pub fn milestones() -> Vec<Milestone> {
    MILESTONES
        .iter()
        .map(|&(id, name, description, icon, requirement)| {
            Milestone::new(id, name, description, icon, requirement)
        })
        .collect()
}
