//! The five fixed assessment dimensions and their tier names.
//!
//! Order is significant twice over: the position of a dimension in
//! [`dimensions`] fixes its angular position around the chart (clockwise from
//! the top), and the position of a level name within a dimension fixes its
//! radial position (index 0 sits on ring 1, index 4 on ring 5).

/// Number of assessment dimensions (axes around the chart).
pub const DIMENSION_COUNT: usize = 5;

/// Number of tiers per dimension; also the radius of the outermost tier ring.
pub const MAX_LEVELS: usize = 5;

/// One competency axis: a name plus its ordered tier names.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub name: &'static str,
    pub levels: [&'static str; MAX_LEVELS],
}

static DIMENSIONS: [Dimension; DIMENSION_COUNT] = [
    Dimension {
        name: "Technology",
        levels: ["Adopts", "Specializes", "Evangelizes", "Masters", "Creates"],
    },
    Dimension {
        name: "System",
        levels: ["Enhances", "Designs", "Owns", "Evolves", "Leads"],
    },
    Dimension {
        name: "People",
        levels: ["Learns", "Supports", "Mentors", "Coordinates", "Manages"],
    },
    Dimension {
        name: "Process",
        levels: ["Follows", "Enforces", "Challenges", "Adjusts", "Defines"],
    },
    Dimension {
        name: "Influence",
        levels: ["Subsystem", "Team", "Multiple Teams", "Company", "Community"],
    },
];

/// The dimensions in fixed iteration order.
pub fn dimensions() -> &'static [Dimension; DIMENSION_COUNT] {
    &DIMENSIONS
}
