use crate::nav::MatchCriterion;
use crate::state::Requirement;

/// Unit step direction in screen coordinates (`y` grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// `h` `j` `k` `l`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'h' => Some(CardinalDirection::West),
            'j' => Some(CardinalDirection::South),
            'k' => Some(CardinalDirection::North),
            'l' => Some(CardinalDirection::East),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            CardinalDirection::West => 'h',
            CardinalDirection::South => 'j',
            CardinalDirection::North => 'k',
            CardinalDirection::East => 'l',
        }
    }
}

/// Row or column extreme reached by `0`, `$`, `H` and `L`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Direction of travel toward the edge.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Edge::Left => (-1, 0),
            Edge::Right => (1, 0),
            Edge::Top => (0, -1),
            Edge::Bottom => (0, 1),
        }
    }

    pub fn key(self) -> char {
        match self {
            Edge::Left => '0',
            Edge::Right => '$',
            Edge::Top => 'H',
            Edge::Bottom => 'L',
        }
    }
}

/// Where a find lands relative to the matched cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FindMode {
    /// Stop next to the match (`t`, `w`).
    Undershoot,
    /// Land on the match, or just past it when it is occupied (`f`, `e`).
    Overshoot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FindSpec {
    /// `t`, `f`, `w` or `e`.
    pub key: char,
    pub criterion: MatchCriterion,
}

impl FindSpec {
    /// Builds a find from its mode letter; `target` is required for `t`/`f`.
    pub fn new(key: char, target: Option<char>) -> Option<Self> {
        let criterion = match (key, target) {
            ('t' | 'f', Some(target)) => MatchCriterion::Glyph(target),
            ('w' | 'e', None) => MatchCriterion::Alphabetic,
            _ => return None,
        };
        Some(Self { key, criterion })
    }

    pub fn mode(&self) -> FindMode {
        match self.key {
            't' | 'w' => FindMode::Undershoot,
            _ => FindMode::Overshoot,
        }
    }

    /// `t` and `w` skip matches right next to the actor.
    pub fn exclude_adjacent(&self) -> bool {
        matches!(self.key, 't' | 'w')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    Step(CardinalDirection),
    Edge(Edge),
    Center,
    Find(FindSpec),
    /// `;`, replaced by the remembered find before resolution.
    RepeatFind,
    /// `` `<r> `` or `'<r>`.
    Mark { key: char, name: char },
}

impl Motion {
    /// The key that selects this motion (mode letter for two-key motions).
    pub fn key(&self) -> char {
        match self {
            Motion::Step(direction) => direction.key(),
            Motion::Edge(edge) => edge.key(),
            Motion::Center => 'M',
            Motion::Find(find) => find.key,
            Motion::RepeatFind => ';',
            Motion::Mark { key, .. } => *key,
        }
    }
}

/// A parsed movement: motion plus optional repeat count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementSpec {
    pub count: Option<u32>,
    pub motion: Motion,
}

impl MovementSpec {
    pub fn new(motion: Motion) -> Self {
        Self {
            count: None,
            motion,
        }
    }

    pub fn with_count(mut self, count: Option<u32>) -> Self {
        self.count = count;
        self
    }

    /// Requirement tokens of the movement alone.
    ///
    /// Two-key motions contribute only their mode letter; the target glyph
    /// or mark name is not a requirement.
    pub fn requirements(&self) -> Vec<Requirement> {
        vec![Requirement::from(self.motion.key())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_directions_grow_downward() {
        assert_eq!(CardinalDirection::from_key('j').map(CardinalDirection::delta), Some((0, 1)));
        assert_eq!(CardinalDirection::from_key('k').map(CardinalDirection::delta), Some((0, -1)));
        assert_eq!(CardinalDirection::from_key('x'), None);
    }

    #[test]
    fn find_requirements_exclude_target_glyph() {
        let find = FindSpec::new('f', Some('g')).expect("f takes a target");
        let spec = MovementSpec::new(Motion::Find(find)).with_count(Some(2));
        assert_eq!(spec.requirements(), vec![Requirement::from("f")]);
        assert_eq!(find.mode(), FindMode::Overshoot);
        assert!(!find.exclude_adjacent());
    }

    #[test]
    fn word_motions_search_letters() {
        let find = FindSpec::new('w', None).expect("w has no target");
        assert_eq!(find.criterion, MatchCriterion::Alphabetic);
        assert_eq!(find.mode(), FindMode::Undershoot);
        assert!(find.exclude_adjacent());
        assert_eq!(FindSpec::new('t', None), None);
    }
}
