use crate::utils::error::{Result, RoverError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass direction a rover faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    N,
    E,
    S,
    W,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    pub fn rotate_left(self) -> Self {
        match self {
            Heading::N => Heading::W,
            Heading::W => Heading::S,
            Heading::S => Heading::E,
            Heading::E => Heading::N,
        }
    }

    pub fn rotate_right(self) -> Self {
        match self {
            Heading::N => Heading::E,
            Heading::E => Heading::S,
            Heading::S => Heading::W,
            Heading::W => Heading::N,
        }
    }

    /// Unit step `(dx, dy)`; north is `+y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::N => (0, 1),
            Heading::E => (1, 0),
            Heading::S => (0, -1),
            Heading::W => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Heading::N => 'N',
            Heading::E => 'E',
            Heading::S => 'S',
            Heading::W => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Heading {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Heading::N),
            "E" => Ok(Heading::E),
            "S" => Ok(Heading::S),
            "W" => Ok(Heading::W),
            other => Err(RoverError::parse(format!(
                "invalid heading (expected N, E, S, or W): \"{}\"",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Position plus heading: everything an observer can see of a rover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub heading: Heading,
}

impl Pose {
    pub fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    pub fn at(x: i32, y: i32, heading: Heading) -> Self {
        Self::new(Position::new(x, y), heading)
    }

    /// `(x,y,H)`, the form used in diagnostics.
    pub fn bracketed(&self) -> String {
        format!("({},{},{})", self.position.x, self.position.y, self.heading)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Move,
}

impl Command {
    pub fn as_char(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Move => 'M',
        }
    }

    /// Parses a whole instruction string such as `"LMLMM"`.
    pub fn parse_sequence(s: &str) -> Result<Vec<Command>> {
        s.chars().map(Command::try_from).collect()
    }
}

impl TryFrom<char> for Command {
    type Error = RoverError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'M' => Ok(Command::Move),
            command => Err(RoverError::InvalidCommand { command }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Rectangular grid from `(0, 0)` to `(max_x, max_y)`, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    max_x: i32,
    max_y: i32,
}

impl Plateau {
    pub fn new(max_x: i32, max_y: i32) -> Result<Self> {
        if max_x < 0 || max_y < 0 {
            return Err(RoverError::parse(format!(
                "Plateau coordinates must be non-negative: {} {}",
                max_x, max_y
            )));
        }
        Ok(Self { max_x, max_y })
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x).contains(&position.x) && (0..=self.max_y).contains(&position.y)
    }

    /// One step from `from` along `heading` on a toroidal plateau.
    pub fn wrap_step(&self, from: Position, heading: Heading) -> Position {
        let (dx, dy) = heading.delta();
        let width = i64::from(self.max_x) + 1;
        let height = i64::from(self.max_y) + 1;
        let x = (i64::from(from.x) + i64::from(dx)).rem_euclid(width);
        let y = (i64::from(from.y) + i64::from(dy)).rem_euclid(height);
        // rem_euclid keeps both inside 0..=max, which fits in i32
        Position::new(x as i32, y as i32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverPlan {
    pub start: Pose,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub plateau: Plateau,
    pub plans: Vec<RoverPlan>,
}

/// What happens when a move would leave the plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// Abort the rover with an out-of-bounds error.
    #[default]
    Strict,
    /// Skip the offending move and keep going.
    IgnoreOob,
    /// Drop the rover's remaining instructions.
    StopOnOob,
    /// Re-enter from the opposite edge.
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    #[default]
    FailFast,
    CollectErrors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
