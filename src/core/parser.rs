//! Line-oriented mission format.
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! ```
//!
//! The first non-blank line is the plateau's upper-right corner; after it come
//! pairs of start-pose and instruction lines, one pair per rover. Blank lines
//! are ignored anywhere.

use crate::domain::model::{Command, Heading, Mission, Plateau, Pose, Position, RoverPlan};
use crate::utils::error::{Result, RoverError};
use std::str::FromStr;

pub fn parse_mission(input: &str) -> Result<Mission> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (plateau_line, rover_lines) = lines
        .split_first()
        .ok_or_else(|| RoverError::parse("Input cannot be empty"))?;

    let plateau = parse_plateau(plateau_line)?;
    let plans = parse_rover_plans(rover_lines, &plateau)?;

    tracing::debug!(
        "Parsed mission: plateau {}x{}, {} rover(s)",
        plateau.max_x(),
        plateau.max_y(),
        plans.len()
    );

    Ok(Mission { plateau, plans })
}

impl FromStr for Mission {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self> {
        parse_mission(s)
    }
}

fn parse_plateau(line: &str) -> Result<Plateau> {
    let invalid = || RoverError::parse(format!("Plateau line invalid (expected \"X Y\"): \"{}\"", line));

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = parts.as_slice() else {
        return Err(invalid());
    };
    let max_x: i32 = x.parse().map_err(|_| invalid())?;
    let max_y: i32 = y.parse().map_err(|_| invalid())?;

    Plateau::new(max_x, max_y)
}

fn parse_rover_plans(lines: &[&str], plateau: &Plateau) -> Result<Vec<RoverPlan>> {
    if lines.len() % 2 != 0 {
        return Err(RoverError::parse(
            "Rover specifications must come in pairs (position line + instructions line)",
        ));
    }

    lines
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| {
            let rover = index + 1;
            let start = parse_start_pose(pair[0], rover)?;
            let commands = parse_instructions(pair[1], rover)?;

            if !plateau.contains(start.position) {
                return Err(RoverError::parse(format!(
                    "Rover #{} start out of bounds: ({},{}) > plateau ({},{})",
                    rover,
                    start.position.x,
                    start.position.y,
                    plateau.max_x(),
                    plateau.max_y()
                )));
            }

            Ok(RoverPlan { start, commands })
        })
        .collect()
}

fn parse_start_pose(line: &str, rover: usize) -> Result<Pose> {
    let invalid = || {
        RoverError::parse(format!(
            "Rover #{} position invalid (expected \"X Y HEADING\"): \"{}\"",
            rover, line
        ))
    };

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = parts.as_slice() else {
        return Err(invalid());
    };
    let x: i32 = x.parse().map_err(|_| invalid())?;
    let y: i32 = y.parse().map_err(|_| invalid())?;
    let heading: Heading = heading.parse().map_err(|_| {
        RoverError::parse(format!(
            "Rover #{} invalid heading (expected N, E, S, or W): \"{}\"",
            rover, heading
        ))
    })?;

    Ok(Pose::new(Position::new(x, y), heading))
}

fn parse_instructions(line: &str, rover: usize) -> Result<Vec<Command>> {
    Command::parse_sequence(line).map_err(|_| RoverError::InvalidInstructions {
        rover,
        instructions: line.to_string(),
    })
}
