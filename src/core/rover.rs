use crate::domain::model::{Command, Pose, Position};
use crate::utils::error::{Result, RoverError};

/// A single rover. Its pose changes only through the command methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    id: usize,
    pose: Pose,
}

impl Rover {
    /// `id` is the 1-based number used in diagnostics.
    pub fn new(id: usize, start: Pose) -> Self {
        Self { id, pose: start }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn rotate_left(&mut self) {
        self.pose.heading = self.pose.heading.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.pose.heading = self.pose.heading.rotate_right();
    }

    /// Cell one step ahead, or `None` if it is not representable.
    pub fn peek_move(&self) -> Option<Position> {
        let (dx, dy) = self.pose.heading.delta();
        let x = self.pose.position.x.checked_add(dx)?;
        let y = self.pose.position.y.checked_add(dy)?;
        Some(Position::new(x, y))
    }

    pub fn move_to(&mut self, position: Position) {
        self.pose.position = position;
    }

    /// Applies one command with no plateau. `instruction` is 1-based.
    pub fn execute(&mut self, command: Command, instruction: usize) -> Result<()> {
        match command {
            Command::Left => self.rotate_left(),
            Command::Right => self.rotate_right(),
            Command::Move => {
                let next = self.peek_move().ok_or(RoverError::OutOfBounds {
                    rover: self.id,
                    instruction,
                    pose: self.pose,
                })?;
                self.move_to(next);
            }
        }
        Ok(())
    }

    pub fn execute_all(&mut self, commands: &[Command]) -> Result<Pose> {
        for (index, command) in commands.iter().enumerate() {
            self.execute(*command, index + 1)?;
        }
        Ok(self.pose)
    }
}
