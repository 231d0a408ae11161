use crate::core::rover::Rover;
use crate::domain::model::{BoundaryPolicy, Command, ErrorMode, Mission, Plateau, Pose, RoverPlan};
use crate::utils::error::{Result, RoverError};

/// Result of driving one rover through its plan.
#[derive(Debug)]
pub struct RoverOutcome {
    /// 1-based rover number.
    pub rover: usize,
    pub result: Result<Pose>,
    pub skipped_moves: usize,
    pub wrapped_moves: usize,
    /// Set when a stop-on-oob rover dropped its remaining instructions.
    pub halted: bool,
}

impl RoverOutcome {
    pub fn pose(&self) -> Option<Pose> {
        self.result.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&RoverError> {
        self.result.as_ref().err()
    }
}

#[derive(Debug, Default)]
pub struct MissionReport {
    pub outcomes: Vec<RoverOutcome>,
}

impl MissionReport {
    pub fn final_poses(&self) -> Vec<Pose> {
        self.outcomes.iter().filter_map(RoverOutcome::pose).collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RoverError> {
        self.outcomes.iter().filter_map(RoverOutcome::error)
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Executes mission plans in order. Holds no state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionRunner {
    policy: BoundaryPolicy,
    error_mode: ErrorMode,
}

impl MissionRunner {
    pub fn new(policy: BoundaryPolicy, error_mode: ErrorMode) -> Self {
        Self { policy, error_mode }
    }

    /// Runs every plan. In fail-fast mode the first rover error is returned
    /// as-is; in collect mode it is kept in that rover's outcome.
    pub fn run(&self, mission: &Mission) -> Result<MissionReport> {
        let mut report = MissionReport::default();

        for (index, plan) in mission.plans.iter().enumerate() {
            let outcome = self.run_plan(&mission.plateau, index + 1, plan);

            match outcome.result {
                Ok(pose) => {
                    tracing::debug!(
                        "Rover #{} finished at {} (skipped: {}, wrapped: {}, halted: {})",
                        outcome.rover,
                        pose,
                        outcome.skipped_moves,
                        outcome.wrapped_moves,
                        outcome.halted
                    );
                }
                Err(ref e) if self.error_mode == ErrorMode::CollectErrors => {
                    tracing::debug!("Rover #{} failed: {}", outcome.rover, e);
                }
                Err(e) => return Err(e),
            }

            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    pub fn run_plan(&self, plateau: &Plateau, rover_id: usize, plan: &RoverPlan) -> RoverOutcome {
        let mut rover = Rover::new(rover_id, plan.start);
        let mut outcome = RoverOutcome {
            rover: rover_id,
            result: Ok(plan.start),
            skipped_moves: 0,
            wrapped_moves: 0,
            halted: false,
        };

        for (index, command) in plan.commands.iter().enumerate() {
            match command {
                Command::Left => rover.rotate_left(),
                Command::Right => rover.rotate_right(),
                Command::Move => {
                    if let Some(next) = rover.peek_move().filter(|p| plateau.contains(*p)) {
                        rover.move_to(next);
                        continue;
                    }

                    match self.policy {
                        BoundaryPolicy::Strict => {
                            outcome.result = Err(RoverError::OutOfBounds {
                                rover: rover_id,
                                instruction: index + 1,
                                pose: rover.pose(),
                            });
                            return outcome;
                        }
                        BoundaryPolicy::IgnoreOob => {
                            tracing::trace!(
                                "Rover #{} skipping move {} at {}",
                                rover_id,
                                index + 1,
                                rover.pose()
                            );
                            outcome.skipped_moves += 1;
                        }
                        BoundaryPolicy::StopOnOob => {
                            outcome.halted = true;
                            break;
                        }
                        BoundaryPolicy::Wrap => {
                            let pose = rover.pose();
                            rover.move_to(plateau.wrap_step(pose.position, pose.heading));
                            outcome.wrapped_moves += 1;
                        }
                    }
                }
            }
        }

        outcome.result = Ok(rover.pose());
        outcome
    }
}
