pub mod engine;
pub mod parser;
pub mod report;
pub mod rover;
pub mod runner;

pub use crate::domain::model::{Command, Heading, Mission, Plateau, Pose, Position, RoverPlan};
pub use crate::domain::ports::{ConfigProvider, MissionSource};
pub use crate::utils::error::Result;
