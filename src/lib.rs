pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{source::InputSource, toml_config::TomlConfig, RunSettings};
pub use crate::core::{
    engine::MissionEngine,
    parser::parse_mission,
    rover::Rover,
    runner::{MissionReport, MissionRunner, RoverOutcome},
};
pub use crate::domain::model::{
    BoundaryPolicy, Command, ErrorMode, Heading, Mission, OutputFormat, Plateau, Pose, Position,
    RoverPlan,
};
pub use crate::utils::error::{Result, RoverError};
