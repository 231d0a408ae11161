use crate::config::RunSettings;
use crate::core::parser::parse_mission;
use crate::core::report::render;
use crate::core::runner::{MissionReport, MissionRunner};
use crate::domain::ports::MissionSource;
use crate::utils::error::Result;
use std::io::Write;

/// Read, run, render. Nothing reaches `out` unless the mission as a whole
/// succeeds (collect mode counts as success).
pub struct MissionEngine<S: MissionSource> {
    source: S,
    settings: RunSettings,
}

impl<S: MissionSource> MissionEngine<S> {
    pub fn new(source: S, settings: RunSettings) -> Self {
        Self { source, settings }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<MissionReport> {
        tracing::info!("Reading mission from {}", self.source.describe());
        let input = self.source.read_mission()?;

        let mission = parse_mission(&input)?;
        tracing::info!(
            "Running {} rover(s) with policy {:?}, error mode {:?}",
            mission.plans.len(),
            self.settings.boundary_policy,
            self.settings.error_mode
        );

        let runner = MissionRunner::new(self.settings.boundary_policy, self.settings.error_mode);
        let report = runner.run(&mission)?;

        render(&report, self.settings.output_format, out)?;
        out.flush()?;

        tracing::info!(
            "Mission finished: {} rover(s), {} failure(s)",
            report.outcomes.len(),
            report.failures().count()
        );
        Ok(report)
    }
}
