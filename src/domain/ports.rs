use crate::domain::model::{BoundaryPolicy, ErrorMode, OutputFormat};
use crate::utils::error::Result;

/// Where mission text comes from.
pub trait MissionSource {
    fn read_mission(&self) -> Result<String>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// A configuration layer. `None` means "not set here, ask the next layer".
pub trait ConfigProvider {
    fn boundary_policy(&self) -> Option<BoundaryPolicy>;
    fn error_mode(&self) -> Option<ErrorMode>;
    fn output_format(&self) -> Option<OutputFormat>;
}
