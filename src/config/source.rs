use crate::domain::ports::MissionSource;
use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => InputSource::File(p.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }
}

impl MissionSource for InputSource {
    fn read_mission(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut input = String::new();
                std::io::stdin().lock().read_to_string(&mut input)?;
                Ok(input)
            }
            InputSource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }

    fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}
