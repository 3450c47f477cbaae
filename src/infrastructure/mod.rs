//! Infrastructure layer
//!
//! This module contains external integrations: the YAML patch engine and
//! logging setup.

mod logging;
mod yaml_patch;

pub use logging::init_logging;
pub use yaml_patch::YamlPatchEngine;
