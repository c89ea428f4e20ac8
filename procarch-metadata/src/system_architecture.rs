use crate::types::{ArchitectureProvider, ArchitectureProviderError};

use nix::sys::utsname;
use tracing::debug;

/// Reads the `machine` field of `uname(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnameArchitecture {}

impl ArchitectureProvider for UnameArchitecture {
    fn architecture(&self) -> Result<String, ArchitectureProviderError> {
        let uname = utsname::uname().map_err(|e| {
            ArchitectureProviderError::ErrorRetrievingArchitecture(e.desc().to_string())
        })?;
        let machine = uname.machine().to_string_lossy().to_string();
        debug!("uname reported machine={}", machine);
        Ok(machine)
    }
}

/// The architecture this binary was compiled for.
#[derive(Debug, Default, Clone, Copy)]
pub struct TargetArchitecture {}

impl ArchitectureProvider for TargetArchitecture {
    fn architecture(&self) -> Result<String, ArchitectureProviderError> {
        Ok(std::env::consts::ARCH.to_string())
    }
}

/// Always reports the same value. Useful to override detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedArchitecture(pub String);

impl FixedArchitecture {
    pub fn new(architecture: impl Into<String>) -> Self {
        FixedArchitecture(architecture.into())
    }
}

impl ArchitectureProvider for FixedArchitecture {
    fn architecture(&self) -> Result<String, ArchitectureProviderError> {
        Ok(self.0.clone())
    }
}
