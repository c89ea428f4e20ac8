mod system_architecture;
mod types;

pub use system_architecture::FixedArchitecture;
pub use system_architecture::TargetArchitecture;
pub use system_architecture::UnameArchitecture;

pub use types::ArchitectureProvider;
pub use types::ArchitectureProviderError;
