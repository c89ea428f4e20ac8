pub mod processor;
pub mod registry;

pub use processor::{Arch, Family, Key, Processor};
pub use registry::{current_processor, processor, registry, ArchitectureRegistry, RegistryError};
