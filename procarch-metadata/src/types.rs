use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchitectureProviderError {
    #[error("Failed to retrieve the processor architecture, error={0}")]
    ErrorRetrievingArchitecture(String),
}

pub trait ArchitectureProvider {
    /// Return the architecture identifier the environment reports for the running process,
    /// e.g. `x86_64` or `ppc64`. The value is passed through as reported, without any
    /// normalization.
    fn architecture(&self) -> Result<String, ArchitectureProviderError>;
}
