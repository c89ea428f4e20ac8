use std::collections::HashMap;

use lazy_static::lazy_static;
use procarch_metadata::{ArchitectureProvider, TargetArchitecture};
use thiserror::Error;
use tracing::{debug, warn};

use crate::processor::{Arch, Family, Key, Processor};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Key {0} already exists in processor map")]
    DuplicateKey(String),
}

/// Known architecture identifiers grouped by the processor they describe.
const KNOWN_PROCESSORS: &[(Processor, &[Key])] = &[
    (
        Processor::new(Arch::Bit32, Family::X86),
        &[
            Key::X86,
            Key::I386,
            Key::I486,
            Key::I586,
            Key::I686,
            Key::Pentium,
        ],
    ),
    (
        Processor::new(Arch::Bit64, Family::X86),
        &[Key::X86_64, Key::Amd64, Key::Em64t, Key::Universal],
    ),
    (
        Processor::new(Arch::Bit32, Family::Ia64),
        &[Key::Ia64_32, Key::Ia64N],
    ),
    (
        Processor::new(Arch::Bit64, Family::Ia64),
        &[Key::Ia64, Key::Ia64W],
    ),
    (
        Processor::new(Arch::Bit32, Family::Ppc),
        &[
            Key::Ppc,
            Key::Power,
            Key::PowerPc,
            Key::Power_Pc,
            Key::PowerRs,
        ],
    ),
    (
        Processor::new(Arch::Bit64, Family::Ppc),
        &[
            Key::Ppc64,
            Key::Power64,
            Key::PowerPc64,
            Key::Power_Pc64,
            Key::PowerRs64,
        ],
    ),
];

lazy_static! {
    static ref ARCHITECTURE_REGISTRY: ArchitectureRegistry = ArchitectureRegistry::new();
}

/// Maps architecture identifiers, such as `std::env::consts::ARCH` or the
/// output of `uname -m`, to the processor they describe.
///
/// Lookups are exact: keys are stored lowercase and the input is not
/// normalized, so `"X86"` is not found while `"x86"` is.
#[derive(Debug)]
pub struct ArchitectureRegistry {
    processors: HashMap<String, Processor>,
}

impl Default for ArchitectureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchitectureRegistry {
    /// Builds the registry from the known identifiers.
    ///
    /// Panics if an identifier is listed more than once, as the resulting
    /// registry would silently map it to the wrong processor.
    pub fn new() -> Self {
        Self::from_table(KNOWN_PROCESSORS)
    }

    fn from_table(table: &[(Processor, &[Key])]) -> Self {
        let mut registry = ArchitectureRegistry {
            processors: HashMap::new(),
        };

        for (processor, keys) in table {
            if let Err(err) = registry.add_processors(*processor, keys) {
                panic!("invalid architecture table: {}", err);
            }
        }

        debug!(
            "architecture registry initialised with {} keys",
            registry.len()
        );
        registry
    }

    fn add_processors(&mut self, processor: Processor, keys: &[Key]) -> Result<(), RegistryError> {
        for key in keys {
            self.add_processor(key.to_lowercase(), processor)?;
        }
        Ok(())
    }

    /// Inserts `key`. Existing entries are never overwritten.
    fn add_processor(&mut self, key: String, processor: Processor) -> Result<(), RegistryError> {
        if self.processors.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }
        self.processors.insert(key, processor);
        Ok(())
    }

    /// Returns the processor registered under exactly `key`.
    pub fn processor(&self, key: &str) -> Option<Processor> {
        self.processors.get(key).copied()
    }

    /// Looks up the architecture reported by `provider`. A provider that fails
    /// is treated like an unknown architecture.
    pub fn current_processor(&self, provider: &dyn ArchitectureProvider) -> Option<Processor> {
        let architecture = match provider.architecture() {
            Ok(architecture) => architecture,
            Err(err) => {
                warn!("Failed to detect current architecture, error = {}", err);
                return None;
            }
        };

        let processor = self.processor(&architecture);
        if processor.is_none() {
            debug!("unknown architecture {:?}", architecture);
        }
        processor
    }

    /// All registered keys and their processor, sorted by key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Processor)> {
        let mut entries: Vec<(&str, Processor)> = self
            .processors
            .iter()
            .map(|(key, processor)| (key.as_str(), *processor))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries.into_iter()
    }

    /// All registered keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|(key, _)| key)
    }

    /// Sorted keys that map to `processor`.
    pub fn aliases(&self, processor: Processor) -> Vec<&str> {
        self.entries()
            .filter(|(_, candidate)| *candidate == processor)
            .map(|(key, _)| key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

/// The process-wide registry, built on first use.
pub fn registry() -> &'static ArchitectureRegistry {
    &ARCHITECTURE_REGISTRY
}

/// Returns the processor registered under exactly `key`.
pub fn processor(key: &str) -> Option<Processor> {
    registry().processor(key)
}

/// Returns the processor the running process executes as, i.e. the
/// architecture this binary was compiled for. A 32-bit build running on a
/// 64-bit kernel reports 32-bit.
pub fn current_processor() -> Option<Processor> {
    registry().current_processor(&TargetArchitecture {})
}
