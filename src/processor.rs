use std::fmt::{Display, Formatter};

mod key;

pub use key::Key;

/// Word size of a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Bit32,
    Bit64,
    Unknown,
}

impl Arch {
    pub fn label(&self) -> &'static str {
        match self {
            Arch::Bit32 => "32-bit",
            Arch::Bit64 => "64-bit",
            Arch::Unknown => "Unknown",
        }
    }
}

impl Display for Arch {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Instruction set family of a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Family {
    X86,
    Ia64,
    Ppc,
    Unknown,
}

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::X86 => "x86",
            Family::Ia64 => "IA-64",
            Family::Ppc => "PPC",
            Family::Unknown => "Unknown",
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bitness and family of a processor architecture. Many architecture
/// identifiers describe the same processor, e.g. `amd64` and `x86_64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Processor {
    arch: Arch,
    family: Family,
}

impl Processor {
    pub const fn new(arch: Arch, family: Family) -> Self {
        Processor { arch, family }
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn is_32_bit(&self) -> bool {
        self.arch == Arch::Bit32
    }

    pub fn is_64_bit(&self) -> bool {
        self.arch == Arch::Bit64
    }

    pub fn is_x86(&self) -> bool {
        self.family == Family::X86
    }

    pub fn is_ia64(&self) -> bool {
        self.family == Family::Ia64
    }

    pub fn is_ppc(&self) -> bool {
        self.family == Family::Ppc
    }
}

impl Display for Processor {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Processor::new(Arch::Bit32, Family::X86), "x86 32-bit")]
    #[case(Processor::new(Arch::Bit64, Family::X86), "x86 64-bit")]
    #[case(Processor::new(Arch::Bit64, Family::Ia64), "IA-64 64-bit")]
    #[case(Processor::new(Arch::Bit32, Family::Ppc), "PPC 32-bit")]
    #[case(Processor::new(Arch::Unknown, Family::Unknown), "Unknown Unknown")]
    fn test_display(#[case] processor: Processor, #[case] expected: &str) {
        assert_eq!(processor.to_string(), expected);
    }

    #[test]
    fn test_predicates() {
        let processor = Processor::new(Arch::Bit64, Family::Ppc);
        assert!(processor.is_64_bit());
        assert!(!processor.is_32_bit());
        assert!(processor.is_ppc());
        assert!(!processor.is_x86());
        assert!(!processor.is_ia64());

        let unknown = Processor::new(Arch::Unknown, Family::Unknown);
        assert!(!unknown.is_32_bit());
        assert!(!unknown.is_64_bit());
        assert!(!unknown.is_x86());
        assert!(!unknown.is_ia64());
        assert!(!unknown.is_ppc());
    }
}
