/// Architecture identifiers known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    X86,
    X86_64,
    Ia64,
    Ia64W,
    Ia64_32,
    Ia64N,
    Ppc,
    Power,
    PowerPc,
    #[allow(non_camel_case_types)]
    Power_Pc,
    PowerRs,
    Ppc64,
    Power64,
    PowerPc64,
    #[allow(non_camel_case_types)]
    Power_Pc64,
    PowerRs64,
    I386,
    I486,
    I586,
    I686,
    Pentium,
    Amd64,
    Em64t,
    Universal,
}

impl Key {
    pub const ALL: [Key; 24] = [
        Key::X86,
        Key::X86_64,
        Key::Ia64,
        Key::Ia64W,
        Key::Ia64_32,
        Key::Ia64N,
        Key::Ppc,
        Key::Power,
        Key::PowerPc,
        Key::Power_Pc,
        Key::PowerRs,
        Key::Ppc64,
        Key::Power64,
        Key::PowerPc64,
        Key::Power_Pc64,
        Key::PowerRs64,
        Key::I386,
        Key::I486,
        Key::I586,
        Key::I686,
        Key::Pentium,
        Key::Amd64,
        Key::Em64t,
        Key::Universal,
    ];

    /// Canonical token. The registry stores its lowercase form.
    pub fn name(&self) -> &'static str {
        match self {
            Key::X86 => "X86",
            Key::X86_64 => "X86_64",
            Key::Ia64 => "IA64",
            Key::Ia64W => "IA64W",
            Key::Ia64_32 => "IA64_32",
            Key::Ia64N => "IA64N",
            Key::Ppc => "PPC",
            Key::Power => "POWER",
            Key::PowerPc => "POWERPC",
            Key::Power_Pc => "POWER_PC",
            Key::PowerRs => "POWER_RS",
            Key::Ppc64 => "PPC64",
            Key::Power64 => "POWER64",
            Key::PowerPc64 => "POWERPC64",
            Key::Power_Pc64 => "POWER_PC64",
            Key::PowerRs64 => "POWER_RS64",
            Key::I386 => "I386",
            Key::I486 => "I486",
            Key::I586 => "I586",
            Key::I686 => "I686",
            Key::Pentium => "PENTIUM",
            Key::Amd64 => "AMD64",
            Key::Em64t => "EM64T",
            Key::Universal => "UNIVERSAL",
        }
    }

    pub fn to_lowercase(&self) -> String {
        self.name().to_lowercase()
    }
}
