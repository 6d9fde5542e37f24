// Logical inputs of the SCI-M formula and the record keys they may be read from.

/// Record key of the derived value.
pub const EMBODIED_CARBON: &str = "embodied-carbon";

pub const TOTAL_EMBODIED_EMISSIONS: &str = "total-embodied-emissions";
pub const DURATION: &str = "duration";
pub const EXPECTED_LIFESPAN: &str = "expected-lifespan";
pub const RESOURCES_RESERVED: &str = "resources-reserved";
pub const VCPUS_ALLOCATED: &str = "vcpus-allocated";
pub const TOTAL_RESOURCES: &str = "total-resources";
pub const VCPUS_TOTAL: &str = "vcpus-total";

/// One logical quantity of `M = TE * (TiR / EL) * (RR / ToR)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// TE, gCO2e.
    TotalEmbodiedEmissions,
    /// TiR, seconds.
    Duration,
    /// EL, seconds.
    ExpectedLifespan,
    /// RR, count.
    ResourcesReserved,
    /// ToR, count.
    TotalResources,
}

impl Quantity {
    /// Order in which presence is checked; the first failure is the one reported.
    pub const PRESENCE_ORDER: [Quantity; 5] = [
        Quantity::TotalEmbodiedEmissions,
        Quantity::ExpectedLifespan,
        Quantity::Duration,
        Quantity::ResourcesReserved,
        Quantity::TotalResources,
    ];

    /// Keys that satisfy the presence check (any one is enough).
    pub fn accepted_keys(self) -> &'static [&'static str] {
        match self {
            Quantity::TotalEmbodiedEmissions => &[TOTAL_EMBODIED_EMISSIONS],
            Quantity::Duration => &[DURATION],
            Quantity::ExpectedLifespan => &[EXPECTED_LIFESPAN],
            Quantity::ResourcesReserved => &[RESOURCES_RESERVED, VCPUS_ALLOCATED],
            Quantity::TotalResources => &[TOTAL_RESOURCES, VCPUS_TOTAL],
        }
    }

    /// Keys the value is read from, highest priority first.
    ///
    /// ToR falls back to `resources-reserved`, not `total-resources`. Existing pipelines
    /// depend on that result, so it stays until a behavioral fix is signed off.
    pub fn value_keys(self) -> &'static [&'static str] {
        match self {
            Quantity::TotalEmbodiedEmissions => &[TOTAL_EMBODIED_EMISSIONS],
            Quantity::Duration => &[DURATION],
            Quantity::ExpectedLifespan => &[EXPECTED_LIFESPAN],
            Quantity::ResourcesReserved => &[VCPUS_ALLOCATED, RESOURCES_RESERVED],
            Quantity::TotalResources => &[VCPUS_TOTAL, RESOURCES_RESERVED],
        }
    }

    /// Alias pairs only accept numbers or strings and default to 0.0 when none match.
    /// Single-spelling quantities coerce whatever is present.
    pub fn is_aliased(self) -> bool {
        matches!(
            self,
            Quantity::ResourcesReserved | Quantity::TotalResources
        )
    }

    /// Key named in the missing-field message.
    pub fn reported_key(self) -> &'static str {
        self.accepted_keys()[0]
    }

    /// Unit hint named in the missing-field message.
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::TotalEmbodiedEmissions => "in 'gCO2e'",
            Quantity::Duration | Quantity::ExpectedLifespan => "in 'seconds'",
            Quantity::ResourcesReserved | Quantity::TotalResources => "as a 'count'",
        }
    }
}
