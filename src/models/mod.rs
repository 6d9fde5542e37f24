// Domain models: records, formula quantities, numeric coercion

mod number;
mod quantity;
mod record;

pub use number::{NumberOrString, parse_float};
pub use quantity::{
    DURATION, EMBODIED_CARBON, EXPECTED_LIFESPAN, Quantity, RESOURCES_RESERVED,
    TOTAL_EMBODIED_EMISSIONS, TOTAL_RESOURCES, VCPUS_ALLOCATED, VCPUS_TOTAL,
};
pub use record::Record;
