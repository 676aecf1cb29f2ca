//! Flow verification and reference solutions

pub mod correctness;

pub use self::correctness::{
    check_admissibility, check_conservation, check_feasibility, reference_max_flow, verify_min_cut,
    VerificationError,
};
