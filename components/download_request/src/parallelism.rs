// components/download_request/src/parallelism.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of concurrent fetch workers the retrieval engine is instructed
/// to use for multi-item content.
///
/// The value is always kept inside `1..=MAX`. Out-of-range input is
/// clamped silently: the ceiling is a resource-usage safety cap, not a
/// user mistake, so it produces no error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parallelism(u32);

impl Parallelism {
    /// Worker count used when the caller supplies nothing usable.
    pub const DEFAULT: Parallelism = Parallelism(4);

    /// Ceiling on concurrent workers.
    pub const MAX: u32 = 16;

    /// Clamp an explicit worker count into the valid range.
    pub fn new(workers: u32) -> Self {
        Parallelism(workers.clamp(1, Self::MAX))
    }

    /// Lenient parse for interactive input: empty or non-numeric answers
    /// fall back to the default, numeric answers are clamped.
    pub fn from_input(input: &str) -> Self {
        match input.trim().parse::<u32>() {
            Ok(n) => Parallelism::new(n),
            Err(_) => Parallelism::DEFAULT,
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Parallelism::DEFAULT
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Parallelism {
    fn from(workers: u32) -> Self {
        Parallelism::new(workers)
    }
}
