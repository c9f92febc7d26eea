//! Free helper functions shared by the scheduler, grouped by what they operate on.

pub mod container;
pub mod diagnostic;
pub mod numeric;
pub mod string;
