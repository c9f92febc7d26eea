//! Property-based tests for the scheduling utilities.

mod container_props;
mod numeric_props;
