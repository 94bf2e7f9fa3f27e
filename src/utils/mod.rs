//! Internal helpers shared by the cipher engines.

pub(crate) mod grid;
