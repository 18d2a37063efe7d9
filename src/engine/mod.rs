//! Graph analyses — spanning trees, shortest paths, and subgraph reports.

pub mod paths;
pub mod report;
pub mod spanning;

pub use paths::shortest_paths;
pub use report::report;
pub use spanning::{prim, prim_forest};
