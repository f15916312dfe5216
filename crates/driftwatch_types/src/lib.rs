pub mod dataset;
pub mod error;
pub mod report;
pub mod util;

pub use dataset::*;
pub use report::*;
pub use util::*;
