pub mod chi2;
pub mod js;
pub mod ks;
pub mod psi;

pub use chi2::{chi_square_test, Chi2TestResult};
pub use js::{jensen_shannon_distance, DEFAULT_JS_BINS};
pub use ks::{ks_two_sample, KsTestResult};
pub use psi::{population_stability_index, DEFAULT_PSI_BINS};
