//! Typed SVM configuration: kernels, formulation variants, solver parameters

pub mod kernel;
pub mod params;

pub use self::kernel::{KernelConfig, KernelType};
pub use self::params::{ModelParameters, SolverParams, SvmType};
