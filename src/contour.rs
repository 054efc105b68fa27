pub mod boundary;
pub mod rank;
pub mod simplify;
pub mod smooth;
