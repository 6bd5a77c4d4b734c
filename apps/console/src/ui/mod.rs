pub mod judgement;
pub mod pricing;
pub mod status;
pub mod summary;
pub mod technical;
pub mod workflow;
