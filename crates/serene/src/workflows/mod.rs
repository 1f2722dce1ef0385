pub mod assessment;
pub mod wellness;
