pub mod awards;
pub mod system;
