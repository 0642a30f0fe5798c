pub mod classify;
pub mod directory;
pub mod motor_vehicle;
pub mod person;
pub mod sanitize;

pub use crate::domain::model::{DirectorySearchResponse, MotorVehicleSearchResponse, Person};
pub use crate::domain::ports::{DirectoryApi, MotorVehicleApi, PersonApi};
pub use crate::utils::error::Result;
