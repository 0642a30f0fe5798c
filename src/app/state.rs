use crate::adapters::BisnodeClient;
use crate::core::directory::DirectoryService;
use crate::core::motor_vehicle::MotorVehicleService;
use crate::core::person::PersonService;
use crate::domain::ports::{DirectoryApi, MotorVehicleApi, PersonApi};
use std::sync::Arc;

/// Services shared by every request handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub directory: DirectoryService,
    pub motor_vehicles: MotorVehicleService,
    pub persons: PersonService,
}

impl AppState {
    pub fn new(
        directory: Arc<dyn DirectoryApi>,
        motor_vehicles: Arc<dyn MotorVehicleApi>,
        persons: Arc<dyn PersonApi>,
    ) -> Self {
        Self {
            directory: DirectoryService::new(directory),
            motor_vehicles: MotorVehicleService::new(motor_vehicles),
            persons: PersonService::new(persons),
        }
    }

    /// Wires every service to one shared upstream client.
    pub fn from_client(client: BisnodeClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client.clone(), client)
    }
}
