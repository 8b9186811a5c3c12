use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::error::Error;
use crate::types::clinical::Appointment;

/// Appointments are addressed by their position in the list.
#[derive(Clone, Debug, Default)]
pub(crate) struct AppointmentController {
    appointments: Arc<RwLock<Vec<Appointment>>>,
}

impl AppointmentController {
    pub(crate) async fn create(&self, appointment: Appointment) -> Appointment {
        self.appointments.write().await.push(appointment.clone());

        appointment
    }

    pub(crate) async fn list(&self) -> Vec<Appointment> {
        self.appointments.read().await.clone()
    }

    pub(crate) async fn update(
        &self,
        index: usize,
        appointment: Appointment,
    ) -> Result<Appointment, Error> {
        let mut appointments = self.appointments.write().await;

        let slot = appointments
            .get_mut(index)
            .ok_or(Error::AppointmentNotFound)?;

        *slot = appointment.clone();

        Ok(appointment)
    }

    pub(crate) async fn delete(&self, index: usize) -> Result<(), Error> {
        let mut appointments = self.appointments.write().await;

        if index >= appointments.len() {
            return Err(Error::AppointmentNotFound);
        }

        appointments.remove(index);

        Ok(())
    }
}
