use std::sync::Arc;
use std::time::Duration;

use crate::controllers::appointment::AppointmentController;
use crate::controllers::auth::AuthGateway;
use crate::controllers::patient::PatientController;
use crate::controllers::professional::ProfessionalController;
use crate::core::error::{ConfigError, Error};
use crate::store::credentials::CredentialStore;
use crate::types::clinical::Appointment;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) auth: AuthGateway,
    pub(crate) patients: PatientController,
    pub(crate) appointments: AppointmentController,
    pub(crate) professionals: ProfessionalController,
}

impl AppState {
    pub(crate) fn new(
        store: Arc<dyn CredentialStore>,
        secret: &str,
        token_ttl: Option<Duration>,
        bcrypt_cost: u32,
    ) -> Result<Self, ConfigError> {
        Ok(AppState {
            auth: AuthGateway::new(store, secret, token_ttl, bcrypt_cost)?,
            patients: PatientController::default(),
            appointments: AppointmentController::default(),
            professionals: ProfessionalController::default(),
        })
    }

    pub(crate) async fn schedule_appointment(
        &self,
        appointment: Appointment,
    ) -> Result<Appointment, Error> {
        if !self.patients.exists(&appointment.patient_cpf).await {
            return Err(Error::UnknownPatient);
        }

        Ok(self.appointments.create(appointment).await)
    }
}
