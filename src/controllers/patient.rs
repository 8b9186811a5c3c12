use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::error::Error;
use crate::types::clinical::Patient;

#[derive(Clone, Debug, Default)]
pub(crate) struct PatientController {
    patients: Arc<RwLock<Vec<Patient>>>,
}

impl PatientController {
    pub(crate) async fn create(&self, patient: Patient) -> Result<Patient, Error> {
        let mut patients = self.patients.write().await;

        if patients.iter().any(|p| p.cpf == patient.cpf) {
            return Err(Error::PatientAlreadyExists);
        }

        patients.push(patient.clone());

        Ok(patient)
    }

    pub(crate) async fn list(&self) -> Vec<Patient> {
        self.patients.read().await.clone()
    }

    pub(crate) async fn exists(&self, cpf: &str) -> bool {
        self.patients.read().await.iter().any(|p| p.cpf == cpf)
    }

    pub(crate) async fn update(&self, cpf: &str, patient: Patient) -> Result<Patient, Error> {
        let mut patients = self.patients.write().await;

        let slot = patients
            .iter_mut()
            .find(|p| p.cpf == cpf)
            .ok_or(Error::PatientNotFound)?;

        *slot = patient.clone();

        Ok(patient)
    }

    pub(crate) async fn delete(&self, cpf: &str) -> Result<(), Error> {
        let mut patients = self.patients.write().await;

        let index = patients
            .iter()
            .position(|p| p.cpf == cpf)
            .ok_or(Error::PatientNotFound)?;

        patients.remove(index);

        Ok(())
    }
}
