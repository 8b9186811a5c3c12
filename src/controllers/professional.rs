use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::error::Error;
use crate::types::clinical::Professional;

#[derive(Clone, Debug, Default)]
pub(crate) struct ProfessionalController {
    professionals: Arc<RwLock<Vec<Professional>>>,
}

impl ProfessionalController {
    pub(crate) async fn create(&self, professional: Professional) -> Result<Professional, Error> {
        let mut professionals = self.professionals.write().await;

        if professionals
            .iter()
            .any(|p| p.registration == professional.registration)
        {
            return Err(Error::ProfessionalAlreadyExists);
        }

        professionals.push(professional.clone());

        Ok(professional)
    }

    pub(crate) async fn list(&self) -> Vec<Professional> {
        self.professionals.read().await.clone()
    }

    pub(crate) async fn update(
        &self,
        registration: &str,
        professional: Professional,
    ) -> Result<Professional, Error> {
        let mut professionals = self.professionals.write().await;

        let slot = professionals
            .iter_mut()
            .find(|p| p.registration == registration)
            .ok_or(Error::ProfessionalNotFound)?;

        *slot = professional.clone();

        Ok(professional)
    }

    pub(crate) async fn delete(&self, registration: &str) -> Result<(), Error> {
        let mut professionals = self.professionals.write().await;

        let index = professionals
            .iter()
            .position(|p| p.registration == registration)
            .ok_or(Error::ProfessionalNotFound)?;

        professionals.remove(index);

        Ok(())
    }
}
