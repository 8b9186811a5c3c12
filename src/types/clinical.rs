use serde::{Deserialize, Serialize};

pub(crate) type Cpf = String;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Patient {
    pub(crate) name: String,
    /// yyyy-mm-dd
    pub(crate) birth_date: String,
    pub(crate) cpf: Cpf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Appointment {
    pub(crate) patient_cpf: Cpf,
    pub(crate) date_time: String,
    pub(crate) professional: String,
    #[serde(default = "default_status")]
    pub(crate) status: String,
}

fn default_status() -> String {
    "scheduled".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Professional {
    pub(crate) name: String,
    pub(crate) function: String,
    pub(crate) registration: String,
}
