use serde::Deserialize;

use crate::dtos::lenient_string;

#[derive(Debug, Default, Deserialize)]
pub struct SignupIn {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}
