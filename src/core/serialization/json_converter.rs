// src/core/serialization/json_converter.rs

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::core::coefficient::Coefficient;
use crate::core::serialization::types::SerializablePolynomial;
use crate::errors::Result;
use crate::polynomial::polynomial::Polynomial;

impl<C: Coefficient> Serialize for Polynomial<C> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerializablePolynomial::from(self).serialize(serializer)
    }
}

impl<'de, C: Coefficient> Deserialize<'de> for Polynomial<C> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = SerializablePolynomial::deserialize(deserializer)?;
        Polynomial::try_from(raw).map_err(de::Error::custom)
    }
}

pub fn to_json<C: Coefficient>(poly: &Polynomial<C>) -> Result<String> {
    Ok(serde_json::to_string(poly)?)
}

pub fn from_json<C: Coefficient>(json: &str) -> Result<Polynomial<C>> {
    Ok(serde_json::from_str(json)?)
}
