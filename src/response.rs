//! Response envelope helpers.
//!
//! Every response body is `{"Lista de Carro": <payload>, "mensagem": <message>}`. The payload
//! is a single car object, an array of cars, or `{}` on errors; `mensagem` is omitted when
//! there is no message.

use axum::{http::StatusCode, Json};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const PAYLOAD_KEY: &str = "Lista de Carro";
pub const MESSAGE_KEY: &str = "mensagem";

#[derive(Debug)]
pub struct Envelope<T> {
    pub data: T,
    pub message: Option<&'static str>,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + usize::from(self.message.is_some())))?;
        map.serialize_entry(PAYLOAD_KEY, &self.data)?;
        if let Some(message) = self.message {
            map.serialize_entry(MESSAGE_KEY, message)?;
        }
        map.end()
    }
}

pub fn envelope<T: Serialize>(
    status: StatusCode,
    data: T,
    message: Option<&'static str>,
) -> (StatusCode, Json<Envelope<T>>) {
    (status, Json(Envelope { data, message }))
}

pub fn success_one<T: Serialize>(data: T, message: &'static str) -> (StatusCode, Json<Envelope<T>>) {
    envelope(StatusCode::OK, data, Some(message))
}

pub fn success_created<T: Serialize>(data: T, message: &'static str) -> (StatusCode, Json<Envelope<T>>) {
    envelope(StatusCode::CREATED, data, Some(message))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Envelope<Vec<T>>>) {
    envelope(StatusCode::OK, data, None)
}

/// Payload used by error envelopes.
pub fn empty_payload() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
