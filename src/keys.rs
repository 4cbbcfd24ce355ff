//! Request key normalization: legacy Portuguese field names -> canonical field names.

use serde_json::{Map, Value};

/// (legacy key, canonical key) pairs accepted in request bodies.
pub const LEGACY_KEYS: &[(&str, &str)] = &[
    ("id_carro", "id"),
    ("marca", "brand"),
    ("modelo", "model"),
    ("ano", "year"),
    ("cor", "color"),
    ("valor", "price"),
    ("numero_vendas", "sales_count"),
];

/// Rename legacy keys of a JSON object in place. A canonical key already present wins over its legacy spelling.
pub fn object_keys_to_canonical(obj: &mut Map<String, Value>) {
    for (legacy, canonical) in LEGACY_KEYS {
        if let Some(v) = obj.remove(*legacy) {
            if !obj.contains_key(*canonical) {
                obj.insert((*canonical).to_string(), v);
            }
        }
    }
}
