use serde::{Deserialize, Serialize};

use catalog_types::RelayError;
use catalog_types::common::Product;

/// Inbound wire shape, kept compatible with existing producers:
/// `{"Id": int32, "Name": string, "Price": float32, "Status": verb}`.
#[derive(Debug, Deserialize)]
struct CommandMessage {
    #[serde(rename = "Id")]
    id: Option<i32>,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Price", default)]
    price: f32,
    #[serde(rename = "Status")]
    status: String,
}

/// A decoded inbound command. The verb is validated once here; the
/// dispatcher never sees an unknown one.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayCommand {
    Create { name: String, price: f32 },
    GetById { id: i32 },
    GetAll,
    Update { id: i32, name: String, price: f32 },
    Delete { id: i32 },
}

/// Outcome of a routed command. `Error` structurally carries no payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayResult {
    Success {
        message: String,
        payload: Option<ResultPayload>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultPayload {
    Record(Product),
    Records(Vec<Product>),
}

impl RelayResult {
    pub fn success(message: impl Into<String>) -> Self {
        RelayResult::Success {
            message: message.into(),
            payload: None,
        }
    }

    pub fn success_with(message: impl Into<String>, payload: ResultPayload) -> Self {
        RelayResult::Success {
            message: message.into(),
            payload: Some(payload),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        RelayResult::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RelayResult::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            RelayResult::Success { message, .. } => message,
            RelayResult::Error { message } => message,
        }
    }
}

/// Outbound wire shape:
/// `{"Status": "success"|"error", "Message": string, "Product"?: ...}`.
#[derive(Serialize)]
struct ResultMessage<'a> {
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Message")]
    message: &'a str,
    #[serde(rename = "Product", skip_serializing_if = "Option::is_none")]
    product: Option<&'a ResultPayload>,
}

/// Decode an inbound payload into a typed command.
///
/// Any failure (malformed JSON, unknown verb token, a verb that needs an
/// id arriving without one) is an error for this message only; it never
/// terminates the consumer.
pub fn decode(payload: &[u8]) -> Result<RelayCommand, RelayError> {
    let msg: CommandMessage =
        serde_json::from_slice(payload).map_err(|e| RelayError::Decode(e.to_string()))?;

    let require_id = |verb: &str| msg.id.ok_or_else(|| RelayError::MissingId(verb.to_string()));

    match msg.status.as_str() {
        "post" => Ok(RelayCommand::Create {
            name: msg.name,
            price: msg.price,
        }),
        "getById" => Ok(RelayCommand::GetById {
            id: require_id("getById")?,
        }),
        "put" => Ok(RelayCommand::Update {
            id: require_id("put")?,
            name: msg.name,
            price: msg.price,
        }),
        "delete" => Ok(RelayCommand::Delete {
            id: require_id("delete")?,
        }),
        other => Err(RelayError::UnknownVerb(other.to_string())),
    }
}

/// Encode a result for the outbound queue. Total for well-formed results;
/// the error arm only satisfies the transport signature.
pub fn encode(result: &RelayResult) -> Result<Vec<u8>, RelayError> {
    let msg = match result {
        RelayResult::Success { message, payload } => ResultMessage {
            status: "success",
            message,
            product: payload.as_ref(),
        },
        RelayResult::Error { message } => ResultMessage {
            status: "error",
            message,
            product: None,
        },
    };

    serde_json::to_vec(&msg).map_err(|e| RelayError::Publish(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_known_verb() {
        let cmd = decode(br#"{"Id":0,"Name":"Widget","Price":9.99,"Status":"post"}"#).unwrap();
        assert_eq!(
            cmd,
            RelayCommand::Create {
                name: "Widget".to_string(),
                price: 9.99,
            }
        );

        let cmd = decode(br#"{"Id":42,"Status":"getById"}"#).unwrap();
        assert_eq!(cmd, RelayCommand::GetById { id: 42 });

        let cmd = decode(br#"{"Id":42,"Name":"Gadget","Price":5.0,"Status":"put"}"#).unwrap();
        assert_eq!(
            cmd,
            RelayCommand::Update {
                id: 42,
                name: "Gadget".to_string(),
                price: 5.0,
            }
        );

        let cmd = decode(br#"{"Id":42,"Status":"delete"}"#).unwrap();
        assert_eq!(cmd, RelayCommand::Delete { id: 42 });
    }

    #[test]
    fn unknown_verb_is_a_decode_error() {
        let err = decode(br#"{"Id":1,"Status":"archive"}"#).unwrap_err();
        assert!(matches!(err, RelayError::UnknownVerb(v) if v == "archive"));
    }

    #[test]
    fn id_is_required_for_lookup_verbs() {
        let err = decode(br#"{"Status":"getById"}"#).unwrap_err();
        assert!(matches!(err, RelayError::MissingId(v) if v == "getById"));

        let err = decode(br#"{"Name":"Widget","Price":1.0,"Status":"put"}"#).unwrap_err();
        assert!(matches!(err, RelayError::MissingId(_)));
    }

    #[test]
    fn malformed_bytes_never_fault() {
        assert!(matches!(
            decode(b"not json at all"),
            Err(RelayError::Decode(_))
        ));
        assert!(matches!(decode(br#"{"Id":"x"}"#), Err(RelayError::Decode(_))));
        assert!(matches!(decode(b""), Err(RelayError::Decode(_))));
    }

    #[test]
    fn encodes_success_with_record() {
        let result = RelayResult::success_with(
            "Producto encontrado",
            ResultPayload::Record(Product::new(42, "Widget", 9.99)),
        );

        let body: serde_json::Value = serde_json::from_slice(&encode(&result).unwrap()).unwrap();
        assert_eq!(body["Status"], "success");
        assert_eq!(body["Message"], "Producto encontrado");
        assert_eq!(body["Product"]["id"], 42);
    }

    #[test]
    fn error_results_carry_no_payload_field() {
        let result = RelayResult::error("Error al obtener producto");

        let body: serde_json::Value = serde_json::from_slice(&encode(&result).unwrap()).unwrap();
        assert_eq!(body["Status"], "error");
        assert!(body.get("Product").is_none());
    }
}
