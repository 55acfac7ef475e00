//! Output formatter: OData v2 response body to item records.
//!
//! The service wraps result sets in the v2 envelope `{"d":{"results":[...]}}`
//! and decorates every entity with a `__metadata` object. The envelope and
//! the metadata are dropped; entity properties map field-for-field onto
//! [`AccountingDocumentItem`].

use acctdoc_domain::{AccountingDocumentItem, AcctDocError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::InfraError;

const METADATA_FIELD: &str = "__metadata";

#[derive(Debug, Deserialize)]
struct Envelope {
    d: ResultSet,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    results: Vec<Value>,
}

/// Decode a response body into item records.
///
/// Any envelope or element problem fails the whole body; no partial result
/// is returned.
pub fn decode_items(body: &[u8]) -> Result<Vec<AccountingDocumentItem>> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|err| AcctDocError::from(InfraError::from(err)))?;

    envelope
        .d
        .results
        .into_iter()
        .enumerate()
        .map(|(index, entity)| decode_entity(index, entity))
        .collect()
}

fn decode_entity(index: usize, entity: Value) -> Result<AccountingDocumentItem> {
    let Value::Object(properties) = entity else {
        return Err(AcctDocError::Decode(format!("result {index} is not a JSON object")));
    };

    serde_json::from_value(Value::Object(flatten_properties(properties))).map_err(|err| {
        AcctDocError::Decode(format!("result {index} could not be mapped to an item: {err}"))
    })
}

/// Reduce entity properties to string values.
///
/// `null` becomes the empty string and numbers or booleans their JSON text.
/// Nested values (metadata, deferred navigation links) are dropped.
fn flatten_properties(properties: Map<String, Value>) -> Map<String, Value> {
    properties
        .into_iter()
        .filter(|(name, _)| name != METADATA_FIELD)
        .filter_map(|(name, value)| {
            let text = match value {
                Value::String(text) => text,
                Value::Null => String::new(),
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => number.to_string(),
                Value::Array(_) | Value::Object(_) => return None,
            };
            Some((name, Value::String(text)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_item() {
        let body = br#"{"d":{"results":[{"CompanyCode":"1010","FiscalYear":"2020","AccountingDocument":"100000000","AccountingDocumentItem":"1"}]}}"#;

        let items = decode_items(body).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].company_code, "1010");
        assert_eq!(items[0].accounting_document_item, "1");
    }

    #[test]
    fn drops_metadata_and_navigation_properties() {
        let body = br#"{"d":{"results":[{
            "__metadata":{"id":"https://host/A_OperationalAcctgDocItemCube('x')","type":"API_OPLACCTGDOCITEMCUBE_SRV.A_OperationalAcctgDocItemCubeType"},
            "CompanyCode":"1010",
            "to_Header":{"__deferred":{"uri":"https://host/to_Header"}}
        }]}}"#;

        let items = decode_items(body).unwrap();
        assert_eq!(items[0].company_code, "1010");
    }

    #[test]
    fn renders_scalars_as_strings() {
        let body = br#"{"d":{"results":[{"CompanyCode":"1010","IsReversal":false,"Quantity":12.5,"Customer":null}]}}"#;

        let item = &decode_items(body).unwrap()[0];
        assert_eq!(item.is_reversal, "false");
        assert_eq!(item.quantity, "12.5");
        assert_eq!(item.customer, "");
    }

    #[test]
    fn empty_results_decode_to_no_items() {
        let items = decode_items(br#"{"d":{"results":[]}}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn missing_envelope_is_decode_error() {
        let result = decode_items(br#"{"results":[{"CompanyCode":"1010"}]}"#);
        match result {
            Err(AcctDocError::Decode(msg)) => assert!(msg.contains("missing field `d`")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn missing_results_is_decode_error() {
        let result = decode_items(br#"{"d":{"CompanyCode":"1010"}}"#);
        assert!(matches!(result, Err(AcctDocError::Decode(_))));
    }

    #[test]
    fn non_array_results_is_decode_error() {
        let result = decode_items(br#"{"d":{"results":{"CompanyCode":"1010"}}}"#);
        assert!(matches!(result, Err(AcctDocError::Decode(_))));
    }

    #[test]
    fn non_object_element_fails_whole_body() {
        let result = decode_items(br#"{"d":{"results":[{"CompanyCode":"1010"},"oops"]}}"#);
        match result {
            Err(AcctDocError::Decode(msg)) => assert!(msg.contains("result 1")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let result = decode_items(b"<html>Service Unavailable</html>");
        assert!(matches!(result, Err(AcctDocError::Decode(_))));
    }
}
