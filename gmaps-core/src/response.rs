//! Envelope classification and distance-matrix field extraction.
//!
//! Documents stay untyped: only `status` is inspected on every response,
//! and the scalar accessors walk `rows[0].elements[0]` without checking the
//! shape up front. A missing row, element or field surfaces as
//! [`MapsError::MissingField`] naming the absent path.

use serde_json::Value;

use crate::error::MapsError;
use crate::status::ApiStatus;

/// Success sentinel carried in the `status` field.
pub const STATUS_OK: &str = "OK";

/// Pass `document` through when its `status` is [`STATUS_OK`].
///
/// # Errors
///
/// Returns [`MapsError::Api`] carrying the reported status and the full
/// document otherwise, including when `status` is absent.
///
/// # Examples
///
/// ```
/// use gmaps_core::{ApiStatus, check_status};
/// use serde_json::json;
///
/// assert!(check_status(json!({"status": "OK", "rows": []})).is_ok());
///
/// let err = check_status(json!({"status": "INVALID_REQUEST"})).unwrap_err();
/// assert_eq!(err.api_status(), Some(&ApiStatus::InvalidRequest));
/// ```
pub fn check_status(document: Value) -> Result<Value, MapsError> {
    let status = ApiStatus::from_field(document.get("status"));
    if status.is_ok() {
        Ok(document)
    } else {
        Err(MapsError::Api {
            status,
            response: document,
        })
    }
}

/// Scalar fields available on a distance-matrix element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixField {
    /// Travel time in seconds.
    Duration,
    /// Travel distance in metres.
    Distance,
}

impl MatrixField {
    /// Key of the field on an element object.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Distance => "distance",
        }
    }
}

/// Extract `rows[0].elements[0].<field>.value` from a distance-matrix
/// document.
///
/// # Errors
///
/// Returns [`MapsError::MissingField`] when the first row, its first
/// element, or the field's integer `value` is absent. Elements for
/// unreachable pairs carry their own `status` (e.g. `ZERO_RESULTS`) and no
/// fields; that status is reported alongside the path.
pub fn matrix_value(document: &Value, field: MatrixField) -> Result<u64, MapsError> {
    let row = document
        .get("rows")
        .and_then(|rows| rows.get(0))
        .ok_or_else(|| missing("rows[0]", None))?;
    let element = row
        .get("elements")
        .and_then(|elements| elements.get(0))
        .ok_or_else(|| missing("rows[0].elements[0]", None))?;

    element
        .get(field.key())
        .and_then(|object| object.get("value"))
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            missing(
                &format!("rows[0].elements[0].{}.value", field.key()),
                element.get("status").and_then(Value::as_str),
            )
        })
}

fn missing(path: &str, element_status: Option<&str>) -> MapsError {
    MapsError::MissingField {
        path: path.to_owned(),
        element_status: element_status.map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn kiev_lviv() -> Value {
        json!({
            "status": "OK",
            "origin_addresses": ["Kyiv, Ukraine"],
            "destination_addresses": ["Lviv, Lviv Oblast, Ukraine"],
            "rows": [{
                "elements": [{
                    "status": "OK",
                    "duration": {"text": "6 hours 53 mins", "value": 24_780},
                    "distance": {"text": "540 km", "value": 540_123}
                }]
            }]
        })
    }

    #[rstest]
    fn ok_documents_pass_through_unchanged(kiev_lviv: Value) {
        let checked = check_status(kiev_lviv.clone()).expect("status is OK");
        assert_eq!(checked, kiev_lviv);
    }

    #[rstest]
    fn failing_status_carries_document() {
        let document = json!({"status": "INVALID_REQUEST", "rows": []});

        let err = check_status(document.clone()).expect_err("status is not OK");

        match err {
            MapsError::Api { status, response } => {
                assert_eq!(status.as_str(), "INVALID_REQUEST");
                assert_eq!(response, document);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[rstest]
    fn absent_status_is_an_api_error() {
        let err = check_status(json!({"rows": []})).expect_err("status missing");
        assert_eq!(err.api_status(), Some(&ApiStatus::Missing));
    }

    #[rstest]
    #[case(MatrixField::Duration, 24_780)]
    #[case(MatrixField::Distance, 540_123)]
    fn extracts_first_element_values(
        kiev_lviv: Value,
        #[case] field: MatrixField,
        #[case] expected: u64,
    ) {
        assert_eq!(matrix_value(&kiev_lviv, field).expect("value present"), expected);
    }

    #[rstest]
    fn empty_rows_report_the_row_path() {
        let document = json!({"status": "OK", "rows": []});

        let err = matrix_value(&document, MatrixField::Duration).expect_err("no rows");

        assert_eq!(
            err,
            MapsError::MissingField {
                path: "rows[0]".to_owned(),
                element_status: None,
            }
        );
    }

    #[rstest]
    fn empty_elements_report_the_element_path() {
        let document = json!({"status": "OK", "rows": [{"elements": []}]});

        let err = matrix_value(&document, MatrixField::Distance).expect_err("no elements");

        assert_eq!(
            err,
            MapsError::MissingField {
                path: "rows[0].elements[0]".to_owned(),
                element_status: None,
            }
        );
    }

    #[rstest]
    fn unreachable_element_reports_its_status() {
        let document = json!({
            "status": "OK",
            "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}]
        });

        let err = matrix_value(&document, MatrixField::Duration).expect_err("no duration");

        assert_eq!(
            err,
            MapsError::MissingField {
                path: "rows[0].elements[0].duration.value".to_owned(),
                element_status: Some("ZERO_RESULTS".to_owned()),
            }
        );
    }
}
