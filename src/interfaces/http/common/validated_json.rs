//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value.
//! On validation failure it returns a 400 response listing every failing
//! field with its message, so the handler never runs. A field holding the
//! wrong JSON type is listed the same way instead of failing the whole body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use super::{ApiResponse, FieldError};

/// An extractor that deserializes JSON and validates it.
///
/// # Usage
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct UpdateSample {
///     #[validate(required, length(min = 1))]
///     sample: Option<String>,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<UpdateSample>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    /// Body is not JSON, or has the wrong content type.
    JsonError(JsonRejection),
    /// Valid JSON that does not have the shape of the DTO at all.
    Malformed(String),
    /// Type or validation failures, one entry per field.
    Invalid(Vec<FieldError>),
}

/// Wire name of a struct field: `first_name` -> `firstName`,
/// `first_name_ua` -> `firstName_ua`.
pub fn json_field_name(field: &str) -> String {
    let (stem, suffix) = match field.strip_suffix("_ua") {
        Some(stem) => (stem, "_ua"),
        None => (field, ""),
    };

    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in stem.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out.push_str(suffix);
    out
}

/// Flatten validator output into a stable, sorted list.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: json_field_name(field),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let body = ApiResponse::error(format!("Invalid JSON: {}", rejection.body_text()));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Malformed(message) => {
                let body = ApiResponse::error(format!("Invalid JSON: {}", message));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Invalid(fields) => {
                let body = ApiResponse::invalid(fields);
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        let (value, mut fields) = match serde_json::from_value::<T>(body.clone()) {
            Ok(value) => (value, Vec::new()),
            Err(err) => strip_mistyped::<T>(body, err)?,
        };

        if let Err(errors) = value.validate() {
            for error in field_errors(&errors) {
                if !fields.iter().any(|f| f.field == error.field) {
                    fields.push(error);
                }
            }
        }

        if fields.is_empty() {
            return Ok(ValidatedJson(value));
        }
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Err(ValidatedJsonRejection::Invalid(fields))
    }
}

/// Drop every top-level key whose value does not fit its field and
/// deserialize the rest. Only applies to DTOs whose fields may all be
/// omitted; anything else is reported as a malformed body.
fn strip_mistyped<T: DeserializeOwned>(
    body: Value,
    err: serde_json::Error,
) -> Result<(T, Vec<FieldError>), ValidatedJsonRejection> {
    let malformed = |e: serde_json::Error| ValidatedJsonRejection::Malformed(e.to_string());

    let Value::Object(mut object) = body else {
        return Err(malformed(err));
    };
    if serde_json::from_value::<T>(Value::Object(Map::new())).is_err() {
        return Err(malformed(err));
    }

    let mistyped: Vec<FieldError> = object
        .iter()
        .filter_map(|(key, value)| {
            let single: Map<String, Value> = [(key.clone(), value.clone())].into_iter().collect();
            serde_json::from_value::<T>(Value::Object(single))
                .err()
                .map(|e| FieldError {
                    field: key.clone(),
                    message: e.to_string(),
                })
        })
        .collect();

    for field in &mistyped {
        object.remove(&field.field);
    }

    let value = serde_json::from_value::<T>(Value::Object(object)).map_err(malformed)?;
    Ok((value, mistyped))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(required(message = "name is required"), length(min = 1, message = "name must not be empty"))]
        name: Option<String>,
        #[validate(range(min = 1, max = 100, message = "age out of range"))]
        age: Option<u32>,
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(body: Body) -> axum::http::Response<Body> {
        use tower::Service;
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    async fn json_of(resp: axum::http::Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn field_names_follow_the_wire_format() {
        assert_eq!(json_field_name("first_name"), "firstName");
        assert_eq!(json_field_name("first_name_ua"), "firstName_ua");
        assert_eq!(json_field_name("about_me_ua"), "aboutMe_ua");
        assert_eq!(json_field_name("phone"), "phone");
        assert_eq!(json_field_name("firstName_ua"), "firstName_ua");
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let body = serde_json::json!({"name": "Alice", "age": 30});
        let resp = send(Body::from(serde_json::to_vec(&body).unwrap())).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let resp = send(Body::from("not json")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = json_of(resp).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn validation_failure_lists_every_field() {
        let body = serde_json::json!({"age": 0});
        let resp = send(Body::from(serde_json::to_vec(&body).unwrap())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = json_of(resp).await;
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(
            json["fields"],
            serde_json::json!([
                {"field": "age", "message": "age out of range"},
                {"field": "name", "message": "name is required"},
            ])
        );
    }

    #[tokio::test]
    async fn mistyped_fields_are_listed_individually() {
        let body = serde_json::json!({"name": 5, "age": "old"});
        let resp = send(Body::from(serde_json::to_vec(&body).unwrap())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = json_of(resp).await;
        assert_eq!(json["error"], "Validation failed");
        let fields = json["fields"].as_array().unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f["field"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["age", "name"]);
        assert!(fields[1]["message"]
            .as_str()
            .unwrap()
            .contains("expected a string"));
    }

    #[tokio::test]
    async fn mistyped_and_invalid_fields_are_reported_together() {
        let body = serde_json::json!({"name": true, "age": 0});
        let resp = send(Body::from(serde_json::to_vec(&body).unwrap())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = json_of(resp).await;
        assert_eq!(json["fields"][0]["field"], "age");
        assert_eq!(json["fields"][0]["message"], "age out of range");
        assert_eq!(json["fields"][1]["field"], "name");
        assert_eq!(json["fields"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn non_object_body_is_malformed() {
        let resp = send(Body::from("[1, 2]")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = json_of(resp).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON"));
        assert!(json.get("fields").is_none());
    }
}
