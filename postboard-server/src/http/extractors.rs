//! Typed query-parameter extractors, one shape per operation
//!
//! These only decode and check presence/format. State-dependent checks
//! (such as restoring a live post) belong to the registry.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use postboard_core::PostId;

use super::error::ApiError;
use crate::validation::ValidationError;

/// Decoded query string; when a key repeats, its first value wins
#[derive(Debug, Default)]
struct PostQuery {
    id: Option<String>,
    content: Option<String>,
}

impl PostQuery {
    fn from_parts(parts: &Parts) -> Result<Self, ApiError> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|e| {
            ApiError::Validation(ValidationError::MalformedQuery {
                reason: e.body_text(),
            })
        })?;

        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "id" => &mut query.id,
                "content" => &mut query.content,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        Ok(query)
    }

    fn id(&mut self) -> Result<RequestedId, ValidationError> {
        let raw = self.id.take().ok_or(ValidationError::Missing { field: "id" })?;
        RequestedId::parse(raw)
    }

    fn content(&mut self) -> Result<String, ValidationError> {
        self.content
            .take()
            .ok_or(ValidationError::Missing { field: "content" })
    }
}

/// Numeric `id` exactly as the client sent it
///
/// Any number is accepted; only exact non-negative integers can name a
/// post, so everything else resolves to "not found".
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedId {
    raw: String,
    value: f64,
}

impl RequestedId {
    fn parse(raw: String) -> Result<Self, ValidationError> {
        let value = parse_number(&raw);
        if value.is_nan() {
            return Err(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be numeric",
            });
        }
        Ok(Self { raw, value })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The post this id can name, or not-found when it names none
    pub fn post_id(&self) -> Result<PostId, ApiError> {
        PostId::from_number(self.value).ok_or_else(|| ApiError::NotFound {
            resource: "post",
            id: self.raw.clone(),
        })
    }
}

/// Loose numeric coercion for query values, NaN when not a number.
///
/// Surrounding whitespace is ignored and an empty value is 0. Accepts
/// decimal and exponent forms, `Infinity`, and unsigned `0x`/`0o`/`0b`
/// integer literals.
fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN);
    }

    // Keeps out forms like "inf" and "NaN" that Rust parses but clients don't mean
    let decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// `?id=<number>`
#[derive(Debug)]
pub struct PostIdParam(pub RequestedId);

impl<S> FromRequestParts<S> for PostIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut query = PostQuery::from_parts(parts)?;
        Ok(Self(query.id()?))
    }
}

/// `?content=<text>`; an empty value still counts as present
#[derive(Debug)]
pub struct ContentParam(pub String);

impl<S> FromRequestParts<S> for ContentParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut query = PostQuery::from_parts(parts)?;
        Ok(Self(query.content()?))
    }
}

/// `?id=<number>&content=<text>`
#[derive(Debug)]
pub struct EditParams {
    pub id: RequestedId,
    pub content: String,
}

impl<S> FromRequestParts<S> for EditParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut query = PostQuery::from_parts(parts)?;
        let id = query.id()?;
        let content = query.content()?;
        Ok(Self { id, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract<T>(uri: &str) -> Result<T, ApiError>
    where
        T: FromRequestParts<(), Rejection = ApiError>,
    {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        T::from_request_parts(&mut parts, &()).await
    }

    #[test]
    fn parse_number_coerces_loosely() {
        assert_eq!(parse_number("12"), 12.0);
        assert_eq!(parse_number(" 5 "), 5.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("1.5"), 1.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number("+7"), 7.0);
        assert_eq!(parse_number("1e2"), 100.0);
        assert_eq!(parse_number("100.0"), 100.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("0x10"), 16.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_number_rejects_non_numeric() {
        for raw in ["abc", "1a", "inf", "NaN", "nan", "0x", "0xZ", "-0x10", "1e", ".", "1_000"] {
            assert!(parse_number(raw).is_nan(), "{raw:?} should not be numeric");
        }
    }

    #[tokio::test]
    async fn id_param_accepts_any_number() {
        let PostIdParam(id) = extract("/posts.getById?id=12").await.unwrap();
        assert_eq!(id.post_id().unwrap(), PostId::new(12));

        let PostIdParam(id) = extract("/posts.getById?id=1e2").await.unwrap();
        assert_eq!(id.post_id().unwrap(), PostId::new(100));

        let PostIdParam(id) = extract("/posts.getById?id=").await.unwrap();
        assert_eq!(id.value(), 0.0);
    }

    #[tokio::test]
    async fn non_integral_id_names_no_post() {
        let PostIdParam(id) = extract("/posts.getById?id=1.5").await.unwrap();
        assert_eq!(
            id.post_id().unwrap_err(),
            ApiError::NotFound {
                resource: "post",
                id: "1.5".into(),
            }
        );

        let PostIdParam(id) = extract("/posts.getById?id=-3").await.unwrap();
        assert!(id.post_id().is_err());
    }

    #[tokio::test]
    async fn id_param_missing_or_non_numeric() {
        let err = extract::<PostIdParam>("/posts.getById").await.unwrap_err();
        assert_eq!(err, ApiError::Validation(ValidationError::Missing { field: "id" }));

        let err = extract::<PostIdParam>("/posts.getById?id=abc").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidFormat { field: "id", .. })
        ));
    }

    #[tokio::test]
    async fn repeated_keys_keep_first_value() {
        let PostIdParam(id) = extract("/posts.getById?id=1&id=2").await.unwrap();
        assert_eq!(id.post_id().unwrap(), PostId::new(1));

        let ContentParam(content) = extract("/posts.post?content=a&content=b").await.unwrap();
        assert_eq!(content, "a");
    }

    #[tokio::test]
    async fn content_param_decodes_and_allows_empty() {
        let ContentParam(content) = extract("/posts.post?content=hello+world%21").await.unwrap();
        assert_eq!(content, "hello world!");

        let ContentParam(content) = extract("/posts.post?content=").await.unwrap();
        assert_eq!(content, "");
    }

    #[tokio::test]
    async fn edit_params_need_both() {
        let params: EditParams = extract("/posts.edit?id=3&content=new").await.unwrap();
        assert_eq!(params.id.post_id().unwrap(), PostId::new(3));
        assert_eq!(params.content, "new");

        let err = extract::<EditParams>("/posts.edit?id=3").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation(ValidationError::Missing { field: "content" })
        );

        let err = extract::<EditParams>("/posts.edit?id=x&content=new").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_parameters_are_ignored() {
        let PostIdParam(id) = extract("/posts.delete?id=1&verbose=true").await.unwrap();
        assert_eq!(id.post_id().unwrap(), PostId::new(1));
    }
}
