use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use super::parsers::{names_from_pairs, parse_birth_year, NameList};

/// Photo part of a registration form
#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    pub file_name: Option<String>,
    pub data: Bytes,
}

/// `POST /player` body, multipart or urlencoded
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub year: Option<i32>,
    pub gender: String,
    pub photo: Option<UploadedPhoto>,
}

impl RegistrationForm {
    fn from_pairs(pairs: &[(String, String)], photo: Option<UploadedPhoto>) -> Self {
        let field = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str())
        };

        Self {
            username: field("username").unwrap_or_default().to_string(),
            year: field("year").and_then(parse_birth_year),
            gender: field("gender").unwrap_or_default().to_string(),
            photo,
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for RegistrationForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_content_type(&req, "multipart/form-data") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self::from_pairs(&pairs, None));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let mut pairs = Vec::new();
        let mut photo = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "photo" {
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(IntoResponse::into_response)?;
                // Browsers send an empty part when no file was chosen
                if !data.is_empty() {
                    photo = Some(UploadedPhoto { file_name, data });
                }
            } else {
                let value = field.text().await.map_err(IntoResponse::into_response)?;
                pairs.push((name, value));
            }
        }

        Ok(Self::from_pairs(&pairs, photo))
    }
}

#[derive(Debug, Default, Deserialize)]
struct MatchPayload {
    #[serde(default)]
    winners: NameList,
    #[serde(default)]
    losers: NameList,
}

/// `POST /match` body, JSON or urlencoded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSubmission {
    pub winners: Vec<String>,
    pub losers: Vec<String>,
}

#[async_trait]
impl<S> FromRequest<S> for MatchSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_content_type(&req, "application/json") {
            let Json(payload) = Json::<MatchPayload>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self {
                winners: payload.winners.into_names(),
                losers: payload.losers.into_names(),
            });
        }

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self {
            winners: names_from_pairs(&pairs, "winners"),
            losers: names_from_pairs(&pairs, "losers"),
        })
    }
}

fn has_content_type(req: &Request, expected: &str) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(expected))
}
