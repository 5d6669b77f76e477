//! Route handlers

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use log::{debug, error, info};

use crate::server::errors::UploadError;
use crate::server::AppState;

/// Name given to the downloaded document
pub const DOWNLOAD_NAME: &str = "onlinemapsources.xml";

/// Redirect GET requests to the upload form
pub async fn root(method: Method) -> Response {
    if method != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "not a GET").into_response();
    }
    (StatusCode::FOUND, [(header::LOCATION, "/upload")]).into_response()
}

pub async fn upload_form(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.upload_form.clone())
}

/// Transform the first uploaded file and send it back as a download
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, UploadError> {
    let mut multipart = multipart.map_err(|e| UploadError::NotMultipart(e.to_string()))?;

    let limit = usize::try_from(state.inserter.max_input_bytes()).unwrap_or(usize::MAX);
    let data = read_first_file(&mut multipart, limit).await?;

    let output = state.inserter.insert(data.as_slice()).map_err(|e| {
        error!("error inserting gmaps def: {}", e);
        UploadError::Insert(e)
    })?;

    info!("Returning {} bytes as {}", output.len(), DOWNLOAD_NAME);
    let disposition = format!("attachment; filename={}", DOWNLOAD_NAME);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        output,
    )
        .into_response())
}

/// Read at most `limit` bytes of the first part that carries a file name
async fn read_first_file(multipart: &mut Multipart, limit: usize) -> Result<Vec<u8>, UploadError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::ReadBody(e.to_string()))?
    {
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        debug!("Reading uploaded file {}", file_name);

        let mut data = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| UploadError::ReadBody(e.to_string()))?
        {
            let remaining = limit - data.len();
            if chunk.len() >= remaining {
                data.extend_from_slice(&chunk[..remaining]);
                break;
            }
            data.extend_from_slice(&chunk);
        }
        return Ok(data);
    }

    Err(UploadError::NoFile)
}
