//! Client for the dashboard JSON API.

use serde::Serialize;

use crate::config::{API_BASE, ViewConfig};
use crate::core::error::ApiError;
use crate::core::view::ViewPage;
use crate::models::{FilePage, Folder};
use crate::utils::{Method, fetch_json, send_json};

#[derive(Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

#[derive(Serialize)]
struct FilesBody<'a> {
    files: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    favorite: Option<bool>,
}

#[derive(Serialize)]
struct FavoriteBody {
    favorite: bool,
}

#[derive(Serialize)]
struct FolderFileBody<'a> {
    id: &'a str,
}

/// One page of files from a prebuilt request URL (see [`crate::core::table::TableState::request_url`]).
pub async fn list_files_at(request_url: &str) -> Result<FilePage, ApiError> {
    fetch_json(request_url).await.map_err(ApiError::from_fetch)
}

/// All folders, without their files.
pub async fn list_folders() -> Result<Vec<Folder>, ApiError> {
    fetch_json(&format!("{}/user/folders?noincl=true", API_BASE))
        .await
        .map_err(ApiError::from_fetch)
}

/// Check a file password. `Ok(())` means the credential is valid.
pub async fn verify_file_password(file_id: &str, password: &str) -> Result<(), ApiError> {
    let url = format!(
        "{}/user/files/{}/password",
        API_BASE,
        urlencoding::encode(file_id)
    );
    send_json(Method::Post, &url, &PasswordBody { password })
        .await
        .map(|_| ())
        .map_err(ApiError::from_fetch)
}

/// The server's view settings (files route, https links).
pub async fn fetch_view_config() -> Result<ViewConfig, ApiError> {
    fetch_json(&format!("{}/config/view", API_BASE))
        .await
        .map_err(ApiError::from_fetch)
}

/// View page data for `name`, computed by the server.
pub async fn fetch_view(name: &str, pw: Option<&str>) -> Result<ViewPage, ApiError> {
    let mut url = format!("{}/view/{}", API_BASE, urlencoding::encode(name));
    if let Some(pw) = pw {
        url.push_str(&format!("?pw={}", urlencoding::encode(pw)));
    }
    fetch_json(&url).await.map_err(ApiError::from_fetch)
}

pub async fn delete_file(file_id: &str) -> Result<(), ApiError> {
    let url = format!("{}/user/files/{}", API_BASE, urlencoding::encode(file_id));
    send_json(Method::Delete, &url, &serde_json::json!({}))
        .await
        .map(|_| ())
        .map_err(ApiError::from_fetch)
}

pub async fn set_favorite(file_id: &str, favorite: bool) -> Result<(), ApiError> {
    let url = format!("{}/user/files/{}", API_BASE, urlencoding::encode(file_id));
    send_json(Method::Patch, &url, &FavoriteBody { favorite })
        .await
        .map(|_| ())
        .map_err(ApiError::from_fetch)
}

pub async fn bulk_delete(file_ids: &[String]) -> Result<(), ApiError> {
    let url = format!("{}/user/files/transaction", API_BASE);
    let body = FilesBody {
        files: file_ids,
        favorite: None,
    };
    send_json(Method::Delete, &url, &body)
        .await
        .map(|_| ())
        .map_err(ApiError::from_fetch)
}

pub async fn bulk_favorite(file_ids: &[String]) -> Result<(), ApiError> {
    let url = format!("{}/user/files/transaction", API_BASE);
    let body = FilesBody {
        files: file_ids,
        favorite: Some(true),
    };
    send_json(Method::Patch, &url, &body)
        .await
        .map(|_| ())
        .map_err(ApiError::from_fetch)
}

/// Add each file to a folder; stops at the first failure.
pub async fn add_to_folder(folder_id: &str, file_ids: &[String]) -> Result<(), ApiError> {
    let url = format!("{}/user/folders/{}", API_BASE, urlencoding::encode(folder_id));
    for id in file_ids {
        send_json(Method::Put, &url, &FolderFileBody { id })
            .await
            .map_err(ApiError::from_fetch)?;
    }
    Ok(())
}
