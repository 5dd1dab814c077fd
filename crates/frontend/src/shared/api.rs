//! HTTP-клиент REST API.
//!
//! Все запросы идут на origin из конфигурации и несут `Authorization: Bearer`,
//! если в localStorage есть токен.

use crate::shared::config::app_config;
use crate::system::auth::storage;
use contracts::shared::error::ApiError;
use contracts::shared::mutation::{Method, MutationRequest};
use contracts::shared::pagination::ListResponse;
use contracts::shared::resource::ResourceRow;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn api_url(path: &str) -> String {
    app_config().api_url(path)
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Неуспешный статус превращается в `ApiError` с сообщением Strapi
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET с токеном из хранилища
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_json_with_token(path, storage::get_access_token().as_deref()).await
}

pub async fn get_json_with_token<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = with_auth(Request::get(&url), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// POST/PUT/DELETE с необязательным JSON-телом
async fn dispatch<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
    token: Option<&str>,
) -> Result<Response, ApiError> {
    let url = api_url(path);
    log::debug!("{} {}", method.as_str(), url);
    let builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    let builder = with_auth(builder, token);
    let sent = match body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    sent.map_err(|e| ApiError::Network(e.to_string()))
}

/// POST/PUT JSON с явным токеном (или без него)
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = dispatch(method, path, Some(body), token).await?;
    read_json(response).await
}

/// Страница коллекции: `GET /api/{collection}?{query}`
pub async fn fetch_list<R: ResourceRow>(query: &str) -> Result<ListResponse<R>, ApiError> {
    get_json(&format!("/api/{}?{}", R::COLLECTION, query)).await
}

/// Выполнить create/update/delete
pub async fn execute(request: &MutationRequest) -> Result<(), ApiError> {
    let token = storage::get_access_token();
    let response = dispatch(
        request.method,
        &request.path,
        request.body.as_ref(),
        token.as_deref(),
    )
    .await?;
    check_status(response).await.map(|_| ())
}
