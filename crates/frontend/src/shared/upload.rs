//! Загрузка файла в `POST /api/upload` с отслеживанием прогресса.
//!
//! fetch не сообщает прогресс отправки, поэтому используется XMLHttpRequest.

use crate::shared::api::api_url;
use crate::system::auth::storage;
use contracts::shared::error::ApiError;
use contracts::shared::media::{parse_upload_response, upload_percent, MediaRef};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

/// Multipart field name expected by the upload endpoint
const UPLOAD_FIELD: &str = "files";

fn js_err(e: JsValue) -> ApiError {
    ApiError::Browser(format!("{:?}", e))
}

/// Загрузить файл; `on_progress` получает проценты 0..=100
pub async fn upload_file<P>(file: File, on_progress: P) -> Result<MediaRef, ApiError>
where
    P: Fn(u8) + 'static,
{
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(js_err)?;

    let xhr = XmlHttpRequest::new().map_err(js_err)?;
    xhr.open_with_async("POST", &api_url("/api/upload"), true)
        .map_err(js_err)?;
    if let Some(token) = storage::get_access_token() {
        xhr.set_request_header("Authorization", &format!("Bearer {}", token))
            .map_err(js_err)?;
    }

    let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
        if ev.length_computable() {
            on_progress(upload_percent(ev.loaded(), ev.total()));
        }
    });
    xhr.upload()
        .map_err(js_err)?
        .set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let settled = {
        let xhr = xhr.clone();
        js_sys::Promise::new(&mut move |resolve, reject| {
            xhr.set_onload(Some(&resolve));
            xhr.set_onerror(Some(&reject));
            xhr.set_onabort(Some(&reject));
        })
    };

    log::debug!("POST {} ({} bytes)", api_url("/api/upload"), file.size());
    xhr.send_with_opt_form_data(Some(&form)).map_err(js_err)?;

    let outcome = JsFuture::from(settled).await;
    drop(progress);
    outcome.map_err(|_| ApiError::Network("upload interrupted".to_string()))?;

    let status = xhr.status().map_err(js_err)?;
    let body = xhr.response_text().map_err(js_err)?.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, &body));
    }
    parse_upload_response(&body)
}
