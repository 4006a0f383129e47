use gloo::net::http::{Request, RequestBuilder, Response};
use gloo::timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::api::{build_url, is_json_content_type, ApiError, ApiResponse, Method, RequestConfig};
use shared::AppConfig;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortController, AbortSignal, Blob, File, FormData, HtmlAnchorElement, RequestCredentials};

/// API client for the banking backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    upload_timeout_ms: u32,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a client from the build-time configuration
    pub fn new() -> Self {
        Self::from_config(&crate::services::config::load())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
            upload_timeout_ms: config.upload_timeout_ms,
        }
    }

    /// Send a request and fold every outcome into an [`ApiResponse`]
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &str, config: RequestConfig) -> ApiResponse<T> {
        let result = self.execute(endpoint, &config).await;
        if let Err(e) = &result {
            gloo::console::error!(format!("{} {} failed:", config.method, endpoint), e.to_string());
        }
        ApiResponse::from_result(result, "Request successful")
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: Vec<(String, String)>) -> ApiResponse<T> {
        let config = RequestConfig {
            params,
            timeout_ms: self.timeout_ms,
            ..RequestConfig::method(Method::Get)
        };
        self.request(endpoint, config).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResponse<T> {
        self.send_with_body(Method::Post, endpoint, body).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResponse<T> {
        self.send_with_body(Method::Put, endpoint, body).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResponse<T> {
        self.send_with_body(Method::Patch, endpoint, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        let config = RequestConfig::method(Method::Delete).with_timeout(self.timeout_ms);
        self.request(endpoint, config).await
    }

    async fn send_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match RequestConfig::method(method).with_timeout(self.timeout_ms).with_body(body) {
            Ok(config) => self.request(endpoint, config).await,
            Err(e) => ApiResponse::failed(&e),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, endpoint: &str, config: &RequestConfig) -> Result<(u16, T), ApiError> {
        let url = build_url(&self.base_url, endpoint, &config.params);
        let guard = TimeoutGuard::start(config.timeout_ms)?;

        let mut builder = builder_for(config.method, &url).abort_signal(Some(&guard.signal()));
        for (name, value) in config.effective_headers() {
            builder = builder.header(&name, &value);
        }
        if config.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        let request = match config.body_text() {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Serialize(e.to_string()))?;

        let response = request.send().await.map_err(|e| guard.network_error(e))?;
        read_response(response, &guard).await
    }

    /// Multipart upload. A single file goes out as `file`, several as
    /// `file_0`, `file_1`, ...; extra fields are stringified.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        files: &[File],
        fields: &[(String, serde_json::Value)],
    ) -> ApiResponse<T> {
        let result = self.execute_upload(endpoint, files, fields).await;
        if let Err(e) = &result {
            gloo::console::error!(format!("upload to {} failed:", endpoint), e.to_string());
        }
        ApiResponse::from_result(result, "Upload successful")
    }

    async fn execute_upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        files: &[File],
        fields: &[(String, serde_json::Value)],
    ) -> Result<(u16, T), ApiError> {
        let form = FormData::new().map_err(js_error)?;
        match files {
            [single] => form.append_with_blob("file", single).map_err(js_error)?,
            many => {
                for (index, file) in many.iter().enumerate() {
                    form.append_with_blob(&format!("file_{}", index), file)
                        .map_err(js_error)?;
                }
            }
        }
        for (key, value) in fields {
            let text = match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            form.append_with_str(key, &text).map_err(js_error)?;
        }

        let url = build_url(&self.base_url, endpoint, &[]);
        let guard = TimeoutGuard::start(self.upload_timeout_ms)?;
        let request = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&guard.signal()))
            .body(form)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        let response = request.send().await.map_err(|e| guard.network_error(e))?;
        read_response(response, &guard).await
    }

    /// Fetch a file and hand it to the browser as a download.
    ///
    /// The data on success is the number of bytes saved.
    pub async fn download(
        &self,
        endpoint: &str,
        filename: Option<&str>,
        params: &[(String, String)],
    ) -> ApiResponse<usize> {
        let result = self.execute_download(endpoint, filename, params).await;
        if let Err(e) = &result {
            gloo::console::error!(format!("download from {} failed:", endpoint), e.to_string());
        }
        ApiResponse::from_result(result, "Download successful")
    }

    async fn execute_download(
        &self,
        endpoint: &str,
        filename: Option<&str>,
        params: &[(String, String)],
    ) -> Result<(u16, usize), ApiError> {
        let url = build_url(&self.base_url, endpoint, params);
        let guard = TimeoutGuard::start(self.upload_timeout_ms)?;
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&guard.signal()))
            .send()
            .await
            .map_err(|e| guard.network_error(e))?;

        let status = response.status();
        if !response.ok() {
            return Err(ApiError::Http {
                status,
                message: format!("HTTP {}: {}", status, response.status_text()),
            });
        }
        let bytes = response.binary().await.map_err(|e| guard.network_error(e))?;
        save_file(&bytes, filename.unwrap_or("download"))?;
        Ok((status, bytes.len()))
    }
}

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

async fn read_response<T: DeserializeOwned>(response: Response, guard: &TimeoutGuard) -> Result<(u16, T), ApiError> {
    let status = response.status();
    let json = is_json_content_type(response.headers().get("content-type").as_deref());
    let text = response.text().await.map_err(|e| guard.network_error(e))?;

    if !response.ok() {
        return Err(ApiError::from_response(status, &response.status_text(), &text, json));
    }

    let parsed = if json && !text.is_empty() {
        serde_json::from_str(&text)
    } else if text.is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_value(serde_json::Value::String(text))
    };
    parsed
        .map(|data| (status, data))
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Aborts the in-flight request once the deadline passes.
///
/// Dropping the guard cancels the timer.
struct TimeoutGuard {
    controller: AbortController,
    fired: Rc<Cell<bool>>,
    _timer: Option<Timeout>,
}

impl TimeoutGuard {
    fn start(timeout_ms: u32) -> Result<Self, ApiError> {
        let controller = AbortController::new().map_err(js_error)?;
        let fired = Rc::new(Cell::new(false));
        let timer = (timeout_ms > 0).then(|| {
            let controller = controller.clone();
            let fired = fired.clone();
            Timeout::new(timeout_ms, move || {
                fired.set(true);
                controller.abort();
            })
        });
        Ok(Self {
            controller,
            fired,
            _timer: timer,
        })
    }

    fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    fn network_error(&self, e: gloo::net::Error) -> ApiError {
        if self.fired.get() {
            ApiError::Timeout
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

fn save_file(bytes: &[u8], filename: &str) -> Result<(), ApiError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let link = gloo::utils::document()
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ApiError::Network("could not create download link".to_string()))?;
    link.set_href(&object_url);
    link.set_download(filename);

    let body = gloo::utils::body();
    body.append_child(&link).map_err(js_error)?;
    link.click();
    body.remove_child(&link).map_err(js_error)?;
    web_sys::Url::revoke_object_url(&object_url).map_err(js_error)
}
