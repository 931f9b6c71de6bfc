use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("localStorage unavailable")]
    StorageUnavailable,
    #[error("js error: {0}")]
    Js(String),
    #[error("invalid sidebar config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid class name for {field}: {value:?}")]
    InvalidClassName { field: &'static str, value: String },
    #[error("sidebar already installed on this page")]
    AlreadyInstalled,
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ShellError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ShellError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ShellError> for wasm_bindgen::JsValue {
    fn from(err: ShellError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
