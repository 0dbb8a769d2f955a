use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to parse site content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("event listener call failed: {0}")]
    Listener(String),
}

impl SiteError {
    pub fn listener(err: wasm_bindgen::JsValue) -> Self {
        SiteError::Listener(format!("{:?}", err))
    }
}
