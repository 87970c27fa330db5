use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("required element `{selector}` is missing")]
    MissingElement { selector: String },
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl SetupError {
    pub fn missing(selector: &str) -> Self {
        SetupError::MissingElement {
            selector: selector.to_string(),
        }
    }
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let err = SetupError::missing("#floatingCards");
        assert_eq!(err.to_string(), "required element `#floatingCards` is missing");
    }
}
