//! Browser download trigger for fetched document bytes.
//!
//! Builds a transient object URL, clicks a detached anchor, and revokes
//! the URL on every path so repeated downloads cannot leak blob handles.

/// Offer `bytes` to the user as a file download named `file_name`.
///
/// # Errors
///
/// Returns a displayable message when the browser rejects any step, or
/// when called outside a browser.
pub fn save_bytes(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let blob = build_blob(bytes)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;
        let result = trigger_anchor(file_name, &url);
        let _ = web_sys::Url::revoke_object_url(&url);
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_name, bytes);
        Err("downloads are only available in the browser".to_owned())
    }
}

#[cfg(feature = "csr")]
fn build_blob(bytes: &[u8]) -> Result<web_sys::Blob, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_error)
}

#[cfg(feature = "csr")]
fn trigger_anchor(file_name: &str, url: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document available".to_owned())?;
    let body = document.body().ok_or_else(|| "no document body available".to_owned())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "anchor element has an unexpected type".to_owned())?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    Ok(())
}

#[cfg(feature = "csr")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
