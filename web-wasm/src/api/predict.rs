//! 推論サービス呼び出し（fetch + FormData）

use emotion_lens_common::{parse_predict_response, predict_url, AnalysisResult, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

fn js_error(value: JsValue) -> Error {
    Error::Request(format!("{:?}", value))
}

/// 画像1枚だけのフォームを作る
pub fn build_form(file: &File) -> Result<FormData> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_error)?;
    Ok(form)
}

/// `POST <base>/predict`
///
/// Content-Typeはブラウザに任せる（boundaryが付くため）
pub async fn predict(base_url: &str, file: &File) -> Result<AnalysisResult> {
    let form = build_form(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&predict_url(base_url), &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Request("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::MalformedResponse("response body is not text".into()))?;

    parse_predict_response(&body)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_file() -> File {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(&b"fake-png"[..]));
        File::new_with_u8_array_sequence(&parts, "dibujo.png").expect("File creation failed")
    }

    #[wasm_bindgen_test]
    fn wasm_build_form_has_single_file_field() {
        let form = build_form(&sample_file()).expect("form creation failed");
        assert!(form.has(FILE_FIELD));
        assert_eq!(form.get_all(FILE_FIELD).length(), 1);
    }

    #[wasm_bindgen_test]
    async fn wasm_predict_unreachable_endpoint_is_request_error() {
        let err = predict("http://127.0.0.1:9", &sample_file()).await.unwrap_err();
        assert!(matches!(err, Error::Request(_)));
    }
}
