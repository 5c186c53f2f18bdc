//! 请求提取器：宽松的 JSON 请求体与统一错误格式的路径参数

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// 请求体提取器
///
/// - 非 JSON 的 Content-Type 或空请求体视为空对象
/// - 顶层数组视为空对象
/// - 语法错误或其它顶层值属于内部错误 (500)
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(JsonBody(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal(format!("读取请求体失败: {}", e)))?;

        decode_body(&bytes).map(JsonBody)
    }
}

/// 路径参数提取器
///
/// 路径参数无法解码（例如非 UTF-8 的百分号编码）时按内部错误处理，
/// 响应体保持 `{ "error": ... }` 格式。
pub struct JsonPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for JsonPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| JsonPath(value))
            .map_err(|e| ApiError::Internal(format!("路径参数解析失败: {}", e)))
    }
}

/// 只有 `application/json` 会被解析
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
}

fn decode_body<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::Internal(format!("JSON 解析失败: {}", e)))?;

    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| ApiError::Internal(format!("JSON 反序列化失败: {}", e))),
        Value::Array(_) => Ok(T::default()),
        other => Err(ApiError::Internal(format!(
            "不支持的 JSON 顶层值: {}",
            other
        ))),
    }
}
