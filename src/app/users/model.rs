//! 用户数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 用户
///
/// 按 id 查询时路径参数可能解析不出数字，此时 `id` 为 `None`，序列化为 `null`。
/// `name`/`email` 按请求原样回显，不限定为字符串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: Value,
    pub email: Value,
}

impl User {
    pub fn new(id: Option<i64>, name: impl Into<Value>, email: impl Into<Value>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// 创建用户请求
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

impl CreateUserRequest {
    /// 两个字段都为真值时返回 (name, email)
    pub fn into_fields(self) -> Option<(Value, Value)> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if is_truthy(&name) && is_truthy(&email) => {
                Some((name, email))
            }
            _ => None,
        }
    }
}

/// 假值：`null`、`false`、`""`、`0`、`-0`，其余（包括 `{}`、`[]`）都为真值
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateUserRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(""), json!(0), json!(-0.0), json!(0.0)] {
            assert!(!is_truthy(&falsy), "{} 应为假值", falsy);
        }
        for truthy in [json!(true), json!(" "), json!(123), json!(-1), json!({}), json!([])] {
            assert!(is_truthy(&truthy), "{} 应为真值", truthy);
        }
    }

    #[test]
    fn test_into_fields_keeps_values_verbatim() {
        let (name, email) = request(json!({ "name": " Ann ", "email": "a@b.c" }))
            .into_fields()
            .unwrap();
        assert_eq!(name, " Ann ");
        assert_eq!(email, "a@b.c");

        let (name, _) = request(json!({ "name": 123, "email": "a@b.c", "extra": 1 }))
            .into_fields()
            .unwrap();
        assert_eq!(name, json!(123));
    }

    #[test]
    fn test_into_fields_rejects_falsy() {
        assert!(request(json!({ "name": "", "email": "a@b.c" })).into_fields().is_none());
        assert!(request(json!({ "name": "Ann", "email": null })).into_fields().is_none());
        assert!(request(json!({ "name": 0, "email": "a@b.c" })).into_fields().is_none());
        assert!(request(json!({ "name": "Ann", "email": false })).into_fields().is_none());
        assert!(request(json!({})).into_fields().is_none());
    }

    #[test]
    fn test_unparsed_id_serializes_as_null() {
        let user = User::new(None, "John Doe", "john@example.com");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], Value::Null);
    }
}
