//! 用户业务服务
//!
//! 没有任何存储：读接口返回固定的示例数据，创建接口只回显请求并分配 id。

use super::model::{CreateUserRequest, User};
use crate::common::error::{ApiError, MISSING_USER_FIELDS, USER_NOT_FOUND};

/// 固定的示例用户 (id, name, email)
const SAMPLE_USERS: [(i64, &str, &str); 2] = [
    (1, "John Doe", "john@example.com"),
    (2, "Jane Smith", "jane@example.com"),
];

/// 大于该值的 id 视为不存在
const MAX_KNOWN_ID: i64 = 2;

#[derive(Debug, Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_users(&self) -> Vec<User> {
        SAMPLE_USERS
            .iter()
            .map(|&(id, name, email)| User::new(Some(id), name, email))
            .collect()
    }

    /// 按路径参数查询用户
    ///
    /// 已知缺陷：解析不出数字的 id 不会被判定为不存在，而是返回一条 `id` 为
    /// `null` 的伪造记录。返回的 name/email 总是第一条示例用户的。
    pub fn find_user(&self, raw_id: &str) -> Result<User, ApiError> {
        let id = parse_int(raw_id);

        if matches!(id, Some(n) if n > MAX_KNOWN_ID) {
            return Err(ApiError::NotFound(USER_NOT_FOUND));
        }

        let (_, name, email) = SAMPLE_USERS[0];
        Ok(User::new(id, name, email))
    }

    /// 回显 name/email 并以当前毫秒时间戳作为 id，不做任何存储
    pub fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        let (name, email) = req
            .into_fields()
            .ok_or(ApiError::BadRequest(MISSING_USER_FIELDS))?;

        let id = chrono::Utc::now().timestamp_millis();
        Ok(User::new(Some(id), name, email))
    }
}

/// 按整数前缀解析字符串
///
/// 跳过前导空白，接受可选符号和 `0x` 前缀，取最长的合法数字前缀，
/// 忽略后续字符。没有任何数字时返回 `None`，超出范围时饱和。
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: Option<i64> = None;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        let acc = value.unwrap_or(0);
        value = Some(
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit)),
        );
    }

    value.map(|v| if negative { -v } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("1"), Some(1));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int("0x1f"), Some(31));
        assert_eq!(parse_int("-0X10"), Some(-16));
        assert_eq!(parse_int("1.9"), Some(1));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_list_users() {
        let users = UserService::new().list_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], User::new(Some(1), "John Doe", "john@example.com"));
        assert_eq!(users[1], User::new(Some(2), "Jane Smith", "jane@example.com"));
    }

    #[test]
    fn test_find_user() {
        let service = UserService::new();

        let user = service.find_user("2").unwrap();
        assert_eq!(user.id, Some(2));
        assert_eq!(user.name, "John Doe");

        assert!(matches!(
            service.find_user("3"),
            Err(ApiError::NotFound(USER_NOT_FOUND))
        ));
        assert!(service.find_user("999").is_err());
    }

    #[test]
    fn test_find_user_lenient_ids() {
        let service = UserService::new();

        assert_eq!(service.find_user("abc").unwrap().id, None);
        assert_eq!(service.find_user("0").unwrap().id, Some(0));
        assert_eq!(service.find_user("-5").unwrap().id, Some(-5));
        assert_eq!(service.find_user("1abc").unwrap().id, Some(1));
        assert!(service.find_user("3abc").is_err());
    }

    #[test]
    fn test_create_user() {
        let service = UserService::new();
        let before = chrono::Utc::now().timestamp_millis();

        let user = service
            .create_user(CreateUserRequest {
                name: Some(json!("Test User")),
                email: Some(json!("test@example.com")),
            })
            .unwrap();

        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
        assert!(user.id.unwrap() >= before);
    }

    #[test]
    fn test_create_user_missing_fields() {
        let service = UserService::new();

        let missing_name = CreateUserRequest {
            name: None,
            email: Some(json!("test@example.com")),
        };
        assert!(matches!(
            service.create_user(missing_name),
            Err(ApiError::BadRequest(MISSING_USER_FIELDS))
        ));

        assert!(service.create_user(CreateUserRequest::default()).is_err());
    }

    #[test]
    fn test_create_user_echoes_non_string_values() {
        let user = UserService::new()
            .create_user(CreateUserRequest {
                name: Some(json!(123)),
                email: Some(json!({ "primary": "a@b.c" })),
            })
            .unwrap();

        assert_eq!(user.name, json!(123));
        assert_eq!(user.email, json!({ "primary": "a@b.c" }));
    }
}
