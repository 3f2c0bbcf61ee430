use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::error;

use crate::error::{Error, Result};

/// 服务端常见的错误响应体
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "detail", alias = "error", alias = "error_message")]
    message: Option<String>,
}

/// 检查 REST 响应状态，非成功状态记录日志并转换为错误
pub async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read error response body: {}", e);
            String::new()
        }
    };
    let message = error_message(status, &body);

    error!(
        "Request failed - Status: {}, Path: {}, Message: {}",
        status, url, message
    );

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Unauthorized(message));
    }
    Err(Error::Http { status, message })
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return message;
    }
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_json_body() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"detail":"name is required"}"#),
            "name is required"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message":"bad"}"#),
            "bad"
        );
    }

    #[test]
    fn message_falls_back_to_body_or_reason() {
        assert_eq!(error_message(StatusCode::CONFLICT, "already shared"), "already shared");
        assert_eq!(error_message(StatusCode::NOT_FOUND, "  "), "Not Found");
    }
}
