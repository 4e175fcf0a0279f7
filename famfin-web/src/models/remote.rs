use client::ClientError;

/// State of data fetched by a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(describe(&err)),
        }
    }
}

/// Short message for a failed request.
pub fn describe(err: &ClientError) -> String {
    match err {
        ClientError::Unauthorized => "Your session has expired.".to_string(),
        ClientError::Status { message, .. } => message.clone(),
        ClientError::InvalidRequest(reason) => (*reason).to_string(),
        ClientError::Transport(_) => "Unable to reach the server.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        assert_eq!(Remote::from_result(Ok(3)), Remote::Ready(3));
        assert_eq!(
            Remote::<u8>::from_result(Err(ClientError::Status {
                status: 403,
                message: "Admins only".to_string(),
            })),
            Remote::Failed("Admins only".to_string())
        );
    }

    #[test]
    fn test_describe_invalid_request() {
        let err = ClientError::InvalidRequest("email must be a valid address");
        assert_eq!(describe(&err), "email must be a valid address");
    }
}
