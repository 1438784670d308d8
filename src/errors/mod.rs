use anyhow::Context as _;

/// Add context to upload storage errors
pub fn upload_context(path: &std::path::Path) -> String {
    format!("Failed to store upload at: {}", path.display())
}

/// Add context to server startup errors
pub fn bind_context(addr: &std::net::SocketAddr) -> String {
    format!("Failed to bind server to: {}", addr)
}

/// Wrap result with upload context
pub fn with_upload_context<T, E>(result: Result<T, E>, path: &std::path::Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(upload_context(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_upload_context_names_path() {
        let err = with_upload_context::<(), _>(
            Err(std::io::Error::other("disk full")),
            Path::new("uploads/abc"),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Failed to store upload at: uploads/abc");
        assert_eq!(err.root_cause().to_string(), "disk full");
    }
}
