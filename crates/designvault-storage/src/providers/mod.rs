//! Blob store implementations.

pub mod local;
#[cfg(feature = "s3")]
pub mod s3;

pub use local::LocalBlobStore;
#[cfg(feature = "s3")]
pub use s3::S3BlobStore;

/// Join a base URL and an object key with exactly one `/` between them,
/// unless the base already ends in one (e.g. `local://`).
pub(crate) fn join_url(base: &str, key: &str) -> String {
    let key = key.trim_start_matches('/');
    if base.ends_with('/') {
        format!("{base}{key}")
    } else {
        format!("{base}/{key}")
    }
}

/// Inverse of [`join_url`]: recover the key, or `None` if `url` is not
/// under `base`.
pub(crate) fn key_from_url<'a>(base: &str, url: &'a str) -> Option<&'a str> {
    let rest = url.strip_prefix(base)?;
    let key = if base.ends_with('/') {
        rest
    } else {
        rest.strip_prefix('/')?
    };
    (!key.is_empty()).then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_split() {
        let url = join_url("https://b.s3.ap-south-1.amazonaws.com", "design-versions/v1.png");
        assert_eq!(url, "https://b.s3.ap-south-1.amazonaws.com/design-versions/v1.png");
        assert_eq!(
            key_from_url("https://b.s3.ap-south-1.amazonaws.com", &url),
            Some("design-versions/v1.png")
        );

        let url = join_url("local://", "v1.png");
        assert_eq!(url, "local://v1.png");
        assert_eq!(key_from_url("local://", &url), Some("v1.png"));
    }

    #[test]
    fn test_foreign_url_has_no_key() {
        assert_eq!(key_from_url("https://a.example", "https://b.example/x.png"), None);
        assert_eq!(key_from_url("https://a.example", "https://a.example.evil/x.png"), None);
        assert_eq!(key_from_url("https://a.example", "https://a.example/"), None);
    }
}
