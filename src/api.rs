/// Base URL configuration for the search API client
use log::debug;
use std::cell::RefCell;
use thiserror::Error;
use url::Url;

thread_local! {
    static BASE_URL: RefCell<Option<Url>> = const { RefCell::new(None) };
}

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL {0} cannot be used as a base")]
    NotABase(String),

    #[error("API used before init_api")]
    NotInitialized,
}

/// Configure the API base URL. Endpoints resolve below its path.
pub fn init_api(base_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url.trim()).map_err(|source| ApiError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(ApiError::NotABase(base_url.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    BASE_URL.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(url.clone()) {
            debug!("Replacing API base URL {}", previous);
        }
    });

    Ok(url)
}

pub fn base_url() -> Option<Url> {
    BASE_URL.with(|slot| slot.borrow().clone())
}

/// Resolve `path` against the configured base URL
pub fn endpoint(path: &str) -> Result<Url, ApiError> {
    let base = base_url().ok_or(ApiError::NotInitialized)?;
    base.join(path.trim_start_matches('/'))
        .map_err(|source| ApiError::InvalidUrl {
            url: path.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_before_init() {
        assert_eq!(endpoint("repos"), Err(ApiError::NotInitialized));
    }

    #[test]
    fn test_init_adds_trailing_slash() {
        let url = init_api("http://localhost:7878/api").unwrap();

        assert_eq!(url.as_str(), "http://localhost:7878/api/");
    }

    #[test]
    fn test_endpoint_joins_below_base_path() {
        init_api("http://localhost:7878/api").unwrap();

        assert_eq!(
            endpoint("/repos/indexed").unwrap().as_str(),
            "http://localhost:7878/api/repos/indexed"
        );
        assert_eq!(
            endpoint("search?q=foo").unwrap().as_str(),
            "http://localhost:7878/api/search?q=foo"
        );
    }

    #[test]
    fn test_init_replaces_previous_url() {
        init_api("http://localhost:7878/api").unwrap();
        init_api("https://search.example.com/").unwrap();

        assert_eq!(
            base_url().map(|u| u.to_string()),
            Some("https://search.example.com/".to_string())
        );
    }

    #[test]
    fn test_init_invalid_url() {
        assert!(matches!(
            init_api("not a url"),
            Err(ApiError::InvalidUrl { .. })
        ));
        assert!(matches!(
            init_api("mailto:someone@example.com"),
            Err(ApiError::NotABase(_))
        ));
        assert_eq!(base_url(), None);
    }
}
