use crate::utils::error::{Result, WallsError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WallsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(WallsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WallsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WallsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WallsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number<T>(field_name: &str, value: T, min_value: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min_value {
        return Err(WallsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WallsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than 0".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog_endpoint", "https://unsplash.it/list").is_ok());
        assert!(validate_url("catalog_endpoint", "http://unsplash.it/list").is_ok());
        assert!(validate_url("catalog_endpoint", "").is_err());
        assert!(validate_url("catalog_endpoint", "invalid-url").is_err());
        assert!(validate_url("catalog_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("library_path", "./camera-roll").is_ok());
        assert!(validate_path("library_path", "").is_err());
        assert!(validate_path("library_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("wallpaper_count", 10usize, 1).is_ok());
        assert!(validate_positive_number("wallpaper_count", 0usize, 1).is_err());
        assert!(validate_positive_number("double_tap_delay_ms", 400u64, 1).is_ok());
    }

    #[test]
    fn test_validate_positive_finite() {
        assert!(validate_positive_finite("double_tap_radius_px", 20.0).is_ok());
        assert!(validate_positive_finite("double_tap_radius_px", 0.0).is_err());
        assert!(validate_positive_finite("double_tap_radius_px", -1.0).is_err());
        assert!(validate_positive_finite("double_tap_radius_px", f64::NAN).is_err());
        assert!(validate_positive_finite("double_tap_radius_px", f64::INFINITY).is_err());
    }
}
