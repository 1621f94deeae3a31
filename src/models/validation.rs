//! Field checks shared by the insert and update payloads

use std::net::Ipv4Addr;

use crate::errors::FieldError;

pub fn require_text(errors: &mut Vec<FieldError>, path: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(path, message));
    }
}

pub fn require_ipv4(errors: &mut Vec<FieldError>, path: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(path, "IP Address is required"));
    } else if value.parse::<Ipv4Addr>().is_err() {
        errors.push(FieldError::new(path, "Invalid IP address format"));
    }
}

/// Port number if `port` is in 1..=65535
pub fn port_number(port: i64) -> Option<u16> {
    u16::try_from(port).ok().filter(|p| *p != 0)
}

pub fn require_port(errors: &mut Vec<FieldError>, path: &str, port: i64) {
    if port_number(port).is_none() {
        errors.push(FieldError::new(path, "Port must be between 1 and 65535"));
    }
}

pub fn require_url(errors: &mut Vec<FieldError>, path: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(path, "URL is required"));
    } else if url::Url::parse(value.trim()).is_err() {
        errors.push(FieldError::new(path, "Invalid URL format"));
    }
}

pub fn require_id(errors: &mut Vec<FieldError>, path: &str, id: u32, message: &str) {
    if id == 0 {
        errors.push(FieldError::new(path, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_checks() {
        let mut errors = Vec::new();
        require_ipv4(&mut errors, "ipAddress", "192.168.1.10");
        assert!(errors.is_empty());

        require_ipv4(&mut errors, "ipAddress", "256.1.1.1");
        require_ipv4(&mut errors, "ipAddress", "10.0.0");
        require_ipv4(&mut errors, "ipAddress", "");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[2].message, "IP Address is required");
    }

    #[test]
    fn test_url_checks() {
        let mut errors = Vec::new();
        require_url(&mut errors, "url", "https://api.company.com/docs");
        assert!(errors.is_empty());

        require_url(&mut errors, "url", "company.com");
        assert_eq!(errors[0].message, "Invalid URL format");
    }

    #[test]
    fn test_text_and_port_checks() {
        let mut errors = Vec::new();
        require_text(&mut errors, "name", "   ", "Name is required");
        require_port(&mut errors, "port", 0);
        require_port(&mut errors, "port", 443);
        require_port(&mut errors, "port", 65535);
        require_port(&mut errors, "port", 70000);
        require_port(&mut errors, "port", -1);
        assert_eq!(
            errors,
            vec![
                FieldError::new("name", "Name is required"),
                FieldError::new("port", "Port must be between 1 and 65535"),
                FieldError::new("port", "Port must be between 1 and 65535"),
                FieldError::new("port", "Port must be between 1 and 65535"),
            ]
        );
    }
}
