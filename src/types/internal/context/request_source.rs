use std::fmt;

/// Where an operation was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    /// HTTP endpoint
    API,

    /// Command line, e.g. `create-admin`
    CLI,
}

impl fmt::Display for RequestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestSource::API => "api",
            RequestSource::CLI => "cli",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(RequestSource::API.to_string(), "api");
        assert_eq!(RequestSource::CLI.to_string(), "cli");
    }
}
