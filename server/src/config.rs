use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_addr: String,
    /// Token every request must present in the `AccessToken` header
    pub access_token: String,
    /// JSON file holding the records to search
    pub dataset_path: PathBuf,
    /// Upper bound on users returned by one request
    pub max_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            access_token: "abc-def".to_string(),
            dataset_path: PathBuf::from("data/dataset.json"),
            max_limit: 100,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable numbers keep the
    /// default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(token) = lookup("SEARCH_ACCESS_TOKEN") {
            config.access_token = token;
        }
        if let Some(path) = lookup("SEARCH_DATASET") {
            config.dataset_path = PathBuf::from(path);
        }
        if let Some(val) = lookup("SEARCH_MAX_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                if v > 0 {
                    config.max_limit = v;
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn overrides_are_read() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SEARCH_BIND_ADDR" => Some("0.0.0.0:8080".to_string()),
            "SEARCH_ACCESS_TOKEN" => Some("secret".to_string()),
            "SEARCH_DATASET" => Some("/srv/users.json".to_string()),
            "SEARCH_MAX_LIMIT" => Some("40".to_string()),
            _ => None,
        });
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.access_token, "secret");
        assert_eq!(config.dataset_path, PathBuf::from("/srv/users.json"));
        assert_eq!(config.max_limit, 40);
    }

    #[test]
    fn bad_max_limit_keeps_default() {
        for raw in ["lots", "0", "-3"] {
            let config = ServerConfig::from_lookup(|key| {
                (key == "SEARCH_MAX_LIMIT").then(|| raw.to_string())
            });
            assert_eq!(config.max_limit, 100, "{raw}");
        }
    }
}
