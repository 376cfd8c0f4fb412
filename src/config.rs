/// The account you want to see.
pub const DEFAULT_EXPECTED_LOGIN: &str = "SRDdev";

/// `gh repo list` returns at most this many repositories.
pub const DEFAULT_REPO_LIMIT: usize = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Login the authenticated account is expected to have. Compared case-insensitively.
    pub expected_login: String,
    pub repo_limit: usize,
    /// Name of the GitHub CLI executable.
    pub program: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            expected_login: DEFAULT_EXPECTED_LOGIN.to_string(),
            repo_limit: DEFAULT_REPO_LIMIT,
            program: "gh".to_string(),
        }
    }
}

impl Config {
    pub fn with_expected_login(expected_login: impl Into<String>) -> Self {
        Config {
            expected_login: expected_login.into(),
            ..Config::default()
        }
    }

    /// Case-insensitive comparison against the expected login. A missing login never matches.
    pub fn is_expected(&self, login: Option<&str>) -> bool {
        match login {
            Some(login) => login.to_lowercase() == self.expected_login.to_lowercase(),
            None => false,
        }
    }
}
