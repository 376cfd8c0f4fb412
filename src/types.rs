use serde::Deserialize;
use std::fmt;

/// Response of `gh api user`. Only the fields we print.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserProfile {
    pub login: Option<String>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub html_url: Option<String>,
}

/// One element of `gh repo list --json name,visibility,url,sshUrl`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    pub name: String,
    pub visibility: Visibility,
    pub url: String,
    #[serde(default)]
    pub ssh_url: Option<String>,
}

impl RepositoryRecord {
    /// SSH URL when there is a usable one, otherwise the web URL.
    pub fn display_url(&self) -> &str {
        match self.ssh_url.as_deref() {
            Some(ssh) if !ssh.is_empty() => ssh,
            _ => &self.url,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Visibility {
    Public,
    Private,
    Internal,
    /// Anything gh may add later, stored upper-cased.
    Other(String),
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl From<String> for Visibility {
    fn from(raw: String) -> Self {
        let upper = raw.to_uppercase();
        match upper.as_str() {
            "PUBLIC" => Visibility::Public,
            "PRIVATE" => Visibility::Private,
            "INTERNAL" => Visibility::Internal,
            _ => Visibility::Other(upper),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers in table rows apply
        match self {
            Visibility::Public => f.pad("PUBLIC"),
            Visibility::Private => f.pad("PRIVATE"),
            Visibility::Internal => f.pad("INTERNAL"),
            Visibility::Other(raw) => f.pad(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_with_missing_fields() {
        let profile: UserProfile = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(profile.login, None);
        assert_eq!(profile.id, Some(42));
        assert_eq!(profile.name, None);

        let profile: UserProfile = serde_json::from_str(r#"{"login": null, "name": null}"#).unwrap();
        assert_eq!(profile.login, None);
    }

    #[test]
    fn profile_ignores_extra_fields() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"login":"SRDdev","id":7,"name":"S","html_url":"https://github.com/SRDdev","type":"User"}"#,
        )
        .unwrap();
        assert_eq!(profile.login.as_deref(), Some("SRDdev"));
        assert_eq!(profile.html_url.as_deref(), Some("https://github.com/SRDdev"));
    }

    #[test]
    fn record_uses_camel_case_ssh_url() {
        let record: RepositoryRecord = serde_json::from_str(
            r#"{"name":"a","visibility":"public","url":"http://x/a","sshUrl":"git@x:a"}"#,
        )
        .unwrap();
        assert_eq!(record.visibility, Visibility::Public);
        assert_eq!(record.display_url(), "git@x:a");
    }

    #[test]
    fn display_url_falls_back_to_web_url() {
        let record: RepositoryRecord =
            serde_json::from_str(r#"{"name":"b","visibility":"PRIVATE","url":"http://x/b"}"#)
                .unwrap();
        assert_eq!(record.ssh_url, None);
        assert_eq!(record.display_url(), "http://x/b");

        let record = RepositoryRecord {
            ssh_url: Some(String::new()),
            ..record
        };
        assert_eq!(record.display_url(), "http://x/b");
    }

    #[test]
    fn record_without_visibility_is_rejected() {
        let result = serde_json::from_str::<RepositoryRecord>(r#"{"name":"a","url":"http://x/a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn visibility_parsing_and_display() {
        assert_eq!(Visibility::from("internal".to_string()), Visibility::Internal);
        assert_eq!(
            Visibility::from("Secret".to_string()),
            Visibility::Other("SECRET".to_string())
        );
        assert_eq!(format!("{:<10}|", Visibility::Public), "PUBLIC    |");
        assert!(!Visibility::Internal.is_public());
    }
}
