use serde::Deserialize;

/// Form-encoded callback body posted by the USSD gateway on every session
/// step. `text` carries the whole input trail accumulated so far.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UssdRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub service_code: String,
    pub phone_number: String,
    #[serde(default)]
    pub text: String,
}

/// The `*`-joined sequence of keystrokes entered so far in a session.
///
/// The gateway resends the full trail on every callback, so this is the
/// entire conversation state. An empty `text` field is the session root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail(Vec<String>);

impl Trail {
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self(Vec::new());
        }
        Self(text.split('*').map(str::to_string).collect())
    }

    pub fn segments(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Trail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_root() {
        let trail = Trail::parse("");
        assert!(trail.is_root());
        assert!(trail.segments().is_empty());
    }

    #[test]
    fn splits_on_asterisk() {
        let trail = Trail::parse("1*1*Nairobi*2");
        assert_eq!(trail.segments(), vec!["1", "1", "Nairobi", "2"]);
    }

    #[test]
    fn preserves_empty_segments() {
        // "1**2" means the user pressed send with no input in between;
        // the resolver treats it like any other unknown trail.
        let trail = Trail::parse("1**2");
        assert_eq!(trail.segments(), vec!["1", "", "2"]);
    }
}
