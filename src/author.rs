use serde_json::Value;

/// A validated author identity.
///
/// Both fields are non-empty and carry no leading or trailing whitespace.
/// Values of this type are only produced by [`parse_author`] and
/// [`Author::new`], which enforce that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: String,
}

impl Author {
    /// Builds an author from two candidate strings, trimming both.
    ///
    /// Returns `None` if either value is empty or whitespace-only.
    pub fn new(name: &str, email: &str) -> Option<Author> {
        let name = full_str(name)?;
        let email = full_str(email)?;
        Some(Author {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The identity as ordered `(field, value)` pairs, name first.
    ///
    /// This is the shape consumed by [`crate::identity::set_identity`].
    pub fn fields(&self) -> [(&str, &str); 2] {
        [("name", self.name.as_str()), ("email", self.email.as_str())]
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Normalizes a raw author descriptor into an [`Author`].
///
/// Accepted shapes:
///
/// * a string of the form `Name <email>`; text after the closing `>` is ignored
/// * an object with string `name` and `email` members; other members are ignored
///
/// Anything else (absent, `null`, booleans, numbers, arrays, a string with no
/// `<...>` group, a blank name or email) is rejected with `None`.
///
/// # Examples
///
/// ```
/// use git_identity::author::parse_author;
/// use serde_json::json;
///
/// let a = parse_author(Some(&json!("Jane Doe <jane@example.com>"))).unwrap();
/// assert_eq!(a.name(), "Jane Doe");
/// assert_eq!(a.email(), "jane@example.com");
///
/// assert!(parse_author(Some(&json!({"name": "Jane"}))).is_none());
/// assert!(parse_author(None).is_none());
/// ```
pub fn parse_author(raw: Option<&Value>) -> Option<Author> {
    match raw? {
        Value::String(s) => parse_author_str(s),
        Value::Object(map) => {
            let name = map.get("name")?.as_str()?;
            let email = map.get("email")?.as_str()?;
            Author::new(name, email)
        }
        _ => None,
    }
}

/// Parses the `Name <email>` string form.
///
/// The name is everything before the first `<`; the email is everything
/// between that `<` and the last `>` after it, taken literally before the
/// blank check.
pub fn parse_author_str(s: &str) -> Option<Author> {
    let (name, rest) = s.split_once('<')?;
    let (email, _) = rest.rsplit_once('>')?;
    Author::new(name, email)
}

fn full_str(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
