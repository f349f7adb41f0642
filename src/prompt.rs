use dialoguer::{Input, theme::ColorfulTheme};

/// Abstraction over a string input prompt.
///
/// Implementors define how string input is collected from the user. This
/// trait decouples the interactive flow from the terminal so it can be
/// driven by a mock in tests.
pub trait StringPrompter {
    /// Prompt the user for a string input.
    ///
    /// # Parameters
    /// - `prompt`: The message shown to the user.
    /// - `default`: Value used if the user presses Enter without input. An
    ///   empty default means there is none.
    ///
    /// # Returns
    /// `Ok(String)` if input is collected, or an `Err(String)` describing the failure.
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String>;
}

/// Default implementation of `StringPrompter` using `dialoguer::Input`.
pub struct DialoguerStringPrompter;

impl StringPrompter for DialoguerStringPrompter {
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Asks for an author name and email, pre-filled with `defaults`.
///
/// Prompts are of the form `"Author name for my-repo"`. The answers are
/// returned untrimmed; validation happens in the author parser.
///
/// # Returns
/// - `Ok((name, email))` with the user's answers.
/// - `Err(String)` if either prompt fails.
pub fn ask_author<P: StringPrompter>(
    prompter: &mut P,
    repo_name: &str,
    defaults: (&str, &str),
) -> Result<(String, String), String> {
    let name = prompter.prompt(&format!("Author name for {}", repo_name), defaults.0)?;
    let email = prompter.prompt(&format!("Author email for {}", repo_name), defaults.1)?;
    Ok((name, email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Answers queued prompts in order, checking each prompt and default.
    struct MockStringPrompter {
        expected: VecDeque<(String, String, Result<String, String>)>,
    }

    impl MockStringPrompter {
        fn new(steps: Vec<(&str, &str, Result<&str, &str>)>) -> Self {
            let expected = steps
                .into_iter()
                .map(|(p, d, r)| {
                    (
                        p.to_string(),
                        d.to_string(),
                        r.map(str::to_string).map_err(str::to_string),
                    )
                })
                .collect();
            MockStringPrompter { expected }
        }
    }

    impl StringPrompter for MockStringPrompter {
        fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
            let (p, d, r) = self.expected.pop_front().expect("unexpected prompt");
            assert_eq!(prompt, p);
            assert_eq!(default, d);
            r
        }
    }

    #[test]
    fn test_ask_author_returns_both_answers() {
        let mut prompter = MockStringPrompter::new(vec![
            ("Author name for my-repo", "Jane", Ok("Alice")),
            ("Author email for my-repo", "jane@x", Ok("alice@x")),
        ]);
        let result = ask_author(&mut prompter, "my-repo", ("Jane", "jane@x"));
        assert_eq!(
            result.unwrap(),
            ("Alice".to_string(), "alice@x".to_string())
        );
        assert!(prompter.expected.is_empty());
    }

    #[test]
    fn test_ask_author_passes_empty_defaults() {
        let mut prompter = MockStringPrompter::new(vec![
            ("Author name for repo", "", Ok("A")),
            ("Author email for repo", "", Ok("b")),
        ]);
        let result = ask_author(&mut prompter, "repo", ("", ""));
        assert!(result.is_ok());
    }

    #[test]
    fn test_ask_author_stops_on_first_error() {
        let mut prompter =
            MockStringPrompter::new(vec![("Author name for repo", "", Err("input failed"))]);
        let result = ask_author(&mut prompter, "repo", ("", ""));
        assert_eq!(result.unwrap_err(), "input failed");
    }
}
