use anyhow::Result;
use console::Term;

/// Mask a secret for display, keeping only its last four characters
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();

    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

/// Ask for the API key on the terminal without echoing it.
///
/// Returns `None` when stderr is not attached to a terminal.
pub fn prompt_api_key() -> Result<Option<String>> {
    let term = Term::stderr();
    if !term.is_term() {
        return Ok(None);
    }

    term.write_str("Enter your YouTube Data API Key: ")?;
    let key = term.read_secure_line()?;

    Ok(Some(key))
}

/// Return the first value that is present and not blank
pub fn first_non_blank(values: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}
