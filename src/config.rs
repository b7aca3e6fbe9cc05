//! Interactive shell configuration
//!
//! Defaults match the plain shell: a `>>> ` prompt, token listing on, recognizer trace off.
//! The CLI overrides individual settings with flags; there is no config file.

/// Default prompt written before each line is read.
pub const DEFAULT_PROMPT: &str = ">>> ";

/// Words that end a session, compared case-insensitively against the trimmed line.
///
/// Any identifier is a valid line, so every exit word shadows the statement of the same name.
/// Only `salir` is reserved by default; `exit` and `quit` are checked like any other identifier.
pub const DEFAULT_EXIT_WORDS: [&str; 1] = ["salir"];

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Text written before reading each line
    pub prompt: String,
    /// Lines that end the session (stored lowercase)
    pub exit_words: Vec<String>,
    /// Print `TOKENS: [...]` after scanning each line
    pub show_tokens: bool,
    /// Print the recognizer trace for each scanned line
    pub trace: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            exit_words: DEFAULT_EXIT_WORDS.iter().map(|w| w.to_string()).collect(),
            show_tokens: true,
            trace: false,
        }
    }
}

impl ShellConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Replace the exit words.
    ///
    /// Words are trimmed and lowercased; blank entries are dropped so an empty line never ends
    /// the session by accident.
    pub fn with_exit_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exit_words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    /// Toggle the token listing
    pub fn with_show_tokens(mut self, show: bool) -> Self {
        self.show_tokens = show;
        self
    }

    /// Toggle the recognizer trace
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Whether `line` (after trimming) is one of the exit words, ignoring case.
    pub fn is_exit_word(&self, line: &str) -> bool {
        let line = line.trim().to_lowercase();
        !line.is_empty() && self.exit_words.iter().any(|w| w.to_lowercase() == line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_prompt() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, ">>> ");
    }

    #[test]
    fn test_default_exit_words() {
        let config = ShellConfig::default();
        assert_eq!(config.exit_words, vec!["salir"]);
    }

    #[test]
    fn test_default_show_tokens() {
        assert!(ShellConfig::default().show_tokens);
    }

    #[test]
    fn test_default_trace_off() {
        assert!(!ShellConfig::default().trace);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ShellConfig::new(), ShellConfig::default());
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_with_prompt() {
        let config = ShellConfig::new().with_prompt("? ");
        assert_eq!(config.prompt, "? ");
        // Other fields unchanged
        assert!(config.show_tokens);
    }

    #[test]
    fn test_with_empty_prompt() {
        let config = ShellConfig::new().with_prompt("");
        assert_eq!(config.prompt, "");
    }

    #[test]
    fn test_with_exit_words_normalizes() {
        let config = ShellConfig::new().with_exit_words(["  BYE ", "", "Fin"]);
        assert_eq!(config.exit_words, vec!["bye", "fin"]);
    }

    #[test]
    fn test_with_show_tokens() {
        let config = ShellConfig::new().with_show_tokens(false);
        assert!(!config.show_tokens);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_with_trace() {
        let config = ShellConfig::new().with_trace(true);
        assert!(config.trace);
    }

    #[test]
    fn test_builder_chain_all() {
        let config = ShellConfig::new()
            .with_prompt("> ")
            .with_exit_words(["q"])
            .with_show_tokens(false)
            .with_trace(true);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.exit_words, vec!["q"]);
        assert!(!config.show_tokens);
        assert!(config.trace);
    }

    // ========================================
    // Exit word matching
    // ========================================

    #[test]
    fn test_exit_word_case_insensitive() {
        let config = ShellConfig::default();
        assert!(config.is_exit_word("salir"));
        assert!(config.is_exit_word("SALIR"));
        assert!(config.is_exit_word("Salir"));
        assert!(config.is_exit_word("  salir  "));
    }

    #[test]
    fn test_exit_word_rejects_other_lines() {
        let config = ShellConfig::default();
        assert!(!config.is_exit_word("salir;"));
        assert!(!config.is_exit_word("x = salir"));
        assert!(!config.is_exit_word(""));
    }

    #[test]
    fn test_identifier_lines_are_not_exit_words_by_default() {
        let config = ShellConfig::new();
        assert!(!config.is_exit_word("exit"));
        assert!(!config.is_exit_word("quit"));
        assert!(!config.is_exit_word("QUIT"));
    }

    #[test]
    fn test_exit_word_unicode_case() {
        let config = ShellConfig::new().with_exit_words(["ÉXITO"]);
        assert!(config.is_exit_word("éxito"));
        assert!(config.is_exit_word("ÉXITO"));
    }
}
