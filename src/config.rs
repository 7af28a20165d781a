//! Prompt appearance, read from `PROMPTSYNTH_*` environment variables.

pub const ANSI_RED: &str = "31";
pub const ANSI_GREEN: &str = "32";
pub const ANSI_YELLOW: &str = "33";
pub const ANSI_MAGENTA: &str = "35";
pub const ANSI_CYAN: &str = "36";
pub const ANSI_WHITE: &str = "37";

pub const STASH_FLAG: &str = "\u{2691}";

/// Colors are raw SGR parameters such as `31` or `31;1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    pub use_bold_colors: bool,
    pub show_stash: bool,
    pub branchname_color: String,
    pub hash_color: String,
    pub staged_color: String,
    pub unstaged_color: String,
    pub stash_color: String,
    pub conflict_color: String,
    pub remote_status_color: String,
    pub stash_symbol: String,
    pub conflict_symbol: String,
    pub prompt_prefix: String,
    pub prompt_suffix: String,
    pub separator: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl PromptOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, fallback: &str| lookup(name).unwrap_or_else(|| fallback.to_string());
        let flag = |name: &str| {
            lookup(name)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .map(|v| v != 0)
                .unwrap_or(false)
        };

        Self {
            use_bold_colors: flag("PROMPTSYNTH_BOLD_COLORS"),
            show_stash: flag("PROMPTSYNTH_SHOW_STASH"),
            branchname_color: text("PROMPTSYNTH_BRANCHNAME_COLOR", ANSI_CYAN),
            hash_color: text("PROMPTSYNTH_HASH_COLOR", ANSI_CYAN),
            staged_color: text("PROMPTSYNTH_STAGED_COLOR", ANSI_GREEN),
            unstaged_color: text("PROMPTSYNTH_UNSTAGED_COLOR", ANSI_YELLOW),
            stash_color: text("PROMPTSYNTH_STASH_COLOR", ANSI_MAGENTA),
            conflict_color: text("PROMPTSYNTH_CONFLICT_COLOR", ANSI_RED),
            remote_status_color: text("PROMPTSYNTH_REMOTE_STATUS_COLOR", ANSI_WHITE),
            prompt_prefix: text("PROMPTSYNTH_PROMPT_PREFIX", "["),
            prompt_suffix: text("PROMPTSYNTH_PROMPT_SUFFIX", "]"),
            // Misspelling kept for compatibility with existing shell configs.
            separator: text("PROMPTSYNTH_SEPERATOR", "|"),
            conflict_symbol: text("PROMPTSYNTH_CONFLICT_SYMBOL", "?"),
            stash_symbol: text("PROMPTSYNTH_STASH_SYMBOL", STASH_FLAG),
        }
    }
}
