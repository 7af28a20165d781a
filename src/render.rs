//! Turns a [`RepoSnapshot`] into the colored prompt segment.

use promptsynth::{Divergence, FileTriplet, RepoSnapshot};

use crate::config::PromptOptions;

const BOLD: &str = "\x1b[1m";
const COLOR_RESET: &str = "\x1b[39;49m";
const ALL_RESET: &str = "\x1b[0m";

const UP_ARROW: &str = "\u{2191}";
const DOWN_ARROW: &str = "\u{2193}";
const CONGRUENT: &str = "\u{2261}";

fn colored(color: &str, text: &str) -> String {
    format!("\x1b[{color}m{text}{COLOR_RESET}")
}

/// ` <sep> ` followed by `text` in `color`.
fn segment(separator: &str, color: &str, text: &str) -> String {
    format!(" {separator} {}", colored(color, text))
}

fn triplet_text(counts: &FileTriplet) -> String {
    format!("+{} ~{} -{}", counts.added, counts.modified, counts.deleted)
}

fn divergence_text(divergence: &Divergence) -> String {
    if divergence.is_even() {
        return CONGRUENT.to_string();
    }
    let mut text = String::new();
    if divergence.ahead != 0 {
        text.push_str(&format!("{UP_ARROW}{}", divergence.ahead));
    }
    if divergence.behind != 0 {
        text.push_str(&format!("{DOWN_ARROW}{}", divergence.behind));
    }
    text
}

pub fn render(snapshot: &RepoSnapshot, options: &PromptOptions) -> String {
    let mut out = String::new();
    if options.use_bold_colors {
        out.push_str(BOLD);
    }
    out.push_str(&options.prompt_prefix);

    let branch_color = if snapshot.branch.is_detached() {
        &options.hash_color
    } else {
        &options.branchname_color
    };
    out.push_str(&colored(branch_color, &snapshot.branch.to_string()));

    if let Some(divergence) = &snapshot.upstream {
        out.push(' ');
        out.push_str(&colored(&options.remote_status_color, &divergence_text(divergence)));
    }

    if !snapshot.staged.is_empty() {
        let text = triplet_text(&snapshot.staged);
        out.push_str(&segment(&options.separator, &options.staged_color, &text));
    }
    if !snapshot.unstaged.is_empty() {
        let text = triplet_text(&snapshot.unstaged);
        out.push_str(&segment(&options.separator, &options.unstaged_color, &text));
    }
    if snapshot.conflicted != 0 {
        let text = format!("{}{}", options.conflict_symbol, snapshot.conflicted);
        out.push_str(&segment(&options.separator, &options.conflict_color, &text));
    }
    if snapshot.stashes != 0 && options.show_stash {
        let text = format!("{}{}", options.stash_symbol, snapshot.stashes);
        out.push_str(&segment(&options.separator, &options.stash_color, &text));
    }

    out.push_str(&options.prompt_suffix);
    out.push_str(ALL_RESET);
    out
}
