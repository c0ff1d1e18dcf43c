//! Common assertion helpers for prompt output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Exact prompt text (prompts carry no trailing newline)
pub fn prompt_is(expected: &str) -> impl Predicate<str> {
    predicates::str::diff(expected.to_string())
}

/// Stdout stays empty, e.g. outside a repository or on errors
pub fn no_prompt() -> impl Predicate<str> {
    predicates::str::is_empty()
}

/// Stderr carries the gitprompt error prefix
pub fn has_error() -> impl Predicate<str> {
    predicates::str::contains("gitprompt:")
}

/// Output contains ANSI escape sequences
pub fn has_ansi() -> impl Predicate<str> {
    predicates::str::contains("\x1b[")
}
