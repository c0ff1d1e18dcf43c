//! Parser for `git diff --numstat` output.
//!
//! Each record is `<insertions>\t<deletions>[\t<path>]`. Totals are summed
//! into [`RepositoryState`] only once every record has parsed, so a malformed
//! line leaves the state untouched.

use crate::core::{
    error::{GitPromptError, Result},
    state::RepositoryState,
};

/// Add the insertion/deletion totals of `numstat` to `state`
pub fn parse_numstat(numstat: &str, state: &mut RepositoryState) -> Result<()> {
    let (mut insertions, mut deletions) = (0u64, 0u64);

    for line in numstat.lines().filter(|line| !line.trim().is_empty()) {
        let mut fields = line.split('\t');
        insertions += parse_count(line, fields.next(), "insertion")?;
        deletions += parse_count(line, fields.next(), "deletion")?;
    }

    log::debug!("Diff summary: +{insertions} -{deletions}");
    state.insertions += insertions;
    state.deletions += deletions;
    Ok(())
}

fn parse_count(line: &str, field: Option<&str>, name: &'static str) -> Result<u64> {
    field
        .and_then(|value| value.trim().parse().ok())
        .ok_or_else(|| GitPromptError::invalid_numstat(line, name))
}
