use crate::core::{
    config::{PromptConfig, RenderConfig},
    error::{GitPromptError, Result},
    git::{has_stash, is_merging, GitRepo},
    numstat::parse_numstat,
    parser::StatusParser,
    render::{PromptRenderer, RenderMode},
};
use std::path::PathBuf;

/// Everything one prompt run needs, after merging config file and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    pub dir: PathBuf,
    pub mode: RenderMode,
    pub tag_lookup: bool,
    pub stash: bool,
    pub render: RenderConfig,
}

impl PromptOptions {
    pub fn from_config(config: &PromptConfig, dir: impl Into<PathBuf>) -> Self {
        let mode = match &config.format {
            Some(format) => RenderMode::Format(format.clone()),
            None => RenderMode::Fixed,
        };
        Self {
            dir: dir.into(),
            mode,
            tag_lookup: !config.no_tag,
            stash: config.stash,
            render: config.render_config(),
        }
    }

    /// Stash probing is needed when asked for or when the format shows `%t`
    fn wants_stash(&self) -> bool {
        match &self.mode {
            RenderMode::Format(format) => self.stash || format.contains("%t"),
            _ => self.stash,
        }
    }
}

pub fn execute_prompt(options: &PromptOptions) -> Result<String> {
    let git_repo = GitRepo::open(&options.dir).map_err(|_| GitPromptError::NotInGitRepo)?;
    let work_dir = git_repo.work_dir()?.to_path_buf();
    log::debug!("Running gitprompt in {}", work_dir.display());

    let status = git_repo.status_output()?;
    let mut state = StatusParser::new(work_dir, &git_repo)
        .tag_lookup(options.tag_lookup)
        .parse(&status)?;

    // The remote name itself may contain '/'
    if !state.upstream.is_empty() {
        if let Some(remote) = git_repo.upstream_remote(&state.branch) {
            state.remote = remote;
        }
    }

    // Nothing to diff without unstaged changes
    if state.unstaged.has_changed() {
        parse_numstat(&git_repo.numstat_output()?, &mut state)?;
    }

    if state.unmerged == 0 {
        let merging = is_merging(state.git_dir_or_resolve(|_| Ok(git_repo.git_dir()))?);
        state.merging = merging;
    }
    if options.wants_stash() {
        state.stashed = has_stash(&git_repo.common_dir());
    }

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Repository state: {}", serde_json::to_string(&state)?);
    }

    Ok(PromptRenderer::new(&options.render).render(&options.mode, &state))
}
