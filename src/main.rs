use clap::Parser;
use gitprompt::commands::{execute_prompt, PromptOptions};
use gitprompt::core::{
    config::PromptConfig,
    error::{GitPromptError, Result},
    print_error,
    render::RenderMode,
};
use std::path::PathBuf;

const FORMAT_HELP: &str = "\
FORMATTING:
  FORMAT may contain:
    %g  branch glyph
    %n  VC name
    %b  branch (or tag when HEAD is detached)
    %r  remote
    %c  abbreviated commit id
    %a  commits ahead/behind upstream
    %u  untracked files
    %m  unstaged change count
    %s  staged change count
    %d  inserted/deleted lines
    %t  stash present
    %%  literal %";

#[derive(Parser)]
#[command(name = "gitprompt")]
#[command(about = "Git status for your prompt, similar to vcprompt")]
#[command(version)]
#[command(after_help = FORMAT_HELP)]
struct Cli {
    /// Print debug messages to stderr
    #[arg(short = 'v', long)]
    debug: bool,

    /// Git repo location, if not cwd
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Printf-style format string for the prompt
    #[arg(short = 'f', long = "format", value_name = "FORMAT", conflicts_with = "raw")]
    format: Option<String>,

    /// Print one field per line for scripts
    #[arg(long)]
    raw: bool,

    /// Do not look for a tag when HEAD is detached
    #[arg(long = "no-tag")]
    no_tag: bool,

    /// Disable ANSI colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Check for stashed changes
    #[arg(long)]
    stash: bool,
}

impl Cli {
    fn into_options(self, config: &PromptConfig) -> PromptOptions {
        let mut options = PromptOptions::from_config(config, self.dir);
        if self.raw {
            options.mode = RenderMode::Raw;
        } else if let Some(format) = self.format {
            options.mode = RenderMode::Format(format);
        }
        options.tag_lookup &= !self.no_tag;
        options.stash |= self.stash;
        options.render.color &= !self.no_color;
        options
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr and stay quiet unless asked for
    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match PromptConfig::load() {
        Ok(config) => config,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let options = cli.into_options(&config);
    log::debug!("Options: {options:?}");
    colored::control::set_override(options.render.color);

    match execute_prompt(&options) {
        Ok(prompt) => print!("{prompt}"),
        Err(GitPromptError::NotInGitRepo) => {
            // No output by default when not in a repo
            log::info!("Not in a git repository");
            std::process::exit(1);
        }
        Err(e) => {
            log::debug!("Prompt failed: {e:?}");
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
