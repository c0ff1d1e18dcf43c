//! End-to-end scenarios through the library: status text and diff summary in,
//! prompt text out, no git process involved.

use gitprompt::{
    parse_numstat, strip_ansi_codes, NoTags, PromptRenderer, RenderConfig, RenderMode,
    RepositoryState, StatusParser, TagResolver,
};

const STATUS: &str = "\
# branch.oid 51c9c58e2175b768137c1e38865f394c76a7d49d
# branch.head master
# branch.ab +1 -10
1 MM N... 100644 100644 100644 3e2ceb914cf9be46bf235432781840f4145363fd 3e2ceb914cf9be46bf235432781840f4145363fd Gopkg.lock
u UU N... 100644 100644 100644 100644 ac51efdc3df4f4fd328d1a02ad05331d8e2c9111 36c06c8752c78d2aff89571132f3bf7841a7b5c3 e85207e04dfdd5eb0a1e9febbc67fd837c44a1cd gitprompt.go
? untracked.txt
";

struct Tagged;

impl TagResolver for Tagged {
    fn exact_tag(&self) -> Option<String> {
        Some("v2.0".to_string())
    }
}

fn scenario_state() -> anyhow::Result<RepositoryState> {
    let mut state = StatusParser::new("/repo", &NoTags).parse(STATUS)?;
    assert!(state.unstaged.has_changed());
    parse_numstat("5\t2\tfile", &mut state)?;
    Ok(state)
}

#[test]
fn test_scenario_state() -> anyhow::Result<()> {
    let state = scenario_state()?;

    assert_eq!(state.branch, "master");
    assert_eq!(state.ahead, 1);
    assert_eq!(state.behind, 10);
    assert_eq!(state.staged.modified, 1);
    assert_eq!(state.unstaged.modified, 1);
    assert_eq!(state.unmerged, 1);
    assert_eq!(state.untracked, 1);
    assert_eq!(state.insertions, 5);
    assert_eq!(state.deletions, 2);
    Ok(())
}

#[test]
fn test_scenario_fixed_layout() -> anyhow::Result<()> {
    let state = scenario_state()?;
    let config = RenderConfig::plain();
    let out = PromptRenderer::new(&config).render(&RenderMode::Fixed, &state);

    assert!(out.contains("↑1"));
    assert!(out.contains("↓10"));
    assert!(out.contains("?‼Δ"));
    assert!(out.contains("master@51c9c58"));
    assert!(out.ends_with('✘'));
    Ok(())
}

#[test]
fn test_scenario_fixed_layout_colored() -> anyhow::Result<()> {
    let state = scenario_state()?;
    let config = RenderConfig::default();
    let colored = PromptRenderer::new(&config).render(&RenderMode::Fixed, &state);
    let plain = PromptRenderer::new(&RenderConfig::plain()).render(&RenderMode::Fixed, &state);

    assert_eq!(strip_ansi_codes(&colored), plain);
    Ok(())
}

#[test]
fn test_scenario_format_string() -> anyhow::Result<()> {
    let state = scenario_state()?;
    let config = RenderConfig::plain();
    let format = RenderMode::Format("%g %b@%c %a %u %s %m %d %t %%".to_string());
    let out = PromptRenderer::new(&config).render(&format, &state);

    assert_eq!(out, "\u{e0a0} master@51c9c58 ↑1↓10 ? Δ1 Δ1 +5/-2 %");
    Ok(())
}

#[test]
fn test_empty_state_renders_safely() {
    let state = RepositoryState::default();
    let config = RenderConfig::plain();
    let renderer = PromptRenderer::new(&config);

    assert_eq!(renderer.render(&RenderMode::Format("%b%r%c%a%u%m%s%d%t".into()), &state), "");
    assert_eq!(renderer.render(&RenderMode::Format(String::new()), &state), "");
    assert!(renderer.render(&RenderMode::Fixed, &state).ends_with('✔'));
    assert_eq!(renderer.render(&RenderMode::Raw, &state).lines().count(), 12);
}

#[test]
fn test_parse_error_produces_no_state() {
    let result = StatusParser::new("/repo", &NoTags).parse("# branch.ab +x -5\n? a");
    assert!(result.is_err());
}

#[test]
fn test_detached_head_tag_substitution() -> anyhow::Result<()> {
    let text = "# branch.oid 51c9c58e2175b768137c1e38865f394c76a7d49d\n# branch.head (detached)";

    let state = StatusParser::new("/repo", &Tagged).parse(text)?;
    assert_eq!(state.branch, "v2.0");

    let state = StatusParser::new("/repo", &Tagged)
        .tag_lookup(false)
        .parse(text)?;
    assert_eq!(state.branch, "(detached)");
    Ok(())
}
