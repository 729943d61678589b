//! Path-based tier classification.
//!
//! Every document is assigned exactly one [`Tier`] from its path relative to
//! the project root. Pattern sets are tested in precedence order (strict,
//! moderate, light) and the first match wins; anything unmatched is
//! [`Tier::None`].
//!
//! As with shell globs, wildcards never match a path segment that starts with
//! `.`: `**/*.md` does not reach `.github/TEMPLATE.md` or `docs/.draft.md`.
//! A hidden segment only matches a pattern segment that itself starts with
//! `.`, such as `.claude/commands/**/*.md`.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Compliance tier of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Agent-facing directives: full structural and voice checks.
    Strict,
    /// Governance and orchestration documents: advisory checks.
    Moderate,
    /// Any other Markdown document: only extreme cases are flagged.
    Light,
    /// Not linted.
    None,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Strict => "strict",
            Tier::Moderate => "moderate",
            Tier::Light => "light",
            Tier::None => "none",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_STRICT_GLOBS: &[&str] = &[
    "commands/**/*.md",
    "skills/**/SKILL.md",
    "agents/**/AGENT.md",
    "rules/**/*.md",
    "AGENTS.md",
    "CLAUDE.md",
];

pub const DEFAULT_MODERATE_GLOBS: &[&str] = &[
    "governance/**/*.md",
    "config-sync/**/*.md",
    "agent-ops/**/*.md",
];

pub const DEFAULT_LIGHT_GLOBS: &[&str] = &["**/*.md"];

/// Glob patterns per tier, as read from the `[tiers]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TierPatterns {
    pub strict: Vec<String>,
    pub moderate: Vec<String>,
    pub light: Vec<String>,
}

impl Default for TierPatterns {
    fn default() -> Self {
        let owned = |globs: &[&str]| globs.iter().map(|g| g.to_string()).collect();
        Self {
            strict: owned(DEFAULT_STRICT_GLOBS),
            moderate: owned(DEFAULT_MODERATE_GLOBS),
            light: owned(DEFAULT_LIGHT_GLOBS),
        }
    }
}

/// Ordered `(pattern set, tier)` pairs evaluated first-match-wins.
#[derive(Debug, Clone)]
pub struct TierClassifier {
    root: PathBuf,
    tiers: Vec<(PatternSet, Tier)>,
}

/// Compiled globs of one tier.
#[derive(Debug, Clone)]
struct PatternSet {
    set: GlobSet,
    /// Per pattern, in insertion order: its segments that start with `.`.
    hidden_segments: Vec<Vec<GlobMatcher>>,
}

impl PatternSet {
    /// A pattern matches when the whole path matches and every hidden path
    /// segment is covered by one of the pattern's own hidden segments.
    fn is_match(&self, relative: &str) -> bool {
        let hidden: Vec<&str> = relative.split('/').filter(|s| s.starts_with('.')).collect();
        self.set.matches(relative).into_iter().any(|index| {
            hidden.iter().all(|segment| {
                self.hidden_segments[index]
                    .iter()
                    .any(|matcher| matcher.is_match(segment))
            })
        })
    }
}

impl TierClassifier {
    /// Compile the pattern sets. `root` anchors absolute paths passed to
    /// [`classify`](Self::classify); relative paths are taken as already
    /// relative to it.
    pub fn new(root: impl Into<PathBuf>, patterns: &TierPatterns) -> Result<Self> {
        let tiers = vec![
            (compile(Tier::Strict, &patterns.strict)?, Tier::Strict),
            (compile(Tier::Moderate, &patterns.moderate)?, Tier::Moderate),
            (compile(Tier::Light, &patterns.light)?, Tier::Light),
        ];
        Ok(Self {
            root: normalize(&root.into()),
            tiers,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Classify a document path. Total and deterministic.
    pub fn classify(&self, path: &Path) -> Tier {
        let Some(relative) = self.relative_path(path) else {
            log::trace!("{} is outside the root, tier none", path.display());
            return Tier::None;
        };

        for (set, tier) in &self.tiers {
            if set.is_match(&relative) {
                log::trace!("{} classified as {}", relative, tier);
                return *tier;
            }
        }

        Tier::None
    }

    /// Root-relative, `/`-separated form of `path`, or `None` when the path
    /// is empty or escapes the root.
    fn relative_path(&self, path: &Path) -> Option<String> {
        let path = normalize(path);
        let relative = if path.is_absolute() {
            path.strip_prefix(&self.root).ok()?.to_path_buf()
        } else {
            path
        };

        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().replace('\\', "/")),
                Component::ParentDir => return None,
                _ => {}
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }
}

fn compile(tier: Tier, globs: &[String]) -> Result<PatternSet> {
    let glob = |pattern: &str| -> Result<Glob> {
        GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .map_err(|source| Error::Glob {
                tier: tier.as_str(),
                pattern: pattern.to_string(),
                source,
            })
    };

    let mut builder = GlobSetBuilder::new();
    let mut hidden_segments = Vec::with_capacity(globs.len());
    for pattern in globs {
        builder.add(glob(pattern)?);
        hidden_segments.push(
            pattern
                .split('/')
                .filter(|segment| segment.starts_with('.'))
                .map(|segment| glob(segment).map(|g| g.compile_matcher()))
                .collect::<Result<Vec<_>>>()?,
        );
    }

    let set = builder.build().map_err(|source| Error::Glob {
        tier: tier.as_str(),
        pattern: globs.join(", "),
        source,
    })?;
    Ok(PatternSet {
        set,
        hidden_segments,
    })
}

/// Lexically resolve `.` and `..` without touching the filesystem.
/// Leading `..` on relative paths is kept so escapes stay detectable.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TierClassifier {
        TierClassifier::new("/repo", &TierPatterns::default()).unwrap()
    }

    fn tier(path: &str) -> Tier {
        classifier().classify(Path::new(path))
    }

    #[test]
    fn strict_patterns() {
        assert_eq!(tier("commands/deploy.md"), Tier::Strict);
        assert_eq!(tier("commands/ops/deep/run.md"), Tier::Strict);
        assert_eq!(tier("skills/writer/SKILL.md"), Tier::Strict);
        assert_eq!(tier("agents/reviewer/AGENT.md"), Tier::Strict);
        assert_eq!(tier("rules/naming.md"), Tier::Strict);
        assert_eq!(tier("AGENTS.md"), Tier::Strict);
        assert_eq!(tier("CLAUDE.md"), Tier::Strict);
    }

    #[test]
    fn moderate_patterns() {
        assert_eq!(tier("governance/policy.md"), Tier::Moderate);
        assert_eq!(tier("config-sync/plan/phases.md"), Tier::Moderate);
        assert_eq!(tier("agent-ops/runbook.md"), Tier::Moderate);
    }

    #[test]
    fn light_is_catch_all_for_markdown() {
        assert_eq!(tier("README.md"), Tier::Light);
        assert_eq!(tier("docs/guide/intro.md"), Tier::Light);
        assert_eq!(tier("skills/writer/notes.md"), Tier::Light);
    }

    #[test]
    fn strict_takes_precedence_over_light() {
        // Matches both `commands/**/*.md` and `**/*.md`.
        assert_eq!(tier("commands/x.md"), Tier::Strict);
    }

    #[test]
    fn root_level_names_do_not_match_nested_files() {
        assert_eq!(tier("docs/CLAUDE.md"), Tier::Light);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(tier("Commands/Deploy.MD"), Tier::Strict);
        assert_eq!(tier("skills/a/skill.md"), Tier::Strict);
        assert_eq!(tier("claude.md"), Tier::Strict);
    }

    #[test]
    fn non_markdown_is_none() {
        assert_eq!(tier("src/main.rs"), Tier::None);
        assert_eq!(tier("commands/run.txt"), Tier::None);
        assert_eq!(tier(""), Tier::None);
    }

    #[test]
    fn absolute_paths_are_made_relative_to_root() {
        assert_eq!(tier("/repo/commands/run.md"), Tier::Strict);
        assert_eq!(tier("/repo/./governance/../rules/a.md"), Tier::Strict);
        assert_eq!(tier("/elsewhere/commands/run.md"), Tier::None);
    }

    #[test]
    fn paths_escaping_the_root_are_none() {
        assert_eq!(tier("../commands/run.md"), Tier::None);
        assert_eq!(tier("./commands/run.md"), Tier::Strict);
    }

    #[test]
    fn wildcards_skip_hidden_segments() {
        assert_eq!(tier(".claude/commands/x.md"), Tier::None);
        assert_eq!(tier(".github/PULL_REQUEST_TEMPLATE.md"), Tier::None);
        assert_eq!(tier(".notes.md"), Tier::None);
        assert_eq!(tier("docs/.draft.md"), Tier::None);
        assert_eq!(tier("/repo/commands/.wip/run.md"), Tier::None);
    }

    #[test]
    fn hidden_segments_match_when_spelled_out() {
        let patterns = TierPatterns {
            strict: vec![".claude/commands/**/*.md".to_string()],
            moderate: vec!["docs/.*.md".to_string()],
            ..TierPatterns::default()
        };
        let c = TierClassifier::new("/repo", &patterns).unwrap();
        assert_eq!(c.classify(Path::new(".claude/commands/x.md")), Tier::Strict);
        assert_eq!(c.classify(Path::new(".Claude/commands/deep/x.md")), Tier::Strict);
        assert_eq!(c.classify(Path::new(".claude/commands/.wip/x.md")), Tier::None);
        assert_eq!(c.classify(Path::new("docs/.draft.md")), Tier::Moderate);
        assert_eq!(c.classify(Path::new(".claude/notes.md")), Tier::None);
    }

    #[test]
    fn classification_is_deterministic() {
        let c = classifier();
        let paths = ["commands/a.md", "README.md", "governance/b.md", "x.rs"];
        let first: Vec<_> = paths.iter().map(|p| c.classify(Path::new(p))).collect();
        let again: Vec<_> = paths.iter().rev().map(|p| c.classify(Path::new(p))).collect();
        assert_eq!(first, again.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn custom_patterns() {
        let patterns = TierPatterns {
            strict: vec!["prompts/*.md".to_string()],
            moderate: vec![],
            light: vec![],
        };
        let c = TierClassifier::new("/repo", &patterns).unwrap();
        assert_eq!(c.classify(Path::new("prompts/a.md")), Tier::Strict);
        assert_eq!(c.classify(Path::new("prompts/nested/a.md")), Tier::None);
        assert_eq!(c.classify(Path::new("README.md")), Tier::None);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let patterns = TierPatterns {
            strict: vec!["commands/[".to_string()],
            ..TierPatterns::default()
        };
        let err = TierClassifier::new("/repo", &patterns).unwrap_err();
        assert!(err.to_string().contains("strict"));
    }
}
