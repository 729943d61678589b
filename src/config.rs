use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::tier::TierPatterns;

pub const MAX_LINE_LENGTH: usize = 100;

pub const CANONICAL_HEADINGS: &[&str] = &[
    "scope",
    "absolute-prohibitions",
    "communication-protocol",
    "structural-rules",
    "language-rules",
    "formatting-rules",
    "naming-rules",
    "validation-rules",
    "narrative-detection",
    "depth-compatibility",
];

pub const GOVERNANCE_HEADINGS: &[&str] = &["purpose", "scope", "workflow", "configuration"];

pub const DIRECTIVE_VERBS: &[&str] = &[
    "required",
    "prohibited",
    "optional",
    "allowed",
    "ensure",
    "use",
    "keep",
    "set",
    "write",
    "avoid",
    "preserve",
    "maintain",
    "follow",
    "apply",
    "define",
    "treat",
    "skip",
    "execute",
    "disable",
    "enable",
    "list",
    "include",
    "exclude",
    "respect",
    "align",
    "load",
    "route",
    "escalate",
    "run",
    "add",
    "remove",
    "update",
    "create",
    "delete",
    "validate",
    "check",
    "test",
    "build",
    "deploy",
    "configure",
    "implement",
];

pub const MODAL_VERBS: &[&str] = &["may", "might", "could"];

pub const SUBJECTIVE_WORDS: &[&str] = &[
    "usually",
    "typically",
    "generally",
    "often",
    "maybe",
    "perhaps",
    "probably",
];

pub const NARRATIVE_OPENERS: &[&str] = &[
    "this", "the", "that", "these", "those", "our", "we", "you", "they", "it", "a", "an",
];

/// Missing governance headings are only reported up to this count. A
/// document missing more than this is treated as not attempting the
/// governance layout at all, so more missing headings can mean no advisory.
pub const MODERATE_MAX_MISSING_HEADINGS: usize = 2;
pub const MODERATE_MAX_SUBJECTIVE: usize = 2;
pub const MODERATE_MAX_MODAL: usize = 1;
pub const LIGHT_MAX_SUBJECTIVE: usize = 4;
pub const LIGHT_MAX_MODAL: usize = 2;

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Word lists and heading vocabularies, the `[vocabulary]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Vocabulary {
    pub canonical_headings: Vec<String>,
    pub governance_headings: Vec<String>,
    pub directive_verbs: Vec<String>,
    pub modal_verbs: Vec<String>,
    pub subjective_words: Vec<String>,
    pub narrative_openers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            canonical_headings: owned(CANONICAL_HEADINGS),
            governance_headings: owned(GOVERNANCE_HEADINGS),
            directive_verbs: owned(DIRECTIVE_VERBS),
            modal_verbs: owned(MODAL_VERBS),
            subjective_words: owned(SUBJECTIVE_WORDS),
            narrative_openers: owned(NARRATIVE_OPENERS),
        }
    }
}

/// Advisory rule thresholds, the `[thresholds]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Thresholds {
    pub moderate_max_missing_headings: usize,
    pub moderate_max_subjective: usize,
    pub moderate_max_modal: usize,
    pub light_max_subjective: usize,
    pub light_max_modal: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            moderate_max_missing_headings: MODERATE_MAX_MISSING_HEADINGS,
            moderate_max_subjective: MODERATE_MAX_SUBJECTIVE,
            moderate_max_modal: MODERATE_MAX_MODAL,
            light_max_subjective: LIGHT_MAX_SUBJECTIVE,
            light_max_modal: LIGHT_MAX_MODAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Classifier root. Relative values are resolved against the directory
    /// holding the config file.
    pub root: Option<PathBuf>,
    pub max_line_length: usize,
    pub tiers: TierPatterns,
    pub vocabulary: Vocabulary,
    pub thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            max_line_length: MAX_LINE_LENGTH,
            tiers: TierPatterns::default(),
            vocabulary: Vocabulary::default(),
            thresholds: Thresholds::default(),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = Some(root.into());
        self
    }

    pub fn max_line_length(mut self, length: usize) -> Self {
        self.config.max_line_length = length;
        self
    }

    pub fn tiers(mut self, tiers: TierPatterns) -> Self {
        self.config.tiers = tiers;
        self
    }

    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config.vocabulary = vocabulary;
        self
    }

    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".stricture.toml", "stricture.toml"];

fn parse_config_str(s: &str, path: &Path) -> Result<Config> {
    toml::from_str::<Config>(s).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn read_config(path: &Path) -> Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("stricture").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("stricture")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .stricture.toml, stricture.toml
/// 3) XDG: $XDG_CONFIG_HOME/stricture/config.toml or ~/.config/stricture/config.toml
/// 4) default config
///
/// Discovered files that fail to load are skipped with a warning.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    for candidate in [find_in_tree(start_dir), xdg_config_path()]
        .into_iter()
        .flatten()
    {
        match read_config(&candidate) {
            Ok(cfg) => return Ok((cfg, Some(candidate))),
            Err(e) => log::warn!("Ignoring config: {e}"),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}

/// Classifier root: an explicit root wins, then the config's `root`
/// (relative to the config file), then `cwd`.
pub fn resolve_root(
    explicit: Option<&Path>,
    config: &Config,
    config_path: Option<&Path>,
    cwd: &Path,
) -> PathBuf {
    if let Some(root) = explicit {
        return cwd.join(root);
    }
    if let Some(root) = &config.root {
        let base = config_path
            .and_then(Path::parent)
            .map(|dir| cwd.join(dir))
            .unwrap_or_else(|| cwd.to_path_buf());
        return base.join(root);
    }
    cwd.to_path_buf()
}
