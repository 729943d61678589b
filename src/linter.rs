pub mod diagnostics;
pub mod rules;
pub mod runner;
pub mod text;

pub use diagnostics::{Diagnostic, Location, Severity};
pub use rules::{Rule, RuleRegistry};
pub use runner::{LintContext, LintRunner};

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::syntax::SyntaxNode;
use crate::tier::{Tier, TierClassifier};
use text::Lexicon;

/// A configured lint engine: compiled tier patterns and word lists plus the
/// rule registry. Cheap to share across threads.
pub struct Linter {
    config: Config,
    classifier: TierClassifier,
    lexicon: Lexicon,
    runner: LintRunner,
}

impl Linter {
    /// Build an engine whose classifier resolves paths against `root`.
    pub fn new(config: &Config, root: impl Into<PathBuf>) -> Result<Self> {
        let classifier = TierClassifier::new(root, &config.tiers)?;
        let lexicon = Lexicon::new(&config.vocabulary)?;
        log::debug!(
            "Linter ready with root {}",
            classifier.root().display()
        );
        Ok(Self {
            config: config.clone(),
            classifier,
            lexicon,
            runner: LintRunner::new(default_registry()),
        })
    }

    pub fn classify(&self, path: &Path) -> Tier {
        self.classifier.classify(path)
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        self.runner.registry().rules()
    }

    /// Lint one parsed document. `input` must be the text `tree` was parsed
    /// from.
    pub fn lint(&self, tree: &SyntaxNode, input: &str, path: &Path) -> Vec<Diagnostic> {
        let ctx = LintContext {
            tree,
            input,
            path,
            config: &self.config,
            lexicon: &self.lexicon,
            classifier: &self.classifier,
        };
        self.runner.run(&ctx)
    }
}

/// Lint a document with `config`, resolving `path` against the configured
/// root (or taking it as already relative).
pub fn lint(tree: &SyntaxNode, input: &str, path: &Path, config: &Config) -> Result<Vec<Diagnostic>> {
    let root = config.root.clone().unwrap_or_default();
    let linter = Linter::new(config, root)?;
    Ok(linter.lint(tree, input, path))
}

/// Create the default rule registry: strict rules, then moderate, then light.
pub fn default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(rules::heading_order::HeadingOrderRule));
    registry.register(Box::new(rules::no_strong::NoStrongRule));
    registry.register(Box::new(rules::no_emoji::NoEmojiRule));
    registry.register(Box::new(rules::no_modal_verbs::NoModalVerbsRule));
    registry.register(Box::new(rules::no_narrative::NoNarrativeRule));
    registry.register(Box::new(rules::line_length::LineLengthRule));
    registry.register(Box::new(rules::moderate_headings::ModerateHeadingsRule));
    registry.register(Box::new(rules::moderate_markdown::ModerateMarkdownRule));
    registry.register(Box::new(rules::light_markdown::LightMarkdownRule));
    registry
}
