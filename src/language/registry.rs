use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::config::CustomLanguageConfig;

/// Comment tokens recognised for one language.
///
/// `multi_line` is ordered: the classifier takes the first pair whose open
/// token prefixes a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSyntax {
    pub single_line: Vec<String>,
    pub multi_line: Vec<(String, String)>,
}

static NO_COMMENTS: CommentSyntax = CommentSyntax::empty();

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Vec<&str>, multi_line: Vec<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
        }
    }

    /// A syntax with no tokens: every non-blank line is code.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            single_line: Vec::new(),
            multi_line: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single_line.is_empty() && self.multi_line.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
        }
    }
}

/// Name-keyed table of languages plus the extension index used by discovery.
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: IndexMap<String, Language>,
    extension_map: HashMap<String, String>,
    /// Alternate names resolved to a registered language on lookup.
    aliases: HashMap<String, String>,
}

impl LanguageRegistry {
    /// An empty registry. `Default` is empty too; use [`Self::builtin`] for
    /// the shipped language table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a language, replacing any language registered under the same name.
    ///
    /// Extensions map to the most recently registered language that claims them.
    pub fn register(&mut self, language: Language) {
        if let Some(previous) = self.languages.get(&language.name) {
            for ext in &previous.extensions {
                if self.extension_map.get(ext) == Some(&previous.name) {
                    self.extension_map.remove(ext);
                }
            }
        }
        for ext in &language.extensions {
            self.extension_map.insert(ext.clone(), language.name.clone());
        }
        self.languages.insert(language.name.clone(), language);
    }

    /// Makes `alias` resolve to the language registered as `name`.
    ///
    /// A language registered under the alias itself takes precedence.
    pub fn register_alias(&mut self, alias: &str, name: &str) {
        self.aliases.insert(alias.to_string(), name.to_string());
    }

    /// Comment syntax for `name`, or the empty syntax when the name is unknown.
    #[must_use]
    pub fn lookup(&self, name: &str) -> &CommentSyntax {
        self.get(name).map_or(&NO_COMMENTS, |lang| &lang.comment_syntax)
    }

    /// The language registered as `name`, or the one `name` is an alias of.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|target| self.languages.get(target))
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(ext)
            .and_then(|name| self.languages.get(name))
    }

    /// Resolves a path's language from its extension, trying the extension
    /// as written before its lowercase form.
    #[must_use]
    pub fn language_for_path(&self, path: &Path) -> Option<&Language> {
        let ext = path.extension()?.to_str()?;
        self.get_by_extension(ext)
            .or_else(|| self.get_by_extension(&ext.to_lowercase()))
    }

    pub fn all(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Layers configured languages on top of `base`.
    #[must_use]
    pub fn with_custom_languages(
        mut base: Self,
        custom: &IndexMap<String, CustomLanguageConfig>,
    ) -> Self {
        for (name, config) in custom {
            base.register(Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                comment_syntax: CommentSyntax {
                    single_line: config.single_line_comments.clone(),
                    multi_line: config.multi_line_comments.clone(),
                },
            });
        }
        base
    }

    /// The languages shipped with the tool.
    #[must_use]
    pub fn builtin() -> Self {
        let c_style = || CommentSyntax::new(vec!["//"], vec![("/*", "*/")]);
        let mut registry = Self::new();

        registry.register(Language::new("C", vec!["c", "h"], c_style()));
        registry.register(Language::new(
            "C++",
            vec!["cpp", "hpp", "cc", "cxx", "hxx", "hh"],
            c_style(),
        ));
        registry.register(Language::new("C#", vec!["cs"], c_style()));
        registry.register(Language::new("Go", vec!["go"], c_style()));
        registry.register_alias("Golang", "Go");
        registry.register(Language::new("Java", vec!["java"], c_style()));
        registry.register(Language::new(
            "JavaScript",
            vec!["js", "mjs", "cjs", "jsx"],
            c_style(),
        ));
        registry.register(Language::new(
            "TypeScript",
            vec!["ts", "mts", "cts", "tsx"],
            c_style(),
        ));
        registry.register(Language::new("Rust", vec!["rs"], c_style()));
        registry.register(Language::new(
            "Python",
            vec!["py", "pyi"],
            CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")]),
        ));
        registry.register(Language::new(
            "Ruby",
            vec!["rb"],
            CommentSyntax::new(vec!["#"], vec![("=begin", "=end")]),
        ));
        registry.register(Language::new(
            "Shell",
            vec!["sh", "bash", "zsh"],
            CommentSyntax::new(vec!["#"], vec![]),
        ));
        registry.register(Language::new(
            "SQL",
            vec!["sql"],
            CommentSyntax::new(vec!["--"], vec![("/*", "*/")]),
        ));
        registry.register(Language::new(
            "Lua",
            vec!["lua"],
            CommentSyntax::new(vec!["--"], vec![("--[[", "]]")]),
        ));
        registry.register(Language::new(
            "Haskell",
            vec!["hs"],
            CommentSyntax::new(vec!["--"], vec![("{-", "-}")]),
        ));
        registry.register(Language::new(
            "HTML",
            vec!["html", "htm"],
            CommentSyntax::new(vec![], vec![("<!--", "-->")]),
        ));
        registry.register(Language::new(
            "CSS",
            vec!["css"],
            CommentSyntax::new(vec![], vec![("/*", "*/")]),
        ));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
