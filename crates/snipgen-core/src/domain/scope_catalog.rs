//! Scope catalog: the language identifiers a snippet can be scoped to.
//!
//! # Design
//!
//! A single static table, in the same spirit as a capability registry: to
//! offer a new language, add one row. `value` is the VSCode language id
//! written into the snippet's `scope`; `editor_language` overrides the
//! language hint handed to the body editor when the editor does not know the
//! VSCode id.

/// One selectable scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeOption {
    pub label: &'static str,
    pub value: &'static str,
    pub editor_language: Option<&'static str>,
}

impl ScopeOption {
    const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            editor_language: None,
        }
    }

    const fn editor(mut self, language: &'static str) -> Self {
        self.editor_language = Some(language);
        self
    }

    /// Language hint for the body editor.
    pub fn editor_language(&self) -> &'static str {
        self.editor_language.unwrap_or(self.value)
    }
}

/// Hint used when nothing better is known.
pub const PLAINTEXT: &str = "plaintext";

static SCOPE_OPTIONS: &[ScopeOption] = &[
    ScopeOption::new("ABAP", "abap"),
    ScopeOption::new("Windows Bat", "bat"),
    ScopeOption::new("BibTeX", "bibtex").editor(PLAINTEXT),
    ScopeOption::new("Clojure", "clojure"),
    ScopeOption::new("CoffeeScript", "coffeescript").editor("coffee"),
    ScopeOption::new("C", "c"),
    ScopeOption::new("C++", "cpp"),
    ScopeOption::new("C#", "csharp"),
    ScopeOption::new("Compose", "dockercompose").editor("dockerfile"),
    ScopeOption::new("CSS", "css"),
    ScopeOption::new("CUDA C++", "cuda-cpp").editor("cpp"),
    ScopeOption::new("D", "d").editor(PLAINTEXT),
    ScopeOption::new("Dart", "dart"),
    ScopeOption::new("Delphi", "pascal"),
    ScopeOption::new("Diff", "diff").editor(PLAINTEXT),
    ScopeOption::new("Dockerfile", "dockerfile"),
    ScopeOption::new("Elixir", "elixir"),
    ScopeOption::new("Erlang", "erlang").editor(PLAINTEXT),
    ScopeOption::new("F#", "fsharp"),
    ScopeOption::new("Git Commit", "git-commit").editor(PLAINTEXT),
    ScopeOption::new("Git Rebase", "git-rebase").editor(PLAINTEXT),
    ScopeOption::new("Go", "go"),
    ScopeOption::new("GraphQL", "graphql"),
    ScopeOption::new("Groovy", "groovy").editor(PLAINTEXT),
    ScopeOption::new("Handlebars", "handlebars"),
    ScopeOption::new("Haml", "haml").editor(PLAINTEXT),
    ScopeOption::new("Haskell", "haskell").editor(PLAINTEXT),
    ScopeOption::new("HTML", "html"),
    ScopeOption::new("Ini", "ini"),
    ScopeOption::new("Java", "java"),
    ScopeOption::new("JavaScript", "javascript"),
    ScopeOption::new("JavaScript JSX", "javascriptreact").editor("javascript"),
    ScopeOption::new("JSON", "json"),
    ScopeOption::new("JSON with Comments", "jsonc").editor("json"),
    ScopeOption::new("Julia", "julia"),
    ScopeOption::new("Kotlin", "kotlin"),
    ScopeOption::new("LaTeX", "latex").editor(PLAINTEXT),
    ScopeOption::new("Less", "less"),
    ScopeOption::new("Lua", "lua"),
    ScopeOption::new("Makefile", "makefile").editor(PLAINTEXT),
    ScopeOption::new("Markdown", "markdown"),
    ScopeOption::new("Objective-C", "objective-c"),
    ScopeOption::new("Objective-C++", "objective-cpp").editor("objective-c"),
    ScopeOption::new("OCaml", "ocaml").editor(PLAINTEXT),
    ScopeOption::new("Perl", "perl"),
    ScopeOption::new("Raku", "perl6").editor("perl"),
    ScopeOption::new("PHP", "php"),
    ScopeOption::new("Plain Text", "plaintext"),
    ScopeOption::new("PowerShell", "powershell"),
    ScopeOption::new("Pug", "jade, pug").editor("pug"),
    ScopeOption::new("Python", "python"),
    ScopeOption::new("R", "r"),
    ScopeOption::new("Razor (cshtml)", "razor"),
    ScopeOption::new("Ruby", "ruby"),
    ScopeOption::new("Rust", "rust"),
    ScopeOption::new("SCSS", "scss"),
    ScopeOption::new("Sass", "sass").editor("scss"),
    ScopeOption::new("ShaderLab", "shaderlab").editor(PLAINTEXT),
    ScopeOption::new("Shell Script", "shellscript").editor("shell"),
    ScopeOption::new("Slim", "slim").editor(PLAINTEXT),
    ScopeOption::new("SQL", "sql"),
    ScopeOption::new("Stylus", "stylus").editor(PLAINTEXT),
    ScopeOption::new("Svelte", "svelte").editor("html"),
    ScopeOption::new("Swift", "swift"),
    ScopeOption::new("TeX", "tex").editor(PLAINTEXT),
    ScopeOption::new("TypeScript", "typescript"),
    ScopeOption::new("TypeScript JSX", "typescriptreact").editor("typescript"),
    ScopeOption::new("Visual Basic", "vb"),
    ScopeOption::new("Vue", "vue").editor("html"),
    ScopeOption::new("Vue HTML", "vue-html").editor("html"),
    ScopeOption::new("XML", "xml"),
    ScopeOption::new("XSL", "xsl").editor("xml"),
    ScopeOption::new("YAML", "yaml"),
];

/// Every option, in display order.
pub fn all() -> &'static [ScopeOption] {
    SCOPE_OPTIONS
}

/// Exact lookup by VSCode language id.
pub fn find(value: &str) -> Option<&'static ScopeOption> {
    SCOPE_OPTIONS.iter().find(|o| o.value == value)
}

/// Case-insensitive substring match on label or value.
pub fn search(query: &str) -> Vec<&'static ScopeOption> {
    let needle = query.to_lowercase();
    SCOPE_OPTIONS
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle) || o.value.contains(&needle))
        .collect()
}

/// Distinct editor languages worth registering, in table order.
///
/// Options that map to plain text are skipped since there is nothing to
/// highlight.
pub fn editor_languages() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for lang in SCOPE_OPTIONS.iter().map(ScopeOption::editor_language) {
        if lang != PLAINTEXT && !seen.contains(&lang) {
            seen.push(lang);
        }
    }
    seen
}
