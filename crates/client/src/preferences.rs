//! Language and theme, resolved once per render and passed down explicitly.

pub const LANG_KEY: &str = "lang";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// Stored choice if valid, else the first `Accept-Language` tag when it is Spanish or
    /// French, else English.
    pub fn detect(stored: Option<&str>, accept_language: Option<&str>) -> Self {
        if let Some(lang) = stored.and_then(Language::parse) {
            return lang;
        }

        accept_language
            .and_then(|header| header.split(',').next())
            .and_then(|tag| tag.trim().get(..2))
            .and_then(Language::parse)
            .filter(|lang| *lang != Language::En)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: ThemeMode,
    /// Client-reported `prefers-color-scheme: dark`.
    pub system_prefers_dark: bool,
}

impl Preferences {
    pub fn resolve(
        stored_lang: Option<&str>,
        stored_theme: Option<&str>,
        accept_language: Option<&str>,
        prefers_color_scheme: Option<&str>,
    ) -> Self {
        Self {
            language: Language::detect(stored_lang, accept_language),
            theme: stored_theme.and_then(ThemeMode::parse).unwrap_or_default(),
            system_prefers_dark: prefers_color_scheme
                .map(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
                .unwrap_or(false),
        }
    }

    pub fn is_dark(&self) -> bool {
        match self.theme {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => self.system_prefers_dark,
        }
    }
}
