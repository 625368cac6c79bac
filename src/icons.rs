//! Glyphs used in panel titles, dialogs and the feedback line.
//!
//! Every glyph has an emoji, a Unicode and an ASCII rendition. ASCII is the default
//! since it renders on any terminal; `T` cycles through the themes at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    Emoji,
    Unicode,
    #[default]
    Ascii,
}

impl IconTheme {
    /// Ascii -> Unicode -> Emoji -> Ascii
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    InputTitle,
    ResultsTitle,
    Error,
    Info,
    Warning,
    Success,
    Analyze,
    Analyzing,
    Clear,
    ExportXlsx,
    ExportCsv,
}

impl Glyph {
    /// (emoji, unicode, ascii)
    const fn renditions(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Glyph::InputTitle => ("📝", "▶", ">"),
            Glyph::ResultsTitle => ("📊", "▤", "#"),
            Glyph::Error => ("❌", "✗", "X"),
            Glyph::Info => ("💡", "ⓘ", "i"),
            Glyph::Warning => ("⚠️", "⚠", "!"),
            Glyph::Success => ("✅", "✓", "+"),
            Glyph::Analyze => ("🔍", "◎", "?"),
            Glyph::Analyzing => ("🔄", "⟳", "..."),
            Glyph::Clear => ("🧹", "⌫", "<"),
            Glyph::ExportXlsx => ("📗", "▦", "x"),
            Glyph::ExportCsv => ("📄", "≡", "c"),
        }
    }
}

/// Resolves glyphs for the active theme. Each component holds its own copy and
/// follows `Action::CycleIconTheme`.
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = self.current_theme.next();
    }

    #[must_use]
    pub fn glyph(&self, glyph: Glyph) -> &'static str {
        let (emoji, unicode, ascii) = glyph.renditions();
        match self.current_theme {
            IconTheme::Emoji => emoji,
            IconTheme::Unicode => unicode,
            IconTheme::Ascii => ascii,
        }
    }

    pub fn input_title(&self) -> &'static str {
        self.glyph(Glyph::InputTitle)
    }

    pub fn results_title(&self) -> &'static str {
        self.glyph(Glyph::ResultsTitle)
    }

    pub fn error(&self) -> &'static str {
        self.glyph(Glyph::Error)
    }

    pub fn info(&self) -> &'static str {
        self.glyph(Glyph::Info)
    }

    pub fn warning(&self) -> &'static str {
        self.glyph(Glyph::Warning)
    }

    pub fn success(&self) -> &'static str {
        self.glyph(Glyph::Success)
    }

    pub fn analyze(&self) -> &'static str {
        self.glyph(Glyph::Analyze)
    }

    pub fn analyzing(&self) -> &'static str {
        self.glyph(Glyph::Analyzing)
    }

    pub fn clear(&self) -> &'static str {
        self.glyph(Glyph::Clear)
    }

    pub fn export_xlsx(&self) -> &'static str {
        self.glyph(Glyph::ExportXlsx)
    }

    pub fn export_csv(&self) -> &'static str {
        self.glyph(Glyph::ExportCsv)
    }
}
