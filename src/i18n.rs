//! Display strings for every supported language

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::BalloonColor;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
    Ar,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Tr, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::Ar => "ar",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Tr => &TR,
            Language::Ar => &AR,
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownLanguage(s.to_string()))
    }
}

/// Menu and overlay text for one language
#[derive(Debug)]
pub struct Strings {
    pub start_game: &'static str,
    pub settings: &'static str,
    pub exit: &'static str,
    pub apply_settings: &'static str,
    pub back: &'static str,
    pub score: &'static str,
    pub game_over: &'static str,
    pub restart_hint: &'static str,
    pub select_language: &'static str,
    pub select_colors: &'static str,
    pub error_no_colors: &'static str,
    pub goodbye: &'static str,
    pub mixed: &'static str,
    /// Indexed like `BalloonColor::ALL`
    colors: [&'static str; 6],
}

impl Strings {
    pub fn color_name(&self, color: BalloonColor) -> &'static str {
        let index = BalloonColor::ALL
            .iter()
            .position(|c| *c == color)
            .unwrap_or(0);
        self.colors[index]
    }

    /// "Score: 12"
    pub fn score_line(&self, score: u64) -> String {
        format!("{}: {}", self.score, score)
    }

    /// "Game Over! Your score is: 12"
    pub fn game_over_line(&self, score: u64) -> String {
        format!("{} {}", self.game_over, score)
    }
}

static EN: Strings = Strings {
    start_game: "Start Game",
    settings: "Settings",
    exit: "Exit",
    apply_settings: "Apply",
    back: "Back",
    score: "Score",
    game_over: "Game Over! Your score is:",
    restart_hint: "Press Start Game to play again.",
    select_language: "Select Language:",
    select_colors: "Select Balloon Colors:",
    error_no_colors: "Please select at least one balloon color.",
    goodbye: "Goodbye!",
    mixed: "Mixed",
    colors: ["Red", "Blue", "Green", "Yellow", "Orange", "Purple"],
};

static TR: Strings = Strings {
    start_game: "Oyuna Başla",
    settings: "Ayarlar",
    exit: "Çıkış",
    apply_settings: "Uygula",
    back: "Geri",
    score: "Skor",
    game_over: "Oyun Bitti! Skorunuz:",
    restart_hint: "Tekrar oynamak için Oyuna Başla'ya basın.",
    select_language: "Dil Seçin:",
    select_colors: "Balon Renklerini Seçin:",
    error_no_colors: "Lütfen en az bir balon rengi seçin.",
    goodbye: "Hoşça kal!",
    mixed: "Karışık",
    colors: ["Kırmızı", "Mavi", "Yeşil", "Sarı", "Turuncu", "Mor"],
};

static AR: Strings = Strings {
    start_game: "ابدأ اللعبة",
    settings: "الإعدادات",
    exit: "الخروج",
    apply_settings: "تطبيق",
    back: "عودة",
    score: "النتيجة",
    game_over: "انتهت اللعبة! نتيجتك:",
    restart_hint: "اضغط ابدأ اللعبة للعب مرة أخرى.",
    select_language: "اختر اللغة:",
    select_colors: "اختر ألوان البالونات:",
    error_no_colors: "يرجى اختيار لون واحد على الأقل للبالونات.",
    goodbye: "وداعاً!",
    mixed: "مختلط",
    colors: ["أحمر", "أزرق", "أخضر", "أصفر", "برتقالي", "بنفسجي"],
};
