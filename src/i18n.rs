//! Static translation table and language metadata.
//!
//! Every language carries a complete [`Translations`] record, so switching
//! language swaps all visible strings at once and there is nothing to fall
//! back to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fa,
    Ps,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub company_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub contact: &'static str,
    pub whatsapp: &'static str,
    pub rights: &'static str,
    pub building: &'static str,
    pub modal: ModalTranslations,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ModalTranslations {
    pub title: &'static str,
    pub name_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub cancel: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Facebook",
        url: "https://facebook.com/zabahsoft",
    },
    SocialLink {
        name: "Instagram",
        url: "https://instagram.com/zabahsoft",
    },
    SocialLink {
        name: "Website",
        url: "https://zabahsoft.com",
    },
];

pub const WHATSAPP_URL: &str = "https://wa.me/93792929814";

/// Shown in the status badge regardless of language.
pub const STATUS_BADGE: &str = "System Maintenance";

static EN: Translations = Translations {
    company_name: "ZabahSoft",
    title: "Under Construction",
    subtitle: "We are crafting a digital experience for",
    cta: "Build with us",
    contact: "Get in Touch",
    whatsapp: "WhatsApp",
    rights: "© 2024 ZabahSoft. All rights reserved.",
    building: "Initializing system...",
    modal: ModalTranslations {
        title: "Start a Project",
        name_placeholder: "Your Name",
        message_placeholder: "Tell us about your project...",
        send: "Send Request",
        cancel: "Cancel",
    },
};

static FA: Translations = Translations {
    company_name: "ظبه سافت",
    title: "در حال ساخت",
    subtitle: "ما در حال خلق تجربه ای دیجیتال هستیم برای",
    cta: "با ما بسازید",
    contact: "تماس با ما",
    whatsapp: "واتساپ",
    rights: "© ۲۰۲۴ ظبه سافت. تمامی حقوق محفوظ است.",
    building: "در حال راه اندازی سیستم...",
    modal: ModalTranslations {
        title: "شروع پروژه",
        name_placeholder: "نام شما",
        message_placeholder: "درباره پروژه خود بگویید...",
        send: "ارسال درخواست",
        cancel: "انصراف",
    },
};

static PS: Translations = Translations {
    company_name: "ظبه سافت",
    title: "تر کار لاندې",
    subtitle: "موږ د یوې ډیجیټل تجربې په جوړولو بوخت یو د",
    cta: "موږ سره جوړ کړئ",
    contact: "اړیکه ونیسئ",
    whatsapp: "واټساپ",
    rights: "© ۲۰۲۴ ظبه سافت. ټول حقونه خوندي دي.",
    building: "د سیسټم پیل کول...",
    modal: ModalTranslations {
        title: "پروژه پیل کړئ",
        name_placeholder: "ستاسو نوم",
        message_placeholder: "د خپلې پروژې په اړه ووایاست...",
        send: "غوښتنه واستوئ",
        cancel: "لغوه کول",
    },
};

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fa, Language::Ps];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
            Language::Ps => "ps",
        }
    }

    /// Label used in the language selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fa => "FA",
            Language::Ps => "PS",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Fa | Language::Ps => TextDirection::Rtl,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Fa => &FA,
            Language::Ps => &PS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown language code `{0}`")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}
