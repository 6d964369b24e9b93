use log::{warn, Level};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Number used when no override is baked in at build time.
const DEFAULT_WHATSAPP_NUMBER: &str = "353000000000";

const WHATSAPP_BASE_URL: &str = "https://wa.me";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WhatsApp number is empty")]
    EmptyNumber,
    #[error("WhatsApp number contains a non-digit character: {0:?}")]
    InvalidCharacter(char),
    #[error("WhatsApp number must have 8 to 15 digits, got {0}")]
    InvalidLength(usize),
}

/// An international phone number in the digits-only form `wa.me` expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppNumber(String);

impl WhatsAppNumber {
    /// Accepts `+353 85 123 4567` style input; spaces, dashes and a leading
    /// plus are stripped before validation.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let digits: String = raw
            .trim()
            .trim_start_matches('+')
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        if digits.is_empty() {
            return Err(ConfigError::EmptyNumber);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ConfigError::InvalidCharacter(bad));
        }
        if !(8..=15).contains(&digits.len()) {
            return Err(ConfigError::InvalidLength(digits.len()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `353851234567` -> `+353 85 123 4567`
    pub fn display(&self) -> String {
        let (country, rest) = self.0.split_at(3.min(self.0.len()));
        let mut groups = Vec::new();
        let mut rest = rest;
        if rest.len() > 7 {
            let (prefix, tail) = rest.split_at(rest.len() - 7);
            groups.push(prefix);
            rest = tail;
        }
        if rest.len() > 4 {
            let (mid, tail) = rest.split_at(rest.len() - 4);
            groups.push(mid);
            groups.push(tail);
        } else if !rest.is_empty() {
            groups.push(rest);
        }
        format!("+{} {}", country, groups.join(" "))
    }
}

static WHATSAPP_NUMBER: Lazy<WhatsAppNumber> =
    Lazy::new(|| resolve_number(option_env!("TICEADWATCH_WHATSAPP_NUMBER")));

pub fn whatsapp_number() -> &'static WhatsAppNumber {
    &WHATSAPP_NUMBER
}

fn resolve_number(configured: Option<&str>) -> WhatsAppNumber {
    let fallback = || WhatsAppNumber(DEFAULT_WHATSAPP_NUMBER.to_string());
    match configured {
        None => fallback(),
        Some(raw) => WhatsAppNumber::parse(raw).unwrap_or_else(|e| {
            warn!("Ignoring TICEADWATCH_WHATSAPP_NUMBER: {}", e);
            fallback()
        }),
    }
}

/// What the visitor wants when they hand off to WhatsApp. Each intent
/// pre-fills a different opening message for the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhatsAppIntent {
    Default,
    Start,
    Free,
    Premium,
}

impl WhatsAppIntent {
    #[cfg(test)]
    pub const ALL: [WhatsAppIntent; 4] = [
        WhatsAppIntent::Default,
        WhatsAppIntent::Start,
        WhatsAppIntent::Free,
        WhatsAppIntent::Premium,
    ];

    pub fn message(self) -> &'static str {
        match self {
            WhatsAppIntent::Default => "Hi TicéadWatch! I want to watch for tickets",
            WhatsAppIntent::Start => "Hi TicéadWatch!",
            WhatsAppIntent::Free => "Hi TicéadWatch! I want to start on the free plan",
            WhatsAppIntent::Premium => "Hi TicéadWatch! I want to upgrade to Premium",
        }
    }
}

pub fn whatsapp_link(intent: WhatsAppIntent) -> String {
    deep_link(whatsapp_number(), intent)
}

pub fn whatsapp_display() -> String {
    whatsapp_number().display()
}

fn deep_link(number: &WhatsAppNumber, intent: WhatsAppIntent) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        number.as_str(),
        urlencoding::encode(intent.message())
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_formatting() {
        let number = WhatsAppNumber::parse("+353 85-123 4567").unwrap();
        assert_eq!(number.as_str(), "353851234567");
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        assert_eq!(WhatsAppNumber::parse("  "), Err(ConfigError::EmptyNumber));
        assert_eq!(
            WhatsAppNumber::parse("353-85-CALL-ME"),
            Err(ConfigError::InvalidCharacter('C'))
        );
        assert_eq!(WhatsAppNumber::parse("3531"), Err(ConfigError::InvalidLength(4)));
        assert_eq!(
            WhatsAppNumber::parse("3538512345678901"),
            Err(ConfigError::InvalidLength(16))
        );
    }

    #[test]
    fn invalid_override_falls_back_to_default() {
        assert_eq!(resolve_number(Some("not a number")).as_str(), DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(resolve_number(None).as_str(), DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(resolve_number(Some("+353 87 765 4321")).as_str(), "353877654321");
    }

    #[test]
    fn display_groups_irish_mobile() {
        let number = WhatsAppNumber::parse("353851234567").unwrap();
        assert_eq!(number.display(), "+353 85 123 4567");
    }

    #[test]
    fn every_intent_is_a_wa_me_link_carrying_its_message() {
        let number = WhatsAppNumber::parse("353851234567").unwrap();
        for intent in WhatsAppIntent::ALL {
            let link = deep_link(&number, intent);
            let text = link
                .strip_prefix("https://wa.me/353851234567?text=")
                .expect("link should target the configured number");
            assert!(!text.contains(' '), "text must be url-encoded: {}", link);
            assert_eq!(urlencoding::decode(text).unwrap(), intent.message());
        }
    }

    #[test]
    fn intents_map_to_distinct_links() {
        let links: Vec<String> = WhatsAppIntent::ALL.iter().map(|i| whatsapp_link(*i)).collect();
        for (i, a) in links.iter().enumerate() {
            for b in links.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
