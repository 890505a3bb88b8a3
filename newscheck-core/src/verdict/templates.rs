use super::{Locale, Verdict};
use crate::classifier::Signals;

pub(super) fn analysis(verdict: &Verdict, locale: Locale) -> String {
    match verdict {
        Verdict::AuthenticFromCache { record } => match locale {
            Locale::En => format!(
                "This content matches verified news from {}, a trusted source with high reliability.",
                record.source_name_en
            ),
            Locale::Ta => format!(
                "இந்த உள்ளடக்கம் {} என்ற நம்பகமான ஆதாரத்தில் இருந்து சரிபார்க்கப்பட்ட செய்திகளுடன் பொருந்துகிறது.",
                record.source_name_ta
            ),
        },
        Verdict::FakeHeuristic { signals, .. } => fake_analysis(signals, locale),
        Verdict::AuthenticHeuristic { signals, .. } => authentic_analysis(signals, locale),
        Verdict::UncertainHeuristic { .. } => match locale {
            Locale::En => "Unable to definitively classify this content. We recommend verifying with multiple trusted news sources before sharing.".to_string(),
            Locale::Ta => "இந்த உள்ளடக்கத்தை திட்டவட்டமாக வகைப்படுத்த முடியவில்லை. பகிர்வதற்கு முன் பல நம்பகமான செய்தி ஆதாரங்களுடன் சரிபார்க்க பரிந்துரைக்கிறோம்.".to_string(),
        },
    }
}

fn fake_analysis(signals: &Signals, locale: Locale) -> String {
    let mut reasons: Vec<&str> = Vec::new();
    if signals.has_emotional_language {
        reasons.push(match locale {
            Locale::En => "excessive emotional language",
            Locale::Ta => "அதிகப்படியான உணர்ச்சி மொழி",
        });
    }
    if signals.is_short_and_vague {
        reasons.push(match locale {
            Locale::En => "vague or incomplete information",
            Locale::Ta => "தெளிவற்ற அல்லது முழுமையற்ற தகவல்",
        });
    }
    if !signals.fake_phrases.is_empty() {
        reasons.push(match locale {
            Locale::En => "sensationalist wording",
            Locale::Ta => "பரபரப்பான சொற்கள்",
        });
    }
    if !signals.has_proper_sources {
        reasons.push(match locale {
            Locale::En => "lack of credible sources",
            Locale::Ta => "நம்பகமான ஆதாரங்கள் இல்லை",
        });
    }

    let reasons = reasons.join(", ");
    match locale {
        Locale::En => format!(
            "This content exhibits characteristics common in misinformation: {reasons}. We recommend verifying with trusted news outlets."
        ),
        Locale::Ta => format!(
            "இந்த உள்ளடக்கம் தவறான தகவல்களில் பொதுவான பண்புகளை வெளிப்படுத்துகிறது: {reasons}. நம்பகமான செய்தி நிறுவனங்களுடன் சரிபார்க்க பரிந்துரைக்கிறோம்."
        ),
    }
}

fn authentic_analysis(signals: &Signals, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "This content shows indicators of reliable reporting: {}balanced language, and verifiable claims. However, always cross-reference with multiple trusted sources.",
            if signals.has_proper_sources { "includes proper sources, " } else { "" }
        ),
        Locale::Ta => format!(
            "இந்த உள்ளடக்கம் நம்பகமான அறிக்கையின் குறிகாட்டிகளைக் காட்டுகிறது: {}சமநிலையான மொழி மற்றும் சரிபார்க்கக்கூடிய கூற்றுகள். எனினும், எப்போதும் பல நம்பகமான ஆதாரங்களுடன் குறுக்கு குறிப்பு.",
            if signals.has_proper_sources { "சரியான ஆதாரங்களை உள்ளடக்கியது, " } else { "" }
        ),
    }
}
