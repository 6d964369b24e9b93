use yew::prelude::*;

use crate::components::glass_card::{GlassCard, GlassVariant};
use crate::components::tear_line::{TearColor, TearLine};
use crate::components::ticket_barcode::TicketBarcode;
use crate::config::{whatsapp_link, WhatsAppIntent};

#[derive(Clone, Copy, PartialEq)]
pub enum Mark {
    Included,
    Highlight,
    Excluded,
}

pub struct Tier {
    pub label: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub features: &'static [(Mark, &'static str)],
    pub cta: &'static str,
    pub intent: WhatsAppIntent,
    pub serial: &'static str,
}

pub const FREE: Tier = Tier {
    label: "FREE ADMISSION",
    name: "Free",
    tagline: "Perfect for getting started",
    price: "€0",
    features: &[
        (Mark::Included, "1 active watch"),
        (Mark::Included, "Unlimited searches"),
        (Mark::Included, "Instant alerts"),
        (Mark::Excluded, "Multiple watches"),
    ],
    cta: "Start Free",
    intent: WhatsAppIntent::Free,
    serial: "TW-FREE-TIER",
};

pub const PREMIUM: Tier = Tier {
    label: "VIP ACCESS",
    name: "Premium",
    tagline: "For serious music fans",
    price: "€4.99",
    features: &[
        (Mark::Included, "Unlimited watches"),
        (Mark::Included, "Unlimited searches"),
        (Mark::Included, "Instant alerts"),
        (Mark::Highlight, "Priority support"),
    ],
    cta: "Upgrade Now",
    intent: WhatsAppIntent::Premium,
    serial: "TW-PREMIUM-VIP",
};

const FAQS: [(&str, &str); 4] = [
    ("Can I cancel anytime?", "Yes, you can cancel your Premium subscription at any time. No commitment required."),
    ("How fast are the alerts?", "We check continuously and send WhatsApp alerts within seconds of tickets becoming available."),
    ("What events do you cover?", "We cover concerts, festivals, and live events across Ireland from major ticketing platforms."),
    ("Is it really free to start?", "Absolutely. The free tier gives you 1 active watch with instant alerts at no cost."),
];

fn feature_row(mark: Mark, text: &'static str) -> Html {
    let (symbol, class) = match mark {
        Mark::Included => ("✓", "mark included"),
        Mark::Highlight => ("✓", "mark highlight"),
        Mark::Excluded => ("✗", "mark excluded"),
    };
    html! {
        <li class={classes!("feature", (mark == Mark::Excluded).then(|| "off"))}>
            <span class={class}>{symbol}</span>
            {text}
        </li>
    }
}

fn tier_card(tier: &Tier, featured: bool) -> Html {
    let (variant, price_class, button_class, tear) = if featured {
        (GlassVariant::Coral, "tier-price text-coral", "cta-button block", TearColor::Coral)
    } else {
        (GlassVariant::Strong, "tier-price", "cta-button block muted", TearColor::Default)
    };

    html! {
        <GlassCard
            class={classes!("card-body", "roomy", featured.then(|| "featured holo-foil"))}
            variant={variant}
            ticket=true
        >
            <span class={classes!("ticket-label", "block", featured.then(|| "text-coral"))}>{tier.label}</span>
            <h3 class="tier-name">{tier.name}</h3>
            <p class="text-faint">{tier.tagline}</p>
            <div class={price_class}>
                {tier.price}<span class="period">{"/month"}</span>
            </div>
            <TearLine color={tear} />
            <ul class="tier-features">
                { for tier.features.iter().map(|(mark, text)| feature_row(*mark, *text)) }
            </ul>
            <a href={whatsapp_link(tier.intent)} class={button_class}>{tier.cta}</a>
            <TicketBarcode slim=true label={tier.serial} />
        </GlassCard>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-page">
            <style>
                {r#"
                    .pricing-page .tier-name {
                        font-size: 1.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .tier-price {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin: 1rem 0;
                    }
                    .tier-price .period {
                        font-size: 1.125rem;
                        font-weight: 400;
                        color: #9ca3af;
                    }
                    .tier-features {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 2rem 0;
                    }
                    .tier-features .feature {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #4b5563;
                        margin-bottom: 0.75rem;
                    }
                    .tier-features .feature.off {
                        color: #9ca3af;
                    }
                    .mark {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.875rem;
                        font-weight: 700;
                    }
                    .mark.included { background: rgba(0, 191, 166, 0.1); color: #00BFA6; }
                    .mark.highlight { background: rgba(255, 159, 67, 0.1); color: #FF9F43; }
                    .mark.excluded { background: #e5e7eb; color: #9ca3af; }
                    .tier-wrapper {
                        position: relative;
                    }
                    .tier-badge {
                        position: absolute;
                        top: -0.75rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        background: #FF8ED4;
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.75rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        padding: 0.25rem 1.25rem;
                        border-radius: 9999px;
                        white-space: nowrap;
                    }
                    .featured {
                        box-shadow: 0 0 0 2px rgba(255, 107, 107, 0.3);
                    }
                    .pricing-page .barcode-strip {
                        margin-top: 1.5rem;
                    }
                    .faq-card h3 {
                        margin-bottom: 0.5rem;
                    }
                    .faq-card p {
                        color: #4b5563;
                        margin: 0;
                    }
                "#}
            </style>

            <section class="container page-hero">
                <h1>{"Simple Pricing"}</h1>
                <p>{"Start free, upgrade when you need more. No hidden fees."}</p>
            </section>

            <section class="container narrow section">
                <div class="grid-2">
                    <div class="tier free">{ tier_card(&FREE, false) }</div>
                    <div class="tier premium tier-wrapper">
                        <div class="tier-badge">{"SOLD OUT SAVER"}</div>
                        { tier_card(&PREMIUM, true) }
                    </div>
                </div>
            </section>

            <section class="container narrow section">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <div class="stack">
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <GlassCard class="card-body faq-card" variant={GlassVariant::Strong}>
                            <h3>{*question}</h3>
                            <TearLine />
                            <p>{*answer}</p>
                        </GlassCard>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, href_of, render_at};

    fn page() -> Html {
        html! { <Pricing /> }
    }

    fn tier_section<'a>(html: &'a str, class: &str) -> &'a str {
        let start = html.find(&format!(r#"class="tier {}"#, class)).unwrap();
        let rest = &html[start + 1..];
        let end = rest.find(r#"class="tier "#).map(|e| start + 1 + e).unwrap_or(html.len());
        &html[start..end]
    }

    fn rendered_features(section: &str) -> Vec<(bool, String)> {
        section
            .split(r#"<li class="feature"#)
            .skip(1)
            .map(|li| {
                let included = !li.starts_with(" off");
                let body = &li[li.find("</span>").unwrap() + "</span>".len()..];
                (included, body[..body.find("</li>").unwrap()].to_string())
            })
            .collect()
    }

    #[tokio::test]
    async fn free_tier_lists_exactly_its_features() {
        let html = render_at("/pricing", page).await;
        assert_eq!(
            rendered_features(tier_section(&html, "free")),
            vec![
                (true, "1 active watch".to_string()),
                (true, "Unlimited searches".to_string()),
                (true, "Instant alerts".to_string()),
                (false, "Multiple watches".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn premium_tier_lists_exactly_its_features() {
        let html = render_at("/pricing", page).await;
        let premium = tier_section(&html, "premium");
        assert_eq!(
            rendered_features(premium),
            vec![
                (true, "Unlimited watches".to_string()),
                (true, "Unlimited searches".to_string()),
                (true, "Instant alerts".to_string()),
                (true, "Priority support".to_string()),
            ]
        );
        assert!(premium.contains("SOLD OUT SAVER"));
        assert!(premium.contains("€4.99"));
    }

    #[tokio::test]
    async fn each_tier_button_uses_its_own_intent() {
        let html = render_at("/pricing", page).await;
        assert_eq!(href_of(&html, "Upgrade Now"), Some(whatsapp_link(WhatsAppIntent::Premium)));
        assert_eq!(href_of(&html, "Start Free"), Some(whatsapp_link(WhatsAppIntent::Free)));
        assert!(!html.contains(&whatsapp_link(WhatsAppIntent::Default)));
    }

    #[tokio::test]
    async fn faq_renders_every_question() {
        let html = render_at("/pricing", page).await;
        assert_eq!(count(&html, "card-body faq-card"), FAQS.len());
        for (question, _) in FAQS.iter() {
            assert!(html.contains(question));
        }
    }
}
