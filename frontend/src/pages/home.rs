use yew::prelude::*;

use crate::components::glass_card::{GlassCard, GlassVariant};
use crate::components::tear_line::{TearColor, TearLine};
use crate::components::ticket_barcode::TicketBarcode;
use crate::config::{whatsapp_link, WhatsAppIntent};

struct Feature {
    variant: GlassVariant,
    wristband: &'static str,
    title: &'static str,
    desc: &'static str,
    title_class: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        variant: GlassVariant::Coral,
        wristband: "wristband-coral",
        title: "Search Events",
        desc: "Find concerts, festivals, and events across Ireland in seconds.",
        title_class: "text-coral",
    },
    Feature {
        variant: GlassVariant::Teal,
        wristband: "wristband-teal",
        title: "Set Price Alerts",
        desc: "Watch for tickets under your budget. We track price drops for you.",
        title_class: "text-teal",
    },
    Feature {
        variant: GlassVariant::Yellow,
        wristband: "wristband-yellow",
        title: "Instant Notifications",
        desc: "Get WhatsApp alerts seconds after tickets drop or prices change.",
        title_class: "text-orange",
    },
    Feature {
        variant: GlassVariant::Pink,
        wristband: "wristband-pink",
        title: "Free to Start",
        desc: "1 active watch on free tier. Upgrade to Premium for unlimited.",
        title_class: "text-pink",
    },
];

pub struct Stat {
    pub section: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub value_class: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { section: "SECTION A", value: "500+", label: "Active Watches", value_class: "text-coral" },
    Stat { section: "SECTION B", value: "5K+", label: "Events Tracked", value_class: "text-teal" },
    Stat { section: "SECTION C", value: "100%", label: "Free Tier", value_class: "text-orange" },
];

struct Step {
    step: &'static str,
    title: &'static str,
    desc: &'static str,
    color: &'static str,
}

const STEPS: [Step; 4] = [
    Step { step: "1", title: "Message on WhatsApp", desc: "\"Watch for Fred Again tickets under €80\"", color: "bg-coral" },
    Step { step: "2", title: "We Confirm the Event", desc: "Show you venue, date, current price", color: "bg-teal" },
    Step { step: "3", title: "Say \"Yes\" to Create", desc: "Your watch is now active", color: "bg-yellow" },
    Step { step: "4", title: "Get Instant Alerts", desc: "When tickets drop, we notify you", color: "bg-orange" },
];

#[function_component(Home)]
pub fn home() -> Html {
    let start = whatsapp_link(WhatsAppIntent::Default);

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                    }
                    .home-hero .container {
                        padding-top: 5rem;
                        padding-bottom: 5rem;
                    }
                    .hero-tags {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-tags .admit {
                        color: #FF6B6B;
                        letter-spacing: 0.2em;
                    }
                    .home-hero h1 {
                        font-size: 6rem;
                        line-height: 0.95;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        color: #6b7280;
                        max-width: 42rem;
                        margin-bottom: 2.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        align-items: center;
                    }
                    .hero-barcode {
                        margin-top: 2rem;
                        opacity: 0.4;
                    }
                    .scroll-hint {
                        margin-top: 3rem;
                        text-align: center;
                        color: rgba(255, 107, 107, 0.4);
                    }
                    .home-page h2 {
                        font-size: 2.25rem;
                        margin-bottom: 3rem;
                    }
                    .feature-title {
                        font-size: 1.125rem;
                        margin-bottom: 0.5rem;
                    }
                    .feature-stub {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        text-align: center;
                    }
                    .stat-value {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-top: 0.5rem;
                    }
                    .step-card {
                        text-align: center;
                    }
                    .step-dot {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin: 0 auto 1rem auto;
                        color: #fff;
                        font-family: 'Space Grotesk', sans-serif;
                        font-weight: 700;
                        font-size: 1.125rem;
                    }
                    .cta-card {
                        text-align: center;
                    }
                    .cta-card h2 {
                        font-size: 3rem;
                    }
                    .cta-card .tear-line, .cta-card .barcode-strip {
                        max-width: 20rem;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .cta-card p {
                        color: #4b5563;
                        font-size: 1.125rem;
                    }
                    @media (max-width: 767px) {
                        .home-hero h1 { font-size: 3rem; }
                        .stat-value { font-size: 1.875rem; }
                        .cta-card h2 { font-size: 1.875rem; }
                    }
                "#}
            </style>

            <section class="home-hero">
                <div class="container">
                    <div class="hero-tags">
                        <span class="ticket-label admit">{"ADMIT ONE"}</span>
                        <span class="ticket-label">{"|"}</span>
                        <span class="ticket-label">{"Ticket alerts for Irish music fans"}</span>
                    </div>
                    <h1>
                        {"Never Miss a "}
                        <span class="text-coral">{"Sold-Out Gig"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Get instant WhatsApp alerts when concert tickets become available. Set your price, we do the rest."}
                    </p>
                    <div class="hero-actions">
                        <a href={start.clone()} class="cta-button large">{"Start Watching Now"}</a>
                        <span class="cta-note">{"Takes 30 seconds. No card needed."}</span>
                    </div>
                    <TicketBarcode slim=true label="TW-2026-SUMMER" class="hero-barcode" />
                    <div class="scroll-hint float">{"↓"}</div>
                </div>
            </section>

            <section class="container section">
                <h2>{"Why TicéadWatch?"}</h2>
                <div class="grid-2">
                    { for FEATURES.iter().map(|item| html! {
                        <GlassCard
                            class={classes!("card-body", item.wristband)}
                            variant={item.variant}
                            ticket=true
                            ticket_stub={html! {
                                <div class="feature-stub">
                                    <span class="ticket-stub-text">{item.title.to_uppercase()}</span>
                                    <TicketBarcode slim=true />
                                </div>
                            }}
                        >
                            <h3 class={classes!("feature-title", item.title_class)}>{item.title}</h3>
                            <p class="text-muted">{item.desc}</p>
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="container section">
                <GlassCard class="card-body roomy holo-foil" variant={GlassVariant::Strong} ticket=true>
                    <div class="stat-grid">
                        { for STATS.iter().map(stat_block) }
                    </div>
                    <TicketBarcode label="TW-STATS-2026" />
                </GlassCard>
            </section>

            <section class="container section">
                <h2 class="section-title">{"How It Works"}</h2>
                <div class="grid-4">
                    { for STEPS.iter().map(|item| html! {
                        <GlassCard class="card-body step-card" variant={GlassVariant::Strong} ticket=true>
                            <span class="ticket-label block">{format!("STEP {}", item.step)}</span>
                            <div class={classes!("step-dot", item.color)}>{item.step}</div>
                            <h3>{item.title}</h3>
                            <p class="text-muted">{item.desc}</p>
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="container section">
                <GlassCard class="card-body roomy cta-card holo-foil" variant={GlassVariant::Coral} ticket=true>
                    <span class="ticket-label block text-coral">{"GENERAL ADMISSION"}</span>
                    <h2>{"Ready to Never Miss a Gig?"}</h2>
                    <TearLine color={TearColor::Coral} />
                    <p>{"Join hundreds of Irish music fans who never miss sold-out tickets again."}</p>
                    <a href={start} class="cta-button large">{"Start Watching Now (Free)"}</a>
                    <p class="cta-note">{"30 seconds to set up. No credit card needed."}</p>
                    <TicketBarcode slim=true label="TW-CTA-001" />
                </GlassCard>
            </section>
        </div>
    }
}

pub fn stat_block(stat: &Stat) -> Html {
    html! {
        <div>
            <span class="ticket-label block">{stat.section}</span>
            <div class={classes!("stat-value", stat.value_class)}>{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render_at};

    fn home() -> Html {
        html! { <Home /> }
    }

    #[tokio::test]
    async fn every_cta_points_at_default_intent() {
        let html = render_at("/", home).await;
        let default = format!(r#"href="{}""#, whatsapp_link(WhatsAppIntent::Default));
        assert_eq!(count(&html, &default), 2);
        assert_eq!(count(&html, "https://wa.me/"), 2);
    }

    #[tokio::test]
    async fn feature_cards_carry_uppercase_stubs() {
        let html = render_at("/", home).await;
        assert_eq!(count(&html, r#"class="ticket-stub""#), FEATURES.len());
        for feature in FEATURES.iter() {
            assert!(html.contains(&feature.title.to_uppercase()));
            assert!(html.contains(feature.desc));
        }
    }

    #[tokio::test]
    async fn stats_and_steps_render_in_order() {
        let html = render_at("/", home).await;
        let positions: Vec<usize> = ["500+", "5K+", "100%"]
            .iter()
            .map(|v| html.find(v).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for n in 1..=4 {
            assert!(html.contains(&format!("STEP {}", n)));
        }
    }
}
