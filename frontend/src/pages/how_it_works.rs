use yew::prelude::*;

use crate::components::glass_card::{GlassCard, GlassVariant};
use crate::components::tear_line::{TearColor, TearLine};
use crate::components::ticket_barcode::TicketBarcode;
use crate::config::{whatsapp_link, WhatsAppIntent};

struct Step {
    step: &'static str,
    title: &'static str,
    desc: &'static str,
    color: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        step: "1",
        title: "Message on WhatsApp",
        desc: "Send us a message like \"Watch for Fred Again under 80\". It takes just a few seconds.",
        color: "coral",
    },
    Step {
        step: "2",
        title: "We Confirm the Event",
        desc: "We search for matching events and show you the venue, date, and current ticket price.",
        color: "teal",
    },
    Step {
        step: "3",
        title: "Say \"Yes\" to Create",
        desc: "Confirm and your watch is live. We start monitoring ticket availability immediately.",
        color: "yellow",
    },
    Step {
        step: "4",
        title: "Get Instant Alerts",
        desc: "The moment tickets become available or drop below your price, you get a WhatsApp notification.",
        color: "orange",
    },
];

#[derive(Clone, Copy, PartialEq)]
enum Speaker {
    Fan,
    Bot,
}

const CONVERSATION: [(Speaker, &str); 4] = [
    (Speaker::Fan, "Watch for Fred Again under 80"),
    (Speaker::Bot, "Found: Fred Again - 3Arena, Dublin - March 15. Current price: 89.50. Watch for under 80?"),
    (Speaker::Fan, "Yes"),
    (Speaker::Bot, "Watch created! We'll alert you when tickets drop below 80. Checking continuously."),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let last = STEPS.len() - 1;

    html! {
        <div class="how-it-works-page">
            <style>
                {r#"
                    .step-card {
                        padding: 2rem;
                    }
                    .step-card.edge-coral { border-left: 2px solid #FF6B6B; }
                    .step-card.edge-teal { border-left: 2px solid #00BFA6; }
                    .step-card.edge-yellow { border-left: 2px solid #FFD93D; }
                    .step-card.edge-orange { border-left: 2px solid #FF9F43; }
                    .step-layout {
                        display: flex;
                        align-items: flex-start;
                        gap: 1.5rem;
                    }
                    .step-number {
                        flex-shrink: 0;
                        text-align: center;
                    }
                    .step-tile {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-family: 'Space Grotesk', sans-serif;
                        font-weight: 700;
                        font-size: 1.5rem;
                    }
                    .step-copy {
                        flex: 1;
                    }
                    .step-copy h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .step-copy p {
                        color: #4b5563;
                        font-size: 1.125rem;
                    }
                    .step-connector {
                        width: 2px;
                        height: 2rem;
                        margin: 1rem 0 0 2rem;
                        background: rgba(255, 107, 107, 0.2);
                    }
                    .chat {
                        max-width: 28rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .bubble {
                        max-width: 80%;
                        padding: 0.5rem 1rem;
                        border-radius: 1rem;
                        font-size: 0.875rem;
                    }
                    .bubble.fan {
                        align-self: flex-end;
                        background: rgba(0, 191, 166, 0.1);
                        color: #00BFA6;
                        border: 1px solid rgba(0, 191, 166, 0.2);
                        border-bottom-right-radius: 0.125rem;
                    }
                    .bubble.bot {
                        align-self: flex-start;
                        color: #1f2937;
                        border-bottom-left-radius: 0.125rem;
                    }
                    .demo-card .barcode-strip, .cta-card .barcode-strip, .cta-card .tear-line {
                        max-width: 20rem;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .cta-card {
                        text-align: center;
                    }
                    @media (max-width: 767px) {
                        .step-layout { flex-direction: column; }
                        .step-layout .barcode-strip { display: none; }
                    }
                "#}
            </style>

            <section class="container page-hero">
                <h1>{"How It Works"}</h1>
                <p>{"Four simple steps to never miss a sold-out gig again."}</p>
            </section>

            <section class="container narrow section">
                <div class="stack">
                    { for STEPS.iter().enumerate().map(|(i, item)| html! {
                        <GlassCard
                            class={classes!("step-card", format!("edge-{}", item.color))}
                            variant={GlassVariant::Strong}
                            ticket=true
                        >
                            <div class="step-layout">
                                <div class="step-number">
                                    <span class="ticket-label block">{"STEP"}</span>
                                    <div class={classes!("step-tile", format!("bg-{}", item.color))}>{item.step}</div>
                                    <span class="ticket-serial">{format!("TW-S{}", item.step)}</span>
                                </div>
                                <div class="step-copy">
                                    <h3>{item.title}</h3>
                                    <p>{item.desc}</p>
                                </div>
                                <TicketBarcode slim=true />
                            </div>
                            if i < last {
                                <div class="step-connector"></div>
                            }
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="container narrow section">
                <h2 class="section-title">{"Example Conversation"}</h2>
                <GlassCard class="card-body roomy demo-card holo-foil" variant={GlassVariant::Strong} ticket=true>
                    <span class="ticket-label block">{"LIVE DEMO"}</span>
                    <div class="chat">
                        { for CONVERSATION.iter().map(|(speaker, text)| {
                            let side = match speaker {
                                Speaker::Fan => "fan",
                                Speaker::Bot => "bot glass-strong",
                            };
                            html! { <div class={classes!("bubble", side)}>{*text}</div> }
                        }) }
                    </div>
                    <TearLine />
                    <TicketBarcode slim=true label="TW-DEMO-001" />
                </GlassCard>
            </section>

            <section class="container narrow section">
                <GlassCard class="card-body roomy cta-card holo-foil" variant={GlassVariant::Coral} ticket=true>
                    <span class="ticket-label block text-coral">{"GENERAL ADMISSION"}</span>
                    <h2>{"Ready to Try?"}</h2>
                    <TearLine color={TearColor::Coral} />
                    <p class="text-muted">{"It takes 30 seconds to set up your first watch."}</p>
                    <a href={whatsapp_link(WhatsAppIntent::Default)} class="cta-button large">
                        {"Start on WhatsApp"}
                    </a>
                    <TicketBarcode slim=true label="TW-HIW-CTA" />
                </GlassCard>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render_at};

    fn page() -> Html {
        html! { <HowItWorks /> }
    }

    #[tokio::test]
    async fn steps_are_joined_except_after_the_last() {
        let html = render_at("/how-it-works", page).await;
        assert_eq!(count(&html, r#"class="step-connector""#), STEPS.len() - 1);
        for n in 1..=4 {
            assert!(html.contains(&format!("TW-S{}", n)));
        }
    }

    #[tokio::test]
    async fn conversation_alternates_fan_and_bot() {
        let html = render_at("/how-it-works", page).await;
        assert_eq!(count(&html, r#"class="bubble fan""#), 2);
        assert_eq!(count(&html, r#"class="bubble bot glass-strong""#), 2);
        assert!(html.contains("Found: Fred Again - 3Arena, Dublin - March 15."));
    }

    #[tokio::test]
    async fn cta_uses_default_intent() {
        let html = render_at("/how-it-works", page).await;
        let default = format!(r#"href="{}""#, whatsapp_link(WhatsAppIntent::Default));
        assert_eq!(count(&html, &default), 1);
    }
}
