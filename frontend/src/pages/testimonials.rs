use yew::prelude::*;

use crate::components::glass_card::{GlassCard, GlassVariant};
use crate::components::tear_line::{TearColor, TearLine};
use crate::components::ticket_barcode::TicketBarcode;
use crate::config::{whatsapp_link, WhatsAppIntent};
use crate::pages::home::{stat_block, Stat};

struct Testimonial {
    name: &'static str,
    location: &'static str,
    quote: &'static str,
    rating: u8,
    wristband: &'static str,
    variant: GlassVariant,
}

const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah",
        location: "Dublin",
        quote: "Finally got tickets to Electric Picnic! TicéadWatch saved me.",
        rating: 5,
        wristband: "wristband-coral",
        variant: GlassVariant::Coral,
    },
    Testimonial {
        name: "Liam",
        location: "Cork",
        quote: "Best 4.99 I've spent. Been to 5 gigs I thought were sold out.",
        rating: 5,
        wristband: "wristband-pink",
        variant: GlassVariant::Pink,
    },
    Testimonial {
        name: "Emma",
        location: "Galway",
        quote: "Works exactly as promised. No spam, just the alerts I need.",
        rating: 5,
        wristband: "wristband-teal",
        variant: GlassVariant::Strong,
    },
    Testimonial {
        name: "Cian",
        location: "Limerick",
        quote: "Set it up in under a minute. Got tickets to Fontaines D.C. the next day.",
        rating: 5,
        wristband: "wristband-orange",
        variant: GlassVariant::Teal,
    },
    Testimonial {
        name: "Aoife",
        location: "Waterford",
        quote: "So simple to use. Just message and done. Love that it uses WhatsApp.",
        rating: 5,
        wristband: "wristband-coral",
        variant: GlassVariant::Strong,
    },
    Testimonial {
        name: "Ronan",
        location: "Belfast",
        quote: "Premium is worth every cent. I have 8 watches running right now.",
        rating: 5,
        wristband: "wristband-yellow",
        variant: GlassVariant::Yellow,
    },
];

const STATS: [Stat; 3] = [
    Stat { section: "SECTION A", value: "500+", label: "Active Watches", value_class: "text-coral" },
    Stat { section: "SECTION B", value: "5K+", label: "Events Tracked", value_class: "text-teal" },
    Stat { section: "SECTION C", value: "98%", label: "Satisfaction Rate", value_class: "text-orange" },
];

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub count: u8,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", props.count)}>
            { for (0..props.count).map(|_| html! { <span class="star">{"★"}</span> }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div class="testimonials-page">
            <style>
                {r#"
                    .stars {
                        display: flex;
                        gap: 0.25rem;
                        margin-bottom: 0.75rem;
                        color: #FF9F43;
                    }
                    .quote {
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .reviewer {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .reviewer p {
                        font-weight: 700;
                        color: #111827;
                        margin: 0;
                    }
                    .reviewer .location {
                        font-weight: 400;
                        color: #9ca3af;
                    }
                    .testimonials-page .stat-value {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .testimonials-page .stat-label {
                        color: #9ca3af;
                    }
                    .stat-card, .cta-card {
                        text-align: center;
                    }
                    .cta-card .tear-line, .cta-card .barcode-strip {
                        max-width: 20rem;
                        margin-left: auto;
                        margin-right: auto;
                    }
                "#}
            </style>

            <section class="container page-hero">
                <h1>{"Loved by Irish Music Fans"}</h1>
                <p>{"See what our users have to say about TicéadWatch."}</p>
            </section>

            <section class="container section">
                <div class="grid-3">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <GlassCard class={classes!("card-body", "review", t.wristband)} variant={t.variant} ticket=true>
                            <span class="ticket-label block">{"FAN REVIEW"}</span>
                            <StarRating count={t.rating} />
                            <p class="quote">{format!("“{}”", t.quote)}</p>
                            <TearLine />
                            <div class="reviewer">
                                <p>{t.name}{", "}<span class="location">{t.location}</span></p>
                                <TicketBarcode slim=true />
                            </div>
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="container narrow section">
                <div class="grid-3">
                    { for STATS.iter().map(|stat| html! {
                        <GlassCard class="card-body roomy stat-card" variant={GlassVariant::Strong} ticket=true>
                            { stat_block(stat) }
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="container narrow section">
                <GlassCard class="card-body roomy cta-card holo-foil" variant={GlassVariant::Coral} ticket=true>
                    <span class="ticket-label block text-coral">{"GENERAL ADMISSION"}</span>
                    <h2>{"Join the Community"}</h2>
                    <TearLine color={TearColor::Coral} />
                    <p class="text-muted">{"Hundreds of Irish music fans already trust TicéadWatch."}</p>
                    <a href={whatsapp_link(WhatsAppIntent::Default)} class="cta-button large">
                        {"Start Watching Now"}
                    </a>
                    <TicketBarcode slim=true label="TW-FANS-001" />
                </GlassCard>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render, render_at};

    fn page() -> Html {
        html! { <Testimonials /> }
    }

    #[tokio::test]
    async fn star_rating_draws_one_symbol_per_point() {
        for n in [0u8, 1, 3, 5] {
            let html = render::<StarRating>(move || StarRatingProps { count: n }).await;
            assert_eq!(count(&html, "★"), n as usize);
        }
    }

    #[tokio::test]
    async fn every_review_shows_its_rating() {
        let html = render_at("/testimonials", page).await;
        let reviews: Vec<&str> = html.split("FAN REVIEW").skip(1).collect();
        assert_eq!(reviews.len(), TESTIMONIALS.len());
        for (review, t) in reviews.iter().zip(TESTIMONIALS.iter()) {
            let stars = &review[..review.find("</div>").unwrap()];
            assert_eq!(count(stars, "★"), t.rating as usize, "{}", t.name);
            assert!(review.contains(t.location));
        }
    }

    #[tokio::test]
    async fn stats_and_cta() {
        let html = render_at("/testimonials", page).await;
        assert!(html.contains("98%"));
        assert!(html.contains("Satisfaction Rate"));
        assert_eq!(
            crate::testing::href_of(&html, "Start Watching Now"),
            Some(whatsapp_link(WhatsAppIntent::Default))
        );
    }
}
