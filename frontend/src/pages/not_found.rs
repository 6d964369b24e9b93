use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::glass_card::{GlassCard, GlassVariant};
use crate::components::tear_line::{TearColor, TearLine};
use crate::components::ticket_barcode::TicketBarcode;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="container narrow section not-found">
            <style>
                {r#"
                    .not-found {
                        text-align: center;
                        padding-top: 6rem;
                    }
                    .not-found .code {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 4.5rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .not-found .barcode-strip {
                        max-width: 16rem;
                        margin: 1.5rem auto 0 auto;
                    }
                "#}
            </style>
            <GlassCard class="card-body roomy" variant={GlassVariant::Coral} ticket=true hover=false>
                <span class="ticket-label block text-coral">{"NO ENTRY"}</span>
                <p class="code text-coral">{"404"}</p>
                <h1>{"This gig doesn't exist"}</h1>
                <TearLine color={TearColor::Coral} />
                <p class="text-muted">{"The page you're after has moved or was never on the bill."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    {"Back to Home"}
                </Link<Route>>
                <TicketBarcode slim=true label="TW-404" />
            </GlassCard>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{href_of, render_at};

    #[tokio::test]
    async fn links_back_home() {
        let html = render_at("/404", || html! { <NotFound /> }).await;
        assert!(html.contains("404"));
        assert_eq!(href_of(&html, "Back to Home").as_deref(), Some("/"));
    }
}
