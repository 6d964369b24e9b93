use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::logo::{Logo, LogoSize};
use crate::components::navbar::NAV_LINKS;
use crate::components::tear_line::{TearColor, TearLine};
use crate::components::ticket_barcode::TicketBarcode;
use crate::config::{whatsapp_display, whatsapp_link, WhatsAppIntent};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer glass-strong">
            <style>
                {r#"
                    .site-footer {
                        margin-top: 5rem;
                    }
                    .footer-body {
                        padding: 2.5rem 1rem;
                    }
                    .footer-columns {
                        margin-bottom: 2rem;
                    }
                    .footer-columns h4 {
                        font-weight: 600;
                        color: #374151;
                        margin: 0 0 0.75rem 0;
                    }
                    .footer-columns p, .footer-link {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .footer-link {
                        display: block;
                        margin-bottom: 0.5rem;
                        transition: color 0.2s ease;
                    }
                    .footer-link:hover, .footer-legal a:hover {
                        color: #FF6B6B;
                    }
                    .footer-legal {
                        border-top: 1px solid rgba(255, 107, 107, 0.1);
                        padding-top: 1.5rem;
                        text-align: center;
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .footer-legal a {
                        color: #FF8ED4;
                    }
                    .footer-barcode {
                        margin-bottom: 1rem;
                        opacity: 0.5;
                    }
                "#}
            </style>
            <div class="container">
                <TearLine color={TearColor::Coral} />
            </div>
            <div class="container footer-body">
                <div class="grid-3 footer-columns">
                    <div>
                        <Logo size={LogoSize::Small} />
                        <p>{"Instant WhatsApp alerts when concert tickets become available in Ireland."}</p>
                    </div>
                    <div>
                        <h4>{"Pages"}</h4>
                        { for NAV_LINKS.iter().map(|(route, label)| html! {
                            <Link<Route> to={route.clone()} classes="footer-link">{*label}</Link<Route>>
                        }) }
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <a href={whatsapp_link(WhatsAppIntent::Start)} class="footer-link">
                            {format!("WhatsApp: {}", whatsapp_display())}
                        </a>
                    </div>
                </div>
                <TicketBarcode class="footer-barcode" slim=true label="TÉ-2026" />
                <div class="footer-legal">
                    <p>
                        {"TicéadWatch © 2026 · Made for Irish Music Fans · "}
                        <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                        {" · "}
                        <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render_at};

    fn footer() -> Html {
        html! { <Footer /> }
    }

    #[tokio::test]
    async fn contact_link_uses_start_intent() {
        let html = render_at("/", footer).await;
        let contact = format!(r#"href="{}""#, whatsapp_link(WhatsAppIntent::Start));
        assert_eq!(count(&html, &contact), 1);
        assert!(html.contains(&format!("WhatsApp: {}", whatsapp_display())));
    }

    #[tokio::test]
    async fn links_every_page_and_both_legal_pages() {
        let html = render_at("/", footer).await;
        assert_eq!(count(&html, r#"class="footer-link""#), NAV_LINKS.len() + 1);
        assert!(html.contains(r#"href="/privacy""#));
        assert!(html.contains(r#"href="/terms""#));
        assert!(html.contains("TÉ-2026"));
    }
}
