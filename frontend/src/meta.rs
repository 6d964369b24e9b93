use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const SITE_NAME: &str = "TicéadWatch";

pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn page_meta(route: &Route) -> PageMeta {
    match route {
        Route::Home => PageMeta {
            title: "Never Miss a Sold Out Gig in Ireland",
            description: "Get instant WhatsApp alerts when concert tickets become available. Watch for your favorite artists, set your price limit, and we'll notify you the moment tickets drop.",
        },
        Route::HowItWorks => PageMeta {
            title: "How It Works",
            description: "Four simple steps to never miss a sold-out gig again: message us on WhatsApp, confirm the event, and get instant alerts.",
        },
        Route::Pricing => PageMeta {
            title: "Pricing",
            description: "Start free with 1 active watch. Upgrade to Premium for unlimited watches at €4.99/month.",
        },
        Route::Testimonials => PageMeta {
            title: "Testimonials",
            description: "See what Irish music fans say about TicéadWatch ticket alerts.",
        },
        Route::About => PageMeta {
            title: "About",
            description: "Built by music fans, for music fans. Right here in Ireland.",
        },
        Route::Privacy => PageMeta {
            title: "Privacy Policy",
            description: "How TicéadWatch collects, uses and protects your personal data under GDPR.",
        },
        Route::Terms => PageMeta {
            title: "Terms of Service",
            description: "The terms that apply when you use the TicéadWatch ticket alert service.",
        },
        Route::NotFound => PageMeta {
            title: "Page Not Found",
            description: "This page doesn't exist.",
        },
    }
}

pub fn document_title(route: &Route) -> String {
    format!("{} - {}", SITE_NAME, page_meta(route).title)
}

/// Keeps `<title>` and the description meta tag in step with the current
/// route, and starts each page at the top.
#[function_component(RouteMeta)]
pub fn route_meta() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with_deps(
        move |route| {
            let meta = page_meta(route);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&document_title(route));
                let description = document
                    .query_selector("meta[name=\"description\"]")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlMetaElement>().ok());
                if let Some(tag) = description {
                    tag.set_content(meta.description);
                }
            }
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            debug!("Page meta set for {}", meta.title);
            || ()
        },
        route,
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_prefixed_with_site_name() {
        assert_eq!(
            document_title(&Route::Home),
            "TicéadWatch - Never Miss a Sold Out Gig in Ireland"
        );
        assert_eq!(document_title(&Route::Pricing), "TicéadWatch - Pricing");
    }

    #[test]
    fn every_route_has_a_description() {
        for route in Route::routes().iter().filter_map(|path| Route::recognize(path)) {
            assert!(!page_meta(&route).description.is_empty());
        }
    }
}
