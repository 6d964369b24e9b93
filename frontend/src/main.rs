use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod meta;
mod theme;
mod components {
    pub mod background_blobs;
    pub mod footer;
    pub mod glass_card;
    pub mod logo;
    pub mod navbar;
    pub mod tear_line;
    pub mod ticket_barcode;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod how_it_works;
    pub mod not_found;
    pub mod pricing;
    pub mod termsprivacy;
    pub mod testimonials;
}
#[cfg(test)]
mod testing;

use components::{background_blobs::BackgroundBlobs, footer::Footer, navbar::Navbar};
use meta::RouteMeta;
use pages::{
    about::About,
    home::Home,
    how_it_works::HowItWorks,
    not_found::NotFound,
    pricing::Pricing,
    termsprivacy::{PrivacyPolicy, TermsOfService},
    testimonials::Testimonials,
};
use theme::GlobalStyles;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/pricing")]
    Pricing,
    #[at("/testimonials")]
    Testimonials,
    #[at("/about")]
    About,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

/// Everything that lives inside the router.
#[function_component(Shell)]
fn shell() -> Html {
    html! {
        <>
            <BackgroundBlobs />
            <Navbar />
            <RouteMeta />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_at;

    fn whole_site() -> Html {
        html! { <Shell /> }
    }

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/how-it-works"), Some(Route::HowItWorks));
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
        assert_eq!(Route::recognize("/no-such-gig"), Some(Route::NotFound));
        assert_eq!(Route::Testimonials.to_path(), "/testimonials");
    }

    #[tokio::test]
    async fn shell_wraps_the_current_page() {
        let html = render_at("/pricing", whole_site).await;
        assert!(html.contains("Simple Pricing"));
        assert!(html.contains(r#"class="site-main""#));
        assert!(html.contains("Made for Irish Music Fans"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_not_found() {
        let html = render_at("/no-such-gig", whole_site).await;
        assert!(html.contains("NO ENTRY"));
        assert!(!html.contains("Simple Pricing"));
    }
}
