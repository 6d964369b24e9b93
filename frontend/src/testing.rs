//! Server-side rendering helpers so components can be asserted on as HTML
//! strings without a browser.

use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

pub async fn render<C>(make_props: impl FnOnce() -> C::Properties + Send + 'static) -> String
where
    C: BaseComponent,
{
    ServerRenderer::<C>::with_props(make_props)
        .hydratable(false)
        .render()
        .await
}

#[derive(Properties)]
pub struct RoutedProps {
    pub path: String,
    pub content: fn() -> Html,
}

// Routed is only ever mounted once per render, so the path is enough.
impl PartialEq for RoutedProps {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    let history = MemoryHistory::new();
    history.push(props.path.as_str());

    html! {
        <Router history={AnyHistory::from(history)}>
            { (props.content)() }
        </Router>
    }
}

/// Renders `content` inside a router whose current location is `path`.
pub async fn render_at(path: &str, content: fn() -> Html) -> String {
    let path = path.to_string();
    render::<Routed>(move || RoutedProps { path, content }).await
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// `href` of the anchor whose text is exactly `label`.
pub fn href_of(html: &str, label: &str) -> Option<String> {
    let end = html.find(&format!(">{}</a>", label))?;
    let start = html[..end].rfind("<a ")?;
    let tag = &html[start..end];
    let value = &tag[tag.find("href=\"")? + "href=\"".len()..];
    Some(value[..value.find('"')?].to_string())
}
