use yew::prelude::*;

use crate::theme::palette;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    #[default]
    Default,
    Small,
}

impl LogoSize {
    fn icon_width(self) -> f64 {
        match self {
            LogoSize::Default => 28.0,
            LogoSize::Small => 22.0,
        }
    }

    fn text_class(self) -> &'static str {
        match self {
            LogoSize::Default => "logo-text",
            LogoSize::Small => "logo-text small",
        }
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct LogoProps {
    #[prop_or_default]
    pub size: LogoSize,
}

/// Ticket stub with a music note, followed by the word mark.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let width = props.size.icon_width();
    let height = width * 0.72;

    html! {
        <span class="logo">
            <svg
                width={width.to_string()}
                height={format!("{:.2}", height)}
                viewBox="0 0 56 40"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
                aria-hidden="true"
            >
                <path
                    d="M4 0h48a4 4 0 014 4v10a6 6 0 000 12v10a4 4 0 01-4 4H4a4 4 0 01-4-4V26a6 6 0 000-12V4a4 4 0 014-4z"
                    fill={palette::CORAL}
                />
                { for [2, 10, 18, 26, 34].iter().map(|y| html! {
                    <line x1="18" y1={y.to_string()} x2="18" y2={(y + 4).to_string()}
                        stroke="#fff" stroke-width="1.5" stroke-linecap="round" />
                }) }
                <circle cx="34" cy="24" r="4" fill="#fff" />
                <rect x="37.5" y="10" width="2" height="14" rx="1" fill="#fff" />
                <path d="M39.5 10c3-1 6 0 6 3s-3 3-6 2" fill="#fff" />
                <path
                    d="M9 20l1.5-3 1.5 3 3 .5-2.2 2 .6 3L10.5 24l-2.9 1.5.6-3-2.2-2z"
                    fill="#fff"
                    opacity="0.7"
                />
            </svg>
            <span class={props.size.text_class()}>{"TicéadWatch"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[tokio::test]
    async fn small_logo_uses_smaller_icon() {
        let html = render::<Logo>(|| LogoProps { size: LogoSize::Small }).await;
        assert!(html.contains(r#"width="22""#));
        assert!(html.contains(r#"height="15.84""#));
        assert!(html.contains(r#"class="logo-text small""#));
        assert!(html.contains("TicéadWatch"));
    }

    #[tokio::test]
    async fn default_logo_draws_five_perforations() {
        let html = render::<Logo>(|| LogoProps::default()).await;
        assert!(html.contains(r#"width="28""#));
        assert!(html.contains(r#"height="20.16""#));
        assert_eq!(html.matches("<line").count(), 5);
    }
}
