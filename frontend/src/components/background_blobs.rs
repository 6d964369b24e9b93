use yew::prelude::*;

use crate::theme::{motion, palette};

struct Blob {
    position: &'static str,
    size: u32,
    blur: u32,
    color: &'static str,
    opacity: f32,
    animation: &'static str,
}

const BLOBS: [Blob; 5] = [
    Blob { position: "top: -15%; left: -10%;", size: 500, blur: 120, color: palette::CORAL, opacity: 0.2, animation: motion::FLOAT },
    Blob { position: "top: 25%; right: -8%;", size: 450, blur: 120, color: palette::YELLOW, opacity: 0.25, animation: motion::FLOAT_SLOW },
    Blob { position: "bottom: -10%; left: 25%;", size: 400, blur: 120, color: palette::TEAL, opacity: 0.15, animation: motion::FLOAT_SLOWER },
    Blob { position: "top: 55%; left: 5%;", size: 350, blur: 100, color: palette::PINK, opacity: 0.15, animation: motion::FLOAT_SLOW },
    Blob { position: "top: 10%; right: 20%;", size: 300, blur: 100, color: palette::ORANGE, opacity: 0.15, animation: motion::FLOAT_SLOWER },
];

fn blob_style(blob: &Blob) -> String {
    format!(
        "{} width: {size}px; height: {size}px; filter: blur({}px); background: {}; animation: {};",
        blob.position,
        blob.blur,
        palette::alpha(blob.color, blob.opacity),
        blob.animation,
        size = blob.size,
    )
}

/// Fixed layer of slow-floating colour washes behind every page.
#[function_component(BackgroundBlobs)]
pub fn background_blobs() -> Html {
    html! {
        <div class="background-blobs" aria-hidden="true">
            <style>
                {r#"
                    .background-blobs {
                        position: fixed;
                        inset: 0;
                        z-index: -10;
                        overflow: hidden;
                        background: #FFF8F0;
                    }
                    .background-blobs .blob {
                        position: absolute;
                        border-radius: 50%;
                    }
                "#}
            </style>
            { for BLOBS.iter().map(|blob| html! {
                <div class="blob" style={blob_style(blob)}></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render};

    #[test]
    fn blob_style_carries_size_and_wash() {
        let style = blob_style(&BLOBS[0]);
        assert!(style.starts_with("top: -15%; left: -10%;"));
        assert!(style.contains("width: 500px; height: 500px;"));
        assert!(style.contains("rgba(255, 107, 107, 0.2)"));
        assert!(style.contains("float 6s"));
    }

    #[tokio::test]
    async fn renders_five_blobs() {
        let html = render::<BackgroundBlobs>(|| ()).await;
        assert_eq!(count(&html, r#"class="blob""#), 5);
    }
}
