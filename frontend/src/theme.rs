//! Design tokens and the global stylesheet built from them.
//!
//! Components only ever refer to the class names defined here (`glass-*`,
//! `ticket-*`, `tear-line*`, `barcode*`, `wristband-*`); colours and timings
//! live in the token modules so the stylesheet is the single place they are
//! spelled out.

use log::error;
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;

pub mod palette {
    pub const CORAL: &str = "#FF6B6B";
    pub const TEAL: &str = "#00BFA6";
    pub const YELLOW: &str = "#FFD93D";
    pub const PINK: &str = "#FF8ED4";
    pub const ORANGE: &str = "#FF9F43";
    pub const SAND: &str = "#FFF8F0";
    pub const CREAM: &str = "#FFFDF7";

    pub const INK: &str = "#1f2937";
    pub const HEADING: &str = "#111827";
    pub const MUTED: &str = "#6b7280";
    pub const FAINT: &str = "#9ca3af";

    /// `rgba()` for one of the hex tokens above.
    pub fn alpha(hex: &str, a: f32) -> String {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2).unwrap_or("00"), 16).unwrap_or(0);
        format!("rgba({}, {}, {}, {})", channel(0), channel(2), channel(4), a)
    }
}

pub mod fonts {
    pub const DISPLAY: &str = "'Space Grotesk', sans-serif";
    pub const BODY: &str = "'Inter', sans-serif";
}

pub mod motion {
    pub const FLOAT: &str = "float 6s ease-in-out infinite";
    pub const FLOAT_SLOW: &str = "float 9s ease-in-out infinite";
    pub const FLOAT_SLOWER: &str = "float 13s ease-in-out infinite";
    pub const HOLO: &str = "holo-shift 8s ease-in-out infinite";
}

/// Bars drawn by a barcode strip; `true` marks a wide bar. Every third bar is
/// wide, same as the social preview image.
pub fn barcode_bars(count: usize) -> impl Iterator<Item = bool> {
    (0..count).map(|i| i % 3 == 0)
}

pub fn global_css() -> String {
    use palette::*;

    format!(
        r#"
        html, body {{
            margin: 0;
            padding: 0;
        }}
        body {{
            font-family: {body};
            background: {sand};
            color: {ink};
            -webkit-font-smoothing: antialiased;
        }}
        *, *::before, *::after {{
            box-sizing: border-box;
        }}
        a {{
            color: inherit;
            text-decoration: none;
        }}
        h1, h2, h3, .font-display {{
            font-family: {display};
            color: {heading};
            margin: 0;
        }}
        main {{
            min-height: 100vh;
        }}

        .container {{
            max-width: 72rem;
            margin: 0 auto;
            padding: 0 1rem;
        }}
        .container.narrow {{
            max-width: 56rem;
        }}
        .section {{
            padding: 4rem 0;
        }}
        .page-hero {{
            padding: 5rem 0 2rem 0;
            text-align: center;
        }}
        .page-hero h1 {{
            font-size: 3.75rem;
            margin-bottom: 1rem;
        }}
        .page-hero p {{
            font-size: 1.25rem;
            color: {muted};
            max-width: 42rem;
            margin: 0 auto;
        }}
        .section-title {{
            font-size: 2.25rem;
            text-align: center;
            margin-bottom: 2.5rem;
        }}
        .grid-2, .grid-3, .grid-4 {{
            display: grid;
            grid-template-columns: 1fr;
            gap: 1.5rem;
        }}
        .stack > * + * {{
            margin-top: 1.5rem;
        }}
        @media (min-width: 768px) {{
            .grid-2 {{ grid-template-columns: repeat(2, 1fr); }}
            .grid-3 {{ grid-template-columns: repeat(3, 1fr); }}
            .grid-4 {{ grid-template-columns: repeat(4, 1fr); }}
        }}
        @media (max-width: 767px) {{
            .page-hero h1 {{ font-size: 2.75rem; }}
        }}

        .text-coral {{ color: {coral}; }}
        .text-teal {{ color: {teal}; }}
        .text-yellow {{ color: {yellow}; }}
        .text-orange {{ color: {orange}; }}
        .text-pink {{ color: {pink}; }}
        .text-muted {{ color: {muted}; }}
        .text-faint {{ color: {faint}; }}
        .bg-coral {{ background: {coral}; }}
        .bg-teal {{ background: {teal}; }}
        .bg-yellow {{ background: {yellow}; }}
        .bg-orange {{ background: {orange}; }}
        .bg-pink {{ background: {pink}; }}

        .glass {{
            background: rgba(255, 255, 255, 0.45);
            backdrop-filter: blur(16px);
            -webkit-backdrop-filter: blur(16px);
            border: 1px solid rgba(255, 255, 255, 0.6);
        }}
        .glass-strong {{
            background: rgba(255, 255, 255, 0.72);
            backdrop-filter: blur(20px);
            -webkit-backdrop-filter: blur(20px);
            border: 1px solid rgba(255, 255, 255, 0.8);
        }}
        .glass-dark {{
            background: rgba(17, 24, 39, 0.75);
            backdrop-filter: blur(20px);
            -webkit-backdrop-filter: blur(20px);
            border: 1px solid rgba(255, 255, 255, 0.1);
            color: {cream};
        }}
        .glass-coral {{
            background: {coral_wash};
            backdrop-filter: blur(16px);
            -webkit-backdrop-filter: blur(16px);
            border: 1px solid {coral_edge};
        }}
        .glass-teal {{
            background: {teal_wash};
            backdrop-filter: blur(16px);
            -webkit-backdrop-filter: blur(16px);
            border: 1px solid {teal_edge};
        }}
        .glass-yellow {{
            background: {yellow_wash};
            backdrop-filter: blur(16px);
            -webkit-backdrop-filter: blur(16px);
            border: 1px solid {yellow_edge};
        }}
        .glass-pink {{
            background: {pink_wash};
            backdrop-filter: blur(16px);
            -webkit-backdrop-filter: blur(16px);
            border: 1px solid {pink_edge};
        }}

        .card {{
            border-radius: 1rem;
            transition: all 0.3s ease;
        }}
        .card-hover:hover {{
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
            transform: scale(1.01);
        }}
        .card-body {{
            padding: 1.5rem;
        }}
        .card-body.roomy {{
            padding: 2.5rem;
        }}

        .ticket-shape {{
            position: relative;
            overflow: hidden;
        }}
        .ticket-shape::before, .ticket-shape::after {{
            content: '';
            position: absolute;
            top: 50%;
            width: 1.25rem;
            height: 1.25rem;
            border-radius: 50%;
            background: {sand};
            transform: translateY(-50%);
        }}
        .ticket-shape::before {{ left: -0.625rem; }}
        .ticket-shape::after {{ right: -0.625rem; }}
        .ticket-shimmer {{
            background-image: linear-gradient(110deg, transparent 40%, rgba(255, 255, 255, 0.35) 50%, transparent 60%);
            background-size: 250% 100%;
            animation: {holo};
        }}
        .ticket-row {{
            display: flex;
        }}
        .ticket-main {{
            flex: 1;
        }}
        .ticket-stub {{
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 1rem;
            border-left: 2px dashed {coral_edge};
            min-width: 5rem;
        }}
        .ticket-stub-text {{
            writing-mode: vertical-rl;
            font-size: 0.65rem;
            font-weight: 700;
            letter-spacing: 0.2em;
            color: {faint};
        }}
        .ticket-label {{
            display: inline-block;
            font-size: 0.7rem;
            font-weight: 700;
            letter-spacing: 0.15em;
            text-transform: uppercase;
            color: {faint};
        }}
        .ticket-label.block {{
            display: block;
            margin-bottom: 0.5rem;
        }}
        .ticket-serial {{
            font-family: monospace;
            font-size: 0.7rem;
            letter-spacing: 0.2em;
            color: {faint};
        }}

        .tear-line {{
            border: none;
            border-top: 2px dashed rgba(0, 0, 0, 0.08);
            margin: 1rem 0;
        }}
        .tear-line-coral {{ border-top-color: {coral_edge}; }}
        .tear-line-teal {{ border-top-color: {teal_edge}; }}

        .barcode-strip {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }}
        .barcode, .barcode-slim {{
            display: flex;
            align-items: stretch;
            gap: 3px;
            opacity: 0.8;
        }}
        .barcode {{ height: 2rem; }}
        .barcode-slim {{ height: 1rem; gap: 2px; }}
        .barcode .bar, .barcode-slim .bar {{
            width: 2px;
            background: {ink};
            border-radius: 1px;
        }}
        .barcode-slim .bar {{ width: 1px; }}
        .barcode .bar.wide {{ width: 4px; }}
        .barcode-slim .bar.wide {{ width: 3px; }}

        .holo-foil {{
            background-image: linear-gradient(120deg, {coral_wash}, {yellow_wash}, {teal_wash}, {pink_wash});
            background-size: 300% 300%;
            animation: {holo};
        }}
        .wristband-coral {{ border-top: 4px solid {coral}; }}
        .wristband-teal {{ border-top: 4px solid {teal}; }}
        .wristband-yellow {{ border-top: 4px solid {yellow}; }}
        .wristband-pink {{ border-top: 4px solid {pink}; }}
        .wristband-orange {{ border-top: 4px solid {orange}; }}

        .cta-button {{
            display: inline-block;
            background: {coral};
            color: #fff;
            font-weight: 700;
            padding: 0.75rem 1.5rem;
            border: none;
            border-radius: 9999px;
            cursor: pointer;
            transition: all 0.3s ease;
        }}
        .cta-button:hover {{
            box-shadow: 0 4px 30px {coral_glow};
        }}
        .cta-button.large {{
            font-size: 1.125rem;
            padding: 1rem 2.5rem;
        }}
        .cta-button.block {{
            display: block;
            width: 100%;
            text-align: center;
        }}
        .cta-button.muted {{
            background: #e5e7eb;
            color: #374151;
        }}
        .cta-button.muted:hover {{
            background: #d1d5db;
            box-shadow: none;
        }}
        .cta-note {{
            color: {faint};
            font-size: 0.875rem;
        }}

        .float {{ animation: {float}; }}
        .float-slow {{ animation: {float_slow}; }}
        .float-slower {{ animation: {float_slower}; }}

        @keyframes float {{
            0%, 100% {{ transform: translateY(0px); }}
            50% {{ transform: translateY(-20px); }}
        }}
        @keyframes holo-shift {{
            0%, 100% {{ background-position: 0% 50%; }}
            50% {{ background-position: 100% 50%; }}
        }}
        "#,
        body = fonts::BODY,
        display = fonts::DISPLAY,
        sand = SAND,
        cream = CREAM,
        ink = INK,
        heading = HEADING,
        muted = MUTED,
        faint = FAINT,
        coral = CORAL,
        teal = TEAL,
        yellow = YELLOW,
        orange = ORANGE,
        pink = PINK,
        coral_wash = alpha(CORAL, 0.1),
        coral_edge = alpha(CORAL, 0.25),
        coral_glow = alpha(CORAL, 0.2),
        teal_wash = alpha(TEAL, 0.1),
        teal_edge = alpha(TEAL, 0.25),
        yellow_wash = alpha(YELLOW, 0.15),
        yellow_edge = alpha(YELLOW, 0.35),
        pink_wash = alpha(PINK, 0.12),
        pink_edge = alpha(PINK, 0.3),
        float = motion::FLOAT,
        float_slow = motion::FLOAT_SLOW,
        float_slower = motion::FLOAT_SLOWER,
        holo = motion::HOLO,
    )
}

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    let css = use_memo(|_| StyleSource::try_from(global_css()), ());

    match &*css {
        Ok(source) => html! { <Global css={source.clone()} /> },
        Err(e) => {
            error!("Global stylesheet failed to parse: {}", e);
            Html::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_converts_hex_tokens() {
        assert_eq!(palette::alpha(palette::CORAL, 0.2), "rgba(255, 107, 107, 0.2)");
        assert_eq!(palette::alpha(palette::TEAL, 0.15), "rgba(0, 191, 166, 0.15)");
    }

    #[test]
    fn barcode_marks_every_third_bar_wide() {
        let bars: Vec<bool> = barcode_bars(7).collect();
        assert_eq!(bars, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn stylesheet_defines_every_glass_variant() {
        let css = global_css();
        for class in [
            ".glass ", ".glass-strong", ".glass-dark", ".glass-coral", ".glass-teal",
            ".glass-yellow", ".glass-pink",
        ] {
            assert!(css.contains(class), "missing {}", class);
        }
        assert!(css.contains("@keyframes float"));
        assert!(css.contains("@keyframes holo-shift"));
    }

    #[test]
    fn stylesheet_parses() {
        if let Err(e) = StyleSource::try_from(global_css()) {
            panic!("global stylesheet does not parse: {}", e);
        }
    }
}
