use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlassVariant {
    #[default]
    Default,
    Strong,
    Dark,
    Coral,
    Teal,
    Yellow,
    Pink,
}

impl GlassVariant {
    pub fn class(self) -> &'static str {
        match self {
            GlassVariant::Default => "glass",
            GlassVariant::Strong => "glass-strong",
            GlassVariant::Dark => "glass-dark",
            GlassVariant::Coral => "glass-coral",
            GlassVariant::Teal => "glass-teal",
            GlassVariant::Yellow => "glass-yellow",
            GlassVariant::Pink => "glass-pink",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub variant: GlassVariant,
    #[prop_or(true)]
    pub hover: bool,
    #[prop_or_default]
    pub ticket: bool,
    /// Only drawn when `ticket` is set.
    #[prop_or_default]
    pub ticket_stub: Option<Html>,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let classes = classes!(
        "card",
        props.hover.then(|| "card-hover"),
        props.variant.class(),
        props.ticket.then(|| classes!("ticket-shape", "ticket-shimmer")),
        props.class.clone(),
    );

    match (&props.ticket_stub, props.ticket) {
        (Some(stub), true) => html! {
            <div class={classes}>
                <div class="ticket-row">
                    <div class="ticket-main">{ for props.children.iter() }</div>
                    <div class="ticket-stub">{ stub.clone() }</div>
                </div>
            </div>
        },
        _ => html! {
            <div class={classes}>
                { for props.children.iter() }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;
    use std::collections::HashSet;

    #[derive(Properties, PartialEq, Clone)]
    struct CardCase {
        variant: GlassVariant,
        ticket: bool,
        hover: bool,
        with_stub: bool,
    }

    #[function_component(CardHarness)]
    fn card_harness(case: &CardCase) -> Html {
        let stub = case.with_stub.then(|| html! { <span class="stub-marker">{"STUB"}</span> });
        html! {
            <GlassCard variant={case.variant} ticket={case.ticket} hover={case.hover} ticket_stub={stub} class="p-6">
                <p>{"inside"}</p>
            </GlassCard>
        }
    }

    #[test]
    fn each_variant_has_its_own_class() {
        let classes: Vec<&str> = [
            GlassVariant::Default,
            GlassVariant::Strong,
            GlassVariant::Dark,
            GlassVariant::Coral,
            GlassVariant::Teal,
            GlassVariant::Yellow,
            GlassVariant::Pink,
        ]
        .iter()
        .map(|v| v.class())
        .collect();
        let distinct: HashSet<&str> = classes.iter().copied().collect();
        assert_eq!(distinct.len(), classes.len());
        assert_eq!(GlassVariant::default().class(), "glass");
    }

    #[tokio::test]
    async fn ticket_card_with_stub_splits_content() {
        let html = render::<CardHarness>(|| CardCase {
            variant: GlassVariant::Coral,
            ticket: true,
            hover: true,
            with_stub: true,
        })
        .await;
        assert!(html.contains("glass-coral"));
        assert!(html.contains("ticket-shape ticket-shimmer"));
        assert!(html.contains(r#"<div class="ticket-stub"><span class="stub-marker">STUB</span></div>"#));
        assert!(html.contains(r#"<div class="ticket-main"><p>inside</p></div>"#));
        assert!(html.contains("p-6"));
    }

    #[tokio::test]
    async fn stub_is_ignored_without_ticket_framing() {
        let html = render::<CardHarness>(|| CardCase {
            variant: GlassVariant::Strong,
            ticket: false,
            hover: false,
            with_stub: true,
        })
        .await;
        assert!(!html.contains("STUB"));
        assert!(!html.contains("ticket-shape"));
        assert!(!html.contains("card-hover"));
        assert!(html.contains("<p>inside</p>"));
    }
}
