use yew::prelude::*;

use crate::theme::barcode_bars;

const BARS: usize = 30;
const SLIM_BARS: usize = 18;

#[derive(Properties, PartialEq, Default)]
pub struct TicketBarcodeProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub slim: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(TicketBarcode)]
pub fn ticket_barcode(props: &TicketBarcodeProps) -> Html {
    let (strip_class, count) = if props.slim {
        ("barcode-slim", SLIM_BARS)
    } else {
        ("barcode", BARS)
    };

    html! {
        <div class={classes!("barcode-strip", props.class.clone())}>
            <div class={strip_class} aria-hidden="true">
                { for barcode_bars(count).map(|wide| html! {
                    <span class={classes!("bar", wide.then(|| "wide"))}></span>
                }) }
            </div>
            if let Some(label) = &props.label {
                <span class="ticket-serial">{ label.clone() }</span>
            }
        </div>
    }
}
