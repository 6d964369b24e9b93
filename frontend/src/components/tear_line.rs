use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TearColor {
    #[default]
    Default,
    Coral,
    Teal,
}

#[derive(Properties, PartialEq, Default)]
pub struct TearLineProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub color: TearColor,
}

/// Perforated divider, like the line you tear a ticket stub along.
#[function_component(TearLine)]
pub fn tear_line(props: &TearLineProps) -> Html {
    let color = match props.color {
        TearColor::Default => None,
        TearColor::Coral => Some("tear-line-coral"),
        TearColor::Teal => Some("tear-line-teal"),
    };

    html! {
        <hr class={classes!("tear-line", color, props.class.clone())} />
    }
}
