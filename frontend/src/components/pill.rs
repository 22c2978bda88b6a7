use yew::prelude::*;

use crate::motion::Preset;

#[derive(Properties, PartialEq)]
pub struct PillProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class={classes!("pill", Preset::Pop.class())} style={Preset::Pop.style(props.delay_ms)}>
            { for props.children.iter() }
        </span>
    }
}

pub const STYLES: &str = r#"
.pill {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.8);
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    font-weight: 600;
    color: #14532d;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05), 0 0 0 1px rgba(21, 128, 61, 0.1);
    backdrop-filter: blur(8px);
}

.pill-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}
"#;
