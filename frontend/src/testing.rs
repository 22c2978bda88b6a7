use yew::{BaseComponent, ServerRenderer};

/// Renders a prop-less component to plain markup, without hydration markers.
pub async fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default + Send,
{
    ServerRenderer::<C>::new().hydratable(false).render().await
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Every `href="#..."` fragment target in document order.
pub fn fragment_targets(html: &str) -> Vec<&str> {
    html.match_indices("href=\"#")
        .filter_map(|(at, prefix)| {
            let rest = &html[at + prefix.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .collect()
}
