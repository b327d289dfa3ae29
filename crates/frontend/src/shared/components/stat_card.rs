use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card for the overview dashboard.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Formatted value
    #[prop(into)]
    value: String,
    /// Change relative to the previous period, e.g. "+25%"
    #[prop(optional, into)]
    change: MaybeProp<String>,
    /// Optional caption below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let change_view = move || {
        change.get().map(|text| {
            let cls = if text.starts_with('-') {
                "stat-card__change stat-card__change--down"
            } else {
                "stat-card__change stat-card__change--up"
            };
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
