//! Stat card component for displaying a labelled value.

use leptos::prelude::*;

/// A card displaying a label, a value and an optional unit.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The value to display.
    #[prop(into)]
    value: Signal<String>,
    /// Unit shown after the value.
    #[prop(optional, into)]
    unit: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
            {unit.map(|unit| view! { <span class="stat-unit">{unit}</span> })}
        </div>
    }
}
