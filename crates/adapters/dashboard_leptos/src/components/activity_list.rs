use backup_console_domain::activity::Activity;
use backup_console_domain::time;
use leptos::prelude::*;

/// Recent activity feed, newest first as served.
#[component]
pub fn ActivityList(#[prop(into)] activities: Signal<Vec<Activity>>) -> impl IntoView {
    view! {
        <div class="activity-list">
            {move || {
                let activities = activities.get();
                if activities.is_empty() {
                    return view! { <p class="empty-state">"No recent activity"</p> }.into_any();
                }
                let now = time::now();
                activities
                    .into_iter()
                    .map(|activity| {
                        let icon_class = format!("activity-icon {}", activity.kind.as_str());
                        view! {
                            <div class="activity-item">
                                <div class=icon_class>{activity.kind.icon()}</div>
                                <div class="activity-content">
                                    <div class="activity-title">{activity.title.clone()}</div>
                                    <div class="activity-time">{activity.age(now)}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
