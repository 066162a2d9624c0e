//! 本地统计页面
//!
//! 组件挂载一次即视为一次页面加载：初始化默认值并计入一次访问。
//! 浏览与点赞只刷新显示，不会再次计入访问。

use leptos::prelude::*;
use sitekit_shared::{MetricsStore, StatsSnapshot, StorageError};

use crate::use_config;
use crate::web::LocalStorage;

fn read_snapshot(metrics: &MetricsStore<LocalStorage>) -> StatsSnapshot {
    metrics.snapshot().unwrap_or_else(|err| {
        log_error!("[Stats] Failed to read counters: {}", err);
        StatsSnapshot::default()
    })
}

fn report(result: Result<u64, StorageError>, action: &str, key: &str) {
    if let Err(err) = result {
        log_warn!("[Stats] Failed to record {} for {}: {}", action, key, err);
    }
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let config = use_config();
    let metrics = MetricsStore::new(LocalStorage, &config);

    match metrics.init().and_then(|()| metrics.record_visit()) {
        Ok(visits) => log_info!("[Stats] Page visit #{}", visits),
        Err(err) => log_error!("[Stats] Failed to record visit: {}", err),
    }

    let (snapshot, set_snapshot) = signal(read_snapshot(&metrics));

    let rows = metrics
        .article_keys()
        .iter()
        .map(|key| {
            let (view_metrics, like_metrics) = (metrics.clone(), metrics.clone());
            let (view_key, like_key) = (key.clone(), key.clone());
            let (shown_views, shown_likes) = (key.clone(), key.clone());

            let on_view = move |_| {
                report(view_metrics.record_view(&view_key), "view", &view_key);
                set_snapshot.set(read_snapshot(&view_metrics));
            };
            let on_like = move |_| {
                report(like_metrics.record_like(&like_key), "like", &like_key);
                set_snapshot.set(read_snapshot(&like_metrics));
            };

            view! {
                <tr>
                    <td>{key.clone()}</td>
                    <td id=format!("views_{}", key)>
                        {move || snapshot.with(|s| s.views_of(&shown_views))}
                    </td>
                    <td id=format!("likes_{}", key)>
                        {move || snapshot.with(|s| s.likes_of(&shown_likes))}
                    </td>
                    <td>
                        <button on:click=on_view>"View"</button>
                        <button on:click=on_like>"Like"</button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="stats">
            <p>
                "Total visits: "
                <span id="totalVisits">{move || snapshot.with(|s| s.total_visits)}</span>
            </p>
            <table class="stats-table">
                <thead>
                    <tr>
                        <th>"Article"</th>
                        <th>"Views"</th>
                        <th>"Likes"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
