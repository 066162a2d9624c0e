//! 搜索关键字页面
//!
//! 结果面板只回显关键字，是示范用的占位内容。

use leptos::prelude::*;
use sitekit_shared::SearchLog;
use sitekit_shared::search::render_results;

use crate::use_config;
use crate::web::LocalStorage;

fn render_recent(log: &SearchLog<LocalStorage>) -> String {
    log.render_recent_html().unwrap_or_else(|err| {
        log_error!("[Search] Failed to read keywords: {}", err);
        String::new()
    })
}

#[component]
pub fn SearchPanel() -> impl IntoView {
    let config = use_config();
    let log = SearchLog::new(LocalStorage, config.recent_limit);

    let (recent_html, set_recent_html) = signal(render_recent(&log));
    let (results_html, set_results_html) = signal(String::new());
    let keyword = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match log.submit(&keyword.get_untracked()) {
            Ok(Some(saved)) => {
                keyword.set(String::new());
                set_recent_html.set(render_recent(&log));
                set_results_html.set(render_results(&saved));
            }
            Ok(None) => {}
            Err(err) => log_error!("[Search] Failed to save keyword: {}", err),
        }
    };

    view! {
        <section class="search">
            <form id="searchForm" on:submit=on_submit>
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search articles"
                    prop:value=keyword
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <h3>"Recent searches"</h3>
            <div id="keywordList" inner_html=move || recent_html.get()></div>
            <div id="searchResults" inner_html=move || results_html.get()></div>
        </section>
    }
}
