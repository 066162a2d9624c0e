//! 影音播放器页面
//!
//! 组件拥有页面级的 `MediaPlayer` 状态：加载完成后写入清单，
//! 之后每次切换选项都只读取这份状态重新渲染。

use leptos::prelude::*;
use leptos::task::spawn_local;
use sitekit_shared::{LoadView, MediaPlayer, PlayerView, SelectOption};

use crate::manifest::ManifestRequest;
use crate::use_config;

#[component]
pub fn MediaPlayerPanel() -> impl IntoView {
    let config = use_config();

    let player = StoredValue::new(MediaPlayer::new());
    let (options, set_options) = signal(vec![SelectOption::placeholder()]);
    let (selected, set_selected) = signal(String::new());
    let (display_html, set_display_html) = signal(String::new());
    let (error_text, set_error_text) = signal(String::new());

    let show = move |view: PlayerView| {
        if let Some(err) = &view.failure {
            log_error!("[Media] Render failed: {}", err);
        }
        set_display_html.set(view.display_html);
        set_error_text.set(view.error_text);
    };

    let apply_load = move |view: LoadView| {
        set_options.set(view.options);
        set_selected.set(view.selected);
        show(view.player);
    };

    // 页面卸载时取消仍在进行的请求
    let pending = StoredValue::new_local(None::<ManifestRequest>);
    on_cleanup(move || {
        pending.try_update_value(|request| {
            if let Some(request) = request.take() {
                request.abort();
            }
        });
    });

    let manifest_path = config.manifest_path.clone();
    let file_name = config.manifest_file_name().to_string();
    match ManifestRequest::new(&config) {
        Ok(request) => {
            pending.set_value(Some(request.clone()));
            spawn_local(async move {
                let result = request.send().await;
                pending.try_update_value(|slot| *slot = None);
                match &result {
                    Ok(items) => log_info!("[Media] Loaded {} media items", items.len()),
                    Err(err) if err.is_cancellation() => {
                        log_info!("[Media] Manifest request cancelled on page exit")
                    }
                    Err(err) => log_error!("[Media] Failed to load manifest: {}", err),
                }
                if let Some(view) = player
                    .try_update_value(|state| state.load(result, &manifest_path, &file_name))
                {
                    apply_load(view);
                }
            });
        }
        Err(err) => {
            log_error!("[Media] Failed to start manifest request: {}", err);
            if let Some(view) =
                player.try_update_value(|state| state.load(Err(err), &manifest_path, &file_name))
            {
                apply_load(view);
            }
        }
    }

    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        set_selected.set(raw.clone());
        show(player.with_value(|state| state.select(&raw)));
    };

    view! {
        <section class="media-player">
            <select id="videoSelect" on:change=on_change>
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let value = option.value.clone();
                        view! {
                            <option
                                value=option.value
                                prop:selected=move || selected.get() == value
                            >
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
            <div id="videoPlayer" class="video-player" inner_html=move || display_html.get()></div>
            <pre id="videoError" class="video-error">{move || error_text.get()}</pre>
        </section>
    }
}
