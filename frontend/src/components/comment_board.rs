//! 留言板页面

use leptos::prelude::*;
use sitekit_shared::CommentBoard;

use crate::web::LocalStorage;

fn render_list(board: &CommentBoard<LocalStorage>) -> String {
    board.render_html().unwrap_or_else(|err| {
        log_error!("[Comments] Failed to read comments: {}", err);
        String::new()
    })
}

#[component]
pub fn CommentBoardPanel() -> impl IntoView {
    let board = CommentBoard::new(LocalStorage);

    let (list_html, set_list_html) = signal(render_list(&board));
    let name = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match board.submit(&name.get_untracked(), &message.get_untracked()) {
            Ok(Some(_)) => {
                name.set(String::new());
                message.set(String::new());
                set_list_html.set(render_list(&board));
            }
            // 空字段：静默丢弃，保留表单内容
            Ok(None) => {}
            Err(err) => log_error!("[Comments] Failed to save comment: {}", err),
        }
    };

    view! {
        <section class="comment-board">
            <form id="commentForm" on:submit=on_submit>
                <input
                    id="name"
                    type="text"
                    placeholder="Your name"
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    id="message"
                    placeholder="Leave a message"
                    prop:value=message
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Post"</button>
            </form>
            <div id="commentsList" inner_html=move || list_html.get()></div>
        </section>
    }
}
