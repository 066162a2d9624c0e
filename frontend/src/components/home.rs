use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page home">
            <h1>"Welcome"</h1>
            <p>"A small static site with a few browser-side demos:"</p>
            <ul>
                <li><Link to=AppRoute::Videos>"Media player"</Link></li>
                <li><Link to=AppRoute::Stats>"Visit and article counters"</Link></li>
                <li><Link to=AppRoute::Comments>"Comment board"</Link></li>
                <li><Link to=AppRoute::Search>"Search log"</Link></li>
            </ul>
        </main>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <Link to=AppRoute::Home>"Back to home"</Link>
        </main>
    }
}
