pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Каркас страницы.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |        Footer + cookie consent           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <header::Header />
            <main class="site-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
