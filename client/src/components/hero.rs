//! Landing hero for the home page.

use leptos::prelude::*;

pub const EXPLORE_HREF: &str = "/exam-vault";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">
                <span class="hero__accent">"Explore"</span>
                " IIITBH Previous Year "
                <span class="hero__accent">"Questions"</span>
                " with "
                <span class="hero__accent">"ease."</span>
            </h1>
            <p class="hero__tagline">"Your go-to resource for exam success, simplified and accessible in one hub."</p>
            <p class="hero__teaser">"A fun 2D game to recharge between sessions is coming soon."</p>
            <a class="btn btn--primary hero__cta" href=EXPLORE_HREF>
                "Start exploring PYQs"
            </a>
        </section>
    }
}
