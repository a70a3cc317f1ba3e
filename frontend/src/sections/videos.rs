use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::VIDEO_CATEGORIES;
use crate::nav::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct VideosProps {
    pub on_explore: Callback<()>,
}

#[function_component(Videos)]
pub fn videos(props: &VideosProps) -> Html {
    let unlock = props.on_explore.reform(|_: MouseEvent| ());

    html! {
        <section id={SectionId::Videos.anchor()} class="page-section section-slate">
            <div class="container">
                <div class="section-heading stagger">
                    <span class="eyebrow">{"What's Inside"}</span>
                    <h2>{"Video Library"}</h2>
                    <p>{"A growing library of lessons covering every part of the game, built around fundamentals that hold up under pressure. New lessons are added as the library expands."}</p>
                </div>

                <div class="category-grid">
                    { for VIDEO_CATEGORIES.iter().map(|category| html! {
                        <div class="category-card" key={category.name}>
                            <div class="category-media">
                                <div class="category-fade"></div>
                                <img src={category.image} alt={category.name} />
                                <span class="category-label">{category.label}</span>
                                <div class="category-play">
                                    <span><IconView icon={Icon::Play} /></span>
                                </div>
                            </div>
                            <div class="category-title">
                                <IconView icon={category.icon} />
                                <h3>{category.name}</h3>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="sample-preview">
                    <img src="/swing-comparison.jpg" alt="Sample lesson preview" />
                    <div class="sample-overlay">
                        <button class="button button-blue" onclick={unlock}>
                            <IconView icon={Icon::Unlock} />
                            {"Unlock Full Library"}
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .category-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .category-card {
                        overflow: hidden;
                        border-radius: 1rem;
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        background: rgba(30, 41, 59, 0.5);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                        animation: fadeInUp 0.8s ease-out both;
                    }
                    .category-card:hover { transform: translateY(-5px) scale(1.02); border-color: rgba(59, 130, 246, 0.3); }
                    .category-media { position: relative; height: 10rem; overflow: hidden; }
                    .category-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s ease; }
                    .category-card:hover .category-media img { transform: scale(1.1); }
                    .category-fade {
                        position: absolute; inset: 0; z-index: 1;
                        background: linear-gradient(to top, #0f172a, transparent);
                    }
                    .category-label {
                        position: absolute; top: 0.75rem; left: 0.75rem; z-index: 2;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        background: rgba(59, 130, 246, 0.9);
                        font-size: 0.75rem;
                        font-weight: 700;
                    }
                    .category-play {
                        position: absolute; inset: 0; z-index: 2;
                        display: flex; align-items: center; justify-content: center;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .category-card:hover .category-play { opacity: 1; }
                    .category-play span {
                        width: 3rem; height: 3rem;
                        border-radius: 9999px;
                        background: #3b82f6;
                        display: flex; align-items: center; justify-content: center;
                    }
                    .category-title { display: flex; align-items: center; gap: 0.75rem; padding: 1rem; }
                    .category-title .icon { color: #60a5fa; }
                    .category-title h3 { font-size: 1.1rem; font-weight: 600; color: #fff; }
                    .sample-preview {
                        position: relative;
                        max-width: 48rem;
                        margin: 3rem auto 0;
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 1px solid #334155;
                    }
                    .sample-preview img { width: 100%; display: block; }
                    .sample-overlay {
                        position: absolute; inset: 0;
                        display: flex; align-items: flex-end; justify-content: center;
                        padding-bottom: 2rem;
                        background: linear-gradient(to top, #020617, rgba(2, 6, 23, 0.5), transparent);
                    }
                    @media (max-width: 1024px) {
                        .category-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .category-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
