use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{INSTRUCTOR, TEACHING_SINCE};
use crate::nav::section::SectionId;

#[function_component(Story)]
pub fn story() -> Html {
    html! {
        <section id={SectionId::Story.anchor()} class="page-section section-dark story">
            <div class="story-wash"></div>
            <div class="container story-grid">
                <div class="stagger">
                    <span class="eyebrow">{"My Journey"}</span>
                    <h2>{"From the Range to the World"}</h2>
                    <div class="story-copy">
                        <p class="lead">
                            {"I started giving golf lessons in "}
                            <span class="accent-blue">{TEACHING_SINCE.to_string()}</span>
                            {". For 37 years, I've been on the range, in the studio, and on the course, teaching thousands of students the truth about what really happens in a golf swing."}
                        </p>
                        <p>
                            {"I've seen every fad, every gimmick, every \"revolutionary\" training aid come and go. And through it all, I've stuck to one simple principle: "}
                            <span class="accent-amber">{"tell the truth about the swing mechanics."}</span>
                        </p>
                        <p>
                            {"At 63, I was given an opportunity to take everything I've learned and share it with golfers everywhere. With a little help from ChatGPT (yes, really), Golf From Tee to Green was born."}
                        </p>
                        <p class="lead strong">
                            {"My mission now is simple: help thousands of golfers play better by understanding what actually works."}
                        </p>
                    </div>

                    <div class="timeline">
                        <div class="timeline-point">
                            <div class="timeline-year accent-blue">{TEACHING_SINCE.to_string()}</div>
                            <div class="timeline-label">{"Started Teaching"}</div>
                        </div>
                        <div class="timeline-line"></div>
                        <div class="timeline-point">
                            <div class="timeline-year accent-amber">{"2025"}</div>
                            <div class="timeline-label">{"Going Global"}</div>
                        </div>
                    </div>
                </div>

                <div class="portrait">
                    <div class="portrait-frame">
                        <img src="/instructor.jpg" alt={format!("{INSTRUCTOR} - Golf Instructor")} />
                    </div>
                    <div class="portrait-card">
                        <span class="portrait-icon"><IconView icon={Icon::Trophy} /></span>
                        <div>
                            <p class="portrait-years">{"37+ Years"}</p>
                            <p class="portrait-caption">{"Teaching Experience"}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .story { overflow: hidden; }
                    .story-wash {
                        position: absolute; top: 0; right: 0; width: 50%; height: 100%;
                        background: linear-gradient(to left, rgba(59, 130, 246, 0.05), transparent);
                    }
                    .story-grid {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .story h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; color: #fff; margin: 1rem 0 1.5rem; }
                    .story-copy { display: grid; gap: 1.5rem; color: #cbd5e1; }
                    .story-copy .lead { font-size: 1.125rem; }
                    .story-copy .strong { font-weight: 600; color: #fff; }
                    .accent-blue { color: #60a5fa; font-weight: 700; }
                    .accent-amber { color: #fbbf24; font-weight: 600; }
                    .timeline { margin-top: 2rem; display: flex; align-items: center; gap: 1rem; }
                    .timeline-point { text-align: center; }
                    .timeline-year { font-size: 1.875rem; }
                    .timeline-label { font-size: 0.75rem; color: #64748b; }
                    .timeline-line { flex: 1; height: 1px; background: linear-gradient(90deg, #3b82f6, #f59e0b); }
                    .portrait { position: relative; animation: slideInRight 0.8s ease-out both; }
                    .portrait-frame { border-radius: 1rem; overflow: hidden; border: 1px solid rgba(30, 58, 138, 0.3); }
                    .portrait-frame img { width: 100%; display: block; }
                    .portrait-card {
                        position: absolute; bottom: -1.5rem; left: -1.5rem; z-index: 2;
                        display: flex; align-items: center; gap: 1rem;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: #0f172a;
                        border: 1px solid rgba(30, 58, 138, 0.3);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .portrait-icon {
                        width: 3rem; height: 3rem; border-radius: 9999px;
                        background: #3b82f6;
                        display: flex; align-items: center; justify-content: center;
                    }
                    .portrait-years { font-size: 1.5rem; font-weight: 700; color: #fff; }
                    .portrait-caption { color: #94a3b8; }
                    @media (max-width: 1024px) {
                        .story-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
