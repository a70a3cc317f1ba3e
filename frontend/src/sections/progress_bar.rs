use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Fraction of the page scrolled, `0.0..=1.0`.
    pub progress: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let style = format!("transform: scaleX({:.4});", props.progress);

    html! {
        <>
            <div class="scroll-progress" {style}></div>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        z-index: 100;
                        transform-origin: left;
                        background: linear-gradient(90deg, #3b82f6, #60a5fa, #fbbf24);
                        transition: transform 0.15s ease-out;
                    }
                "#}
            </style>
        </>
    }
}
