use web_sys::Element;
use yew::prelude::*;

use crate::reveal::dom::watch_within;
use crate::reveal::RevealOptions;

/// Selector for the cards handed to the reveal session.
const CARD_SELECTOR: &str = ".feat-card";

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "fa-eye",
        title: "Pure Transparency",
        desc: "Adjustable opacity so your work remains the hero of the screen.",
    },
    Feature {
        icon: "fa-palette",
        title: "Modern Themes",
        desc: "Beautifully curated palettes and typography for the aesthetic enthusiast.",
    },
    Feature {
        icon: "fa-bolt",
        title: "Lightweight",
        desc: "Optimized for speed. No bloat, no lag, just instant productivity.",
    },
    Feature {
        icon: "fa-stopwatch",
        title: "Focus Engine",
        desc: "Built-in Pomodoro tools to help you stay in the flow state longer.",
    },
    Feature {
        icon: "fa-note-sticky",
        title: "Smart Pinning",
        desc: "Keep notes on top of any app, browser, or meeting window.",
    },
    Feature {
        icon: "fa-star",
        title: "Always Free",
        desc: "The core experience of MindPin will always remain free for everyone.",
    },
];

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub reveal: RevealOptions,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    let container = use_node_ref();
    // One session per mount, released on unmount
    {
        let container = container.clone();
        let options = props.reveal.clone();
        use_effect_with_deps(
            move |_| {
                let element = container.cast::<Element>();
                let mut session = watch_within(element.as_ref(), CARD_SELECTOR, &options);
                move || session.release()
            },
            (),
        );
    }

    html! {
        <section id="features" class="features">
            <div class="features-inner" ref={container}>
                <div class="features-header">
                    <div class="features-intro">
                        <h2>{"Focus on what matters."}</h2>
                        <p>{"We stripped away the complexity to give you the perfect writing environment."}</p>
                    </div>
                    <div class="features-explore">
                        {"Explore all features "}
                        <i class="fa-solid fa-arrow-right"></i>
                    </div>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|f| html! {
                        <div key={f.title} class="feat-card">
                            <i class={classes!("fa-solid", f.icon, "feat-icon")}></i>
                            <h3>{f.title}</h3>
                            <p>{f.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
