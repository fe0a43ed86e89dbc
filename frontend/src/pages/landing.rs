use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::download::dom::dispatch_in_browser;
use crate::download::DownloadMode;
use crate::pages::features::FeatureGrid;

const GITHUB_URL: &str = "https://github.com/tanishtirpathi/Mindpin";
const TWITTER_URL: &str = "https://x.com/tanishtirpathi";

fn start_download(config: &SiteConfig, mode: DownloadMode) {
    match config.download_request() {
        Ok(request) => dispatch_in_browser(&request, mode),
        Err(e) => log::error!("Download link is misconfigured: {}", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<SiteConfig>,
}

#[derive(Properties, PartialEq)]
struct DownloadButtonProps {
    on_download: Callback<MouseEvent>,
}

#[function_component(Navbar)]
fn navbar(props: &DownloadButtonProps) -> Html {
    html! {
        <div class="nav-wrapper">
            <nav class="nav">
                <div class="nav-brand">
                    <div class="nav-logo"></div>
                    <span>{"MindPin"}</span>
                </div>
                <div class="nav-links">
                    <a href="#features">{"Features"}</a>
                    <a href="#">{"Support"}</a>
                </div>
                <button class="nav-cta" onclick={props.on_download.clone()}>
                    {"Get App"}
                </button>
            </nav>
        </div>
    }
}

#[function_component(Hero)]
fn hero(props: &DownloadButtonProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-glows">
                <div class="glow glow-pink"></div>
                <div class="glow glow-violet"></div>
                <div class="glow-floor"></div>
            </div>
            <div class="hero-content">
                <div class="hero-badge animate-fade-in">
                    <span class="badge-dot">
                        <span class="badge-ping"></span>
                        <span class="badge-core"></span>
                    </span>
                    {"Now available for Desktop"}
                </div>
                <h1 class="hero-title">
                    {"Design your thoughts"}<br/>
                    <span class="hero-title-muted">{"with absolute clarity."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"A minimal, transparent canvas for your ideas. MindPin stays out of your way while keeping your most important notes always in sight."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-download" onclick={props.on_download.clone()}>
                        <i class="fa-solid fa-download"></i>
                        {"Download MindPin"}
                    </button>
                    <button class="hero-demo">
                        {"Watch Demo"}
                        <i class="fa-solid fa-arrow-right"></i>
                    </button>
                </div>
                <div class="hero-preview animate-fade-in-up">
                    <div class="hero-preview-frame">
                        <img src="./video.png" alt="App Preview" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <span class="footer-brand">{"MindPin."}</span>
                <div class="footer-links">
                    <a href={GITHUB_URL}>{"GitHub"}</a>
                    <a href={GITHUB_URL}>{"Privacy"}</a>
                    <a href={TWITTER_URL}>{"Twitter"}</a>
                </div>
                <p class="footer-copy">{"© 2025 MindPin Studio."}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let on_nav_download = {
        let config = props.config.clone();
        Callback::from(move |_: MouseEvent| start_download(&config, DownloadMode::Navigate))
    };
    let on_hero_download = {
        let config = props.config.clone();
        Callback::from(move |_: MouseEvent| start_download(&config, config.download_mode))
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Navbar on_download={on_nav_download} />
            <Hero on_download={on_hero_download} />
            <FeatureGrid reveal={props.config.reveal.clone()} />
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    body {
        margin: 0;
        font-family: "Inter", sans-serif;
        background-color: #000;
        color: #fff;
    }
    .landing-page {
        min-height: 100vh;
        letter-spacing: -0.01em;
    }
    .landing-page ::selection {
        background: rgba(236, 72, 153, 0.3);
    }
    .nav-wrapper {
        display: flex;
        justify-content: center;
    }
    .nav {
        position: fixed;
        top: 2.5rem;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 3rem;
        padding: 0.5rem 2rem;
        border-radius: 0.375rem;
        background: rgba(255, 255, 255, 0.2);
        backdrop-filter: blur(12px);
    }
    .nav-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        cursor: pointer;
        font-weight: 700;
        font-size: 1.25rem;
    }
    .nav-logo {
        width: 2rem;
        height: 2rem;
        border-radius: 0.5rem;
        background: linear-gradient(to top right, #ec4899, #7c3aed);
        transition: transform 0.3s;
    }
    .nav-brand:hover .nav-logo {
        transform: rotate(12deg);
    }
    .nav-links {
        display: flex;
        gap: 2rem;
        font-size: 0.875rem;
    }
    .nav-links a {
        color: #9ca3af;
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-links a:hover {
        color: #fff;
    }
    .nav-cta, .hero-download {
        border: none;
        cursor: pointer;
        background: #fff;
        color: #000;
        font-weight: 600;
        transition: all 0.3s;
    }
    .nav-cta {
        padding: 0.5rem 1.25rem;
        border-radius: 9999px;
    }
    .nav-cta:active, .hero-download:active {
        transform: scale(0.95);
    }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 5rem 1.5rem 0;
    }
    .hero-glows {
        position: absolute;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
    }
    .glow {
        position: absolute;
        border-radius: 9999px;
        filter: blur(120px);
        animation: pulse 2s ease-in-out infinite;
    }
    .glow-pink {
        top: -10%;
        left: -10%;
        width: 40%;
        height: 40%;
        background: rgba(236, 72, 153, 0.1);
    }
    .glow-violet {
        top: 20%;
        right: -10%;
        width: 30%;
        height: 30%;
        background: rgba(124, 58, 237, 0.1);
        animation-delay: 0.7s;
    }
    .glow-floor {
        position: absolute;
        bottom: 0;
        left: 0;
        width: 100%;
        height: 300px;
        background: linear-gradient(to top, rgba(236, 72, 153, 0.05), transparent);
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 64rem;
        margin: 0 auto;
        text-align: center;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.25rem 0.75rem;
        margin-bottom: 2rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: #f9a8d4;
        font-size: 0.75rem;
    }
    .badge-dot {
        position: relative;
        display: flex;
        width: 0.5rem;
        height: 0.5rem;
    }
    .badge-ping, .badge-core {
        position: absolute;
        inset: 0;
        border-radius: 9999px;
        background: #ec4899;
    }
    .badge-ping {
        opacity: 0.75;
        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .hero-title {
        font-size: clamp(3.75rem, 8vw, 6rem);
        font-weight: 700;
        line-height: 1.1;
        margin-bottom: 2rem;
    }
    .hero-title-muted {
        color: #6b7280;
    }
    .hero-subtitle {
        max-width: 42rem;
        margin: 0 auto 3rem;
        font-size: 1.25rem;
        font-weight: 300;
        line-height: 1.6;
        color: #9ca3af;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.25rem;
    }
    .hero-download, .hero-demo {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem 2rem;
        border-radius: 1rem;
        font-size: 1rem;
    }
    .hero-download:hover {
        box-shadow: 0 0 30px rgba(255, 255, 255, 0.3);
    }
    .hero-demo {
        cursor: pointer;
        background: transparent;
        color: #fff;
        font-weight: 600;
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .hero-demo:hover {
        background: rgba(255, 255, 255, 0.05);
    }
    .hero-preview {
        max-width: 56rem;
        margin: 6rem auto 0;
        padding: 0.5rem;
        border-radius: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.1), transparent);
        overflow: hidden;
    }
    .hero-preview-frame {
        background: #0a0a0a;
        border-radius: 1rem;
        overflow: hidden;
    }
    .hero-preview img {
        display: block;
        width: 100%;
        height: auto;
        opacity: 0.8;
        transition: opacity 0.7s;
    }
    .hero-preview img:hover {
        opacity: 1;
    }
    .features {
        padding: 8rem 1.5rem;
        background: #000;
    }
    .features-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .features-header {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: flex-end;
        gap: 1.5rem;
        margin-bottom: 5rem;
    }
    .features-intro {
        max-width: 32rem;
    }
    .features-intro h2 {
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .features-intro p {
        color: #6b7280;
    }
    .features-explore {
        color: #ec4899;
        font-weight: 600;
        cursor: pointer;
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 1px;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1.5rem;
        overflow: hidden;
    }
    .feat-card {
        padding: 2.5rem;
        background: #000;
        opacity: 0;
        transition: background-color 0.5s;
    }
    .feat-card:hover {
        background: #171717;
    }
    .feat-card h3 {
        font-size: 1.125rem;
        margin-bottom: 0.5rem;
    }
    .feat-card p {
        color: #6b7280;
        font-size: 0.875rem;
        line-height: 1.6;
    }
    .feat-icon {
        font-size: 2rem;
        margin-bottom: 1.5rem;
        transition: color 0.3s;
    }
    .feat-card:hover .feat-icon {
        color: #ec4899;
    }
    .reveal {
        animation: reveal 0.8s cubic-bezier(0.16, 1, 0.3, 1) forwards;
    }
    .footer {
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        padding: 5rem 2rem;
        background: #000;
    }
    .footer-inner {
        max-width: 72rem;
        margin: 0 auto;
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        opacity: 0.5;
        transition: opacity 0.3s;
    }
    .footer-inner:hover {
        opacity: 1;
    }
    .footer-brand {
        font-weight: 700;
        font-size: 1.25rem;
    }
    .footer-links {
        display: flex;
        gap: 2.5rem;
        font-size: 0.875rem;
    }
    .footer-links a {
        color: #fff;
        text-decoration: none;
    }
    .footer-links a:hover {
        color: #ec4899;
    }
    .footer-copy {
        font-size: 0.75rem;
    }
    .animate-fade-in {
        animation: fadeIn 1s ease-out;
    }
    .animate-fade-in-up {
        animation: fadeInUp 1.2s cubic-bezier(0.16, 1, 0.3, 1);
    }
    @keyframes reveal {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes pulse {
        50% { opacity: 0.5; }
    }
    @keyframes ping {
        75%, 100% { transform: scale(2); opacity: 0; }
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .features-intro h2 {
            font-size: 2.25rem;
        }
    }
"#;
