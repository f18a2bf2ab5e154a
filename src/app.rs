mod footer;
mod header;
mod reveal;
mod sections;
mod toast;

use leptos::{either::*, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    portfolio::{DataLoadError, PortfolioDocument},
    reveal::{RevealPolicy, ScrollReveal},
};
use footer::Footer;
use header::Header;
use sections::*;
use toast::{Toaster, Toasts};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-navy text-slate-300 antialiased">
                <App />
            </body>
        </html>
    }
}

/// Context every section expects: the shared reveal controller and the toast
/// queue.
pub(crate) fn provide_page_context() {
    provide_context(ScrollReveal::new(RevealPolicy::default()));
    Toasts::provide();
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_page_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
        <Toaster />
    }
}

#[server]
pub async fn get_portfolio() -> Result<PortfolioDocument, DataLoadError> {
    use crate::{config::SiteConfig, provider::PortfolioProvider};

    let config = use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_env);
    PortfolioProvider::from_config(&config)?.load().await
}

/// Backend base URL as configured on the server, for the load failure page.
#[server]
pub async fn get_backend_url() -> Result<String, ServerFnError> {
    use crate::config::SiteConfig;

    let config = use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_env);
    Ok(config.backend_url_display().to_string())
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let portfolio = Resource::new(|| (), |_| get_portfolio());
    let backend_url = Resource::new(|| (), |_| get_backend_url());

    view! {
        <Suspense fallback=LoadingScreen>
            {move || Suspend::new(async move {
                match portfolio.await {
                    Ok(doc) => Either::Left(view! { <Portfolio doc /> }),
                    Err(error) => {
                        let backend_url = backend_url
                            .await
                            .unwrap_or_else(|_| "Undefined".to_string());
                        Either::Right(view! { <LoadFailure error backend_url /> })
                    }
                }
            })}
        </Suspense>
    }
}

/// Every section in page order. Each one gets only its own slice.
#[component]
pub fn Portfolio(doc: PortfolioDocument) -> impl IntoView {
    let PortfolioDocument {
        personal,
        about,
        skills,
        experience,
        projects,
        storytelling,
        education,
    } = doc;

    view! {
        <Title text=format!("{} | {}", personal.name, personal.title) />
        <Meta name="description" content=personal.tagline.clone() />
        <Header initials=personal.initials() />
        <main>
            <HeroSection personal=personal.clone() />
            <AboutSection about education />
            <SkillsSection skills />
            <ExperienceSection experience />
            <ProjectsSection projects />
            <StorytellingSection storytelling />
            <ContactSection personal=personal.clone() />
        </main>
        <Footer personal />
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <Title text="Loading" />
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-cyan-300 text-xl font-mono animate-pulse">"Loading..."</div>
        </div>
    }
}

#[component]
fn LoadFailure(error: DataLoadError, backend_url: String) -> impl IntoView {
    let target_url = error.target_url().unwrap_or("Undefined").to_string();

    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 px-6">
            <div class="text-red-500 text-xl text-center">{error.to_string()}</div>
            <div class="text-slate-400 text-sm font-mono bg-black/50 p-4 rounded">
                <p>"Debug Info:"</p>
                <p>"Target URL: " {target_url}</p>
                <p>"Backend URL Env: " {backend_url}</p>
            </div>
        </div>
    }
}
