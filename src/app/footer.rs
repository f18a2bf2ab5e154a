use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::portfolio::PersonalInfo;

/// Year the site was built, falling back to the current one.
fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer(personal: PersonalInfo) -> impl IntoView {
    let mailto = format!("mailto:{}", personal.email);

    view! {
        <footer class="py-8 bg-slate-950 border-t border-slate-800">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <div class="text-slate-500 text-sm font-mono">
                        {format!("© {} {} ", copyright_year(), personal.name)}
                        <span class="text-cyan-500">"::"</span>
                        " Built with Rust & Leptos"
                    </div>
                    <div class="flex gap-4">
                        <a
                            href=personal.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-slate-400 hover:text-cyan-400 transition-colors"
                        >
                            "GitHub"
                        </a>
                        <a
                            href=personal.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-slate-400 hover:text-cyan-400 transition-colors"
                        >
                            "LinkedIn"
                        </a>
                        <a href=mailto class="text-slate-400 hover:text-cyan-400 transition-colors">
                            "Email"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_is_plausible() {
        assert!(copyright_year() >= 2024);
    }
}
