//! Home Page

use leptos::prelude::*;

use crate::sections::{
    ComparisonSection, DelegateSection, Footer, HeroSection, HowItWorks, PresentationSection,
    QuerySection, SearchSection, WorkspaceSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <HeroSection />
            <QuerySection />
            <HowItWorks />
            <ComparisonSection />
            <DelegateSection />
            <SearchSection />
            <PresentationSection />
            <WorkspaceSection />
            <Footer />
        </main>
    }
}
