use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"AI Content Analyzer"</h1>
                <p class="sidebar-subtitle">"Detect & Analyze AI Content"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Analyze Document"</a>
                </li>
                <li class="nav-item">
                    <a href="/text" class="nav-link">"Analyze Text"</a>
                </li>
                <li class="nav-item">
                    <a href="/health" class="nav-link">"Service Health"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Settings"</a>
                </li>
            </ul>
        </nav>
    }
}
