//! Template engine for rendering work detail pages.

use minijinja::{context, Environment};

/// Name of the work detail page template.
pub const WORK_TEMPLATE_NAME: &str = "work.html";

/// A top navigation link.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NavLink {
    /// Display label
    pub label: String,
    /// Path relative to the site root
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// The site's main navigation, in display order.
pub fn site_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("MANIFESTO", "manifesto.html"),
        NavLink::new("WORK", "work.html"),
        NavLink::new("ENQUIRE", "enquire.html"),
        NavLink::new("IMPACT", "impact.html"),
        NavLink::new("SHOP", "shop.html"),
    ]
}

/// Context for rendering a work page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Project identifier, shown verbatim in the heading
    pub title: String,
    /// Site title
    pub site_title: String,
    /// Prefix from the page's directory back to the site root
    pub root: String,
    /// Logo image path relative to the site root
    pub logo: String,
    /// Navigation links
    pub nav: Vec<NavLink>,
    /// Token script to inline; `None` links the shared script instead
    pub tokens_script: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the work page template loaded.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        env.add_template(WORK_TEMPLATE_NAME, WORK_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a work page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(WORK_TEMPLATE_NAME)?;

        tmpl.render(context! {
            title => &context.title,
            site_title => &context.site_title,
            root => &context.root,
            logo => &context.logo,
            nav => &context.nav,
            tokens_script => &context.tokens_script,
        })
    }
}

// Root, logo and nav hrefs come from site settings and are marked safe so the
// HTML escaper leaves their slashes alone.
const WORK_TEMPLATE: &str = r##"<!DOCTYPE html>
<html class="scroll-smooth" lang="en">
<head>
    <meta charset="utf-8"/>
    <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
    <title>{{ title | upper }} | WORK | {{ site_title }}</title>
    <script src="https://cdn.tailwindcss.com?plugins=forms,typography"></script>
    <link href="https://fonts.googleapis.com" rel="preconnect"/>
    <link crossorigin="" href="https://fonts.gstatic.com" rel="preconnect"/>
    <link href="https://fonts.googleapis.com/css2?family=Anton&amp;family=Azeret+Mono:wght@400&amp;family=Inter:wght@300;400;500;600;700&amp;family=Space+Mono:wght@400;700&amp;display=swap" rel="stylesheet"/>
{%- if tokens_script %}
    <script>
{{ tokens_script | safe }}    </script>
{%- else %}
    <script src="{{ root | safe }}design_config.js"></script>
{%- endif %}
    <link rel="stylesheet" href="{{ root | safe }}style.css">
</head>
<body class="bg-background-light dark:bg-background-dark font-sans antialiased text-black dark:text-gray-100 transition-colors duration-300">
    <header class="w-full">
        <nav class="bg-black text-white h-[130px] flex items-center overflow-hidden min-w-full">
            <div class="flex items-center min-w-max pl-[75px]">
                <a href="{{ root | safe }}index.html" class="block w-[271px] shrink-0 py-[20px]">
                    <img src="{{ root | safe }}{{ logo | safe }}" alt="HUMAN." class="w-full h-auto">
                </a>
                <div class="w-[129px] shrink-0"></div>
                <div class="flex items-center">
{%- for link in nav %}
                    <a href="{{ root | safe }}{{ link.href | safe }}" class="text-primary nav-link-style shrink-0">{{ link.label }}</a>
{%- if not loop.last %}
                    <div class="w-[243px] shrink-0"></div>
{%- endif %}
{%- endfor %}
                </div>
            </div>
        </nav>
    </header>

    <main class="bg-background-dark min-h-screen text-white flex flex-col justify-center items-center">
        <h1 class="font-display text-8xl text-primary uppercase text-center max-w-4xl">{{ title }}</h1>
        <p class="font-mono text-xl mt-4">Project detail page under construction</p>
    </main>
</body>
</html>"##;
