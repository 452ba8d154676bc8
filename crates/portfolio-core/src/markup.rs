//! HTML rendering for the portfolio page
//!
//! Produces plain strings so the layout can be checked without a browser.
//! Any element that should jump to a section carries
//! `data-section="<region id>"`; the wasm layer turns clicks on it into
//! `ScrollSpy::jump_to`.

use crate::content::{
    ContactLink, Education, Experience, Project, SkillCategory, COMMUNITY_SERVICE, CONTACT_LINKS,
    EDUCATION, EXPERIENCES, LEADERSHIP_ROLES, PROFILE, PROJECTS, SKILL_CATEGORIES,
};
use crate::region::Region;
use std::fmt::Write;

/// Attribute linking a clickable element to a region
pub const SECTION_ATTR: &str = "data-section";

/// Id of the navigation button container
pub const NAV_ID: &str = "section-nav";

const NAV_BUTTON_BASE: &str = "nav-button capitalize transition-all duration-300";
const NAV_ACTIVE: &str = "text-violet-400 font-semibold";
const NAV_INACTIVE: &str = "text-slate-400 hover:text-slate-200";

const CARD: &str =
    "card-glow bg-slate-900/50 border border-slate-800/50 rounded-2xl p-8 backdrop-blur-sm";
const CONTACT_BUTTON: &str = "flex items-center justify-center gap-3 px-8 py-4 border-2 border-violet-500/50 rounded-lg font-semibold hover:bg-violet-500/10 transition-all duration-300";

/// Page-level styles injected once at mount
pub const PAGE_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Space+Mono:wght@400;700&family=Sora:wght@300;400;600;700&display=swap');
* { font-family: 'Sora', sans-serif; }
.mono { font-family: 'Space Mono', monospace; }
.gradient-text {
  background: linear-gradient(135deg, #a78bfa 0%, #ec4899 50%, #f59e0b 100%);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}
.card-glow { transition: transform 0.35s ease, box-shadow 0.35s ease; }
.card-glow:hover { transform: scale(1.02); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35); }
.section-appear { animation: fadeInUp 0.8s ease-out forwards; opacity: 0; }
@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}
.skill-tag { transition: all 0.3s ease; }
.skill-tag:hover { transform: translateY(-2px); box-shadow: 0 4px 12px rgba(167, 139, 250, 0.3); }
.project-card { transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1); }
.project-card:hover { transform: translateY(-8px) scale(1.02); }
.typing-cursor { animation: blink 1s infinite; }
@keyframes blink { 0%, 50% { opacity: 1; } 51%, 100% { opacity: 0; } }
.grid-pattern {
  background-image:
    linear-gradient(rgba(167, 139, 250, 0.03) 1px, transparent 1px),
    linear-gradient(90deg, rgba(167, 139, 250, 0.03) 1px, transparent 1px);
  background-size: 50px 50px;
}
.nav-dot { transition: all 0.3s ease; }
.nav-dot.active { background: linear-gradient(135deg, #a78bfa, #ec4899); transform: scale(1.2); }
.hero-glow { filter: drop-shadow(0 0 80px rgba(167, 139, 250, 0.2)); }
"#;

/// Down chevron shown under the hero call to action
const SCROLL_CUE: &str = r#"<div class="mt-12"><svg class="mx-auto animate-bounce text-violet-400" xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="m6 9 6 6 6-6"/></svg></div>"#;

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Class string for a navigation button
pub fn nav_button_class(is_active: bool) -> String {
    let state = if is_active { NAV_ACTIVE } else { NAV_INACTIVE };
    format!("{} {}", NAV_BUTTON_BASE, state)
}

/// Fixed navigation bar with `active` highlighted
pub fn render_nav(active: Region) -> String {
    let mut html = String::new();
    html.push_str(
        r#"<nav class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-xl border-b border-slate-800/50"><div class="max-w-6xl mx-auto px-6 py-4"><div class="flex justify-between items-center">"#,
    );
    let _ = write!(
        html,
        r#"<div class="mono text-xl font-bold gradient-text">{}</div>"#,
        escape_html(PROFILE.initials)
    );
    let _ = write!(html, r#"<div id="{}" class="hidden md:flex gap-8">"#, NAV_ID);
    for region in Region::ALL {
        let _ = write!(
            html,
            r#"<button type="button" {}="{}" class="{}">{}</button>"#,
            SECTION_ATTR,
            region.id(),
            nav_button_class(region == active),
            region.nav_label()
        );
    }
    html.push_str("</div>");
    html.push_str(r#"<div class="flex gap-4">"#);
    for link in CONTACT_LINKS {
        let _ = write!(
            html,
            r#"<a href="{}"{} class="text-slate-400 hover:text-violet-400 transition-colors">{}</a>"#,
            escape_html(link.href),
            target_attrs(link),
            escape_html(link.label)
        );
    }
    html.push_str("</div></div></div></nav>");
    html
}

fn target_attrs(link: &ContactLink) -> &'static str {
    if link.is_external() {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    }
}

fn section_heading(html: &mut String, title: &str) {
    let _ = write!(
        html,
        r#"<h2 class="text-4xl md:text-5xl font-bold gradient-text mb-16">{}</h2>"#,
        escape_html(title)
    );
}

fn open_section(html: &mut String, region: Region, class: &str) {
    let _ = write!(
        html,
        r#"<section id="{}" class="{}"><div class="max-w-6xl mx-auto">"#,
        region.id(),
        class
    );
}

fn close_section(html: &mut String) {
    html.push_str("</div></section>");
}

fn render_home(html: &mut String) {
    let _ = write!(
        html,
        r#"<section id="{}" class="min-h-screen flex items-center justify-center relative overflow-hidden grid-pattern"><div class="absolute inset-0 bg-gradient-to-b from-transparent via-indigo-950/20 to-slate-950"></div><div class="max-w-6xl mx-auto px-6 text-center z-10 section-appear">"#,
        Region::Home.id()
    );
    let _ = write!(
        html,
        r#"<h1 class="text-6xl md:text-8xl font-bold mb-6"><span class="gradient-text">{}</span></h1>"#,
        escape_html(PROFILE.name)
    );
    let _ = write!(
        html,
        r#"<p class="text-2xl md:text-3xl text-slate-300 mb-4 font-light">{}</p>"#,
        escape_html(PROFILE.headline)
    );
    let _ = write!(
        html,
        r#"<p class="mono text-lg text-slate-400 mb-8">&gt; {}<span class="typing-cursor text-violet-400">_</span></p>"#,
        escape_html(PROFILE.tagline)
    );
    let _ = write!(
        html,
        r#"<div class="flex gap-4 justify-center flex-wrap"><button type="button" {attr}="{work}" class="px-8 py-4 bg-gradient-to-r from-violet-600 to-pink-600 rounded-lg font-semibold">View My Work</button><button type="button" {attr}="{contact}" class="{btn}">Get in Touch</button></div>"#,
        attr = SECTION_ATTR,
        work = Region::Projects.id(),
        contact = Region::Contact.id(),
        btn = CONTACT_BUTTON
    );
    html.push_str(SCROLL_CUE);
    html.push_str("</div></section>");
}

fn render_about(html: &mut String) {
    open_section(html, Region::About, "py-24 px-6");
    section_heading(html, "About Me");
    html.push_str(
        r#"<div class="bg-slate-900/50 border border-slate-800/50 rounded-2xl p-8 space-y-6 text-slate-300 text-lg leading-relaxed">"#,
    );
    for paragraph in PROFILE.about {
        let escaped = escape_html(paragraph);
        let seeking = escape_html(PROFILE.seeking);
        let highlighted = escaped.replacen(
            &seeking,
            &format!(
                r#"<span class="text-violet-400 font-semibold">{}</span>"#,
                seeking
            ),
            1,
        );
        let _ = write!(html, "<p>{}</p>", highlighted);
    }
    html.push_str("</div>");
    close_section(html);
}

fn render_experience_card(html: &mut String, exp: &Experience) {
    let _ = write!(
        html,
        r#"<div class="{CARD}"><div class="flex flex-col md:flex-row md:justify-between md:items-start mb-4"><div><h3 class="text-2xl font-bold text-slate-100 mb-2">{}</h3><p class="text-xl text-violet-400 mb-1">{}</p><p class="mono text-sm text-slate-400">{}</p></div><span class="mono text-sm text-pink-400 mt-2 md:mt-0">{}</span></div>"#,
        escape_html(exp.title),
        escape_html(exp.company),
        escape_html(exp.location),
        escape_html(exp.period),
    );
    html.push_str(r#"<ul class="space-y-2 mt-6">"#);
    for highlight in exp.highlights {
        let _ = write!(
            html,
            r#"<li class="flex gap-3 text-slate-300"><span class="text-violet-400 mt-1.5">&#9657;</span><span>{}</span></li>"#,
            escape_html(highlight)
        );
    }
    html.push_str("</ul></div>");
}

fn render_education_card(html: &mut String, edu: &Education) {
    let _ = write!(
        html,
        r#"<div class="{CARD}"><div class="flex flex-col md:flex-row md:justify-between md:items-start gap-6"><div class="space-y-3"><p class="text-xl font-semibold text-slate-100">{}</p><p class="text-lg text-violet-400">{}</p>"#,
        escape_html(edu.school),
        escape_html(edu.credential),
    );
    for detail in edu.details {
        let _ = write!(
            html,
            r#"<p class="text-slate-300"><span class="font-semibold text-slate-200">{}:</span> {}</p>"#,
            escape_html(detail.label),
            escape_html(detail.value)
        );
    }
    let _ = write!(
        html,
        r#"</div><span class="mono text-pink-400 whitespace-nowrap">{}</span></div></div>"#,
        escape_html(edu.period)
    );
}

fn render_project_card(html: &mut String, project: &Project) {
    let _ = write!(
        html,
        r#"<div class="project-card {CARD}"><div class="flex items-start justify-between mb-4"><h3 class="text-2xl font-bold text-slate-100">{}</h3><a href="{}" target="_blank" rel="noopener noreferrer" class="text-slate-400 hover:text-violet-400 transition-colors">GitHub</a></div><p class="mono text-xs text-pink-400 mb-4">{}</p><p class="text-slate-300 mb-4">{}</p><div class="space-y-2">"#,
        escape_html(project.name),
        escape_html(project.github),
        escape_html(project.tech),
        escape_html(project.description),
    );
    for highlight in project.highlights {
        let _ = write!(
            html,
            r#"<div class="flex gap-2 text-sm text-slate-400"><span class="text-violet-400">&bull;</span><span>{}</span></div>"#,
            escape_html(highlight)
        );
    }
    html.push_str("</div></div>");
}

fn render_skill_category(html: &mut String, category: &SkillCategory) {
    let color = category.accent.as_str();
    let _ = write!(
        html,
        r#"<div class="bg-slate-900/50 border border-slate-800/50 rounded-2xl p-8"><h3 class="text-xl font-bold text-{color}-400 mb-6 mono">{}</h3><div class="flex flex-wrap gap-3">"#,
        escape_html(category.title),
    );
    for skill in category.skills {
        let _ = write!(
            html,
            r#"<span class="skill-tag mono text-sm px-4 py-2 bg-{color}-500/10 border border-{color}-500/30 rounded-lg text-{color}-300">{}</span>"#,
            escape_html(skill)
        );
    }
    html.push_str("</div></div>");
}

fn render_leadership(html: &mut String) {
    open_section(html, Region::Leadership, "py-24 px-6");
    section_heading(html, "Leadership & Community Engagement");
    let _ = write!(
        html,
        r#"<div class="space-y-8"><div class="{CARD}"><h3 class="text-2xl font-bold text-slate-100 mb-6">University Leadership</h3><div class="space-y-6">"#
    );
    for role in LEADERSHIP_ROLES {
        let _ = write!(
            html,
            r#"<div class="flex flex-col md:flex-row md:justify-between"><div><p class="text-xl font-semibold text-slate-100">{}</p><p class="text-violet-400">{}</p><p class="mono text-sm text-slate-400">{}</p></div><span class="mono text-pink-400 mt-2 md:mt-0">{}</span></div><p class="text-slate-300">{}</p>"#,
            escape_html(role.organization),
            escape_html(role.role),
            escape_html(role.institution),
            escape_html(role.period),
            escape_html(role.description),
        );
    }
    let _ = write!(
        html,
        r#"</div></div><div class="{CARD}"><h3 class="text-2xl font-bold text-slate-100 mb-6">Community Service</h3><ul class="space-y-4 text-slate-300">"#
    );
    for service in COMMUNITY_SERVICE {
        let _ = write!(
            html,
            r#"<li><span class="font-semibold text-slate-100">{}</span><span class="block mono text-sm text-slate-400">{}</span></li>"#,
            escape_html(service.organization),
            escape_html(service.role)
        );
    }
    html.push_str("</ul></div></div>");
    close_section(html);
}

fn render_contact(html: &mut String) {
    let _ = write!(
        html,
        r#"<section id="{}" class="py-24 px-6 bg-gradient-to-b from-transparent to-slate-950"><div class="max-w-4xl mx-auto text-center"><h2 class="text-4xl md:text-5xl font-bold gradient-text mb-8">Let&#39;s Connect</h2><p class="text-xl text-slate-300 mb-12">I&#39;m always open to any new opportunities and collaborations. Feel free to reach out!</p><div class="flex flex-col sm:flex-row gap-6 justify-center">"#,
        Region::Contact.id()
    );
    for link in CONTACT_LINKS {
        let _ = write!(
            html,
            r#"<a href="{}"{} class="{}">{}</a>"#,
            escape_html(link.href),
            target_attrs(link),
            CONTACT_BUTTON,
            escape_html(link.label)
        );
    }
    let _ = write!(
        html,
        r#"</div><div class="mt-16 pt-8 border-t border-slate-800/50"><p class="mono text-sm text-slate-500">&copy; {} {}</p></div></div></section>"#,
        PROFILE.copyright_year,
        escape_html(PROFILE.name)
    );
}

/// Markup for one section
pub fn render_section(region: Region) -> String {
    let mut html = String::new();
    match region {
        Region::Home => render_home(&mut html),
        Region::About => render_about(&mut html),
        Region::Experience => {
            open_section(&mut html, region, "py-24 px-6");
            section_heading(&mut html, "Experience");
            html.push_str(r#"<div class="space-y-8">"#);
            for exp in EXPERIENCES {
                render_experience_card(&mut html, exp);
            }
            html.push_str("</div>");
            close_section(&mut html);
        }
        Region::Education => {
            open_section(&mut html, region, "py-24 px-6");
            section_heading(&mut html, "Education");
            html.push_str(r#"<div class="space-y-8">"#);
            for edu in EDUCATION {
                render_education_card(&mut html, edu);
            }
            html.push_str("</div>");
            close_section(&mut html);
        }
        Region::Projects => {
            open_section(&mut html, region, "py-24 px-6");
            section_heading(&mut html, "Projects");
            html.push_str(r#"<div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">"#);
            for project in PROJECTS {
                render_project_card(&mut html, project);
            }
            html.push_str("</div>");
            close_section(&mut html);
        }
        Region::Skills => {
            open_section(&mut html, region, "py-24 px-6");
            section_heading(&mut html, "Skills");
            html.push_str(r#"<div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">"#);
            for category in SKILL_CATEGORIES {
                render_skill_category(&mut html, category);
            }
            html.push_str("</div>");
            close_section(&mut html);
        }
        Region::Leadership => render_leadership(&mut html),
        Region::Contact => render_contact(&mut html),
    }
    html
}

/// Full page body: nav bar followed by every section in document order
pub fn render_page(active: Region) -> String {
    let mut html = String::from(
        r#"<div class="min-h-screen bg-gradient-to-br from-slate-950 via-slate-900 to-indigo-950 text-slate-100">"#,
    );
    html.push_str(&render_nav(active));
    for region in Region::ALL {
        html.push_str(&render_section(region));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_nav_button_class() {
        assert!(nav_button_class(true).contains("text-violet-400"));
        assert!(nav_button_class(false).contains("text-slate-400"));
        assert!(!nav_button_class(false).contains("font-semibold"));
    }

    #[test]
    fn test_nav_highlights_only_active() {
        let nav = render_nav(Region::Skills);
        assert_eq!(nav.matches(NAV_ACTIVE).count(), 1);
        let active_button = format!(
            r#"{}="skills" class="{}""#,
            SECTION_ATTR,
            nav_button_class(true)
        );
        assert!(nav.contains(&active_button));
    }

    #[test]
    fn test_every_section_has_its_id() {
        for region in Region::ALL {
            let html = render_section(region);
            assert!(
                html.starts_with(&format!(r#"<section id="{}""#, region.id())),
                "{} section",
                region
            );
        }
    }

    #[test]
    fn test_page_contains_sections_in_order() {
        let page = render_page(Region::Home);
        let positions: Vec<usize> = Region::ALL
            .iter()
            .map(|r| page.find(&format!(r#"<section id="{}""#, r.id())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_call_to_action_targets() {
        let home = render_section(Region::Home);
        assert!(home.contains(r#"data-section="projects""#));
        assert!(home.contains(r#"data-section="contact""#));
    }

    #[test]
    fn test_hero_has_overlay_and_scroll_cue() {
        let home = render_section(Region::Home);
        let overlay = home
            .find("absolute inset-0 bg-gradient-to-b from-transparent via-indigo-950/20")
            .unwrap();
        let content = home.find("section-appear").unwrap();
        let buttons = home.find("Get in Touch").unwrap();
        let cue = home.find("animate-bounce").unwrap();
        assert!(overlay < content);
        assert!(buttons < cue);
        assert!(home.ends_with("</div></div></section>"));
    }

    #[test]
    fn test_page_styles_load_fonts_first() {
        assert!(PAGE_STYLES
            .trim_start()
            .starts_with("@import url('https://fonts.googleapis.com/css2?family=Space+Mono"));
        assert!(PAGE_STYLES.contains("family=Sora:wght@300;400;600;700"));
        assert!(PAGE_STYLES.contains(".hero-glow {"));
        assert!(PAGE_STYLES.contains(".nav-dot.active {"));
    }

    #[test]
    fn test_text_is_escaped() {
        let education = render_section(Region::Education);
        assert!(education.contains("Probability &amp; Statistics"));
        assert!(!education.contains("Probability & Statistics"));
    }

    #[test]
    fn test_seeking_phrase_highlighted() {
        let about = render_section(Region::About);
        assert!(about.contains(
            r#"<span class="text-violet-400 font-semibold">Software Engineering Internship</span>"#
        ));
    }

    #[test]
    fn test_mailto_link_is_not_external() {
        let contact = render_section(Region::Contact);
        assert!(contact.contains(r#"<a href="mailto:lleung.nicole@gmail.com" class="#));
        assert!(contact.contains(r#"target="_blank""#));
    }
}
