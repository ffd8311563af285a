use std::io::{self, Write};

use panelview_core::render::{EpisodeLink, Screen};

pub(super) fn write_screen(out: &mut impl Write, screen: &Screen<'_>) -> io::Result<()> {
    match screen {
        Screen::Panel(state) => {
            writeln!(out, "image   {} ({})", state.image_ref, state.alt_text)?;
            writeln!(out, "caption {}", state.caption_text)?;
            writeln!(
                out,
                "status  {}{}",
                state.status_text,
                if state.status_interactive { " [interactive]" } else { "" }
            )?;
            writeln!(
                out,
                "buttons prev={} next={}",
                enabled_label(state.prev_enabled),
                enabled_label(state.next_enabled)
            )?;
        }
        Screen::Empty { status_text, .. } => {
            writeln!(out, "status  {status_text}")?;
            writeln!(out, "buttons prev=off next=off")?;
        }
    }
    Ok(())
}

pub(super) fn write_episode_list(out: &mut impl Write, links: &[EpisodeLink<'_>]) -> io::Result<()> {
    if links.is_empty() {
        writeln!(out, "(no episodes)")?;
    }
    for link in links {
        let marker = if link.current { '>' } else { ' ' };
        writeln!(out, "{marker} {:<12} {}", link.href, link.label)?;
    }
    Ok(())
}

pub(super) fn write_fragment(out: &mut impl Write, fragment: &str) -> io::Result<()> {
    writeln!(out, "fragment #{fragment}")
}

fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelview_core::{
        config::ViewerConfig,
        manifest::{Episode, EpisodeManifest},
        mode::Mode,
        position,
        render::{episode_list, project},
    };

    fn render(screen: &Screen<'_>) -> String {
        let mut out = Vec::new();
        write_screen(&mut out, screen).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn panel_screen_lists_buttons() {
        let manifest =
            EpisodeManifest::new(vec![Episode::new("ep1", Some("A"), ["p1.png", "p2.png"]).unwrap()]);
        let state = project(
            &manifest,
            position::initial(&manifest),
            Mode::Read,
            &ViewerConfig::default(),
        )
        .unwrap();

        let text = render(&Screen::Panel(state));
        assert!(text.contains("image   p1.png (A — panel 1)"));
        assert!(text.contains("buttons prev=off next=on"));
    }

    #[test]
    fn episode_list_marks_current() {
        let manifest = EpisodeManifest::new(vec![
            Episode::new("ep1", None, ["p.png"]).unwrap(),
            Episode::new("ep2", Some("Second"), ["q.png"]).unwrap(),
        ]);
        let current = position::resolve(&manifest, "ep2", 1).unwrap();
        let mut out = Vec::new();
        write_episode_list(&mut out, &episode_list(&manifest, current)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  #ep1:1"));
        assert!(text.contains("> #ep2:1"));
    }
}
