//! Line-oriented rendering for the Folio CLI.
//!
//! The terminal runs in raw mode, so every line ends in `\r\n`. Output is
//! append-only: each frame writes what changed since the last one and then
//! redraws the prompt line in place.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveTo, MoveToColumn},
    queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

use folio_engine::{
    CommandOutput, Localizer, Project, ProjectDetail, ScrollbackEntry, Site, Theme,
};

use crate::app::{App, Notice};

const NEWLINE: &str = "\r\n";
const HOST_PROMPT: &str = "folio>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub link: Color,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                muted: Color::DarkGrey,
                accent: Color::Green,
                error: Color::Red,
                link: Color::Cyan,
            },
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::Grey,
                accent: Color::DarkBlue,
                error: Color::DarkRed,
                link: Color::DarkMagenta,
            },
        }
    }
}

/// Write everything that changed since the last frame.
pub fn present(out: &mut impl Write, app: &mut App) -> io::Result<()> {
    if !app.take_dirty() {
        return Ok(());
    }
    let palette = Palette::for_theme(app.site().theme());

    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    if app.take_redraw() {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    for item in app.take_notices() {
        notice(out, &item, app.site(), &palette)?;
    }
    let prompt = app
        .site()
        .terminal()
        .map_or(HOST_PROMPT, |terminal| terminal.prompt())
        .to_string();
    for item in app.take_unprinted() {
        entry(out, &item, &prompt, &palette)?;
    }

    queue!(
        out,
        PrintStyledContent(prompt.as_str().with(palette.accent).bold()),
        Print(" "),
        Print(app.line()),
    )?;
    out.flush()
}

pub fn notice(out: &mut impl Write, item: &Notice, site: &Site, palette: &Palette) -> io::Result<()> {
    let localizer = site.content().localizer();
    match item {
        Notice::Hint => muted(out, &localizer.text("host.hint"), palette),
        Notice::Message(text) => plain(out, text, palette),
        Notice::Grid => grid(out, site, palette),
        Notice::Current => {
            let browser = site.browser();
            match (browser.selected_project(), browser.selected_detail()) {
                (Some(project), Some(detail)) => project_detail(out, project, detail, localizer, palette),
                _ => match browser.current_project() {
                    Some(project) => {
                        let position = (browser.current_index() + 1).to_string();
                        let total = browser.catalog().len().to_string();
                        muted(
                            out,
                            &localizer.format(
                                "host.carousel",
                                &[("position", position.as_str()), ("total", total.as_str())],
                            ),
                            palette,
                        )?;
                        card(out, project, palette)
                    }
                    None => Ok(()),
                },
            }
        }
    }
}

/// The filtered grid, marking the carousel position and the open project.
fn grid(out: &mut impl Write, site: &Site, palette: &Palette) -> io::Result<()> {
    let localizer = site.content().localizer();
    let browser = site.browser();
    let filter = browser.active_filter();
    heading(
        out,
        &format!(
            "{} ({})",
            localizer.text("nav.projects"),
            localizer.text(&format!("projects.filters.{}", filter.as_str()))
        ),
        palette,
    )?;

    let visible = browser.visible_projects();
    let width = column_width(visible.iter().map(|project| project.id.as_str()));
    let current = browser.current_project().map(|project| &project.id);
    let selected = browser.selected_project_id();
    for project in visible {
        let marker = if Some(&project.id) == selected {
            "*"
        } else if Some(&project.id) == current {
            ">"
        } else {
            " "
        };
        queue!(
            out,
            Print(marker),
            Print(" "),
            PrintStyledContent(pad(project.id.as_str(), width).with(palette.accent)),
            Print("  "),
            PrintStyledContent(project.title.as_str().with(palette.text)),
            Print(NEWLINE),
        )?;
    }
    Ok(())
}

fn card(out: &mut impl Write, project: &Project, palette: &Palette) -> io::Result<()> {
    heading(out, &project.title, palette)?;
    plain(out, &project.subtitle, palette)?;
    plain(out, &project.description, palette)?;
    muted(
        out,
        &format!("[{}] {}", project.category, project.technologies.join(" · ")),
        palette,
    )
}

fn project_detail(
    out: &mut impl Write,
    project: &Project,
    detail: &ProjectDetail,
    localizer: &dyn Localizer,
    palette: &Palette,
) -> io::Result<()> {
    heading(out, &project.title, palette)?;
    plain(out, &project.subtitle, palette)?;
    if detail.is_empty() {
        return muted(out, &localizer.text("projects.sections.empty"), palette);
    }

    if !detail.challenge.is_empty() {
        section(out, localizer, "challenge", palette)?;
        plain(out, &detail.challenge, palette)?;
    }
    if !detail.contributions.is_empty() {
        section(out, localizer, "contributions", palette)?;
        bullets(out, &detail.contributions, palette)?;
    }
    if !detail.impact.is_empty() {
        section(out, localizer, "impact", palette)?;
        for metric in &detail.impact {
            queue!(
                out,
                PrintStyledContent(metric.value.as_str().with(palette.accent).bold()),
                Print(" "),
                Print(&metric.label),
                Print(NEWLINE),
            )?;
        }
    }
    if !detail.architecture.is_empty() {
        section(out, localizer, "architecture", palette)?;
        let width = column_width(detail.architecture.iter().map(|layer| layer.name.as_str()));
        for layer in &detail.architecture {
            queue!(
                out,
                PrintStyledContent(pad(&layer.name, width).with(palette.accent)),
                Print("  "),
                Print(layer.items.join(", ")),
                Print(NEWLINE),
            )?;
        }
    }
    if let Some(cost) = &detail.cost_optimization {
        section(out, localizer, "cost", palette)?;
        plain(out, &cost.summary, palette)?;
        bullets(out, &cost.savings, palette)?;
    }
    if let Some(press) = &detail.press {
        section(out, localizer, "press", palette)?;
        for mention in press {
            queue!(
                out,
                Print(format!("{}: {} ", mention.outlet, mention.headline)),
                PrintStyledContent(mention.url.as_str().with(palette.link).underlined()),
                Print(NEWLINE),
            )?;
        }
    }
    if !detail.features.is_empty() {
        section(out, localizer, "features", palette)?;
        bullets(out, &detail.features, palette)?;
    }
    if !detail.gallery.is_empty() {
        section(out, localizer, "gallery", palette)?;
        let captions: Vec<String> = detail.gallery.iter().map(|item| item.caption.clone()).collect();
        bullets(out, &captions, palette)?;
    }
    Ok(())
}

fn section(
    out: &mut impl Write,
    localizer: &dyn Localizer,
    key: &str,
    palette: &Palette,
) -> io::Result<()> {
    heading(
        out,
        &localizer.text(&format!("projects.sections.{key}")),
        palette,
    )
}

/// One scrollback entry: the echoed command line and its output.
pub fn entry(
    out: &mut impl Write,
    item: &ScrollbackEntry,
    prompt: &str,
    palette: &Palette,
) -> io::Result<()> {
    match item {
        ScrollbackEntry::System(text) => muted(out, text, palette),
        ScrollbackEntry::Command { command, output: result } => {
            queue!(
                out,
                PrintStyledContent(prompt.with(palette.accent).bold()),
                Print(" "),
                Print(command),
                Print(NEWLINE),
            )?;
            output(out, result, palette)
        }
    }
}

pub fn output(out: &mut impl Write, result: &CommandOutput, palette: &Palette) -> io::Result<()> {
    match result {
        CommandOutput::Text { text } => {
            for line in text.lines() {
                plain(out, line, palette)?;
            }
            Ok(())
        }
        CommandOutput::Lines { heading: title, lines } => {
            if let Some(title) = title {
                heading(out, title, palette)?;
            }
            for line in lines {
                plain(out, line, palette)?;
            }
            Ok(())
        }
        CommandOutput::Rows { rows } => {
            let width = column_width(rows.iter().map(|row| row.label.as_str()));
            for row in rows {
                queue!(
                    out,
                    PrintStyledContent(pad(&row.label, width).with(palette.accent)),
                    Print("  "),
                    PrintStyledContent(row.value.as_str().with(palette.text)),
                    Print(NEWLINE),
                )?;
            }
            Ok(())
        }
        CommandOutput::Links { links } => {
            let width = column_width(links.iter().map(|link| link.label.as_str()));
            for link in links {
                queue!(
                    out,
                    Print(pad(&link.label, width)),
                    Print("  "),
                    PrintStyledContent(link.url.as_str().with(palette.link).underlined()),
                    Print(NEWLINE),
                )?;
            }
            Ok(())
        }
        CommandOutput::NotFound { message, .. } => queue!(
            out,
            PrintStyledContent(message.as_str().with(palette.error)),
            Print(NEWLINE),
        ),
    }
}

fn heading(out: &mut impl Write, text: &str, palette: &Palette) -> io::Result<()> {
    queue!(out, PrintStyledContent(text.with(palette.accent).bold()), Print(NEWLINE))
}

fn plain(out: &mut impl Write, text: &str, palette: &Palette) -> io::Result<()> {
    queue!(out, PrintStyledContent(text.with(palette.text)), Print(NEWLINE))
}

fn muted(out: &mut impl Write, text: &str, palette: &Palette) -> io::Result<()> {
    queue!(out, PrintStyledContent(text.with(palette.muted)), Print(NEWLINE))
}

fn bullets(out: &mut impl Write, items: &[String], palette: &Palette) -> io::Result<()> {
    for item in items {
        plain(out, &format!("  - {item}"), palette)?;
    }
    Ok(())
}

/// Display width of the widest label.
fn column_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Right-pad `label` with spaces to `width` display columns.
fn pad(label: &str, width: usize) -> String {
    let fill = width.saturating_sub(label.width());
    format!("{label}{}", " ".repeat(fill))
}
