use crate::importer::ImportSummary;
use momento_core::{ExportEntry, ImportableEntry};
use std::io::{self, Write};
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color, Stylize},
};

const DISPLAY_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M";

const TAG_COLOR: Color = Color::Green;
const PEOPLE_COLOR: Color = Color::Magenta;
const PLACE_COLOR: Color = Color::Blue;

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub short_mode: bool,
    pub photo_extension: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_color: true,
            short_mode: false,
            photo_extension: ".jpg".to_string(),
        }
    }
}

/// Terminal output for dry runs and import progress.
pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: entry_skin(),
            opts,
        }
    }

    fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.bold());
        } else {
            println!("{message}");
        }
    }

    /// One line per entry: date, first line of the body, then people, places and tags.
    pub fn print_entry_line(&self, entry: &ExportEntry) {
        let date = entry.timestamp.format(DISPLAY_DATE_FORMAT).to_string();
        let title = first_line(&entry.body);
        let labels = [
            (&entry.people, PEOPLE_COLOR),
            (&entry.places, PLACE_COLOR),
            (&entry.tags, TAG_COLOR),
        ]
        .into_iter()
        .filter(|(values, _)| !values.is_empty())
        .map(|(values, color)| self.paint(&format!("[{}]", values.join(", ")), color))
        .collect::<Vec<_>>();

        let mut line = format!("{} - {}", self.paint(&date, Color::Cyan), title);
        if !labels.is_empty() {
            line.push(' ');
            line.push_str(&labels.join(" "));
        }
        println!("{line}");
    }

    pub fn print_entries(&self, entries: &[ExportEntry]) {
        for entry in entries {
            if self.opts.short_mode {
                self.print_entry_line(entry);
            } else {
                self.print_md(&entry_markdown(entry, &self.opts.photo_extension));
                self.print_md("\n---\n");
            }
        }
    }

    /// Rewrites the same terminal line for every entry.
    pub fn print_progress(&self, current: usize, total: usize) {
        print!("\rDay One import running - entry {current} of {total}.");
        let _ = io::stdout().flush();
        if current == total {
            println!();
        }
    }

    pub fn print_summary(&self, summary: &ImportSummary) {
        self.print_info(&format!(
            "Day One import complete. Imported: {}, Errors: {}. Took {:.1}s.",
            summary.imported,
            summary.failed.len(),
            summary.elapsed.as_secs_f64()
        ));
        if summary.failed.is_empty() {
            return;
        }
        let mut md = String::from("\n## Not imported:\n");
        for date in &summary.failed {
            md.push_str(&format!("* {date}\n"));
        }
        self.print_md(&md);
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.opts.use_color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Only the pieces `entry_markdown` emits are styled.
fn entry_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.headers[1].set_fg(Color::Cyan);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.bold.set_fg(Color::White);
    skin.inline_code.set_fg(TAG_COLOR);
    skin.bullet.set_fg(Color::DarkGrey);
    skin
}

fn entry_markdown(entry: &ExportEntry, photo_extension: &str) -> String {
    let mut md = format!("## {}\n", entry.timestamp.format(DISPLAY_DATE_FORMAT));

    let body = entry.body.trim_end();
    if !body.is_empty() {
        md.push_str(body);
        md.push('\n');
    }

    let mut meta = String::new();
    for (label, values) in [
        ("With", &entry.people),
        ("At", &entry.places),
        ("Tags", &entry.tags),
    ] {
        if !values.is_empty() {
            let items: Vec<String> = values.iter().map(|v| format!("`{v}`")).collect();
            meta.push_str(&format!("**{label}:** {}\n", items.join(" ")));
        }
    }
    if !meta.is_empty() {
        md.push('\n');
        md.push_str(&meta);
    }

    // Day One only receives what the projection lets through.
    let projected = entry.project();
    let photos = projected.media(photo_extension);
    for photo in &photos {
        md.push_str(&format!("* {}\n", photo.display()));
    }
    let skipped = entry.media.len() - photos.len();
    if skipped > 0 {
        md.push_str(&format!(
            "*{skipped} attachment(s) skipped, only {photo_extension} is imported*\n"
        ));
    }
    md
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}
