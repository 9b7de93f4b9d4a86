use crate::ui::theme::{is_random, Theme, RANDOM_THEME_ID};
use anyhow::Result;

pub fn run(current: &str) -> Result<()> {
    write_themes(current, &mut std::io::stdout())
}

pub(crate) fn write_themes<W: std::io::Write>(current: &str, out: &mut W) -> Result<()> {
    let random = is_random(current);
    let current = Theme::by_id(current);
    writeln!(out, "Themes")?;
    writeln!(out, "---")?;
    for t in Theme::all() {
        let marker = if !random && t.id == current.id { "*" } else { " " };
        writeln!(out, "{} {:<12} {:<12} {}", marker, t.id, t.name, t.description)?;
    }
    let marker = if random { "*" } else { " " };
    writeln!(out, "{} {:<12} {:<12} {}", marker, RANDOM_THEME_ID, "Random", "A different palette each start")?;
    Ok(())
}
