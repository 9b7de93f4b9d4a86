use crate::data::tables::definitions_for;
use crate::data::Country;
use anyhow::Result;

pub fn run() -> Result<()> {
    write_countries(&mut std::io::stdout())
}

pub(crate) fn write_countries<W: std::io::Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Countries")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<6} {:<16} {}", "Code", "Name", "Holidays")?;
    for c in Country::ALL {
        writeln!(
            out,
            "  {:<6} {:<16} {} {}",
            c.code(),
            c.name(),
            definitions_for(Some(c)).len(),
            c.flag()
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Unrecognized codes use the default list ({} holidays).", definitions_for(None).len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_countries_lists_every_country() {
        let mut buf = Vec::new();
        write_countries(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        for c in Country::ALL {
            assert!(out.contains(c.code()));
            assert!(out.contains(c.name()));
        }
        assert!(out.contains("default list (25 holidays)"));
    }
}
