//! Tabular export of a solved value table.
//!
//! One `Row` per valid non-terminal state per allowed action, carrying the
//! action value read from the engine's table. Rows render as CSV, JSON, or
//! a box-drawn terminal table.
mod format;
mod row;

pub use format::*;
pub use row::*;

use crate::solver::Engine;
use anyhow::Context;
use std::io::Write;

/// Every (state, action) value of a solved engine, in ascending address order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Export(Vec<Row>);

impl Export {
    pub fn rows(&self) -> &[Row] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn csv<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(writer, "{}", Row::header())?;
        for row in self.0.iter() {
            writeln!(writer, "{}", row.csv())?;
        }
        Ok(())
    }
    pub fn json<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(writer, &self.0)?;
        Ok(())
    }
    pub fn write<W: Write>(&self, format: Format, mut writer: W) -> anyhow::Result<()> {
        match format {
            Format::Csv => self.csv(writer),
            Format::Json => self.json(writer),
            Format::Table => Ok(write!(writer, "{}", self)?),
        }
    }
    /// write to `path`, creating parent directories as needed
    pub fn save(&self, format: Format, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("create export file {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        self.write(format, &mut *writer)
            .with_context(|| format!("write {} export to {}", format, path.display()))?;
        writer.flush()?;
        log::info!("exported {} rows to {}", self.len(), path.display());
        Ok(())
    }
}

impl From<&Engine> for Export {
    fn from(engine: &Engine) -> Self {
        let codec = engine.model().codec();
        Self(
            codec
                .states()
                .filter(|(_, state)| !state.is_terminal())
                .flat_map(|(address, state)| {
                    engine
                        .action_values(&state)
                        .into_iter()
                        .map(move |(action, value)| Row::from((address, state, action, value)))
                })
                .collect(),
        )
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Export {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use colored::Colorize;
        writeln!(f, "┌─────────┬─────┬────────┬───────┬────────┬────────────┐")?;
        writeln!(f, "│ Address │ Out │ Player │ First │ Action │      Value │")?;
        writeln!(f, "├─────────┼─────┼────────┼───────┼────────┼────────────┤")?;
        for row in self.0.iter() {
            let action = match row.action {
                crate::game::Action::Roll => format!("{:>6}", row.action).yellow(),
                crate::game::Action::Pass => format!("{:>6}", row.action).cyan(),
            };
            writeln!(
                f,
                "│ {:>7} │ {:>3} │ {:>6} │ {:>5} │ {} │ {:>+10.4} │",
                row.state_address,
                row.num_out,
                row.player,
                row.is_first,
                action,
                row.value,
            )?;
        }
        writeln!(f, "└─────────┴─────┴────────┴───────┴────────┴────────────┘")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use crate::game::Action;

    fn export(players: usize, spots: usize) -> Export {
        let mut engine = Engine::new(players, spots).unwrap();
        engine.run_to_convergence(EPSILON).unwrap();
        Export::from(&engine)
    }

    #[test]
    fn one_row_per_allowed_action() {
        for (players, spots) in [(2, 6), (3, 2), (4, 7)] {
            assert_eq!(export(players, spots).len(), players * spots * 3);
        }
    }

    #[test]
    fn skips_terminal_and_padding() {
        let export = export(3, 5);
        assert!(export.rows().iter().all(|r| r.state_address != 0));
        assert!(export.rows().iter().all(|r| r.num_out < 5 && r.player < 3));
    }

    #[test]
    fn first_states_only_roll() {
        let export = export(2, 6);
        assert!(
            export
                .rows()
                .iter()
                .filter(|r| r.is_first)
                .all(|r| r.action == Action::Roll)
        );
        assert_eq!(
            export.rows().iter().filter(|r| r.action == Action::Pass).count(),
            2 * 6
        );
    }

    #[test]
    fn ascending_addresses() {
        let export = export(2, 6);
        assert!(
            export
                .rows()
                .windows(2)
                .all(|w| w[0].state_address <= w[1].state_address)
        );
    }

    #[test]
    fn csv_has_header_and_rows() {
        let export = export(2, 6);
        let mut buffer = Vec::new();
        export.csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + export.len());
        assert_eq!(lines[0], "state_address,num_out,player,is_first,action,value");
        assert!(lines[1].starts_with("1,0,0,true,ROLL,"));
    }

    #[test]
    fn json_is_an_array_of_rows() {
        let export = export(2, 2);
        let mut buffer = Vec::new();
        export.json(&mut buffer).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), export.len());
        assert_eq!(rows[0]["action"], "ROLL");
        assert_eq!(rows[0]["state_address"], 1);
    }

    #[test]
    fn table_lists_every_row() {
        let export = export(2, 2);
        let text = export.to_string();
        assert_eq!(text.lines().count(), 4 + export.len());
    }
}
