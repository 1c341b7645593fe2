use std::io::Write;

use repertree_core::{PositionKey, Side, Tree, Variant};

use crate::CorpusError;

const MAX_LINE_WIDTH: usize = 80;

/// Writes surviving lines as PGN games, one game per line.
#[derive(Debug)]
pub struct PgnExporter<W: Write> {
    writer: W,
    player: Side,
    start: PositionKey,
    written: usize,
}

impl<W: Write> PgnExporter<W> {
    /// `player` is the side the repertoire is for; evaluations are written
    /// from its point of view. `start` is the position every line starts from.
    pub fn new(writer: W, player: Side, start: PositionKey) -> Self {
        PgnExporter {
            writer,
            player,
            start,
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn flush(&mut self) -> Result<(), CorpusError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_variant(&mut self, variant: &Variant) -> Result<(), CorpusError> {
        self.written += 1;
        let round = self.written;
        let first_mover = self.start.side_to_move().unwrap_or(Side::White);

        writeln!(self.writer, "[Event \"Repertoire line {round}\"]")?;
        writeln!(self.writer, "[Site \"?\"]")?;
        writeln!(self.writer, "[Date \"????.??.??\"]")?;
        writeln!(self.writer, "[Round \"{round}\"]")?;
        writeln!(self.writer, "[White \"?\"]")?;
        writeln!(self.writer, "[Black \"?\"]")?;
        writeln!(self.writer, "[Result \"*\"]")?;
        if self.start.as_str() != PositionKey::STARTPOS {
            writeln!(self.writer, "[SetUp \"1\"]")?;
            writeln!(self.writer, "[FEN \"{} 0 1\"]", self.start)?;
        }
        if let Some(probability) = variant.probability {
            writeln!(self.writer, "[Probability \"{probability:.4}\"]")?;
        }
        writeln!(self.writer, "[Occurrences \"{}\"]", variant.occurrences)?;
        if let Some(evaluation) = variant.evaluation {
            let to_move = variant.key.side_to_move().unwrap_or_else(|| {
                if variant.moves.len() % 2 == 0 {
                    first_mover
                } else {
                    first_mover.opposite()
                }
            });
            let evaluation = if to_move == self.player {
                evaluation
            } else {
                evaluation.negate()
            };
            writeln!(self.writer, "[Evaluation \"{evaluation}\"]")?;
        }
        writeln!(self.writer)?;

        for line in wrap(&movetext(&variant.moves, first_mover), MAX_LINE_WIDTH) {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Export every surviving leaf of `tree` as a PGN game.
/// Returns the number of games written.
pub fn export_variants<W: Write>(tree: &Tree, writer: W, player: Side) -> Result<usize, CorpusError> {
    let mut exporter = PgnExporter::new(writer, player, tree.root_key().clone());
    let saved = tree.save_variants(|variant| exporter.write_variant(&variant))?;
    exporter.flush()?;
    Ok(saved)
}

/// Numbered movetext ending with the unknown-result marker, e.g. `1. e4 e5 2. Nf3 *`.
pub fn movetext(moves: &[String], first_mover: Side) -> String {
    let mut tokens = Vec::with_capacity(moves.len() * 3 / 2 + 1);
    let offset = match first_mover {
        Side::White => 0,
        Side::Black => 1,
    };

    for (idx, mv) in moves.iter().enumerate() {
        let half_move = idx + offset;
        let number = half_move / 2 + 1;
        if half_move % 2 == 0 {
            tokens.push(format!("{number}."));
        } else if idx == 0 {
            tokens.push(format!("{number}..."));
        }
        tokens.push(mv.clone());
    }
    tokens.push("*".to_string());
    tokens.join(" ")
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for token in text.split(' ') {
        if !current.is_empty() && current.len() + 1 + token.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(token);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
