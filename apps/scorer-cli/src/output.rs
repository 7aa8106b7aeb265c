//! Export writers for computed rounds.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use scorer::domain::Amount;
use scorer::ComputedRound;
use serde::Serialize;

use crate::types::OutputFormat;

/// Whole-session document written by the `json` format.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    players: &'a [String],
    rounds: &'a [ComputedRound],
    net_totals: &'a [Amount],
}

/// Destination of the rounds file. The gzip variant stays typed so the
/// stream trailer is written, and its errors surfaced, in `finish`.
enum RoundsSink {
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl RoundsSink {
    fn finish(self) -> std::io::Result<()> {
        match self {
            RoundsSink::Plain(mut writer) => writer.flush(),
            RoundsSink::Gzip(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()
            }
        }
    }
}

impl Write for RoundsSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            RoundsSink::Plain(w) => w.write(buf),
            RoundsSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            RoundsSink::Plain(w) => w.flush(),
            RoundsSink::Gzip(w) => w.flush(),
        }
    }
}

pub struct ExportWriter {
    format: OutputFormat,
    players: Vec<String>,
    rounds_writer: RoundsSink,
    rounds_path: PathBuf,
    csv_writer: csv::Writer<BufWriter<File>>,
    csv_path: PathBuf,
    buffered: Vec<ComputedRound>,
}

impl ExportWriter {
    pub fn new(
        output_dir: &Path,
        format: OutputFormat,
        compress: bool,
        players: &[String],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let filename = format!("rounds_{}.{}", timestamp, format.extension());
        let (rounds_writer, rounds_path) = if compress {
            let gz_path = output_dir.join(format!("{}.gz", filename));
            let writer = BufWriter::new(GzEncoder::new(
                create_truncated(&gz_path)?,
                Compression::default(),
            ));
            (RoundsSink::Gzip(writer), gz_path)
        } else {
            let path = output_dir.join(&filename);
            (RoundsSink::Plain(BufWriter::new(create_truncated(&path)?)), path)
        };

        // Always create CSV summary
        let csv_path = output_dir.join(format!("rounds_{}_summary.csv", timestamp));
        let mut csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));
        let mut header = vec![
            "round".to_string(),
            "id".to_string(),
            "winner".to_string(),
            "method".to_string(),
            "streak_before".to_string(),
        ];
        header.extend(players.iter().cloned());
        csv_writer.write_record(&header)?;

        Ok(Self {
            format,
            players: players.to_vec(),
            rounds_writer,
            rounds_path,
            csv_writer,
            csv_path,
            buffered: Vec::new(),
        })
    }

    pub fn write_round(&mut self, round: &ComputedRound) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(round)?;
                writeln!(self.rounds_writer, "{}", json)?;
            }
            OutputFormat::Json => self.buffered.push(round.clone()),
        }

        let mut row = vec![
            round.round_number.to_string(),
            round.id.to_string(),
            round.winner_name.clone(),
            round.method.to_string(),
            round.streak_consecutive_before.to_string(),
        ];
        row.extend(round.per_player_net.iter().map(|v| v.to_string()));
        self.csv_writer.write_record(&row)?;
        Ok(())
    }

    pub fn finish(mut self, net_totals: &[Amount]) -> Result<(), Box<dyn std::error::Error>> {
        if self.format == OutputFormat::Json {
            let doc = ExportDocument {
                players: &self.players,
                rounds: &self.buffered,
                net_totals,
            };
            serde_json::to_writer_pretty(&mut self.rounds_writer, &doc)?;
            writeln!(self.rounds_writer)?;
        }
        self.rounds_writer.finish()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.rounds_path, &self.csv_path)
    }
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
