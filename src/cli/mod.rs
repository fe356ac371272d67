// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to a use case. Printing
// happens here and only here.
//
//   1. `inspect` — walk a training manifest through the loader
//   2. `text`    — encode and pad a synthesis manifest

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, TextArgs};

#[derive(Parser, Debug)]
#[command(
    name = "fastspeech-data",
    version,
    about = "Load, pad and batch preprocessed FastSpeech2 data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => run_inspect(args),
            Commands::Text(args)    => run_text(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    tracing::info!("Inspecting manifest: {}", args.manifest);

    let summary = InspectUseCase::new(args.into()).execute()?;

    println!("dataset:       {}", summary.dataset);
    println!("utterances:    {}", summary.utterances);
    println!("groups:        {}", summary.groups);
    println!("batches:       {}", summary.batches);
    println!("max text len:  {}", summary.max_text_len);
    println!("max mel len:   {}", summary.max_mel_len);
    println!("mel fill:      {:.1}%", summary.mel_fill_ratio() * 100.0);
    Ok(())
}

fn run_text(args: TextArgs) -> Result<()> {
    use crate::application::text_use_case::TextUseCase;

    let prepared = TextUseCase::new(args.preprocess_config, args.source).execute()?;
    let batch = &prepared.batch;

    for (row, (id, decoded)) in batch.ids.iter().zip(&prepared.decoded).enumerate() {
        println!("{id}\t{} symbols\t{decoded}", batch.text_lens[row]);
    }
    println!("texts: {:?}", batch.texts.dim());
    Ok(())
}
