use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser};

use crate::archive;

#[derive(Debug, Parser)]
#[command(name = "huge", version, about = "Pack files into a JSON-manifested archive")]
pub enum Command {
  #[command(about = "Pack files into an archive")]
  Pack(PackCommand),
  #[command(about = "List the contents of an archive")]
  List(ListCommand),
  #[command(about = "Unpack an archive")]
  Unpack(UnpackCommand),
}

impl Command {
  pub fn execute() -> Result<()> {
    match Self::parse() {
      Command::Pack(pack) => pack.execute(),
      Command::List(list) => list.execute(),
      Command::Unpack(unpack) => unpack.execute(),
    }
  }
}

#[derive(Debug, Args)]
pub struct PackCommand {
  #[arg()]
  archive: PathBuf,
  #[arg(required = true)]
  files: Vec<PathBuf>,
}

impl PackCommand {
  pub fn execute(self) -> Result<()> {
    archive::pack(&self.archive, &self.files)
  }
}

#[derive(Debug, Args)]
pub struct ListCommand {
  #[arg()]
  archive: PathBuf,
}

impl ListCommand {
  pub fn execute(self) -> Result<()> {
    for entry in archive::entries(&self.archive)? {
      println!("====");
      println!("Name: {}", entry.name);
      println!("Size: {} bytes", entry.size);
    }
    Ok(())
  }
}

#[derive(Debug, Args)]
pub struct UnpackCommand {
  #[arg()]
  archive: PathBuf,
  #[arg(long, short = 'o', default_value = ".")]
  out: PathBuf,
}

impl UnpackCommand {
  pub fn execute(self) -> Result<()> {
    archive::unpack(&self.archive, &self.out)
  }
}
