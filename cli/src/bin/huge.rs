use anyhow::Result;
use huge_cli::Command;

fn main() -> Result<()> {
  Command::execute()
}
