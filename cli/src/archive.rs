use std::{
  fs::{self, File},
  io::{self, BufRead, BufReader, BufWriter, Read, Write},
  path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use huge::Huge;
use huge_json::{lexed, Item, Value};

/// One packed file, as recorded in the archive manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub name: String,
  pub size: u64,
}

/// Writes `files` into a single archive: a one-line JSON manifest of
/// names and sizes, followed by the concatenated file bytes.
pub fn pack(archive: &Path, files: &[PathBuf]) -> Result<()> {
  let mut entries = Vec::with_capacity(files.len());
  for path in files {
    let metadata =
      fs::metadata(path).with_context(|| format!("cannot stat `{}`", path.display()))?;
    let name = path
      .file_name()
      .and_then(|name| name.to_str())
      .with_context(|| format!("bad file name `{}`", path.display()))?;
    // sizes cross the manifest boundary as decimal strings
    let size: Huge = metadata.len().into();
    let mut entry = IndexMap::new();
    entry.insert("name".to_owned(), Value::Item(Item::quoted(name)));
    entry.insert("size".to_owned(), Value::Item(Item::unquoted(size.to_string())));
    entries.push(Value::Dict(entry));
  }
  let mut manifest = IndexMap::new();
  manifest.insert("files".to_owned(), Value::List(entries));
  let manifest = Value::Dict(manifest);

  let file =
    File::create(archive).with_context(|| format!("cannot create `{}`", archive.display()))?;
  let mut out = BufWriter::new(file);
  writeln!(out, "{manifest}")?;
  for path in files {
    let file = File::open(path).with_context(|| format!("cannot read `{}`", path.display()))?;
    io::copy(&mut BufReader::new(file), &mut out)?;
  }
  out.flush()?;
  Ok(())
}

/// Reads the manifest of `archive` without touching the packed bytes.
pub fn entries(archive: &Path) -> Result<Vec<Entry>> {
  read_entries(&mut open(archive)?)
}

/// Recreates every packed file under `out_dir`.
pub fn unpack(archive: &Path, out_dir: &Path) -> Result<()> {
  let mut reader = open(archive)?;
  let entries = read_entries(&mut reader)?;
  fs::create_dir_all(out_dir)
    .with_context(|| format!("cannot create `{}`", out_dir.display()))?;
  for entry in &entries {
    let path = out_dir.join(&entry.name);
    let file =
      File::create(&path).with_context(|| format!("cannot create `{}`", path.display()))?;
    let mut out = BufWriter::new(file);
    let copied = io::copy(&mut reader.by_ref().take(entry.size), &mut out)?;
    if copied != entry.size {
      bail!("archive truncated: `{}` has {copied} of {} bytes", entry.name, entry.size);
    }
    out.flush()?;
  }
  Ok(())
}

fn open(archive: &Path) -> Result<BufReader<File>> {
  let file =
    File::open(archive).with_context(|| format!("cannot read `{}`", archive.display()))?;
  Ok(BufReader::new(file))
}

fn read_entries(reader: &mut impl BufRead) -> Result<Vec<Entry>> {
  let mut line = String::new();
  reader.read_line(&mut line)?;
  let manifest = lexed::parse(&line).context("malformed archive manifest")?;
  let files = manifest.get("files").context("manifest has no `files` list")?;
  let Value::List(files) = files else { bail!("`files` is not a list") };
  files
    .iter()
    .map(|file| {
      let name = file.get("name").and_then(Value::text).context("entry has no name")?;
      let size = file.get("size").and_then(Value::text).context("entry has no size")?;
      let size: Huge = size.parse().with_context(|| format!("bad size for `{name}`"))?;
      let size = size.to_u64().with_context(|| format!("size of `{name}` is too large"))?;
      Ok(Entry { name: name.to_owned(), size })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::{read_entries, Entry};

  #[test]
  fn manifest_round_trip() {
    let manifest =
      "{\"files\": [{\"name\": \"fileA.txt\", \"size\": 101424}, \
       {\"name\": \"fileB.txt\", \"size\": 225435}]}\nBYTES";
    let entries = read_entries(&mut Cursor::new(manifest)).unwrap();
    assert_eq!(
      entries,
      [
        Entry { name: "fileA.txt".to_owned(), size: 101424 },
        Entry { name: "fileB.txt".to_owned(), size: 225435 },
      ],
    );
  }

  #[test]
  fn manifest_without_files_list() {
    assert!(read_entries(&mut Cursor::new("{}\n")).is_err());
    assert!(read_entries(&mut Cursor::new("[]\n")).is_err());
  }

  #[test]
  fn manifest_with_bad_size() {
    let manifest = "{\"files\": [{\"name\": \"a\", \"size\": \"lots\"}]}\n";
    assert!(read_entries(&mut Cursor::new(manifest)).is_err());
  }
}
