use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::CorpusError;

/// Open a corpus for reading; `-` reads standard input.
pub fn open_corpus(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>, CorpusError> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Create the repertoire file; `-` writes to standard output.
pub fn create_output(path: impl AsRef<Path>) -> Result<Box<dyn Write>, CorpusError> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}
